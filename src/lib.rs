//! # SMS Gateway
//!
//! Outbound SMS delivery through two providers behind one service.
//!
//! The caller chooses the channel explicitly: domestic messages go through the
//! Aligo HTTP gateway, international ones are published with Amazon SNS. Every
//! provider failure is logged with full detail and surfaced to the caller as a
//! single generic error.
//!
//! ## Supported Providers
//!
//! | Provider | Channel | Feature |
//! |----------|---------|---------|
//! | Aligo | domestic | `aligo` (default) |
//! | Amazon SNS | international | `sns` (default) |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sms_gateway::{PhoneNumber, SmsService, SmsServiceTrait};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fails here if any ALIGO_* / AWS_SNS_* variable is missing
//!     let service = SmsService::from_env()?;
//!
//!     service
//!         .send_domestic_message(&PhoneNumber::from("01012345678"), "hello")
//!         .await?;
//!
//!     service
//!         .send_international_message(&PhoneNumber::from("+15551234567"), "hi")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!            SmsService<D, I>
//!             │            │
//!             ▼            ▼
//!       AligoProvider   SnsProvider     (trait: Provider)
//!             │            │
//!             ▼            ▼
//!       AligoClient     SnsClient
//! ```
//!
//! ## Features
//!
//! - `aligo` - Aligo domestic gateway (enabled by default)
//! - `sns` - Amazon SNS international channel (enabled by default)
//! - `tracing` - Diagnostic logging and OpenTelemetry span status (enabled by default)

pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

#[cfg(feature = "aligo")]
pub use providers::aligo;
#[cfg(feature = "sns")]
pub use providers::sns;

// Re-export commonly used types at the crate root
pub use errors::{ClassifyFailure, FailureCause};
pub use providers::Provider;
pub use service::{
    AligoConfig, ConfigError, SmsService, SmsServiceConfig, SmsServiceConfigBuilder,
    SmsServiceError, SmsServiceTrait, SnsConfig,
};
pub use types::{Channel, PhoneNumber};
