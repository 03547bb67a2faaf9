//! Aligo provider implementation.
//!
//! Aligo is the domestic SMS gateway. Messages are posted as a form to
//! `{base_url}/send/` and the gateway answers with a JSON body whose
//! `result_code` is `"1"` on success.
//!
//! # Example
//!
//! ```rust,ignore
//! use sms_gateway::aligo::{AligoClient, AligoProvider};
//! use sms_gateway::Provider;
//!
//! let client = AligoClient::new("https://apis.aligo.in", "api_key", "account_id", "0212345678")?;
//! let provider = AligoProvider::new(client);
//!
//! provider.send_message(&"01012345678".into(), "hello").await?;
//! ```

pub mod client;
pub mod errors;
pub mod provider;
mod response;
pub mod types;

// Re-export commonly used types
pub use client::{AligoClient, AligoClientBuilder};
pub use errors::{AligoError, AligoRejection};
pub use provider::AligoProvider;
pub use types::SendResponse;
