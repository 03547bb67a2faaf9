//! Amazon SNS provider implementation.
//!
//! International messages are published straight to a phone number with the
//! SNS `Publish` action. Only `Message` and `PhoneNumber` are set; message
//! type and routing are left to the account defaults.

pub mod client;
pub mod errors;
pub mod provider;

// Re-export commonly used types
pub use client::{SnsClient, SnsClientBuilder};
pub use errors::SnsError;
pub use provider::SnsProvider;
