//! Service-level error types.

use thiserror::Error;

#[cfg(feature = "aligo")]
use crate::providers::aligo::AligoError;

/// Error returned to callers of the SMS service.
///
/// Provider failures of every kind collapse into [`SmsServiceError::SendFailed`].
/// The underlying cause is logged where it happens and is deliberately not
/// attached here, so it never crosses the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmsServiceError {
    /// The message was not delivered to the provider.
    #[error("failed to send SMS")]
    SendFailed,
}

/// Errors raised while constructing the SMS service.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration value is absent or blank.
    #[error("Missing required configuration value {name}")]
    MissingVar { name: &'static str },

    /// A configured URL could not be parsed.
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// The Aligo client could not be built.
    #[cfg(feature = "aligo")]
    #[error("Failed to build Aligo client: {0}")]
    Aligo(#[source] AligoError),
}
