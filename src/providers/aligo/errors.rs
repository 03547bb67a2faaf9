//! Error types for the Aligo provider.

use crate::errors::{ClassifyFailure, FailureCause};
use thiserror::Error;

/// Non-success answer from the Aligo send API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Aligo SMS send error: {code} {message}")]
pub struct AligoRejection {
    /// `result_code` as returned; empty if the field was absent.
    pub code: String,
    /// `message` as returned.
    pub message: String,
}

impl AligoRejection {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Main error type for Aligo client operations.
#[derive(Debug, Error)]
pub enum AligoError {
    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// Base URL could not be turned into a send endpoint.
    #[error("Invalid Aligo base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Failed to form-encode the request body.
    #[error("Error encoding Aligo request body: {0}")]
    EncodeRequest(#[source] serde_urlencoded::ser::Error),

    /// Failed to send HTTP request.
    #[error("Failed to send HTTP request: {0}")]
    HttpRequest(#[from] reqwest_middleware::Error),

    /// Aligo answered with a non-2xx status.
    #[error("Aligo returned HTTP error: {0}")]
    HttpStatus(#[source] reqwest::Error),

    /// Failed to read response body.
    #[error("Failed to read response: {0}")]
    ParseResponse(#[source] reqwest::Error),

    /// Failed to deserialize JSON response.
    #[error("Failed to deserialize JSON response: {0}")]
    DeserializeJson(#[source] serde_json::Error),

    /// Aligo refused the message.
    #[error(transparent)]
    Rejected(#[from] AligoRejection),
}

pub type Result<T> = std::result::Result<T, AligoError>;

impl ClassifyFailure for AligoError {
    fn failure_cause(&self) -> FailureCause {
        match self {
            AligoError::Rejected(_) => FailureCause::Rejected,
            AligoError::HttpRequest(_)
            | AligoError::HttpStatus(_)
            | AligoError::ParseResponse(_)
            | AligoError::DeserializeJson(_) => FailureCause::Transport,
            AligoError::BuildHttpClient(_)
            | AligoError::InvalidBaseUrl { .. }
            | AligoError::EncodeRequest(_) => FailureCause::Configuration,
        }
    }
}
