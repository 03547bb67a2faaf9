//! Error types for the SNS provider.

use crate::errors::{ClassifyFailure, FailureCause};
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sns::operation::publish::PublishError;
use thiserror::Error;

/// Main error type for SNS client operations.
#[derive(Debug, Error)]
pub enum SnsError {
    /// The Publish call failed.
    #[error("failed to send SMS via SNS: {}", publish_detail(.0))]
    Publish(#[source] Box<SdkError<PublishError>>),
}

pub type Result<T> = std::result::Result<T, SnsError>;

/// Full error chain; the SDK's own `Display` only names the variant.
fn publish_detail(err: &SdkError<PublishError>) -> String {
    DisplayErrorContext(err).to_string()
}

impl SnsError {
    /// Error code reported by SNS, if the service answered at all.
    pub fn service_code(&self) -> Option<&str> {
        match self {
            SnsError::Publish(err) => err.as_service_error().and_then(|e| e.code()),
        }
    }
}

impl From<SdkError<PublishError>> for SnsError {
    fn from(err: SdkError<PublishError>) -> Self {
        SnsError::Publish(Box::new(err))
    }
}

impl ClassifyFailure for SnsError {
    fn failure_cause(&self) -> FailureCause {
        match self {
            SnsError::Publish(err) => match err.as_ref() {
                SdkError::ServiceError(_) => FailureCause::Rejected,
                SdkError::ConstructionFailure(_) => FailureCause::Configuration,
                _ => FailureCause::Transport,
            },
        }
    }
}
