//! Error classification shared by all SMS providers.

use std::fmt::{self, Display, Formatter};

/// Internal cause of a failed send.
///
/// Callers of the service only ever see a generic send failure. The cause is
/// kept for diagnostics so that logs can tell a broken network path apart
/// from a provider that answered and refused the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCause {
    /// The request never produced a usable provider answer: network error,
    /// non-2xx status, timeout or malformed response body.
    Transport,
    /// The provider answered with a well-formed response indicating failure.
    Rejected,
    /// The client itself is misconfigured (bad URL, unusable HTTP client).
    Configuration,
}

impl FailureCause {
    /// Short, stable name used as a log field value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Rejected => "rejected",
            Self::Configuration => "configuration",
        }
    }
}

impl Display for FailureCause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for provider errors that can report their [`FailureCause`].
///
/// # Examples
///
/// ```rust
/// use sms_gateway::{ClassifyFailure, FailureCause};
///
/// enum MyError {
///     Timeout,
///     InsufficientBalance,
/// }
///
/// impl ClassifyFailure for MyError {
///     fn failure_cause(&self) -> FailureCause {
///         match self {
///             MyError::Timeout => FailureCause::Transport,
///             MyError::InsufficientBalance => FailureCause::Rejected,
///         }
///     }
/// }
///
/// assert!(MyError::Timeout.is_transport());
/// assert!(!MyError::InsufficientBalance.is_transport());
/// ```
pub trait ClassifyFailure {
    /// Returns the internal cause of this error.
    fn failure_cause(&self) -> FailureCause;

    /// Returns true if the failure happened before the provider could answer.
    fn is_transport(&self) -> bool {
        self.failure_cause() == FailureCause::Transport
    }
}
