//! Provider trait definition.

use crate::errors::ClassifyFailure;
use crate::types::PhoneNumber;
use std::error::Error as StdError;
use std::future::Future;

/// Core trait that every outbound SMS provider implements.
///
/// A provider performs exactly one delivery attempt per call. It reports
/// failures with its own detailed error type; collapsing those into a
/// caller-facing error is the job of [`SmsService`](crate::SmsService).
///
/// # Note on async methods
///
/// `send_message` returns a `Send` future, making providers usable from
/// multi-threaded executors.
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateway::{ClassifyFailure, FailureCause, PhoneNumber, Provider};
///
/// #[derive(Clone)]
/// struct MyProvider { /* ... */ }
///
/// impl Provider for MyProvider {
///     type Error = MyError;
///
///     fn name(&self) -> &'static str {
///         "my-provider"
///     }
///
///     async fn send_message(&self, phone_number: &PhoneNumber, message: &str) -> Result<(), Self::Error> {
///         // Deliver the message through the provider's API
///     }
/// }
/// ```
pub trait Provider: Send + Sync + Clone {
    /// Error type returned by provider operations.
    type Error: StdError + ClassifyFailure + Send + Sync + 'static;

    /// Short provider name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Send `message` to `phone_number`.
    ///
    /// Resolves with `()` once the provider has accepted the message.
    fn send_message(
        &self,
        phone_number: &PhoneNumber,
        message: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
