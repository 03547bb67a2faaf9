//! Service trait definition.

use crate::types::PhoneNumber;
use std::error::Error as StdError;

/// Trait for SMS delivery service implementations.
///
/// The caller picks the channel; nothing is inferred from the phone number.
#[allow(async_fn_in_trait)]
pub trait SmsServiceTrait: Send + Sync {
    /// The error type for this service.
    type Error: StdError;

    /// Send an SMS through the domestic gateway.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Destination number in domestic format
    /// * `message` - Message body
    async fn send_domestic_message(
        &self,
        phone_number: &PhoneNumber,
        message: &str,
    ) -> Result<(), Self::Error>;

    /// Send an SMS through the cloud notification service.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Destination number, E.164 by convention
    /// * `message` - Message body
    async fn send_international_message(
        &self,
        phone_number: &PhoneNumber,
        message: &str,
    ) -> Result<(), Self::Error>;
}
