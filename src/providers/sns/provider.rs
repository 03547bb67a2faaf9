//! SNS provider implementation.

use super::client::SnsClient;
use super::errors::{Result, SnsError};
use crate::providers::traits::Provider;
use crate::types::PhoneNumber;

#[cfg(feature = "tracing")]
use tracing::debug;

/// SNS provider implementation.
///
/// This wraps the [`SnsClient`] and implements the generic [`Provider`] trait
/// for the international channel.
#[derive(Debug, Clone)]
pub struct SnsProvider {
    client: SnsClient,
}

impl SnsProvider {
    /// Create a new SNS provider.
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }

    /// Get reference to the inner client.
    pub fn client(&self) -> &SnsClient {
        &self.client
    }
}

impl From<SnsClient> for SnsProvider {
    fn from(client: SnsClient) -> Self {
        Self::new(client)
    }
}

impl Provider for SnsProvider {
    type Error = SnsError;

    fn name(&self) -> &'static str {
        "sns"
    }

    async fn send_message(&self, phone_number: &PhoneNumber, message: &str) -> Result<()> {
        let _message_id = self.client.publish_sms(phone_number, message).await?;

        #[cfg(feature = "tracing")]
        debug!(
            phone_number = %phone_number,
            message_id = ?_message_id,
            "SNS accepted message"
        );

        Ok(())
    }
}
