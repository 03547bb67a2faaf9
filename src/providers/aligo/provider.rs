//! Aligo provider implementation.

use super::client::AligoClient;
use super::errors::{AligoError, Result};
use crate::providers::traits::Provider;
use crate::types::PhoneNumber;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Aligo provider implementation.
///
/// This wraps the [`AligoClient`] and implements the generic [`Provider`] trait
/// for the domestic channel.
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateway::aligo::{AligoClient, AligoProvider};
/// use sms_gateway::Provider;
///
/// let client = AligoClient::new("https://apis.aligo.in", "api_key", "account_id", "0212345678")?;
/// let provider = AligoProvider::new(client);
///
/// provider.send_message(&"01012345678".into(), "hello").await?;
/// ```
#[derive(Debug, Clone)]
pub struct AligoProvider {
    client: AligoClient,
}

impl AligoProvider {
    /// Create a new Aligo provider.
    pub fn new(client: AligoClient) -> Self {
        Self { client }
    }

    /// Get reference to the inner client.
    pub fn client(&self) -> &AligoClient {
        &self.client
    }
}

impl From<AligoClient> for AligoProvider {
    fn from(client: AligoClient) -> Self {
        Self::new(client)
    }
}

impl Provider for AligoProvider {
    type Error = AligoError;

    fn name(&self) -> &'static str {
        "aligo"
    }

    async fn send_message(&self, phone_number: &PhoneNumber, message: &str) -> Result<()> {
        let _response = self.client.send(phone_number, message).await?;

        #[cfg(feature = "tracing")]
        debug!(
            receiver = %phone_number,
            msg_id = ?_response.msg_id,
            "Aligo accepted message"
        );

        Ok(())
    }
}
