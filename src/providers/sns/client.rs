//! SNS client for SMS publishing.

use super::errors::Result;
use crate::types::PhoneNumber;
use aws_sdk_sns::config::retry::RetryConfig;
use aws_sdk_sns::config::timeout::TimeoutConfig;
use aws_sdk_sns::config::{BehaviorVersion, Credentials, Region};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::Span;
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

const CREDENTIALS_PROVIDER_NAME: &str = "sms-gateway";

/// SNS client that publishes SMS messages directly to phone numbers.
///
/// Built from static credentials. The underlying SDK client has retries
/// disabled, so every publish is a single attempt.
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateway::sns::SnsClient;
///
/// let client = SnsClient::builder("ap-northeast-1", "AKIA...", "secret").build();
/// let message_id = client.publish_sms(&"+15551234567".into(), "hi").await?;
/// ```
#[derive(Clone)]
pub struct SnsClient {
    client: aws_sdk_sns::Client,
    region: String,
}

impl std::fmt::Debug for SnsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnsClient")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring an [`SnsClient`].
pub struct SnsClientBuilder {
    region: String,
    access_key_id: String,
    secret_access_key: SecretString,
    endpoint_url: Option<Url>,
    operation_timeout: Option<Duration>,
}

impl SnsClientBuilder {
    /// Create a new builder with region and static credentials.
    pub fn new(
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            region: region.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            endpoint_url: None,
            operation_timeout: None,
        }
    }

    /// Override the SNS endpoint (local emulators, tests).
    pub fn endpoint_url(mut self, endpoint_url: Url) -> Self {
        self.endpoint_url = Some(endpoint_url);
        self
    }

    /// Bound the whole publish call. Without it the SDK defaults apply.
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }

    /// Build the [`SnsClient`].
    pub fn build(self) -> SnsClient {
        let credentials = Credentials::new(
            self.access_key_id,
            self.secret_access_key.expose_secret(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let mut config = aws_sdk_sns::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint_url) = self.endpoint_url {
            config = config.endpoint_url(endpoint_url.as_str().trim_end_matches('/'));
        }
        if let Some(timeout) = self.operation_timeout {
            config = config.timeout_config(
                TimeoutConfig::builder().operation_timeout(timeout).build(),
            );
        }

        SnsClient {
            client: aws_sdk_sns::Client::from_conf(config.build()),
            region: self.region,
        }
    }
}

impl SnsClient {
    /// Create a builder for configuring the client.
    pub fn builder(
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<SecretString>,
    ) -> SnsClientBuilder {
        SnsClientBuilder::new(region, access_key_id, secret_access_key)
    }

    /// Region the client publishes to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Publish `message` to `phone_number` and return the SNS message id.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "SnsClient::publish_sms",
            skip_all,
            fields(phone_number = %phone_number, message_id = tracing::field::Empty)
        )
    )]
    pub async fn publish_sms(
        &self,
        phone_number: &PhoneNumber,
        message: &str,
    ) -> Result<Option<String>> {
        let output = self
            .client
            .publish()
            .message(message)
            .phone_number(phone_number.as_str())
            .send()
            .await?;

        let message_id = output.message_id().map(str::to_string);

        #[cfg(feature = "tracing")]
        {
            let span = Span::current();
            if let Some(message_id) = &message_id {
                span.record("message_id", message_id.as_str());
            }
            span.set_status(Status::Ok);
        }

        Ok(message_id)
    }
}
