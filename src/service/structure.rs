//! Main service implementation.

use super::error::SmsServiceError;
use super::traits::SmsServiceTrait;
use crate::providers::traits::Provider;
use crate::types::{Channel, PhoneNumber};

#[cfg(all(feature = "aligo", feature = "sns"))]
use super::config::SmsServiceConfig;
#[cfg(all(feature = "aligo", feature = "sns"))]
use super::error::ConfigError;
#[cfg(all(feature = "aligo", feature = "sns"))]
use crate::providers::{
    aligo::{AligoClient, AligoProvider},
    sns::{SnsClient, SnsProvider},
};

#[cfg(feature = "tracing")]
use crate::errors::ClassifyFailure;
#[cfg(feature = "tracing")]
use tracing::{debug, error};

/// SMS service that routes each message to the provider the caller asked for.
///
/// Each send is one provider call. Provider errors are logged with full detail
/// and returned to the caller as [`SmsServiceError::SendFailed`].
///
/// The service holds no mutable state, so a single instance (or clones of it)
/// can serve any number of concurrent sends.
///
/// # Type Parameters
///
/// - `D`: The domestic provider (e.g., `AligoProvider`)
/// - `I`: The international provider (e.g., `SnsProvider`)
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateway::{SmsService, SmsServiceTrait};
///
/// // Reads ALIGO_* and AWS_SNS_* variables; fails if any is missing
/// let service = SmsService::from_env()?;
///
/// service.send_domestic_message(&"01012345678".into(), "hello").await?;
/// service.send_international_message(&"+15551234567".into(), "hi").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SmsService<D: Provider, I: Provider> {
    domestic: D,
    international: I,
}

impl<D: Provider, I: Provider> SmsService<D, I> {
    /// Create a new SMS service from already constructed providers.
    pub fn new(domestic: D, international: I) -> Self {
        Self {
            domestic,
            international,
        }
    }

    /// Get reference to the domestic provider.
    pub fn domestic(&self) -> &D {
        &self.domestic
    }

    /// Get reference to the international provider.
    pub fn international(&self) -> &I {
        &self.international
    }
}

#[cfg(all(feature = "aligo", feature = "sns"))]
impl SmsService<AligoProvider, SnsProvider> {
    /// Build the Aligo + SNS service from a validated configuration.
    pub fn from_config(config: SmsServiceConfig) -> Result<Self, ConfigError> {
        let aligo = AligoClient::builder(
            config.aligo.api_key,
            config.aligo.user_id,
            config.aligo.sender,
        )
        .endpoint(config.aligo.base_url)
        .build()
        .map_err(ConfigError::Aligo)?;

        let mut sns = SnsClient::builder(
            config.sns.region,
            config.sns.access_key_id,
            config.sns.secret_access_key,
        );
        if let Some(endpoint_url) = config.sns.endpoint_url {
            sns = sns.endpoint_url(endpoint_url);
        }

        Ok(Self::new(
            AligoProvider::new(aligo),
            SnsProvider::new(sns.build()),
        ))
    }

    /// Build the Aligo + SNS service from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(SmsServiceConfig::from_env()?)
    }
}

/// Run one provider call and collapse any failure into `SendFailed`.
async fn dispatch<P: Provider>(
    provider: &P,
    channel: Channel,
    phone_number: &PhoneNumber,
    message: &str,
) -> Result<(), SmsServiceError> {
    match provider.send_message(phone_number, message).await {
        Ok(()) => {
            #[cfg(feature = "tracing")]
            debug!(channel = %channel, provider = provider.name(), "SMS sent");
            Ok(())
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            error!(
                channel = %channel,
                provider = provider.name(),
                cause = %_e.failure_cause(),
                error = %_e,
                "failed to send SMS"
            );
            #[cfg(not(feature = "tracing"))]
            let _ = channel;
            Err(SmsServiceError::SendFailed)
        }
    }
}

impl<D: Provider, I: Provider> SmsServiceTrait for SmsService<D, I> {
    type Error = SmsServiceError;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sms_service.send_domestic",
            skip_all,
            fields(phone_number = %phone_number)
        )
    )]
    async fn send_domestic_message(
        &self,
        phone_number: &PhoneNumber,
        message: &str,
    ) -> Result<(), Self::Error> {
        dispatch(&self.domestic, Channel::Domestic, phone_number, message).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sms_service.send_international",
            skip_all,
            fields(phone_number = %phone_number)
        )
    )]
    async fn send_international_message(
        &self,
        phone_number: &PhoneNumber,
        message: &str,
    ) -> Result<(), Self::Error> {
        dispatch(&self.international, Channel::International, phone_number, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureCause;
    use std::sync::Arc;
    use std::sync::Mutex;
    use thiserror::Error;

    #[derive(Debug, Clone, Error)]
    #[error("{detail}")]
    struct FakeError {
        cause: FailureCause,
        detail: String,
    }

    impl crate::errors::ClassifyFailure for FakeError {
        fn failure_cause(&self) -> FailureCause {
            self.cause
        }
    }

    /// Provider that records calls and answers with a fixed outcome.
    #[derive(Debug, Clone)]
    struct FakeProvider {
        name: &'static str,
        outcome: Result<(), FakeError>,
        calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl FakeProvider {
        fn succeeding(name: &'static str) -> Self {
            Self {
                name,
                outcome: Ok(()),
                calls: Arc::default(),
            }
        }

        fn failing(name: &'static str, cause: FailureCause, detail: &str) -> Self {
            Self {
                name,
                outcome: Err(FakeError {
                    cause,
                    detail: detail.to_string(),
                }),
                calls: Arc::default(),
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Provider for FakeProvider {
        type Error = FakeError;

        fn name(&self) -> &'static str {
            self.name
        }

        async fn send_message(
            &self,
            phone_number: &PhoneNumber,
            message: &str,
        ) -> Result<(), Self::Error> {
            self.calls
                .lock()
                .unwrap()
                .push((phone_number.to_string(), message.to_string()));
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_domestic_uses_only_domestic_provider() {
        let domestic = FakeProvider::succeeding("domestic");
        let international = FakeProvider::succeeding("international");
        let service = SmsService::new(domestic.clone(), international.clone());

        let result = service
            .send_domestic_message(&PhoneNumber::from("01012345678"), "hello")
            .await;

        assert!(result.is_ok());
        assert_eq!(
            domestic.calls(),
            vec![("01012345678".to_string(), "hello".to_string())]
        );
        assert!(international.calls().is_empty());
    }

    #[tokio::test]
    async fn test_international_uses_only_international_provider() {
        let domestic = FakeProvider::succeeding("domestic");
        let international = FakeProvider::succeeding("international");
        let service = SmsService::new(domestic.clone(), international.clone());

        let result = service
            .send_international_message(&PhoneNumber::from("+15551234567"), "hi")
            .await;

        assert!(result.is_ok());
        assert!(domestic.calls().is_empty());
        assert_eq!(international.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_every_failure_cause_collapses_to_send_failed() {
        for cause in [
            FailureCause::Transport,
            FailureCause::Rejected,
            FailureCause::Configuration,
        ] {
            let service = SmsService::new(
                FakeProvider::failing("domestic", cause, "boom"),
                FakeProvider::failing("international", cause, "boom"),
            );
            let number = PhoneNumber::from("01012345678");

            assert_eq!(
                service.send_domestic_message(&number, "x").await,
                Err(SmsServiceError::SendFailed)
            );
            assert_eq!(
                service.send_international_message(&number, "x").await,
                Err(SmsServiceError::SendFailed)
            );
        }
    }

    #[tokio::test]
    async fn test_each_send_is_a_single_attempt() {
        let international =
            FakeProvider::failing("international", FailureCause::Transport, "timed out");
        let service = SmsService::new(FakeProvider::succeeding("domestic"), international.clone());

        let _ = service
            .send_international_message(&PhoneNumber::from("+15551234567"), "hi")
            .await;

        assert_eq!(international.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_sends_share_one_service() {
        let domestic = FakeProvider::succeeding("domestic");
        let service = Arc::new(SmsService::new(
            domestic.clone(),
            FakeProvider::succeeding("international"),
        ));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .send_domestic_message(&PhoneNumber::new(format!("0101234567{}", i)), "hi")
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(domestic.calls().len(), 8);
    }

    #[cfg(feature = "tracing")]
    mod logging {
        use super::*;
        use tracing_test::traced_test;

        #[tokio::test]
        #[traced_test]
        async fn test_international_timeout_detail_is_logged() {
            let service = SmsService::new(
                FakeProvider::succeeding("domestic"),
                FakeProvider::failing(
                    "international",
                    FailureCause::Transport,
                    "network timeout: operation timed out after 30s",
                ),
            );

            let error = service
                .send_international_message(&PhoneNumber::from("+15551234567"), "hi")
                .await
                .unwrap_err();

            assert_eq!(error.to_string(), "failed to send SMS");
            assert!(logs_contain("operation timed out after 30s"));
            assert!(logs_contain("cause=transport"));
        }

        #[tokio::test]
        #[traced_test]
        async fn test_success_logs_no_error() {
            let service = SmsService::new(
                FakeProvider::succeeding("domestic"),
                FakeProvider::succeeding("international"),
            );

            service
                .send_domestic_message(&PhoneNumber::from("01012345678"), "hello")
                .await
                .unwrap();

            assert!(!logs_contain("failed to send SMS"));
        }
    }

    #[cfg(all(feature = "aligo", feature = "sns", feature = "tracing"))]
    mod aligo_sns {
        use super::*;
        use tracing_test::traced_test;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        fn config_for(aligo_uri: &str) -> SmsServiceConfig {
            SmsServiceConfig::builder()
                .aligo_api_url(aligo_uri)
                .aligo_api_key("test_key")
                .aligo_user_id("test_user")
                .aligo_sender("0212345678")
                .sns_region("us-east-1")
                .sns_access_key_id("AKIDEXAMPLE")
                .sns_secret_access_key("secret")
                .build()
                .unwrap()
        }

        #[tokio::test]
        #[traced_test]
        async fn test_domestic_rejection_is_logged_with_code_and_message() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/send/"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "result_code": "0",
                    "message": "insufficient balance"
                })))
                .expect(1)
                .mount(&mock_server)
                .await;

            let service = SmsService::from_config(config_for(&mock_server.uri())).unwrap();
            let result = service
                .send_domestic_message(&PhoneNumber::from("01012345678"), "hello")
                .await;

            assert_eq!(result, Err(SmsServiceError::SendFailed));
            assert!(logs_contain("0 insufficient balance"));
            assert!(logs_contain("cause=rejected"));
        }

        #[tokio::test]
        #[traced_test]
        async fn test_domestic_transport_failure_is_logged() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/send/"))
                .respond_with(ResponseTemplate::new(500))
                .mount(&mock_server)
                .await;

            let service = SmsService::from_config(config_for(&mock_server.uri())).unwrap();
            let result = service
                .send_domestic_message(&PhoneNumber::from("01012345678"), "hello")
                .await;

            assert_eq!(result, Err(SmsServiceError::SendFailed));
            assert!(logs_contain("cause=transport"));
            assert!(logs_contain("500"));
        }

        #[tokio::test]
        #[traced_test]
        async fn test_international_unreachable_endpoint_is_logged() {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let config = SmsServiceConfig::builder()
                .aligo_api_url("http://127.0.0.1:1")
                .aligo_api_key("test_key")
                .aligo_user_id("test_user")
                .aligo_sender("0212345678")
                .sns_region("us-east-1")
                .sns_access_key_id("AKIDEXAMPLE")
                .sns_secret_access_key("secret")
                .sns_endpoint_url(format!("http://{}", addr))
                .build()
                .unwrap();
            let service = SmsService::from_config(config).unwrap();

            let result = service
                .send_international_message(&PhoneNumber::from("+15551234567"), "hi")
                .await;

            assert_eq!(result, Err(SmsServiceError::SendFailed));
            assert!(logs_contain("provider=\"sns\""));
            assert!(logs_contain("cause=transport"));
            assert!(logs_contain("dispatch failure"));
        }

        #[tokio::test]
        #[traced_test]
        async fn test_international_timeout_is_logged() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string("<PublishResponse/>")
                        .set_delay(std::time::Duration::from_secs(5)),
                )
                .mount(&mock_server)
                .await;

            let aligo = AligoClient::new(mock_server.uri(), "test_key", "test_user", "0212345678")
                .unwrap();
            let sns = SnsClient::builder("us-east-1", "AKIDEXAMPLE", "secret")
                .endpoint_url(url::Url::parse(&mock_server.uri()).unwrap())
                .operation_timeout(std::time::Duration::from_millis(200))
                .build();
            let service = SmsService::new(AligoProvider::new(aligo), SnsProvider::new(sns));

            let error = service
                .send_international_message(&PhoneNumber::from("+15551234567"), "hi")
                .await
                .unwrap_err();

            assert_eq!(error.to_string(), "failed to send SMS");
            assert!(logs_contain("cause=transport"));
            assert!(logs_contain("timed out"));
        }
    }
}
