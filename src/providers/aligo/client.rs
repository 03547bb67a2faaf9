//! Aligo HTTP client.

use super::errors::{AligoError, Result};
use super::response::AligoResponse;
use super::types::{SMS_MESSAGE_TYPE, SendRequest, SendResponse};
use crate::types::PhoneNumber;
use reqwest::header::CONTENT_TYPE;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::Span;
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Default Aligo API URL.
pub const DEFAULT_API_URL: &str = "https://apis.aligo.in";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Aligo HTTP client.
///
/// Sends single SMS messages through `POST {base_url}/send/`. Each call is one
/// HTTP round trip; nothing is retried and no timeout beyond the HTTP client's
/// defaults is applied.
///
/// # Example
///
/// ```rust,ignore
/// use sms_gateway::aligo::AligoClient;
///
/// let client = AligoClient::builder("api_key", "account_id", "0212345678").build()?;
/// let response = client.send(&"01012345678".into(), "hello").await?;
/// println!("Accepted as {:?}", response.msg_id);
/// ```
#[derive(Clone)]
pub struct AligoClient {
    http_client: ClientWithMiddleware,
    api_key: SecretString,
    user_id: String,
    sender: String,
    send_endpoint: Url,
}

impl std::fmt::Debug for AligoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AligoClient")
            .field("send_endpoint", &self.send_endpoint)
            .field("user_id", &self.user_id)
            .field("sender", &self.sender)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Builder for configuring an [`AligoClient`].
pub struct AligoClientBuilder {
    api_key: SecretString,
    user_id: String,
    sender: String,
    endpoint: Option<Url>,
    http_client: Option<ClientWithMiddleware>,
}

impl AligoClientBuilder {
    /// Create a new builder with the account credentials.
    pub fn new(
        api_key: impl Into<SecretString>,
        user_id: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            user_id: user_id.into(),
            sender: sender.into(),
            endpoint: None,
            http_client: None,
        }
    }

    /// Set a custom API base URL.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set a custom HTTP client with middleware.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`AligoClient`].
    pub fn build(self) -> Result<AligoClient> {
        let base = match self.endpoint {
            Some(url) => url,
            None => Url::parse(DEFAULT_API_URL).map_err(|source| AligoError::InvalidBaseUrl {
                url: DEFAULT_API_URL.to_string(),
                source,
            })?,
        };
        let send_endpoint = send_endpoint(&base)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::builder()
                    .build()
                    .map_err(AligoError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(AligoClient {
            http_client,
            api_key: self.api_key,
            user_id: self.user_id,
            sender: self.sender,
            send_endpoint,
        })
    }
}

/// `{base}/send/`, tolerant of a trailing slash on `base`.
fn send_endpoint(base: &Url) -> Result<Url> {
    let joined = format!("{}/send/", base.as_str().trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| AligoError::InvalidBaseUrl {
        url: base.to_string(),
        source,
    })
}

impl AligoClient {
    /// Create a new Aligo client.
    ///
    /// # Arguments
    /// * `endpoint` - Base URL for the Aligo API
    /// * `api_key` - API key for authentication
    /// * `user_id` - Account identifier
    /// * `sender` - Registered sender number
    pub fn new(
        endpoint: impl AsRef<str>,
        api_key: impl Into<SecretString>,
        user_id: impl Into<String>,
        sender: impl Into<String>,
    ) -> Result<Self> {
        let url = Url::parse(endpoint.as_ref()).map_err(|source| AligoError::InvalidBaseUrl {
            url: endpoint.as_ref().to_string(),
            source,
        })?;

        Self::builder(api_key, user_id, sender).endpoint(url).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder(
        api_key: impl Into<SecretString>,
        user_id: impl Into<String>,
        sender: impl Into<String>,
    ) -> AligoClientBuilder {
        AligoClientBuilder::new(api_key, user_id, sender)
    }

    /// Full URL requests are posted to.
    pub fn send_endpoint(&self) -> &Url {
        &self.send_endpoint
    }

    /// Send an SMS.
    ///
    /// Fails with a transport error on network failure, non-2xx status or a
    /// body that is not JSON, and with [`AligoError::Rejected`] when the
    /// gateway answers with a `result_code` other than `"1"`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "AligoClient::send",
            skip_all,
            fields(receiver = %receiver, msg_id = tracing::field::Empty)
        )
    )]
    pub async fn send(&self, receiver: &PhoneNumber, message: &str) -> Result<SendResponse> {
        let request = SendRequest {
            key: self.api_key.expose_secret(),
            user_id: &self.user_id,
            sender: &self.sender,
            receiver: receiver.as_str(),
            msg_type: SMS_MESSAGE_TYPE,
            msg: message,
        };
        let body = serde_urlencoded::to_string(&request).map_err(AligoError::EncodeRequest)?;

        let response = self
            .http_client
            .post(self.send_endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?
            .error_for_status()
            .map_err(AligoError::HttpStatus)?;

        let text = response.text().await.map_err(AligoError::ParseResponse)?;

        let data = AligoResponse::from_text(&text)
            .map_err(AligoError::DeserializeJson)?
            .into_result()?;

        #[cfg(feature = "tracing")]
        {
            let span = Span::current();
            if let Some(msg_id) = &data.msg_id {
                span.record("msg_id", msg_id.as_str());
            }
            span.set_status(Status::Ok);
        }

        Ok(data)
    }
}
