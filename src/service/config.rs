//! Service configuration types.

use super::error::ConfigError;
use secrecy::SecretString;
use std::fmt;
use url::Url;

/// Aligo base URL.
pub const ENV_ALIGO_API_URL: &str = "ALIGO_API_URL";
/// Aligo API key.
pub const ENV_ALIGO_API_KEY: &str = "ALIGO_API_KEY";
/// Aligo account identifier.
pub const ENV_ALIGO_API_ID: &str = "ALIGO_API_ID";
/// Aligo registered sender number.
pub const ENV_ALIGO_API_SENDER: &str = "ALIGO_API_SENDER";
/// SNS region.
pub const ENV_AWS_SNS_REGION: &str = "AWS_SNS_REGION";
/// SNS access key id.
pub const ENV_AWS_SNS_ACCESS_KEY_ID: &str = "AWS_SNS_ACCESS_KEY_ID";
/// SNS secret access key.
pub const ENV_AWS_SNS_SECRET_ACCESS_KEY: &str = "AWS_SNS_SECRET_ACCESS_KEY";
/// Optional SNS endpoint override.
pub const ENV_AWS_SNS_ENDPOINT_URL: &str = "AWS_SNS_ENDPOINT_URL";

/// Domestic gateway settings.
#[derive(Clone)]
pub struct AligoConfig {
    pub(crate) base_url: Url,
    pub(crate) api_key: SecretString,
    pub(crate) user_id: String,
    pub(crate) sender: String,
}

impl AligoConfig {
    /// Base URL; requests go to `{base_url}/send/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }
}

impl fmt::Debug for AligoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AligoConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("sender", &self.sender)
            .finish()
    }
}

/// Cloud notification service settings.
#[derive(Clone)]
pub struct SnsConfig {
    pub(crate) region: String,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: SecretString,
    pub(crate) endpoint_url: Option<Url>,
}

impl SnsConfig {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &SecretString {
        &self.secret_access_key
    }

    /// Endpoint override; `None` uses the regional AWS endpoint.
    pub fn endpoint_url(&self) -> Option<&Url> {
        self.endpoint_url.as_ref()
    }
}

impl fmt::Debug for SnsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnsConfig")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// Configuration for the SMS service.
///
/// Every value except the SNS endpoint override is required. A config can only
/// be obtained through [`SmsServiceConfig::from_env`],
/// [`SmsServiceConfig::from_lookup`] or the builder, all of which reject
/// missing values.
///
/// ```compile_fail
/// use sms_gateway::{AligoConfig, SmsServiceConfig, SnsConfig};
///
/// fn assemble(aligo: AligoConfig, sns: SnsConfig) -> SmsServiceConfig {
///     SmsServiceConfig { aligo, sns }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SmsServiceConfig {
    pub(crate) aligo: AligoConfig,
    pub(crate) sns: SnsConfig,
}

impl SmsServiceConfig {
    /// Domestic gateway settings.
    pub fn aligo(&self) -> &AligoConfig {
        &self.aligo
    }

    /// International channel settings.
    pub fn sns(&self) -> &SnsConfig {
        &self.sns
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sms_gateway::{ConfigError, SmsServiceConfig};
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([("ALIGO_API_URL", "https://apis.aligo.in")]);
    /// let result = SmsServiceConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
    ///
    /// assert!(matches!(result, Err(ConfigError::MissingVar { name: "ALIGO_API_KEY" })));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        builder.aligo_api_url = lookup(ENV_ALIGO_API_URL);
        builder.aligo_api_key = lookup(ENV_ALIGO_API_KEY);
        builder.aligo_user_id = lookup(ENV_ALIGO_API_ID);
        builder.aligo_sender = lookup(ENV_ALIGO_API_SENDER);
        builder.sns_region = lookup(ENV_AWS_SNS_REGION);
        builder.sns_access_key_id = lookup(ENV_AWS_SNS_ACCESS_KEY_ID);
        builder.sns_secret_access_key = lookup(ENV_AWS_SNS_SECRET_ACCESS_KEY);
        builder.sns_endpoint_url = lookup(ENV_AWS_SNS_ENDPOINT_URL);
        builder.build()
    }

    /// Create a new builder for SmsServiceConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sms_gateway::SmsServiceConfig;
    ///
    /// let config = SmsServiceConfig::builder()
    ///     .aligo_api_url("https://apis.aligo.in")
    ///     .aligo_api_key("key")
    ///     .aligo_user_id("account")
    ///     .aligo_sender("0212345678")
    ///     .sns_region("ap-northeast-2")
    ///     .sns_access_key_id("AKIDEXAMPLE")
    ///     .sns_secret_access_key("secret")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.aligo().base_url().as_str(), "https://apis.aligo.in/");
    /// assert_eq!(config.sns().region(), "ap-northeast-2");
    /// ```
    pub fn builder() -> SmsServiceConfigBuilder {
        SmsServiceConfigBuilder::default()
    }
}

/// Builder for SmsServiceConfig.
#[derive(Default, Clone)]
pub struct SmsServiceConfigBuilder {
    pub(crate) aligo_api_url: Option<String>,
    pub(crate) aligo_api_key: Option<String>,
    pub(crate) aligo_user_id: Option<String>,
    pub(crate) aligo_sender: Option<String>,
    pub(crate) sns_region: Option<String>,
    pub(crate) sns_access_key_id: Option<String>,
    pub(crate) sns_secret_access_key: Option<String>,
    pub(crate) sns_endpoint_url: Option<String>,
}

impl fmt::Debug for SmsServiceConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsServiceConfigBuilder")
            .field("aligo_api_url", &self.aligo_api_url)
            .field("aligo_user_id", &self.aligo_user_id)
            .field("aligo_sender", &self.aligo_sender)
            .field("sns_region", &self.sns_region)
            .field("sns_endpoint_url", &self.sns_endpoint_url)
            .finish_non_exhaustive()
    }
}

impl SmsServiceConfigBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aligo_api_url(mut self, url: impl Into<String>) -> Self {
        self.aligo_api_url = Some(url.into());
        self
    }

    pub fn aligo_api_key(mut self, key: impl Into<String>) -> Self {
        self.aligo_api_key = Some(key.into());
        self
    }

    pub fn aligo_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.aligo_user_id = Some(user_id.into());
        self
    }

    pub fn aligo_sender(mut self, sender: impl Into<String>) -> Self {
        self.aligo_sender = Some(sender.into());
        self
    }

    pub fn sns_region(mut self, region: impl Into<String>) -> Self {
        self.sns_region = Some(region.into());
        self
    }

    pub fn sns_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.sns_access_key_id = Some(access_key_id.into());
        self
    }

    pub fn sns_secret_access_key(mut self, secret: impl Into<String>) -> Self {
        self.sns_secret_access_key = Some(secret.into());
        self
    }

    /// Point the SNS client at a non-AWS endpoint.
    pub fn sns_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.sns_endpoint_url = Some(url.into());
        self
    }

    /// Build the SmsServiceConfig.
    ///
    /// Fails on the first required value that is absent or blank.
    pub fn build(self) -> Result<SmsServiceConfig, ConfigError> {
        let aligo_api_url = required(self.aligo_api_url, ENV_ALIGO_API_URL)?;
        let aligo = AligoConfig {
            base_url: parse_url(&aligo_api_url, ENV_ALIGO_API_URL)?,
            api_key: SecretString::from(required(self.aligo_api_key, ENV_ALIGO_API_KEY)?),
            user_id: required(self.aligo_user_id, ENV_ALIGO_API_ID)?,
            sender: required(self.aligo_sender, ENV_ALIGO_API_SENDER)?,
        };

        let endpoint_url = match self.sns_endpoint_url.filter(|v| !v.trim().is_empty()) {
            Some(url) => Some(parse_url(&url, ENV_AWS_SNS_ENDPOINT_URL)?),
            None => None,
        };
        let sns = SnsConfig {
            region: required(self.sns_region, ENV_AWS_SNS_REGION)?,
            access_key_id: required(self.sns_access_key_id, ENV_AWS_SNS_ACCESS_KEY_ID)?,
            secret_access_key: SecretString::from(required(
                self.sns_secret_access_key,
                ENV_AWS_SNS_SECRET_ACCESS_KEY,
            )?),
            endpoint_url,
        };

        Ok(SmsServiceConfig { aligo, sns })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar { name }),
    }
}

fn parse_url(value: &str, name: &'static str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl { name, source })
}
