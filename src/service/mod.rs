//! SMS delivery service that fronts the domestic and international providers.

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod structure;
pub(crate) mod traits;

pub use config::{AligoConfig, SmsServiceConfig, SmsServiceConfigBuilder, SnsConfig};
pub use error::{ConfigError, SmsServiceError};
pub use structure::SmsService;
pub use traits::SmsServiceTrait;
