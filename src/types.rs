//! Core types for SMS delivery.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

// =============================================================================
// PhoneNumber
// =============================================================================

/// Destination phone number.
///
/// The value is passed to the provider verbatim. Domestic numbers are usually
/// written without a country code (`01012345678`), international ones in
/// E.164 form (`+15551234567`); neither form is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PhoneNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl From<&str> for PhoneNumber {
    fn from(number: &str) -> Self {
        Self(number.to_string())
    }
}

// =============================================================================
// Channel
// =============================================================================

/// Delivery channel chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// In-country delivery through the domestic HTTP gateway.
    Domestic,
    /// Delivery through the cloud notification service.
    International,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::International => "international",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
