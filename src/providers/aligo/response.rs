//! Response interpretation for the Aligo send API.

use super::errors::AligoRejection;
use super::types::SendResponse;

/// Outcome of an Aligo call whose body was valid JSON.
#[derive(Debug)]
pub enum AligoResponse {
    Accepted(SendResponse),
    Rejected(AligoRejection),
}

impl AligoResponse {
    /// Parse the raw body.
    ///
    /// Malformed JSON is returned as an error; a well-formed body with any
    /// `result_code` other than `"1"` becomes [`AligoResponse::Rejected`].
    pub fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        let data = serde_json::from_str::<SendResponse>(text)?;

        if data.is_success() {
            return Ok(Self::Accepted(data));
        }

        Ok(Self::Rejected(AligoRejection {
            code: data.result_code_text(),
            message: data.message,
        }))
    }

    /// Convert response into a Result for ergonomic error handling.
    pub fn into_result(self) -> Result<SendResponse, AligoRejection> {
        match self {
            Self::Accepted(data) => Ok(data),
            Self::Rejected(e) => Err(e),
        }
    }
}
