//! Types for the Aligo send API.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Formatter};

/// Message type marker sent with every request.
pub const SMS_MESSAGE_TYPE: &str = "SMS";

/// `result_code` value that marks an accepted message.
pub const SUCCESS_RESULT_CODE: &str = "1";

/// Form body of `POST /send/`.
///
/// Field order is the order of the encoded form keys.
#[derive(Clone, Serialize)]
pub struct SendRequest<'a> {
    /// API key.
    pub key: &'a str,
    /// Account identifier.
    pub user_id: &'a str,
    /// Registered sender number.
    pub sender: &'a str,
    /// Destination phone number.
    pub receiver: &'a str,
    /// Always [`SMS_MESSAGE_TYPE`].
    pub msg_type: &'a str,
    /// Message body.
    pub msg: &'a str,
}

impl fmt::Debug for SendRequest<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendRequest")
            .field("key", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("sender", &self.sender)
            .field("receiver", &self.receiver)
            .field("msg_type", &self.msg_type)
            .field("msg_len", &self.msg.len())
            .finish()
    }
}

/// JSON body returned by `POST /send/`.
///
/// Only `result_code` decides the outcome; the other fields accept any JSON type.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SendResponse {
    /// Provider status code as sent; only the JSON string `"1"` is success.
    #[serde(default)]
    pub result_code: Option<serde_json::Value>,
    /// Provider status message.
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
    /// Identifier assigned to an accepted message.
    #[serde(default, deserialize_with = "optional_text")]
    pub msg_id: Option<String>,
}

impl SendResponse {
    /// Returns true if the provider accepted the message.
    pub fn is_success(&self) -> bool {
        matches!(
            &self.result_code,
            Some(serde_json::Value::String(code)) if code == SUCCESS_RESULT_CODE
        )
    }

    /// `result_code` as text: strings verbatim, other JSON values in their raw
    /// form, empty when absent or null.
    pub fn result_code_text(&self) -> String {
        self.result_code.as_ref().map(value_text).unwrap_or_default()
    }
}

fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Any JSON value as text; null becomes empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_text).unwrap_or_default())
}

/// Any non-null JSON value as text.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_text).filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_form_encoding() {
        let request = SendRequest {
            key: "secret",
            user_id: "acme",
            sender: "0212345678",
            receiver: "01012345678",
            msg_type: SMS_MESSAGE_TYPE,
            msg: "hello world",
        };

        let encoded = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(
            encoded,
            "key=secret&user_id=acme&sender=0212345678&receiver=01012345678&msg_type=SMS&msg=hello+world"
        );
    }

    #[test]
    fn test_send_request_debug_redacts_key() {
        let request = SendRequest {
            key: "secret",
            user_id: "acme",
            sender: "0212345678",
            receiver: "01012345678",
            msg_type: SMS_MESSAGE_TYPE,
            msg: "hello",
        };

        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_only_string_one_is_success() {
        let from_string: SendResponse =
            serde_json::from_str(r#"{"result_code":"1","message":"success","msg_id":123}"#).unwrap();
        let from_number: SendResponse =
            serde_json::from_str(r#"{"result_code":1,"message":"success"}"#).unwrap();

        assert!(from_string.is_success());
        assert_eq!(from_string.msg_id.as_deref(), Some("123"));
        assert!(!from_number.is_success());
        assert_eq!(from_number.result_code_text(), "1");
    }

    #[test]
    fn test_message_of_any_type_is_accepted() {
        for (message, expected) in [("null", ""), ("42", "42"), (r#"{"a":1}"#, r#"{"a":1}"#)] {
            let json = format!(r#"{{"result_code":"1","message":{}}}"#, message);
            let response: SendResponse = serde_json::from_str(&json).unwrap();
            assert!(response.is_success());
            assert_eq!(response.message, expected);
        }
    }

    #[test]
    fn test_missing_result_code_is_not_success() {
        let response: SendResponse = serde_json::from_str(r#"{"message":"?"}"#).unwrap();
        assert_eq!(response.result_code, None);
        assert_eq!(response.result_code_text(), "");
        assert!(!response.is_success());
    }

    #[test]
    fn test_non_success_codes() {
        for code in [r#""0""#, r#""-1""#, r#""""#, r#"" 1""#, "1", "-101", "true", "null"] {
            let json = format!(r#"{{"result_code":{},"message":"x"}}"#, code);
            let response: SendResponse = serde_json::from_str(&json).unwrap();
            assert!(!response.is_success(), "code {} must not be success", code);
        }
    }
}
