//! Bot API request and response bodies.
//!
//! See: <https://core.telegram.org/bots/api#sendmessage>

use serde::{Deserialize, Serialize};

/// `sendMessage` request body.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
}

impl<'a> SendMessage<'a> {
    /// An HTML-formatted message.
    #[must_use]
    pub const fn html(chat_id: &'a str, text: &'a str) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: "HTML",
        }
    }
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(SendMessage::html("-100123", "<b>Salom</b>")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"chat_id": "-100123", "text": "<b>Salom</b>", "parse_mode": "HTML"})
        );
    }

    #[test]
    fn test_negative_ack() {
        let resp: SendMessageResponse = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.error_code, Some(400));
    }
}
