//! Telegram Bot API client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};
use url::Url;

use super::Notifier;
use super::error::RelayError;
use super::types::{SendMessage, SendMessageResponse};
use crate::config::TelegramConfig;

/// Posts messages to one Telegram chat.
#[derive(Clone)]
pub struct TelegramClient {
    /// HTTP client.
    client: Client,
    /// Bot API base URL.
    api_base: Url,
    /// Bot token; part of the request path.
    bot_token: SecretString,
    /// Chat that receives every message.
    chat_id: String,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_base", &self.api_base.as_str())
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a client.
    #[must_use]
    pub const fn new(client: Client, api_base: Url, bot_token: SecretString, chat_id: String) -> Self {
        Self {
            client,
            api_base,
            bot_token,
            chat_id,
        }
    }

    /// Build a client from configuration, or `None` when the token or chat
    /// id is missing.
    #[must_use]
    pub fn from_config(client: Client, config: &TelegramConfig) -> Option<Self> {
        let bot_token = config.bot_token.clone()?;
        let chat_id = config.chat_id.clone()?;
        Some(Self::new(client, config.api_base.clone(), bot_token, chat_id))
    }

    /// `{api_base}/bot{token}/sendMessage`
    fn send_message_url(&self) -> Result<Url, RelayError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| RelayError::Request("Telegram API base cannot be a base URL".to_string()))?
            .pop_if_empty()
            .push(&format!("bot{}", self.bot_token.expose_secret()))
            .push("sendMessage");
        Ok(url)
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id, length = text.len()))]
    async fn relay(&self, text: &str) -> Result<(), RelayError> {
        let url = self.send_message_url()?;

        let response = self
            .client
            .post(url)
            .json(&SendMessage::html(&self.chat_id, text))
            .send()
            .await
            .map_err(|e| {
                // reqwest includes the URL, and with it the token, in its message.
                let e = e.without_url();
                error!(error = %e, "Telegram network error");
                RelayError::Request(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Response(e.without_url().to_string()))?;
        let parsed = serde_json::from_str::<SendMessageResponse>(&body).ok();

        match parsed {
            Some(result) if status.is_success() && result.ok => {
                debug!("Message relayed to Telegram");
                Ok(())
            }
            Some(result) => {
                let description = result
                    .description
                    .unwrap_or_else(|| "Unknown error".to_string());
                error!(status = %status, description = %description, "Telegram API error");
                Err(RelayError::Rejected {
                    status: status.as_u16(),
                    description,
                })
            }
            None => {
                error!(status = %status, body = %body, "Unreadable Telegram response");
                Err(RelayError::Rejected {
                    status: status.as_u16(),
                    description: body,
                })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> TelegramClient {
        TelegramClient::new(
            Client::new(),
            Url::parse(base).unwrap(),
            SecretString::from("123456:ABC-def"),
            "-1001234".to_string(),
        )
    }

    #[test]
    fn test_send_message_url_keeps_token_in_path() {
        let url = client("https://api.telegram.org").send_message_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.telegram.org/bot123456:ABC-def/sendMessage"
        );

        let url = client("http://127.0.0.1:9000/tg/").send_message_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/tg/bot123456:ABC-def/sendMessage");
    }

    #[test]
    fn test_from_config_requires_token_and_chat() {
        let mut config = TelegramConfig {
            bot_token: Some(SecretString::from("t")),
            chat_id: None,
            api_base: Url::parse("https://api.telegram.org").unwrap(),
        };
        assert!(TelegramClient::from_config(Client::new(), &config).is_none());

        config.chat_id = Some("42".to_string());
        assert!(TelegramClient::from_config(Client::new(), &config).is_some());
    }

    #[test]
    fn test_debug_redacts_token() {
        let output = format!("{:?}", client("https://api.telegram.org"));
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("ABC-def"));
    }
}
