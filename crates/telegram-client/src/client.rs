//! Telegram Bot API HTTP client.

use crate::error::TelegramError;
use crate::types::{SendMessageResponse, SendMessageResult};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Telegram Bot API client.
///
/// The bot token is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    api_url: String,
    bot_token: SecretString,
}

impl TelegramClient {
    /// Create a new Telegram client.
    pub fn new(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            bot_token: SecretString::new(bot_token.into()),
        })
    }

    /// Send a text message to a chat, returning the sent message's id.
    ///
    /// The text is URL-encoded before interpolation into the query string.
    #[instrument(skip(self, text))]
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
    ) -> Result<SendMessageResult, TelegramError> {
        let url = format!(
            "{}/bot{}/sendMessage?chat_id={}&text={}",
            self.api_url,
            self.bot_token.expose_secret(),
            chat_id,
            encode(text),
        );

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("sendMessage failed: {} - {}", status, message);
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: SendMessageResponse = serde_json::from_str(&body)?;

        if !envelope.ok {
            return Err(TelegramError::SendFailed(
                envelope.description.unwrap_or_else(|| "ok=false".into()),
            ));
        }

        let result = envelope
            .result
            .ok_or_else(|| TelegramError::SendFailed("missing result".into()))?;

        debug!("Sent message {} to chat {}", result.message_id, chat_id);
        Ok(result)
    }
}
