//! Telegram Bot API delivery.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use herald_common::{HeraldError, Result};

/// Messaging collaborator: anything that can put a text into a chat.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// `sendMessage` over HTTPS.
pub struct TelegramMessenger {
    client: Client,
    api_url: String,
    token: String,
}

impl TelegramMessenger {
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_url: String = api_url.into();
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            HeraldError::Config(format!("Failed to build Telegram client: {e}"))
        })?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            // reqwest errors embed the URL, which carries the bot token.
            .map_err(|e| {
                HeraldError::Delivery(format!("Telegram request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let body: Option<TelegramResponse> = response.json().await.ok();

        match body {
            Some(TelegramResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TelegramResponse { description, .. }) => Err(HeraldError::Delivery(format!(
                "Telegram rejected the message ({}): {}",
                status,
                description.unwrap_or_else(|| "no description".to_string())
            ))),
            None => Err(HeraldError::Delivery(format!(
                "Telegram returned {status} with an unreadable body"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn messenger(server: &MockServer) -> TelegramMessenger {
        TelegramMessenger::new(server.base_url(), "123:abc", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_send_message_posts_chat_and_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/bot123:abc/sendMessage")
                    .json_body(json!({"chat_id": "42", "text": "hello"}));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"ok": true, "result": {"message_id": 1}}));
            })
            .await;

        messenger(&server).send_message("42", "hello").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_is_delivery_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/bot123:abc/sendMessage");
                then.status(400)
                    .header("content-type", "application/json")
                    .json_body(json!({"ok": false, "description": "Bad Request: chat not found"}));
            })
            .await;

        let err = messenger(&server).send_message("42", "hello").await.unwrap_err();
        assert!(
            matches!(&err, HeraldError::Delivery(msg) if msg.contains("chat not found")),
            "{err}"
        );
    }

    #[tokio::test]
    async fn test_unreadable_body_is_delivery_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/bot123:abc/sendMessage");
                then.status(502).body("<html>bad gateway</html>");
            })
            .await;

        let err = messenger(&server).send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, HeraldError::Delivery(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_hides_token() {
        let messenger =
            TelegramMessenger::new("http://127.0.0.1:1", "123:secret", Duration::from_secs(2))
                .unwrap();
        let err = messenger.send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, HeraldError::Delivery(_)));
        assert!(!err.to_string().contains("secret"), "{err}");
    }
}
