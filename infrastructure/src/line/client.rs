//! Outbound messaging client for the LINE Messaging API.
//!
//! Implements the [`MessengerGateway`] port with two endpoints: reply (bound
//! to an inbound event's one-shot token) and push (free-form, used for the
//! finalization broadcast). Delivery failures surface as values; the caller
//! logs them and moves on, since engine state is already committed.

use async_trait::async_trait;
use gameday_application::{MessengerError, MessengerGateway, OutboundMessage};
use serde_json::{Value, json};

const DEFAULT_BASE_URL: &str = "https://api.line.me";

/// HTTP client for the messaging API.
#[derive(Debug, Clone)]
pub struct LineClient {
    http: reqwest::Client,
    channel_access_token: String,
    base_url: String,
}

impl LineClient {
    /// Creates a client authenticating with the given channel access token.
    pub fn new(channel_access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            channel_access_token: channel_access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Converts port-level messages into the platform's message objects.
    fn render_messages(messages: &[OutboundMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|message| match message {
                OutboundMessage::Text(text) => json!({
                    "type": "text",
                    "text": text,
                }),
                OutboundMessage::Flex { alt_text, contents } => json!({
                    "type": "flex",
                    "altText": alt_text,
                    "contents": contents,
                }),
            })
            .collect()
    }

    async fn post(&self, path: &str, body: Value) -> Result<(), MessengerError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.channel_access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| MessengerError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MessengerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MessengerGateway for LineClient {
    async fn reply(
        &self,
        reply_token: &str,
        messages: &[OutboundMessage],
    ) -> Result<(), MessengerError> {
        self.post(
            "/v2/bot/message/reply",
            json!({
                "replyToken": reply_token,
                "messages": Self::render_messages(messages),
            }),
        )
        .await
    }

    async fn push(
        &self,
        recipient: &str,
        messages: &[OutboundMessage],
    ) -> Result<(), MessengerError> {
        self.post(
            "/v2/bot/message/push",
            json!({
                "to": recipient,
                "messages": Self::render_messages(messages),
            }),
        )
        .await
    }
}
