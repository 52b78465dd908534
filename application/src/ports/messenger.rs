//! Messenger gateway port
//!
//! Defines the interface for delivering outbound messages to the chat
//! platform. The engine never calls this directly; delivery happens after the
//! state transition has committed, and a failed delivery never rolls the
//! transition back.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while delivering a message.
#[derive(Error, Debug)]
pub enum MessengerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Platform rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A render-ready outbound message.
///
/// Produced by the presentation layer, consumed by the gateway adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    /// Plain text, e.g. the finalization broadcast.
    Text(String),
    /// Interactive flex payload, e.g. the option picker. `alt_text` is shown
    /// by clients that cannot render the payload.
    Flex { alt_text: String, contents: Value },
}

impl OutboundMessage {
    /// Creates a plain text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates a flex message.
    pub fn flex(alt_text: impl Into<String>, contents: Value) -> Self {
        Self::Flex {
            alt_text: alt_text.into(),
            contents,
        }
    }
}

/// Gateway for outbound platform messaging.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait MessengerGateway: Send + Sync {
    /// Replies to a specific inbound event using its one-shot reply token.
    async fn reply(
        &self,
        reply_token: &str,
        messages: &[OutboundMessage],
    ) -> Result<(), MessengerError>;

    /// Pushes messages to a recipient (group or user id) outside any reply
    /// window.
    async fn push(
        &self,
        recipient: &str,
        messages: &[OutboundMessage],
    ) -> Result<(), MessengerError>;
}
