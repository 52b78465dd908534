//! Chat-platform adapter (LINE Messaging API).
//!
//! Everything platform-specific lives here: webhook payload types, signature
//! verification, the outbound HTTP client and the event→intent extraction.
//! The rest of the system deals only in typed intents and outbound messages.

pub mod client;
pub mod ingest;
pub mod protocol;
pub mod signature;

pub use client::LineClient;
pub use ingest::{EventIngestor, InboundCommand};
pub use protocol::{EventSource, MessagePayload, PostbackPayload, WebhookEnvelope, WebhookEvent};
