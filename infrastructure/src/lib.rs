//! Infrastructure layer for gameday
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the in-memory session store, configuration file
//! loading, and the chat-platform protocol (webhook types, signature
//! verification, message delivery, intent extraction).

pub mod config;
pub mod line;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileLineConfig, FileOptionConfig, FileServerConfig,
    FileSessionConfig,
};
pub use line::{
    client::LineClient,
    ingest::{EventIngestor, InboundCommand},
    protocol::{EventSource, MessagePayload, PostbackPayload, WebhookEnvelope, WebhookEvent},
    signature,
};
pub use store::memory::InMemorySessionStore;
