//! Application layer for gameday
//!
//! This crate contains use cases, port definitions, and the typed intents
//! the ingestion adapter produces. It depends only on the domain layer.

pub mod intent;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use intent::{Intent, SelectOptionAction};
pub use ports::{
    messenger::{MessengerError, MessengerGateway, OutboundMessage},
    session_store::SessionStore,
};
pub use use_cases::open_session::{OpenSessionInput, OpenSessionUseCase};
pub use use_cases::record_signup::{RecordSignupInput, RecordSignupUseCase};
