//! Session domain.
//!
//! - [`entities::Session`] — one round of game-option selection
//! - [`entities::OptionSignups`] — ordered signup list for one option
//! - [`entities::SessionStatus`] — open / finalized lifecycle state

pub mod entities;

pub use entities::{OptionSignups, Session, SessionStatus};
