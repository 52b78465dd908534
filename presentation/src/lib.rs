//! Presentation layer for gameday
//!
//! Renders engine outcomes into outbound message payloads: the interactive
//! option picker for open sessions and the plain-text broadcast for
//! finalized ones. Rendering is pure; delivery belongs to the messenger
//! gateway.

pub mod render;

pub use render::{finalized_broadcast, option_picker};
