//! Outbound message rendering.
//!
//! - [`picker::option_picker`] — interactive picker for created/updated sessions
//! - [`broadcast::finalized_broadcast`] — text broadcast for finalized sessions

pub mod broadcast;
pub mod picker;

pub use broadcast::finalized_broadcast;
pub use picker::option_picker;
