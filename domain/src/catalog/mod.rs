//! Option catalog domain.
//!
//! - [`entities::GameOption`] — one selectable game option (id + label)
//! - [`entities::OptionCatalog`] — the fixed ordered set of options

pub mod entities;

pub use entities::{GameOption, OptionCatalog};
