//! Session store adapters.
//!
//! One implementation exists: the in-memory store. Sessions do not survive a
//! process restart; that is a deliberate non-goal.

pub mod memory;

pub use memory::InMemorySessionStore;
