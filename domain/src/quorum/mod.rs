//! Quorum domain.
//!
//! This module contains the state machine at the heart of gameday: recording
//! signups, enforcing one-option-per-participant, detecting quorum and
//! finalizing sessions.
//!
//! # Core Concepts
//!
//! ## Quorum
//! The minimum number of distinct participants one option must collect for
//! the session to lock in. The deciding signup and the finalization happen in
//! a single engine operation, so there is no window where a session is "full
//! but still open".
//!
//! ## Ignored outcomes
//! Late, duplicate or malformed signup attempts are expected traffic
//! (platforms re-deliver webhooks); they resolve to an ignored outcome with a
//! reason, never an error.

pub mod engine;
pub mod outcome;
pub mod policy;

// Re-export main types
pub use engine::QuorumEngine;
pub use outcome::{IgnoreReason, SignupOutcome, SignupResult};
pub use policy::QuorumPolicy;
