//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`] — identifier value objects for sessions, options, participants
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod ids;
