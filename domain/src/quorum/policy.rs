//! Quorum policy: when does an option's signup count finalize the session.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The quorum threshold for session finalization.
///
/// An option wins as soon as it holds this many distinct participants.
///
/// # Example
///
/// ```
/// use gameday_domain::QuorumPolicy;
///
/// let policy = QuorumPolicy::default();
/// assert!(!policy.is_met(3));
/// assert!(policy.is_met(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumPolicy {
    threshold: usize,
}

impl QuorumPolicy {
    /// Default threshold: four players make a table.
    pub const DEFAULT_THRESHOLD: usize = 4;

    /// Creates a policy, rejecting a zero threshold (a session that finalizes
    /// with nobody signed up is meaningless).
    pub fn new(threshold: usize) -> Result<Self, DomainError> {
        if threshold == 0 {
            return Err(DomainError::InvalidQuorum);
        }
        Ok(Self { threshold })
    }

    /// The configured threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether a signup count satisfies the quorum.
    pub fn is_met(&self, distinct_signups: usize) -> bool {
        distinct_signups >= self.threshold
    }
}

impl Default for QuorumPolicy {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl std::fmt::Display for QuorumPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "quorum of {}", self.threshold)
    }
}
