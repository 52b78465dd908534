//! Signup outcome types.
//!
//! Two layers of the same decision:
//! - [`SignupOutcome`] is what the engine reports about a single state
//!   transition, with no payload.
//! - [`SignupResult`] is the outward-facing variant the session store hands
//!   to callers, carrying the post-mutation session snapshot needed to render
//!   a notification.

use crate::core::ids::SessionId;
use crate::session::entities::Session;

/// Why a signup attempt was ignored.
///
/// All of these are expected traffic under at-least-once webhook delivery;
/// none of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No session with the given id exists.
    UnknownSession,
    /// The session already finalized; it accepts no further signups.
    SessionFinalized,
    /// The option id is not in the catalog.
    UnknownOption,
    /// The participant already holds a slot in this session.
    DuplicateSignup,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::UnknownSession => write!(f, "unknown session"),
            IgnoreReason::SessionFinalized => write!(f, "session already finalized"),
            IgnoreReason::UnknownOption => write!(f, "option not in catalog"),
            IgnoreReason::DuplicateSignup => write!(f, "participant already signed up"),
        }
    }
}

/// State transition performed by one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Nothing changed; see the reason.
    Ignored(IgnoreReason),
    /// The signup was recorded; the session stays open.
    Updated,
    /// The signup was recorded and reached quorum; the session is now locked.
    Finalized,
}

impl SignupOutcome {
    /// Whether this outcome left the session unchanged.
    pub fn is_ignored(&self) -> bool {
        matches!(self, SignupOutcome::Ignored(_))
    }
}

/// Result of a signup attempt as seen by callers of the session store.
///
/// `Updated` and `Finalized` carry a snapshot of the session taken after the
/// mutation committed; callers render notifications from the snapshot without
/// touching the store again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupResult {
    /// Nothing changed and no notification should be produced.
    Ignored {
        session_id: SessionId,
        reason: IgnoreReason,
    },
    /// Signup recorded; re-render the option picker.
    Updated(Session),
    /// Quorum reached; broadcast the finalized session.
    Finalized(Session),
}

impl SignupResult {
    /// Whether the attempt was ignored.
    pub fn is_ignored(&self) -> bool {
        matches!(self, SignupResult::Ignored { .. })
    }

    /// The session snapshot, when one was produced.
    pub fn session(&self) -> Option<&Session> {
        match self {
            SignupResult::Ignored { .. } => None,
            SignupResult::Updated(session) | SignupResult::Finalized(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_reason_display() {
        assert_eq!(IgnoreReason::UnknownSession.to_string(), "unknown session");
        assert_eq!(
            IgnoreReason::DuplicateSignup.to_string(),
            "participant already signed up"
        );
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(SignupOutcome::Ignored(IgnoreReason::UnknownOption).is_ignored());
        assert!(!SignupOutcome::Updated.is_ignored());
        assert!(!SignupOutcome::Finalized.is_ignored());
    }

    #[test]
    fn test_ignored_result_has_no_session() {
        let result = SignupResult::Ignored {
            session_id: SessionId::new("s1"),
            reason: IgnoreReason::SessionFinalized,
        };
        assert!(result.is_ignored());
        assert!(result.session().is_none());
    }
}
