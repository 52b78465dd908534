//! The quorum engine: the one place sessions are created and mutated.
//!
//! Every signup attempt runs all precondition checks before touching the
//! session, then performs the append, quorum detection and finalization as
//! one uninterrupted step. Callers must not interleave two attempts on the
//! same session; the session store serializes them under its write lock.

use std::sync::Arc;

use crate::catalog::entities::OptionCatalog;
use crate::core::ids::{OptionId, ParticipantId, SessionId};
use crate::quorum::outcome::{IgnoreReason, SignupOutcome};
use crate::quorum::policy::QuorumPolicy;
use crate::session::entities::Session;

/// Per-session state machine for signups, quorum detection and finalization.
///
/// Holds the shared option catalog and the quorum policy; both are fixed for
/// the process lifetime. The engine itself is stateless across calls, so one
/// instance serves every session.
#[derive(Debug, Clone)]
pub struct QuorumEngine {
    catalog: Arc<OptionCatalog>,
    policy: QuorumPolicy,
}

impl QuorumEngine {
    /// Creates an engine over the given catalog and policy.
    pub fn new(catalog: Arc<OptionCatalog>, policy: QuorumPolicy) -> Self {
        Self { catalog, policy }
    }

    /// The shared option catalog.
    pub fn catalog(&self) -> &Arc<OptionCatalog> {
        &self.catalog
    }

    /// The quorum policy in force.
    pub fn policy(&self) -> QuorumPolicy {
        self.policy
    }

    /// Creates an open session with an empty signup list per catalog option.
    pub fn create_session(
        &self,
        id: SessionId,
        scheduled_time: impl Into<String>,
    ) -> Session {
        Session::new(id, scheduled_time, &self.catalog)
    }

    /// Records one signup attempt against a session.
    ///
    /// Precondition checks run first and leave the session untouched when any
    /// fails:
    /// - the session must still be open,
    /// - the option must exist in the catalog,
    /// - the participant must not already hold a slot under any option
    ///   (including the target one — repeat taps are idempotent no-ops).
    ///
    /// Only then is the participant appended. If the option's distinct count
    /// now meets the quorum threshold the session finalizes in the same call:
    /// status flips, the winning option is recorded, and every other option
    /// is reconciled against the winners.
    pub fn attempt_signup(
        &self,
        session: &mut Session,
        participant: &ParticipantId,
        option: &OptionId,
    ) -> SignupOutcome {
        if session.is_finalized() {
            return SignupOutcome::Ignored(IgnoreReason::SessionFinalized);
        }
        if !self.catalog.contains(option) {
            return SignupOutcome::Ignored(IgnoreReason::UnknownOption);
        }
        if session.participant_option(participant).is_some() {
            return SignupOutcome::Ignored(IgnoreReason::DuplicateSignup);
        }

        session.record_signup(option, participant.clone());

        if self.policy.is_met(session.signup_count(option)) {
            session.finalize(option.clone());
            session.reconcile();
            SignupOutcome::Finalized
        } else {
            SignupOutcome::Updated
        }
    }
}
