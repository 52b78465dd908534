//! Record Signup use case
//!
//! Runs one option-selection intent through the quorum engine and reports
//! what happened so the caller can render the right notification.

use crate::ports::session_store::SessionStore;
use gameday_domain::{OptionId, ParticipantId, SessionId, SignupResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the RecordSignup use case.
#[derive(Debug, Clone)]
pub struct RecordSignupInput {
    pub session_id: SessionId,
    pub participant_id: ParticipantId,
    pub option_id: OptionId,
}

/// Use case for recording a signup attempt.
pub struct RecordSignupUseCase<S: SessionStore> {
    store: Arc<S>,
}

impl<S: SessionStore> RecordSignupUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Executes the attempt. Ignored outcomes are expected traffic under
    /// at-least-once delivery and log at debug only.
    pub fn execute(&self, input: RecordSignupInput) -> SignupResult {
        let result =
            self.store
                .attempt_signup(&input.session_id, input.participant_id.clone(), &input.option_id);

        match &result {
            SignupResult::Ignored { session_id, reason } => {
                debug!(
                    session_id = %session_id,
                    participant = %input.participant_id,
                    option = %input.option_id,
                    reason = %reason,
                    "signup ignored"
                );
            }
            SignupResult::Updated(session) => {
                info!(
                    session_id = %session.id(),
                    participant = %input.participant_id,
                    option = %input.option_id,
                    count = session.signup_count(&input.option_id),
                    "signup recorded"
                );
            }
            SignupResult::Finalized(session) => {
                info!(
                    session_id = %session.id(),
                    option = %input.option_id,
                    winners = session.winners().len(),
                    "session finalized"
                );
            }
        }

        result
    }
}
