//! Open Session use case
//!
//! Creates a new session from a create-session command.

use crate::ports::session_store::SessionStore;
use gameday_domain::Session;
use std::sync::Arc;
use tracing::info;

/// Input for the OpenSession use case.
#[derive(Debug, Clone)]
pub struct OpenSessionInput {
    /// Free-text proposed time; stored verbatim after trimming.
    pub scheduled_time: String,
}

impl OpenSessionInput {
    pub fn new(scheduled_time: impl Into<String>) -> Self {
        Self {
            scheduled_time: scheduled_time.into().trim().to_string(),
        }
    }
}

/// Use case for opening a session.
pub struct OpenSessionUseCase<S: SessionStore> {
    store: Arc<S>,
}

impl<S: SessionStore> OpenSessionUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates the session and returns its snapshot for rendering. Never
    /// fails under normal operation.
    pub fn execute(&self, input: OpenSessionInput) -> Session {
        let session = self.store.create(&input.scheduled_time);
        info!(
            session_id = %session.id(),
            scheduled_time = %session.scheduled_time(),
            "session opened"
        );
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_trims_whitespace() {
        let input = OpenSessionInput::new("  2024-01-20 19:00  ");
        assert_eq!(input.scheduled_time, "2024-01-20 19:00");
    }
}
