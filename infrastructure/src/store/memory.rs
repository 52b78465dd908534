//! In-memory session store.
//!
//! Owns every session for the process lifetime behind one `RwLock`. A signup
//! attempt holds the write lock for its whole critical section (precondition
//! checks, append, quorum detection, finalization), which is what gives the
//! engine its single-writer guarantee under concurrent webhook delivery.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use gameday_application::SessionStore;
use gameday_domain::{
    IgnoreReason, OptionId, ParticipantId, QuorumEngine, Session, SessionId, SignupOutcome,
    SignupResult,
};

/// Process-wide session store backed by a `HashMap`.
///
/// Session ids are `"{millis}-{seq}"`: readable, roughly time-ordered, and
/// unique even when two sessions are created in the same millisecond.
pub struct InMemorySessionStore {
    engine: QuorumEngine,
    sessions: RwLock<HashMap<SessionId, Session>>,
    next_seq: AtomicU64,
}

impl InMemorySessionStore {
    /// Creates an empty store driving the given engine.
    pub fn new(engine: QuorumEngine) -> Self {
        Self {
            engine,
            sessions: RwLock::new(HashMap::new()),
            next_seq: AtomicU64::new(0),
        }
    }

    /// The engine this store runs signups through.
    pub fn engine(&self) -> &QuorumEngine {
        &self.engine
    }

    /// Number of sessions created so far.
    pub fn len(&self) -> usize {
        self.sessions.read().expect("session store lock poisoned").len()
    }

    /// Whether no session has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_id(&self) -> SessionId {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        SessionId::new(format!("{}-{}", Utc::now().timestamp_millis(), seq))
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, scheduled_time: &str) -> Session {
        let session = self.engine.create_session(self.next_id(), scheduled_time);
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        sessions.insert(session.id().clone(), session.clone());
        session
    }

    fn find(&self, id: &SessionId) -> Option<Session> {
        self.sessions
            .read()
            .expect("session store lock poisoned")
            .get(id)
            .cloned()
    }

    fn attempt_signup(
        &self,
        id: &SessionId,
        participant: ParticipantId,
        option: &OptionId,
    ) -> SignupResult {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let Some(session) = sessions.get_mut(id) else {
            return SignupResult::Ignored {
                session_id: id.clone(),
                reason: IgnoreReason::UnknownSession,
            };
        };

        match self.engine.attempt_signup(session, &participant, option) {
            SignupOutcome::Ignored(reason) => SignupResult::Ignored {
                session_id: id.clone(),
                reason,
            },
            SignupOutcome::Updated => SignupResult::Updated(session.clone()),
            SignupOutcome::Finalized => SignupResult::Finalized(session.clone()),
        }
    }
}
