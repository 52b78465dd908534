//! Session store port
//!
//! Defines how sessions are created, looked up and mutated. The store is the
//! sole owner of all session state; implementations live in the
//! infrastructure layer.

use gameday_domain::{OptionId, ParticipantId, Session, SessionId, SignupResult};

/// Owner of all sessions for the process lifetime.
///
/// Callers only ever receive snapshots; every mutation goes through
/// [`SessionStore::attempt_signup`], which the implementation must execute as
/// one exclusive critical section per session — precondition checks, the
/// signup append, quorum detection and finalization must not interleave with
/// another attempt on the same session. Sessions are never deleted.
pub trait SessionStore: Send + Sync {
    /// Allocates a new open session with a fresh unique id and empty signups
    /// for every catalog option. Infallible.
    fn create(&self, scheduled_time: &str) -> Session;

    /// Snapshot lookup by id; `None` when absent. Absence is expected traffic
    /// (late events for ids this process never saw), not an error.
    fn find(&self, id: &SessionId) -> Option<Session>;

    /// Runs one signup attempt through the quorum engine under the store's
    /// exclusive lock and returns the outcome with a post-mutation snapshot.
    ///
    /// An unknown session id yields `SignupResult::Ignored` with
    /// [`gameday_domain::IgnoreReason::UnknownSession`].
    fn attempt_signup(
        &self,
        id: &SessionId,
        participant: ParticipantId,
        option: &OptionId,
    ) -> SignupResult;
}
