//! Session entities.
//!
//! A [`Session`] owns its signup state but exposes no public mutators: all
//! writes go through [`crate::quorum::engine::QuorumEngine`], which is what
//! keeps the exclusivity and finalization invariants in one place.

use crate::catalog::entities::OptionCatalog;
use crate::core::ids::{OptionId, ParticipantId, SessionId};

/// Lifecycle state of a session.
///
/// The only transition is `Open` → `Finalized`, performed exactly once by the
/// engine and never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting signups.
    Open,
    /// Locked to its winning option; read-only from here on.
    Finalized,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Open => write!(f, "open"),
            SessionStatus::Finalized => write!(f, "finalized"),
        }
    }
}

/// The signup list for one catalog option within a session.
///
/// Participants appear in first-signup order, each at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSignups {
    option_id: OptionId,
    participants: Vec<ParticipantId>,
}

impl OptionSignups {
    fn empty(option_id: OptionId) -> Self {
        Self {
            option_id,
            participants: Vec::new(),
        }
    }

    /// The option these signups belong to.
    pub fn option_id(&self) -> &OptionId {
        &self.option_id
    }

    /// Participants in signup order.
    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// Number of distinct participants signed up.
    pub fn count(&self) -> usize {
        self.participants.len()
    }

    /// Whether the participant is in this list.
    pub fn contains(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }
}

/// One round of game-option selection tied to a proposed time (Entity).
///
/// Created with an empty signup list per catalog option, mutated only by the
/// quorum engine while open, immutable once finalized. Callers outside the
/// domain crate receive snapshots (clones) and read through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    scheduled_time: String,
    signups: Vec<OptionSignups>,
    status: SessionStatus,
    winning_option: Option<OptionId>,
}

impl Session {
    /// Creates an open session with empty signups for every catalog option,
    /// in catalog order. Only the engine constructs sessions.
    pub(crate) fn new(
        id: SessionId,
        scheduled_time: impl Into<String>,
        catalog: &OptionCatalog,
    ) -> Self {
        Self {
            id,
            scheduled_time: scheduled_time.into(),
            signups: catalog
                .iter()
                .map(|o| OptionSignups::empty(o.id().clone()))
                .collect(),
            status: SessionStatus::Open,
            winning_option: None,
        }
    }

    /// The session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Free-text proposed time, exactly as entered by the creator.
    pub fn scheduled_time(&self) -> &str {
        &self.scheduled_time
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the session has been finalized.
    pub fn is_finalized(&self) -> bool {
        self.status == SessionStatus::Finalized
    }

    /// The winning option id, set exactly when finalized.
    pub fn winning_option(&self) -> Option<&OptionId> {
        self.winning_option.as_ref()
    }

    /// Signup lists for all options, in catalog order.
    pub fn signups(&self) -> &[OptionSignups] {
        &self.signups
    }

    /// Signup list for one option, if the option exists in this session.
    pub fn signups_for(&self, option: &OptionId) -> Option<&OptionSignups> {
        self.signups.iter().find(|s| s.option_id() == option)
    }

    /// Number of participants signed up under the given option.
    pub fn signup_count(&self, option: &OptionId) -> usize {
        self.signups_for(option).map_or(0, OptionSignups::count)
    }

    /// The option this participant has signed up for, if any.
    ///
    /// This is the cross-option exclusivity check: a participant holds at
    /// most one slot per session.
    pub fn participant_option(&self, participant: &ParticipantId) -> Option<&OptionId> {
        self.signups
            .iter()
            .find(|s| s.contains(participant))
            .map(OptionSignups::option_id)
    }

    /// Winning participants in signup order; empty while the session is open.
    pub fn winners(&self) -> &[ParticipantId] {
        self.winning_option
            .as_ref()
            .and_then(|o| self.signups_for(o))
            .map_or(&[], OptionSignups::participants)
    }

    /// Appends a participant under an option. The engine has already checked
    /// membership, so no duplicate can enter.
    pub(crate) fn record_signup(&mut self, option: &OptionId, participant: ParticipantId) {
        if let Some(signups) = self.signups.iter_mut().find(|s| &s.option_id == option) {
            signups.participants.push(participant);
        }
    }

    /// Marks the session finalized with the given winning option.
    pub(crate) fn finalize(&mut self, option: OptionId) {
        self.status = SessionStatus::Finalized;
        self.winning_option = Some(option);
    }

    /// Removes winning participants from every non-winning option.
    ///
    /// With the exclusivity check in force no overlap can exist, so this is a
    /// safety net that restates the invariant rather than repairing data.
    pub(crate) fn reconcile(&mut self) {
        let Some(winning) = self.winning_option.clone() else {
            return;
        };
        let winners: Vec<ParticipantId> = self
            .signups_for(&winning)
            .map(|s| s.participants.clone())
            .unwrap_or_default();
        for signups in &mut self.signups {
            if signups.option_id != winning {
                signups.participants.retain(|p| !winners.contains(p));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entities::{GameOption, OptionCatalog};

    fn catalog() -> OptionCatalog {
        OptionCatalog::new(vec![
            GameOption::new("1", "1000/100"),
            GameOption::new("2", "500/100"),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_session_is_open_and_empty() {
        let session = Session::new(SessionId::new("s1"), "Friday 19:00", &catalog());

        assert_eq!(session.status(), SessionStatus::Open);
        assert!(!session.is_finalized());
        assert!(session.winning_option().is_none());
        assert_eq!(session.signups().len(), 2);
        assert_eq!(session.signup_count(&OptionId::new("1")), 0);
        assert!(session.winners().is_empty());
    }

    #[test]
    fn test_record_and_query_signups() {
        let mut session = Session::new(SessionId::new("s1"), "t", &catalog());
        let option = OptionId::new("2");
        session.record_signup(&option, ParticipantId::new("alice"));
        session.record_signup(&option, ParticipantId::new("bob"));

        assert_eq!(session.signup_count(&option), 2);
        assert_eq!(
            session.participant_option(&ParticipantId::new("alice")),
            Some(&option)
        );
        assert_eq!(
            session.participant_option(&ParticipantId::new("carol")),
            None
        );
        let listed: Vec<&str> = session
            .signups_for(&option)
            .unwrap()
            .participants()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(listed, vec!["alice", "bob"]);
    }

    #[test]
    fn test_record_signup_unknown_option_is_noop() {
        let mut session = Session::new(SessionId::new("s1"), "t", &catalog());
        session.record_signup(&OptionId::new("9"), ParticipantId::new("alice"));
        assert!(
            session
                .participant_option(&ParticipantId::new("alice"))
                .is_none()
        );
    }

    #[test]
    fn test_finalize_sets_winner() {
        let mut session = Session::new(SessionId::new("s1"), "t", &catalog());
        let option = OptionId::new("1");
        session.record_signup(&option, ParticipantId::new("alice"));
        session.finalize(option.clone());

        assert!(session.is_finalized());
        assert_eq!(session.winning_option(), Some(&option));
        assert_eq!(session.winners().len(), 1);
    }

    #[test]
    fn test_reconcile_removes_winners_from_other_options() {
        let mut session = Session::new(SessionId::new("s1"), "t", &catalog());
        let winning = OptionId::new("1");
        let other = OptionId::new("2");

        // Force an overlap the engine would normally prevent, then check the
        // safety net cleans it up.
        session.record_signup(&winning, ParticipantId::new("alice"));
        session.record_signup(&other, ParticipantId::new("alice"));
        session.record_signup(&other, ParticipantId::new("bob"));
        session.finalize(winning);
        session.reconcile();

        let remaining: Vec<&str> = session
            .signups_for(&other)
            .unwrap()
            .participants()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(remaining, vec!["bob"]);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SessionStatus::Open.to_string(), "open");
        assert_eq!(SessionStatus::Finalized.to_string(), "finalized");
    }
}
