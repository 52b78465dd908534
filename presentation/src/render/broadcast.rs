//! Finalization broadcast rendering.

use gameday_application::OutboundMessage;
use gameday_domain::{OptionCatalog, Session};

/// Renders the plain-text broadcast for a finalized session: the winning
/// option's label and the locked-in players in signup order.
pub fn finalized_broadcast(session: &Session, catalog: &OptionCatalog) -> OutboundMessage {
    let label = session
        .winning_option()
        .map(|id| {
            catalog
                .get(id)
                .map_or_else(|| id.to_string(), |o| o.label().to_string())
        })
        .unwrap_or_default();

    let players = session
        .winners()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    OutboundMessage::text(format!(
        "🎉 Game on! {label} is locked in.\nTime: {}\nPlayers:\n{players}",
        session.scheduled_time(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameday_domain::{
        GameOption, OptionId, ParticipantId, QuorumEngine, QuorumPolicy, SessionId,
    };
    use std::sync::Arc;

    #[test]
    fn test_broadcast_lists_players_in_signup_order() {
        let catalog = OptionCatalog::new(vec![
            GameOption::new("1", "1000/100"),
            GameOption::new("2", "500/100"),
        ])
        .unwrap();
        let engine = QuorumEngine::new(Arc::new(catalog), QuorumPolicy::new(2).unwrap());
        let mut session = engine.create_session(SessionId::new("s1"), "Friday 19:00");
        engine.attempt_signup(&mut session, &ParticipantId::new("alice"), &OptionId::new("2"));
        engine.attempt_signup(&mut session, &ParticipantId::new("bob"), &OptionId::new("2"));
        assert!(session.is_finalized());

        let OutboundMessage::Text(text) = finalized_broadcast(&session, engine.catalog()) else {
            panic!("expected text");
        };

        assert!(text.contains("500/100 is locked in"));
        assert!(text.contains("Time: Friday 19:00"));
        assert!(text.ends_with("Players:\nalice\nbob"));
    }
}
