//! Typed inbound intents.
//!
//! The ingestion adapter reduces every platform event to one of these values
//! before the core sees it; the core never parses raw payloads. The wire form
//! of the option-picker button action lives here too, so the renderer that
//! encodes it and the adapter that decodes it share one definition.

use gameday_domain::{OptionId, ParticipantId, SessionId};
use serde::{Deserialize, Serialize};

/// What an inbound platform event asks the system to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open a new session scheduled at the given free-text time.
    OpenSession { scheduled_time: String },
    /// Record one participant's pick of one option in one session.
    SelectOption {
        session_id: SessionId,
        option_id: OptionId,
        participant_id: ParticipantId,
    },
}

/// Action payload carried by an option-picker button.
///
/// Serialized into the button's postback data when rendering, decoded back
/// when the platform delivers the tap.
///
/// # Example
///
/// ```
/// use gameday_application::SelectOptionAction;
/// use gameday_domain::{OptionId, SessionId};
///
/// let action = SelectOptionAction::new(SessionId::new("1705752000000-1"), OptionId::new("2"));
/// let decoded = SelectOptionAction::from_data(&action.to_data()).unwrap();
/// assert_eq!(decoded, action);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOptionAction {
    #[serde(rename = "session")]
    pub session_id: SessionId,
    #[serde(rename = "option")]
    pub option_id: OptionId,
}

impl SelectOptionAction {
    /// Creates an action for one session/option pair.
    pub fn new(session_id: SessionId, option_id: OptionId) -> Self {
        Self {
            session_id,
            option_id,
        }
    }

    /// Encodes the action as button postback data.
    pub fn to_data(&self) -> String {
        serde_json::to_string(self).expect("action payload serializes to JSON")
    }

    /// Decodes button postback data; `None` for anything malformed.
    pub fn from_data(data: &str) -> Option<Self> {
        serde_json::from_str(data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_roundtrip() {
        let action = SelectOptionAction::new(SessionId::new("s1"), OptionId::new("4"));
        let data = action.to_data();
        assert_eq!(SelectOptionAction::from_data(&data), Some(action));
    }

    #[test]
    fn test_action_wire_names() {
        let action = SelectOptionAction::new(SessionId::new("s1"), OptionId::new("4"));
        let value: serde_json::Value = serde_json::from_str(&action.to_data()).unwrap();
        assert_eq!(value["session"], "s1");
        assert_eq!(value["option"], "4");
    }

    #[test]
    fn test_malformed_data_rejected() {
        assert_eq!(SelectOptionAction::from_data("not json"), None);
        assert_eq!(SelectOptionAction::from_data("{\"session\": \"s1\"}"), None);
        assert_eq!(SelectOptionAction::from_data(""), None);
    }
}
