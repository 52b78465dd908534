//! Event ingestion: platform events in, typed intents out.
//!
//! This is the only place inbound payloads are interpreted. Each webhook
//! event either reduces to an [`InboundCommand`] or is dropped with a debug
//! log; nothing abnormal escalates, since unrecognized traffic is the normal
//! case on a chat platform.

use gameday_application::{Intent, SelectOptionAction};
use gameday_domain::ParticipantId;
use tracing::debug;

use super::protocol::{EventSource, WebhookEvent};

/// A typed intent plus the delivery context needed to answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundCommand {
    pub intent: Intent,
    /// One-shot token for replying to the triggering event.
    pub reply_token: Option<String>,
    /// Where a push (non-reply) message should go: the originating group,
    /// falling back to the sender.
    pub push_target: Option<String>,
}

/// Extracts intents from webhook events.
pub struct EventIngestor {
    command_prefix: String,
}

impl EventIngestor {
    /// Creates an ingestor recognizing the given create-session prefix.
    pub fn new(command_prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: command_prefix.into(),
        }
    }

    /// Reduces one event to a command, or `None` when the event carries no
    /// intent for this service.
    pub fn extract(&self, event: &WebhookEvent) -> Option<InboundCommand> {
        match event.kind.as_str() {
            "message" => self.extract_open_session(event),
            "postback" => self.extract_select_option(event),
            kind => {
                debug!(kind, "unhandled event kind");
                None
            }
        }
    }

    /// `message` events: a text starting with the command prefix opens a
    /// session; everything else is ordinary chatter.
    fn extract_open_session(&self, event: &WebhookEvent) -> Option<InboundCommand> {
        let message = event.message.as_ref()?;
        if message.kind != "text" {
            return None;
        }
        let text = message.text.as_deref()?.trim();
        let scheduled_time = text.strip_prefix(self.command_prefix.as_str())?.trim();
        if scheduled_time.is_empty() {
            debug!("create-session command without a scheduled time");
            return None;
        }

        Some(InboundCommand {
            intent: Intent::OpenSession {
                scheduled_time: scheduled_time.to_string(),
            },
            reply_token: event.reply_token.clone(),
            push_target: push_target(event.source.as_ref()),
        })
    }

    /// `postback` events: a picker button tap carrying a select-option
    /// action.
    fn extract_select_option(&self, event: &WebhookEvent) -> Option<InboundCommand> {
        let postback = event.postback.as_ref()?;
        let Some(action) = SelectOptionAction::from_data(&postback.data) else {
            debug!(data = %postback.data, "postback data is not a select-option action");
            return None;
        };

        // Participant identity is always the per-member user id. The group id
        // is never a stand-in: an unattributable tap is dropped instead.
        let Some(user_id) = event.source.as_ref().and_then(|s| s.user_id.clone()) else {
            debug!("postback event without a user identity, dropping");
            return None;
        };

        Some(InboundCommand {
            intent: Intent::SelectOption {
                session_id: action.session_id,
                option_id: action.option_id,
                participant_id: ParticipantId::new(user_id),
            },
            reply_token: event.reply_token.clone(),
            push_target: push_target(event.source.as_ref()),
        })
    }
}

fn push_target(source: Option<&EventSource>) -> Option<String> {
    let source = source?;
    source.group_id.clone().or_else(|| source.user_id.clone())
}
