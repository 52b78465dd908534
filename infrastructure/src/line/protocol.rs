//! Webhook payload types for the LINE Messaging API.
//!
//! Only the fields this service reads are modeled; everything else in the
//! payload is ignored by serde. Event kinds we do not handle (joins, leaves,
//! stickers, ...) still deserialize, so one unexpected event never poisons a
//! whole delivery batch.

use serde::Deserialize;

/// Top-level webhook request body: a batch of events.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEnvelope {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One platform event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Event kind: `message`, `postback`, or anything else (ignored).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Present on `message` events.
    #[serde(default)]
    pub message: Option<MessagePayload>,
    /// Present on `postback` events (button taps).
    #[serde(default)]
    pub postback: Option<PostbackPayload>,
    /// Who sent the event and from which chat context.
    #[serde(default)]
    pub source: Option<EventSource>,
    /// One-shot token for replying to this event.
    #[serde(default)]
    pub reply_token: Option<String>,
}

/// Message content; only text messages carry an intent.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Postback content: the opaque data a picker button carried.
#[derive(Debug, Clone, Deserialize)]
pub struct PostbackPayload {
    pub data: String,
}

/// Sender metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    /// Context kind: `user`, `group` or `room`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Per-member identity; present whenever the platform can attribute the
    /// sender.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Group identity, present in group contexts.
    #[serde(default)]
    pub group_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_message_event() {
        let body = r#"{
            "destination": "Uabc",
            "events": [{
                "type": "message",
                "replyToken": "rt-1",
                "source": {"type": "group", "groupId": "G1", "userId": "U1"},
                "message": {"id": "m1", "type": "text", "text": "/open Friday 19:00"}
            }]
        }"#;
        let envelope: WebhookEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.events.len(), 1);

        let event = &envelope.events[0];
        assert_eq!(event.kind, "message");
        assert_eq!(event.reply_token.as_deref(), Some("rt-1"));
        assert_eq!(
            event.message.as_ref().unwrap().text.as_deref(),
            Some("/open Friday 19:00")
        );
        let source = event.source.as_ref().unwrap();
        assert_eq!(source.kind, "group");
        assert_eq!(source.user_id.as_deref(), Some("U1"));
        assert_eq!(source.group_id.as_deref(), Some("G1"));
    }

    #[test]
    fn test_parse_postback_event() {
        let body = r#"{
            "events": [{
                "type": "postback",
                "replyToken": "rt-2",
                "source": {"type": "user", "userId": "U2"},
                "postback": {"data": "{\"session\":\"s1\",\"option\":\"2\"}"}
            }]
        }"#;
        let envelope: WebhookEnvelope = serde_json::from_str(body).unwrap();
        let event = &envelope.events[0];
        assert_eq!(event.kind, "postback");
        assert_eq!(
            event.postback.as_ref().unwrap().data,
            "{\"session\":\"s1\",\"option\":\"2\"}"
        );
        assert!(event.source.as_ref().unwrap().group_id.is_none());
    }

    #[test]
    fn test_unhandled_event_kinds_still_parse() {
        let body = r#"{
            "events": [
                {"type": "join", "source": {"type": "group", "groupId": "G1"}},
                {"type": "message", "message": {"id": "m", "type": "sticker"}}
            ]
        }"#;
        let envelope: WebhookEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.events.len(), 2);
        assert_eq!(envelope.events[0].kind, "join");
        assert!(envelope.events[1].message.as_ref().unwrap().text.is_none());
    }

    #[test]
    fn test_empty_body_parses() {
        let envelope: WebhookEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.events.is_empty());
    }
}
