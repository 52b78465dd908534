//! Webhook route and event dispatch.
//!
//! The handler verifies the platform signature against the raw body, parses
//! the event batch, and runs each event through ingestion → use case →
//! rendering → delivery. Verified requests always get 200 regardless of
//! per-event outcome, so the platform does not re-deliver on processing
//! hiccups; engine state is committed before any delivery is attempted, and a
//! failed delivery is logged, never retried against the engine.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tracing::warn;

use gameday_application::{
    Intent, MessengerGateway, OpenSessionInput, OpenSessionUseCase, RecordSignupInput,
    RecordSignupUseCase,
};
use gameday_domain::{OptionCatalog, SignupResult};
use gameday_infrastructure::{
    EventIngestor, InMemorySessionStore, LineClient, WebhookEnvelope, signature,
};
use gameday_presentation::{finalized_broadcast, option_picker};

/// Shared application state.
pub struct AppState<G: MessengerGateway = LineClient> {
    pub store: Arc<InMemorySessionStore>,
    pub gateway: Arc<G>,
    pub ingestor: Arc<EventIngestor>,
    pub catalog: Arc<OptionCatalog>,
    pub channel_secret: String,
}

impl<G: MessengerGateway> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            gateway: Arc::clone(&self.gateway),
            ingestor: Arc::clone(&self.ingestor),
            catalog: Arc::clone(&self.catalog),
            channel_secret: self.channel_secret.clone(),
        }
    }
}

/// Build the axum router for the webhook server.
pub fn router<G: MessengerGateway + 'static>(state: AppState<G>) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook::<G>))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Handle one webhook delivery: verify, parse, dispatch every event.
async fn handle_webhook<G: MessengerGateway>(
    State(state): State<AppState<G>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let provided = headers
        .get(signature::SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());
    let Some(provided) = provided else {
        warn!("webhook request without signature header");
        return StatusCode::UNAUTHORIZED;
    };
    if !signature::verify(&state.channel_secret, &body, provided) {
        warn!("webhook signature verification failed");
        return StatusCode::UNAUTHORIZED;
    }

    let envelope: WebhookEnvelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "malformed webhook body");
            return StatusCode::BAD_REQUEST;
        }
    };

    for event in &envelope.events {
        if let Some(command) = state.ingestor.extract(event) {
            dispatch(&state, command).await;
        }
    }

    StatusCode::OK
}

/// Run one command through the core and deliver whatever it produced.
async fn dispatch<G: MessengerGateway>(
    state: &AppState<G>,
    command: gameday_infrastructure::InboundCommand,
) {
    match command.intent {
        Intent::OpenSession { scheduled_time } => {
            let session = OpenSessionUseCase::new(Arc::clone(&state.store))
                .execute(OpenSessionInput::new(scheduled_time));

            let picker = option_picker(&session, &state.catalog);
            if let Some(token) = command.reply_token.as_deref() {
                log_delivery(state.gateway.reply(token, &[picker]).await);
            }
        }
        Intent::SelectOption {
            session_id,
            option_id,
            participant_id,
        } => {
            let result = RecordSignupUseCase::new(Arc::clone(&state.store)).execute(
                RecordSignupInput {
                    session_id,
                    participant_id,
                    option_id,
                },
            );

            match result {
                // Expected redelivery/late traffic; no notification.
                SignupResult::Ignored { .. } => {}
                SignupResult::Updated(session) => {
                    let picker = option_picker(&session, &state.catalog);
                    if let Some(token) = command.reply_token.as_deref() {
                        log_delivery(state.gateway.reply(token, &[picker]).await);
                    }
                }
                SignupResult::Finalized(session) => {
                    let broadcast = finalized_broadcast(&session, &state.catalog);
                    if let Some(target) = command.push_target.as_deref() {
                        log_delivery(state.gateway.push(target, &[broadcast]).await);
                    } else if let Some(token) = command.reply_token.as_deref() {
                        log_delivery(state.gateway.reply(token, &[broadcast]).await);
                    }
                }
            }
        }
    }
}

/// Delivery failures never roll back the committed engine transition.
fn log_delivery(result: Result<(), gameday_application::MessengerError>) {
    if let Err(e) = result {
        warn!(error = %e, "notification delivery failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gameday_application::{MessengerError, OutboundMessage, SelectOptionAction, SessionStore};
    use gameday_domain::{GameOption, QuorumEngine, QuorumPolicy};
    use gameday_infrastructure::signature::sign;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    enum Delivery {
        Reply { token: String, messages: Vec<OutboundMessage> },
        Push { to: String, messages: Vec<OutboundMessage> },
    }

    #[derive(Default)]
    struct FakeGateway {
        deliveries: Mutex<Vec<Delivery>>,
    }

    #[async_trait]
    impl MessengerGateway for FakeGateway {
        async fn reply(
            &self,
            reply_token: &str,
            messages: &[OutboundMessage],
        ) -> Result<(), MessengerError> {
            self.deliveries.lock().unwrap().push(Delivery::Reply {
                token: reply_token.to_string(),
                messages: messages.to_vec(),
            });
            Ok(())
        }

        async fn push(
            &self,
            recipient: &str,
            messages: &[OutboundMessage],
        ) -> Result<(), MessengerError> {
            self.deliveries.lock().unwrap().push(Delivery::Push {
                to: recipient.to_string(),
                messages: messages.to_vec(),
            });
            Ok(())
        }
    }

    const SECRET: &str = "test-channel-secret";

    fn state() -> AppState<FakeGateway> {
        let catalog = Arc::new(
            OptionCatalog::new(vec![
                GameOption::new("1", "1000/100"),
                GameOption::new("2", "500/100"),
            ])
            .unwrap(),
        );
        let engine = QuorumEngine::new(Arc::clone(&catalog), QuorumPolicy::new(2).unwrap());
        AppState {
            store: Arc::new(InMemorySessionStore::new(engine)),
            gateway: Arc::new(FakeGateway::default()),
            ingestor: Arc::new(EventIngestor::new("/open")),
            catalog,
            channel_secret: SECRET.to_string(),
        }
    }

    fn signed_headers(body: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            signature::SIGNATURE_HEADER,
            sign(SECRET, body.as_bytes()).parse().unwrap(),
        );
        headers
    }

    fn open_event(time: &str) -> String {
        format!(
            r#"{{"events":[{{
                "type": "message",
                "replyToken": "rt-open",
                "source": {{"type": "group", "groupId": "G1", "userId": "U0"}},
                "message": {{"type": "text", "text": "/open {time}"}}
            }}]}}"#
        )
    }

    fn select_event(session_id: &str, option: &str, user: &str) -> String {
        format!(
            r#"{{"events":[{{
                "type": "postback",
                "replyToken": "rt-{user}",
                "source": {{"type": "group", "groupId": "G1", "userId": "{user}"}},
                "postback": {{"data": "{{\"session\":\"{session_id}\",\"option\":\"{option}\"}}"}}
            }}]}}"#
        )
    }

    #[tokio::test]
    async fn test_rejects_missing_or_bad_signature() {
        let state = state();
        let body = open_event("Friday");

        let status =
            handle_webhook(State(state.clone()), HeaderMap::new(), Bytes::from(body.clone()))
                .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let mut headers = HeaderMap::new();
        headers.insert(signature::SIGNATURE_HEADER, "bogus".parse().unwrap());
        let status = handle_webhook(State(state.clone()), headers, Bytes::from(body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        assert!(state.gateway.deliveries.lock().unwrap().is_empty());
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_malformed_body() {
        let state = state();
        let body = "not json";
        let status = handle_webhook(
            State(state.clone()),
            signed_headers(body),
            Bytes::from(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_open_command_replies_with_picker() {
        let state = state();
        let body = open_event("Friday 19:00");
        let status = handle_webhook(
            State(state.clone()),
            signed_headers(&body),
            Bytes::from(body),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.store.len(), 1);

        let deliveries = state.gateway.deliveries.lock().unwrap();
        let Delivery::Reply { token, messages } = &deliveries[0] else {
            panic!("expected reply");
        };
        assert_eq!(token, "rt-open");
        assert!(matches!(messages[0], OutboundMessage::Flex { .. }));
    }

    #[tokio::test]
    async fn test_quorum_flow_updates_then_broadcasts() {
        let state = state();

        let body = open_event("Friday 19:00");
        handle_webhook(
            State(state.clone()),
            signed_headers(&body),
            Bytes::from(body),
        )
        .await;

        // The session id round-trips through the picker's button data, the
        // same way a real client gets it.
        let session_id = {
            let deliveries = state.gateway.deliveries.lock().unwrap();
            let Delivery::Reply { messages, .. } = &deliveries[0] else {
                panic!("expected reply");
            };
            let OutboundMessage::Flex { contents, .. } = &messages[0] else {
                panic!("expected flex");
            };
            let data = contents["body"]["contents"][2]["action"]["data"]
                .as_str()
                .unwrap();
            SelectOptionAction::from_data(data).unwrap().session_id
        };

        // First signup updates, second finalizes (threshold 2), a redelivered
        // tap after finalization stays silent.
        for user in ["U1", "U2", "U2"] {
            let body = select_event(session_id.as_str(), "2", user);
            let status = handle_webhook(
                State(state.clone()),
                signed_headers(&body),
                Bytes::from(body),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let deliveries = state.gateway.deliveries.lock().unwrap();
        // open reply + updated reply + finalized push; the post-finalization
        // tap produced nothing.
        assert_eq!(deliveries.len(), 3);
        assert!(matches!(&deliveries[1], Delivery::Reply { token, .. } if token == "rt-U1"));
        let Delivery::Push { to, messages } = &deliveries[2] else {
            panic!("expected push");
        };
        assert_eq!(to, "G1");
        let OutboundMessage::Text(text) = &messages[0] else {
            panic!("expected text broadcast");
        };
        assert!(text.contains("500/100"));
        assert!(text.contains("U1"));
        assert!(text.contains("U2"));

        let stored = state.store.find(&session_id).unwrap();
        assert!(stored.is_finalized());
    }
}
