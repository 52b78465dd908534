//! Option picker rendering.
//!
//! One flex bubble: a title, the proposed time, and a postback button per
//! catalog option. Buttons carry the typed select-option action and show the
//! option's live signup count, so re-rendering the picker after each signup
//! doubles as a progress display.

use gameday_application::{OutboundMessage, SelectOptionAction};
use gameday_domain::{OptionCatalog, Session};
use serde_json::{Value, json};

const BUTTON_COLOR: &str = "#1DB446";

/// Renders the interactive option picker for an open session.
pub fn option_picker(session: &Session, catalog: &OptionCatalog) -> OutboundMessage {
    let mut contents = vec![
        json!({
            "type": "text",
            "text": "New game session",
            "weight": "bold",
            "size": "lg",
        }),
        json!({
            "type": "text",
            "text": format!("Time: {}", session.scheduled_time()),
            "margin": "md",
        }),
    ];
    contents.extend(catalog.iter().map(|option| {
        let action = SelectOptionAction::new(session.id().clone(), option.id().clone());
        json!({
            "type": "button",
            "style": "primary",
            "color": BUTTON_COLOR,
            "margin": "sm",
            "action": {
                "type": "postback",
                "label": button_label(option.label(), session.signup_count(option.id())),
                "data": action.to_data(),
            },
        })
    }));

    let bubble = json!({
        "type": "bubble",
        "body": {
            "type": "box",
            "layout": "vertical",
            "contents": Value::Array(contents),
        },
    });

    OutboundMessage::flex(
        format!("Game session {}", session.scheduled_time()),
        bubble,
    )
}

fn button_label(label: &str, count: usize) -> String {
    if count == 0 {
        format!("{label} +1")
    } else {
        format!("{label} +1 ({count})")
    }
}
