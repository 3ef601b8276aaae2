//! Demo scripts: one JSON step per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! {"action":"press"}
//! {"emit":"Connected","payload":"true"}
//! {"emit":"PeerJoined","payload":"7"}
//! {"deliver":{"sink":"HuddleBridge","handler":"OnPeerLeft","payload":"7"}}
//! ```

use huddle_session::Delivery;
use serde::Deserialize;
use tracing::warn;

/// Something the user does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Press,
    Connect,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Action(Action),
    /// Raise an event through the loopback runtime, which fans it out to
    /// every registration for that event type.
    Emit { event_type: String, payload: String },
    /// Hand a raw delivery envelope straight to the bridge.
    Deliver(Delivery),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStep {
    Action {
        action: Action,
    },
    Emit {
        emit: String,
        #[serde(default)]
        payload: String,
    },
    Deliver {
        deliver: serde_json::Value,
    },
}

/// Parse a whole script. Malformed lines are logged and skipped.
pub fn parse_script(text: &str) -> Vec<Step> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Option<Step> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let raw: RawStep = match serde_json::from_str(line) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(line = line_no, error = %e, "Skipping malformed script line");
            return None;
        }
    };

    match raw {
        RawStep::Action { action } => Some(Step::Action(action)),
        RawStep::Emit { emit, payload } => Some(Step::Emit {
            event_type: emit,
            payload,
        }),
        RawStep::Deliver { deliver } => match Delivery::from_json(&deliver.to_string()) {
            Some(delivery) => Some(Step::Deliver(delivery)),
            None => {
                warn!(line = line_no, "Skipping malformed delivery envelope");
                None
            }
        },
    }
}
