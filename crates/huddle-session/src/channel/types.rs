//! Registration, delivery, and runtime capability types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Registration & Delivery
// ---------------------------------------------------------------------------

/// Request that events of `event_type` be delivered to `handler` on `sink`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallbackRegistration {
    pub event_type: String,
    pub sink: String,
    pub handler: String,
}

impl CallbackRegistration {
    pub fn new(
        event_type: impl Into<String>,
        sink: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            sink: sink.into(),
            handler: handler.into(),
        }
    }
}

/// One callback invocation from the runtime: a handler on a sink, called
/// with a text payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub sink: String,
    pub handler: String,
    pub payload: String,
}

impl Delivery {
    pub fn new(
        sink: impl Into<String>,
        handler: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            sink: sink.into(),
            handler: handler.into(),
            payload: payload.into(),
        }
    }

    /// Parse a delivery from a JSON envelope
    /// (`{"sink": ..., "handler": ..., "payload": ...}`).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

// ---------------------------------------------------------------------------
// Runtime capabilities
// ---------------------------------------------------------------------------

/// Callback registration surface of the external runtime.
///
/// Registration is fire-and-forget: the runtime gives no acknowledgement,
/// so a registration it silently drops is not observable from here.
pub trait EventChannel: Send + Sync {
    fn register_callback(&self, registration: &CallbackRegistration);
}

/// Commands issued to the external session. Both are fire-and-forget and
/// `disconnect` must be safe to call on a session that never connected.
pub trait SessionCommands: Send + Sync {
    fn connect(&self, room_id: &str, user_id: &str);
    fn disconnect(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_from_json_envelope() {
        let raw = r#"{"sink":"HuddleBridge","handler":"OnPeerJoined","payload":"7"}"#;
        let delivery = Delivery::from_json(raw).unwrap();
        assert_eq!(delivery, Delivery::new("HuddleBridge", "OnPeerJoined", "7"));
    }

    #[test]
    fn delivery_from_json_keeps_nested_record_text() {
        let raw = r#"{"sink":"s","handler":"OnMediaActivity","payload":"{\"peerId\":7,\"active\":true}"}"#;
        let delivery = Delivery::from_json(raw).unwrap();
        assert_eq!(delivery.payload, r#"{"peerId":7,"active":true}"#);
    }

    #[test]
    fn delivery_from_json_rejects_garbage() {
        assert!(Delivery::from_json("").is_none());
        assert!(Delivery::from_json("{").is_none());
        assert!(Delivery::from_json(r#"{"sink":"s","handler":"h"}"#).is_none());
        assert!(Delivery::from_json(r#"{"sink":"s","handler":"h","payload":7}"#).is_none());
    }
}
