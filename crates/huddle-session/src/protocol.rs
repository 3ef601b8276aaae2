//! Protocol types for callbacks raised by the external session runtime.
//!
//! The runtime speaks in strings: event names, a textual success flag, peer
//! ids rendered as decimal text, and a JSON record for voice activity.
//! Everything is parsed here, at the boundary, into [`EventKind`]; nothing
//! past this module looks at raw payloads.

use huddle_common::{PeerId, ProtocolError};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// Event and handler names
// ---------------------------------------------------------------------------

/// Event type names used by the external runtime. Part of the wire
/// contract; never rename.
pub mod events {
    pub const CONNECTED: &str = "Connected";
    pub const CONNECTION_STATE_CHANGED: &str = "ConnectionStateChanged";
    pub const PEER_JOINED: &str = "PeerJoined";
    pub const PEER_LEFT: &str = "PeerLeft";
    pub const MEDIA_ACTIVITY: &str = "MediaActivity";
}

/// Handler names the runtime invokes on our sink.
pub mod handlers {
    pub const ON_CONNECTED: &str = "OnConnected";
    pub const ON_CONNECTION_STATE_CHANGED: &str = "OnConnectionStateChanged";
    pub const ON_PEER_JOINED: &str = "OnPeerJoined";
    pub const ON_PEER_LEFT: &str = "OnPeerLeft";
    pub const ON_MEDIA_ACTIVITY: &str = "OnMediaActivity";
}

/// Every (event type, handler) pair registered before a connect.
pub const LIFECYCLE_CALLBACKS: &[(&str, &str)] = &[
    (events::CONNECTED, handlers::ON_CONNECTED),
    (
        events::CONNECTION_STATE_CHANGED,
        handlers::ON_CONNECTION_STATE_CHANGED,
    ),
    (events::PEER_JOINED, handlers::ON_PEER_JOINED),
    (events::PEER_LEFT, handlers::ON_PEER_LEFT),
    (events::MEDIA_ACTIVITY, handlers::ON_MEDIA_ACTIVITY),
];

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Record carried by `MediaActivity`, e.g. `{"peerId":7,"active":true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaActivityPayload {
    pub peer_id: PeerId,
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Typed events
// ---------------------------------------------------------------------------

/// A callback from the runtime, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Connected(bool),
    ConnectionStateChanged(String),
    PeerJoined(PeerId),
    PeerLeft(PeerId),
    MediaActivity(PeerId, bool),
}

impl EventKind {
    /// Parse a raw payload for the given event type.
    ///
    /// `Connected` never fails: anything other than a success flag is
    /// read as failure.
    pub fn parse(event_type: &str, payload: &str) -> Result<Self, ProtocolError> {
        match event_type {
            events::CONNECTED => Ok(Self::Connected(parse_success_flag(payload))),
            events::CONNECTION_STATE_CHANGED => {
                Ok(Self::ConnectionStateChanged(payload.to_string()))
            }
            events::PEER_JOINED => parse_peer_id(payload).map(Self::PeerJoined),
            events::PEER_LEFT => parse_peer_id(payload).map(Self::PeerLeft),
            events::MEDIA_ACTIVITY => {
                let p: MediaActivityPayload = serde_json::from_str(payload)
                    .map_err(|e| ProtocolError::InvalidActivity(e.to_string()))?;
                Ok(Self::MediaActivity(p.peer_id, p.active))
            }
            other => Err(ProtocolError::UnknownEvent(other.to_string())),
        }
    }

    /// Whether this event concerns the peer table rather than the
    /// connection itself.
    pub fn is_peer_event(&self) -> bool {
        matches!(
            self,
            Self::PeerJoined(_) | Self::PeerLeft(_) | Self::MediaActivity(..)
        )
    }

    /// The wire name of this event's type.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Connected(_) => events::CONNECTED,
            Self::ConnectionStateChanged(_) => events::CONNECTION_STATE_CHANGED,
            Self::PeerJoined(_) => events::PEER_JOINED,
            Self::PeerLeft(_) => events::PEER_LEFT,
            Self::MediaActivity(..) => events::MEDIA_ACTIVITY,
        }
    }
}

/// Read the textual success flag of a `Connected` callback. Only the exact
/// text `true` is success; anything else fails closed.
fn parse_success_flag(payload: &str) -> bool {
    match payload {
        "true" => true,
        "false" => false,
        _ => {
            warn!(payload = %payload, "Malformed Connected payload, treating as failure");
            false
        }
    }
}

fn parse_peer_id(payload: &str) -> Result<PeerId, ProtocolError> {
    payload
        .trim()
        .parse::<i64>()
        .map(PeerId)
        .map_err(|_| ProtocolError::InvalidPeerId(payload.to_string()))
}
