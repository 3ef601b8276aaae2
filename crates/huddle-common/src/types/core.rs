use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the external session assigns to a remote peer.
///
/// Opaque: unique per peer while it is present, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(pub i64);

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of the local connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Connecting,
    Connected,
    Failed,
    Disconnecting,
}

impl SessionPhase {
    /// Whether a connect request is accepted in this phase.
    pub fn accepts_connect(self) -> bool {
        matches!(self, SessionPhase::Idle | SessionPhase::Failed)
    }

    /// Whether peer events from the external session are live in this phase.
    pub fn is_active(self) -> bool {
        matches!(self, SessionPhase::Connecting | SessionPhase::Connected)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Connecting => "connecting",
            SessionPhase::Connected => "connected",
            SessionPhase::Failed => "failed",
            SessionPhase::Disconnecting => "disconnecting",
        };
        f.write_str(name)
    }
}
