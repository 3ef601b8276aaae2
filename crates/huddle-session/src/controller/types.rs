//! Configuration, state, and control types for the session controller.

use huddle_common::{AttemptId, SessionPhase};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a session controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Room handed to the external session on connect.
    pub room_id: String,
    /// User identity handed to the external session on connect.
    pub user_id: String,
    /// Sink identity callbacks are registered against.
    pub sink_name: String,
    /// Capacity of the presentation event bus.
    pub event_bus_capacity: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            room_id: "WebGLTest".into(),
            user_id: "Test User".into(),
            sink_name: "HuddleBridge".into(),
            event_bus_capacity: 64,
        }
    }
}

// ---------------------------------------------------------------------------
// Control affordance
// ---------------------------------------------------------------------------

/// The single connect/disconnect button the presentation layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectControl {
    Connect,
    Connecting,
    Disconnect,
    Disconnecting,
    /// Shown after a failed attempt.
    Retry,
    /// Shown after a user disconnect.
    Reconnect,
}

impl ConnectControl {
    pub fn label(self) -> &'static str {
        match self {
            ConnectControl::Connect => "Connect",
            ConnectControl::Connecting => "Connecting...",
            ConnectControl::Disconnect => "Disconnect",
            ConnectControl::Disconnecting => "Disconnecting...",
            ConnectControl::Retry => "Try to Reconnect",
            ConnectControl::Reconnect => "Reconnect",
        }
    }

    pub fn is_enabled(self) -> bool {
        !matches!(
            self,
            ConnectControl::Connecting | ConnectControl::Disconnecting
        )
    }

    /// Whether pressing this control starts a connect attempt.
    pub fn connects(self) -> bool {
        matches!(
            self,
            ConnectControl::Connect | ConnectControl::Retry | ConnectControl::Reconnect
        )
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Everything the presentation layer needs about the local connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Last label from `ConnectionStateChanged`.
    pub status: Option<String>,
    /// Id of the current or most recent connect attempt.
    pub attempt: Option<AttemptId>,
    /// Set once the user has disconnected; turns "Connect" into "Reconnect".
    pub rearmed: bool,
}

impl SessionState {
    pub fn control(&self) -> ConnectControl {
        match self.phase {
            SessionPhase::Idle if self.rearmed => ConnectControl::Reconnect,
            SessionPhase::Idle => ConnectControl::Connect,
            SessionPhase::Connecting => ConnectControl::Connecting,
            SessionPhase::Connected => ConnectControl::Disconnect,
            SessionPhase::Failed => ConnectControl::Retry,
            SessionPhase::Disconnecting => ConnectControl::Disconnecting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_follows_phase() {
        let mut state = SessionState::default();
        assert_eq!(state.control(), ConnectControl::Connect);

        state.phase = SessionPhase::Connecting;
        assert_eq!(state.control(), ConnectControl::Connecting);

        state.phase = SessionPhase::Connected;
        assert_eq!(state.control(), ConnectControl::Disconnect);

        state.phase = SessionPhase::Failed;
        assert_eq!(state.control(), ConnectControl::Retry);

        state.phase = SessionPhase::Idle;
        state.rearmed = true;
        assert_eq!(state.control(), ConnectControl::Reconnect);
    }

    #[test]
    fn transitional_controls_are_disabled() {
        assert!(!ConnectControl::Connecting.is_enabled());
        assert!(!ConnectControl::Disconnecting.is_enabled());
        assert!(ConnectControl::Retry.is_enabled());
        assert!(ConnectControl::Disconnect.is_enabled());
    }

    #[test]
    fn labels() {
        assert_eq!(ConnectControl::Connecting.label(), "Connecting...");
        assert_eq!(ConnectControl::Retry.label(), "Try to Reconnect");
        assert_eq!(ConnectControl::Reconnect.label(), "Reconnect");
    }

    #[test]
    fn only_idle_and_failed_controls_connect() {
        assert!(ConnectControl::Connect.connects());
        assert!(ConnectControl::Retry.connects());
        assert!(ConnectControl::Reconnect.connects());
        assert!(!ConnectControl::Disconnect.connects());
        assert!(!ConnectControl::Connecting.connects());
    }
}
