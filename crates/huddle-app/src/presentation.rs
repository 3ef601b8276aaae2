//! Plain-text rendering of the session view.

use std::fmt;

use huddle_session::{ConnectControl, PeerEntry, SessionState};

/// What a user of the session sees: a status line, the connect control,
/// and the peer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub status: String,
    pub control: ConnectControl,
    pub peers: Vec<PeerEntry>,
}

impl View {
    pub fn new(state: &SessionState, peers: Vec<PeerEntry>) -> Self {
        // Before the runtime reports a label, fall back to the phase name.
        let status = state
            .status
            .clone()
            .unwrap_or_else(|| state.phase.to_string());
        Self {
            status,
            control: state.control(),
            peers,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connection State: {}", self.status)?;
        write!(f, "[{}]", self.control.label())?;
        if !self.control.is_enabled() {
            write!(f, " (disabled)")?;
        }
        writeln!(f)?;
        for peer in &self.peers {
            writeln!(
                f,
                "Peer {} connected, is sending: {}",
                peer.peer_id, peer.is_sending
            )?;
        }
        Ok(())
    }
}
