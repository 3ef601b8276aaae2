//! Presence and voice-activity state for remote peers.
//!
//! Entries exist only between a peer's join and leave. Activity for an
//! absent peer is dropped rather than creating an entry, and a leave for an
//! absent peer is a no-op, so events that race a join, a leave, or a local
//! clear never resurrect anyone.

use std::collections::HashMap;

use huddle_common::PeerId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One remote peer as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerEntry {
    pub peer_id: PeerId,
    /// Whether the peer is currently sending voice/media.
    pub is_sending: bool,
}

/// Peer id to entry mapping. Mutators return whether the table changed.
#[derive(Debug, Default)]
pub struct PeerTable {
    peers: HashMap<PeerId, PeerEntry>,
}

impl PeerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a joined peer. A repeated join overwrites the entry and
    /// resets its activity.
    pub fn on_peer_joined(&mut self, peer_id: PeerId) -> bool {
        let entry = PeerEntry {
            peer_id,
            is_sending: false,
        };
        self.peers.insert(peer_id, entry) != Some(entry)
    }

    pub fn on_peer_left(&mut self, peer_id: PeerId) -> bool {
        if self.peers.remove(&peer_id).is_some() {
            true
        } else {
            debug!(%peer_id, "Leave for unknown peer ignored");
            false
        }
    }

    /// Update a present peer's activity flag. Never creates an entry.
    pub fn on_media_activity(&mut self, peer_id: PeerId, active: bool) -> bool {
        match self.peers.get_mut(&peer_id) {
            Some(entry) => {
                let changed = entry.is_sending != active;
                entry.is_sending = active;
                changed
            }
            None => {
                debug!(%peer_id, active, "Activity for unknown peer dropped");
                false
            }
        }
    }

    /// Point-in-time copy of every entry, ordered by peer id.
    pub fn snapshot(&self) -> Vec<PeerEntry> {
        let mut entries: Vec<PeerEntry> = self.peers.values().copied().collect();
        entries.sort_by_key(|e| e.peer_id);
        entries
    }

    /// Remove everyone. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_peers = !self.peers.is_empty();
        self.peers.clear();
        had_peers
    }

    pub fn get(&self, peer_id: PeerId) -> Option<&PeerEntry> {
        self.peers.get(&peer_id)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
