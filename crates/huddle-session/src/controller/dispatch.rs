//! Runtime-driven transitions: inbound deliveries and typed events.

use huddle_common::{Event, SessionPhase};
use tracing::{debug, info, warn};

use crate::channel::Delivery;
use crate::protocol::EventKind;

use super::SessionController;

impl SessionController {
    /// Handle one callback from the runtime.
    ///
    /// Deliveries for another sink or an unregistered handler, and payloads
    /// that do not parse, are logged and dropped.
    pub fn deliver(&mut self, delivery: &Delivery) {
        let Some(event_type) = self.registry.resolve(&delivery.sink, &delivery.handler) else {
            warn!(
                sink = %delivery.sink,
                handler = %delivery.handler,
                "Delivery for unregistered handler dropped"
            );
            return;
        };

        match EventKind::parse(event_type, &delivery.payload) {
            Ok(event) => self.apply(event),
            Err(e) => {
                warn!(
                    handler = %delivery.handler,
                    error = %e,
                    "Malformed payload dropped"
                );
            }
        }
    }

    /// Apply a parsed event.
    ///
    /// Peer events only count while a session is live; once the user has
    /// disconnected (or the attempt failed) they are stale and ignored.
    pub fn apply(&mut self, event: EventKind) {
        if event.is_peer_event() && !self.state.phase.is_active() {
            debug!(phase = %self.state.phase, ?event, "Stale peer event ignored");
            return;
        }

        match event {
            EventKind::Connected(success) => self.on_connected(success),
            EventKind::ConnectionStateChanged(label) => self.on_status(label),
            EventKind::PeerJoined(peer_id) => {
                if self.peers.on_peer_joined(peer_id) {
                    debug!(%peer_id, "Peer joined");
                    self.bus.publish(Event::PeerJoined(peer_id));
                }
            }
            EventKind::PeerLeft(peer_id) => {
                if self.peers.on_peer_left(peer_id) {
                    debug!(%peer_id, "Peer left");
                    self.bus.publish(Event::PeerLeft(peer_id));
                }
            }
            EventKind::MediaActivity(peer_id, active) => {
                if self.peers.on_media_activity(peer_id, active) {
                    self.bus.publish(Event::PeerActivity { peer_id, active });
                }
            }
        }
    }

    fn on_connected(&mut self, success: bool) {
        if self.state.phase != SessionPhase::Connecting {
            debug!(
                phase = %self.state.phase,
                success,
                "Connected event outside a connect attempt ignored"
            );
            return;
        }

        if success {
            info!(attempt = self.attempt_label(), "Connected");
            self.set_phase(SessionPhase::Connected);
        } else {
            warn!(attempt = self.attempt_label(), "Connect attempt failed");
            self.clear_peers();
            self.set_phase(SessionPhase::Failed);
        }
    }

    fn on_status(&mut self, label: String) {
        if self.state.status.as_deref() == Some(label.as_str()) {
            return;
        }
        debug!(status = %label, "Connection state changed");
        self.state.status = Some(label.clone());
        self.bus.publish(Event::StatusChanged(label));
    }
}
