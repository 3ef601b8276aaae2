//! In-process stand-in for the external runtime.
//!
//! Records every outbound call and turns emitted events into deliveries
//! for whatever is registered. Registrations append rather than replace,
//! so registering one event type twice yields two deliveries per emit:
//! the least forgiving behavior a real runtime could have.

use std::sync::{Arc, Mutex};

use tracing::debug;

use super::types::{CallbackRegistration, Delivery, EventChannel, SessionCommands};

/// A call the core made into the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundCall {
    RegisterCallback(CallbackRegistration),
    Connect { room_id: String, user_id: String },
    Disconnect,
}

#[derive(Default)]
struct LoopbackState {
    registrations: Vec<CallbackRegistration>,
    calls: Vec<OutboundCall>,
}

/// Deterministic runtime double. Clones share state.
#[derive(Clone, Default)]
pub struct LoopbackChannel {
    state: Arc<Mutex<LoopbackState>>,
}

impl LoopbackChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise an event: one delivery per registration for `event_type`.
    pub fn emit(&self, event_type: &str, payload: &str) -> Vec<Delivery> {
        let Ok(state) = self.state.lock() else {
            return Vec::new();
        };
        let deliveries: Vec<Delivery> = state
            .registrations
            .iter()
            .filter(|r| r.event_type == event_type)
            .map(|r| Delivery::new(r.sink.clone(), r.handler.clone(), payload))
            .collect();
        debug!(
            event_type,
            deliveries = deliveries.len(),
            "Loopback event emitted"
        );
        deliveries
    }

    /// All outbound calls so far, oldest first.
    pub fn calls(&self) -> Vec<OutboundCall> {
        self.state
            .lock()
            .map(|s| s.calls.clone())
            .unwrap_or_default()
    }

    /// Drain the recorded outbound calls.
    pub fn take_calls(&self) -> Vec<OutboundCall> {
        self.state
            .lock()
            .map(|mut s| std::mem::take(&mut s.calls))
            .unwrap_or_default()
    }

    /// Registrations the runtime currently holds.
    pub fn registrations(&self) -> Vec<CallbackRegistration> {
        self.state
            .lock()
            .map(|s| s.registrations.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: OutboundCall) {
        if let Ok(mut state) = self.state.lock() {
            if let OutboundCall::RegisterCallback(ref registration) = call {
                state.registrations.push(registration.clone());
            }
            state.calls.push(call);
        }
    }
}

impl EventChannel for LoopbackChannel {
    fn register_callback(&self, registration: &CallbackRegistration) {
        self.record(OutboundCall::RegisterCallback(registration.clone()));
    }
}

impl SessionCommands for LoopbackChannel {
    fn connect(&self, room_id: &str, user_id: &str) {
        self.record(OutboundCall::Connect {
            room_id: room_id.to_string(),
            user_id: user_id.to_string(),
        });
    }

    fn disconnect(&self) {
        self.record(OutboundCall::Disconnect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(event_type: &str, handler: &str) -> CallbackRegistration {
        CallbackRegistration::new(event_type, "Bridge", handler)
    }

    #[test]
    fn emit_without_registration_delivers_nothing() {
        let channel = LoopbackChannel::new();
        assert!(channel.emit("PeerJoined", "7").is_empty());
    }

    #[test]
    fn emit_targets_registered_handler() {
        let channel = LoopbackChannel::new();
        channel.register_callback(&registration("PeerJoined", "OnPeerJoined"));
        channel.register_callback(&registration("PeerLeft", "OnPeerLeft"));

        let deliveries = channel.emit("PeerJoined", "7");
        assert_eq!(deliveries, vec![Delivery::new("Bridge", "OnPeerJoined", "7")]);
    }

    #[test]
    fn duplicate_registration_duplicates_delivery() {
        let channel = LoopbackChannel::new();
        channel.register_callback(&registration("PeerJoined", "OnPeerJoined"));
        channel.register_callback(&registration("PeerJoined", "OnPeerJoined"));

        assert_eq!(channel.emit("PeerJoined", "7").len(), 2);
    }

    #[test]
    fn records_commands_in_order() {
        let channel = LoopbackChannel::new();
        channel.connect("room", "user");
        channel.disconnect();

        assert_eq!(
            channel.calls(),
            vec![
                OutboundCall::Connect {
                    room_id: "room".into(),
                    user_id: "user".into()
                },
                OutboundCall::Disconnect,
            ]
        );
    }

    #[test]
    fn take_calls_drains_but_keeps_registrations() {
        let channel = LoopbackChannel::new();
        channel.register_callback(&registration("Connected", "OnConnected"));
        assert_eq!(channel.take_calls().len(), 1);
        assert!(channel.calls().is_empty());
        assert_eq!(channel.registrations().len(), 1);
    }

    #[test]
    fn clones_share_state() {
        let channel = LoopbackChannel::new();
        let other = channel.clone();
        other.disconnect();
        assert_eq!(channel.calls(), vec![OutboundCall::Disconnect]);
    }
}
