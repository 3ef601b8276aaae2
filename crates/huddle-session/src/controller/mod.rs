//! Connection lifecycle state machine.
//!
//! `Idle -> Connecting -> Connected -> Disconnecting -> Idle`, with
//! `Connecting -> Failed` on a failed connect and `Failed -> Connecting` on
//! retry. The controller owns the peer table and the callback registry and
//! is the only thing that mutates either. It is synchronous and expects its
//! caller to serialize access; [`crate::bridge`] provides that on a
//! multi-threaded runtime.

mod dispatch;
mod lifecycle;
mod types;


pub use types::{ConnectControl, ControllerConfig, SessionState};

use std::sync::Arc;

use huddle_common::{Event, EventBus, SessionPhase};
use tokio::sync::broadcast;

use crate::channel::{EventChannel, SessionCommands};
use crate::peers::{PeerEntry, PeerTable};
use crate::registry::CallbackRegistry;

pub struct SessionController {
    config: ControllerConfig,
    registry: CallbackRegistry,
    commands: Arc<dyn SessionCommands>,
    peers: PeerTable,
    state: SessionState,
    /// Change notifications for the presentation layer.
    bus: Arc<EventBus>,
    /// Set by `teardown` so dropping afterwards does not disconnect again.
    torn_down: bool,
}

impl SessionController {
    pub fn new(
        config: ControllerConfig,
        channel: Arc<dyn EventChannel>,
        commands: Arc<dyn SessionCommands>,
    ) -> Self {
        let registry = CallbackRegistry::new(config.sink_name.clone(), channel);
        let bus = Arc::new(EventBus::new(config.event_bus_capacity));
        Self {
            config,
            registry,
            commands,
            peers: PeerTable::new(),
            state: SessionState::default(),
            bus,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn status(&self) -> Option<&str> {
        self.state.status.as_deref()
    }

    pub fn control(&self) -> ConnectControl {
        self.state.control()
    }

    pub fn peers(&self) -> &PeerTable {
        &self.peers
    }

    pub fn snapshot(&self) -> Vec<PeerEntry> {
        self.peers.snapshot()
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Shared handle to the notification bus.
    pub fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.bus)
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        if self.state.phase != phase {
            self.state.phase = phase;
            self.bus.publish(Event::PhaseChanged(phase));
        }
    }

    fn clear_peers(&mut self) {
        if self.peers.clear() {
            self.bus.publish(Event::PeersCleared);
        }
    }
}
