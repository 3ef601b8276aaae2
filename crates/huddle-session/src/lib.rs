//! Event bridge between an external real-time session runtime and local
//! session/peer state.
//!
//! The external runtime pushes named callbacks (connected, peer joined,
//! voice activity, ...) at a sink/handler pair this crate registers. The
//! core turns those raw deliveries into typed events, drives the local
//! connection state machine, and keeps the peer table consistent under
//! duplicated or out-of-order delivery.

pub mod bridge;
pub mod channel;
pub mod controller;
pub mod peers;
pub mod protocol;
pub mod registry;

pub use bridge::{BridgeHandle, SessionBridge};
pub use channel::{
    CallbackRegistration, Delivery, EventChannel, LoopbackChannel, OutboundCall,
    SessionCommands,
};
pub use controller::{ConnectControl, ControllerConfig, SessionController, SessionState};
pub use peers::{PeerEntry, PeerTable};
pub use protocol::{EventKind, MediaActivityPayload};
pub use registry::CallbackRegistry;
