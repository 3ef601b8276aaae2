//! Inputs accepted by the bridge task.

use huddle_common::SessionError;
use tokio::sync::oneshot;

use crate::channel::Delivery;
use crate::controller::SessionState;
use crate::peers::PeerEntry;

/// One unit of work for the bridge task. Queries carry a reply channel.
#[derive(Debug)]
pub enum BridgeInput {
    Connect {
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    Disconnect,
    Press {
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    /// A raw callback from the external runtime.
    Deliver(Delivery),
    Snapshot {
        reply: oneshot::Sender<Vec<PeerEntry>>,
    },
    State {
        reply: oneshot::Sender<SessionState>,
    },
    /// Tear the session down and stop the task.
    Shutdown,
}
