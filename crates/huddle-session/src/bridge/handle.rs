//! Cloneable handle for talking to the bridge task.

use std::sync::Arc;

use huddle_common::{Event, EventBus, SessionError};
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::warn;

use super::types::BridgeInput;
use crate::channel::Delivery;
use crate::controller::SessionState;
use crate::peers::PeerEntry;

/// Handle to a running bridge. Every method fails with
/// [`SessionError::BridgeClosed`] once the task has stopped.
#[derive(Clone)]
pub struct BridgeHandle {
    input_tx: mpsc::Sender<BridgeInput>,
    bus: Arc<EventBus>,
}

impl BridgeHandle {
    pub(super) fn new(input_tx: mpsc::Sender<BridgeInput>, bus: Arc<EventBus>) -> Self {
        Self { input_tx, bus }
    }

    pub async fn connect(&self) -> Result<(), SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(BridgeInput::Connect { reply }).await?;
        rx.await.map_err(|_| SessionError::BridgeClosed)?
    }

    pub async fn disconnect(&self) -> Result<(), SessionError> {
        self.send(BridgeInput::Disconnect).await
    }

    /// Press the connect control, whatever it currently shows.
    pub async fn press(&self) -> Result<(), SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(BridgeInput::Press { reply }).await?;
        rx.await.map_err(|_| SessionError::BridgeClosed)?
    }

    /// Queue a runtime callback, waiting for room if the queue is full.
    pub async fn deliver(&self, delivery: Delivery) -> Result<(), SessionError> {
        self.send(BridgeInput::Deliver(delivery)).await
    }

    /// Queue a runtime callback without waiting. Used from contexts that
    /// cannot await; a full queue drops the delivery.
    pub fn try_deliver(&self, delivery: Delivery) -> Result<(), SessionError> {
        match self.input_tx.try_send(BridgeInput::Deliver(delivery)) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(BridgeInput::Deliver(d))) => {
                warn!(handler = %d.handler, "Bridge queue full, delivery dropped");
                Ok(())
            }
            Err(_) => Err(SessionError::BridgeClosed),
        }
    }

    pub async fn snapshot(&self) -> Result<Vec<PeerEntry>, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(BridgeInput::Snapshot { reply }).await?;
        rx.await.map_err(|_| SessionError::BridgeClosed)
    }

    pub async fn state(&self) -> Result<SessionState, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.send(BridgeInput::State { reply }).await?;
        rx.await.map_err(|_| SessionError::BridgeClosed)
    }

    /// Ask the task to tear down and stop.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.send(BridgeInput::Shutdown).await
    }

    /// Subscribe to change notifications from the controller.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.input_tx.is_closed()
    }

    async fn send(&self, input: BridgeInput) -> Result<(), SessionError> {
        self.input_tx
            .send(input)
            .await
            .map_err(|_| SessionError::BridgeClosed)
    }
}
