//! Background task that owns the controller.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::handle::BridgeHandle;
use super::types::BridgeInput;
use crate::controller::SessionController;

/// Spawner for the bridge task.
pub struct SessionBridge;

impl SessionBridge {
    /// Move `controller` into a background task and return a handle to it.
    ///
    /// `capacity` bounds the input queue (minimum 1). The task exits after
    /// a [`BridgeInput::Shutdown`] or once every handle has been dropped,
    /// tearing the session down either way.
    pub fn spawn(controller: SessionController, capacity: usize) -> (BridgeHandle, JoinHandle<()>) {
        let (input_tx, input_rx) = mpsc::channel(capacity.max(1));
        let handle = BridgeHandle::new(input_tx, controller.event_bus());
        let task = tokio::spawn(bridge_loop(controller, input_rx));
        (handle, task)
    }
}

async fn bridge_loop(mut controller: SessionController, mut input_rx: mpsc::Receiver<BridgeInput>) {
    info!(sink = controller.registry().sink(), "Session bridge started");

    while let Some(input) = input_rx.recv().await {
        match input {
            BridgeInput::Connect { reply } => {
                let _ = reply.send(controller.connect());
            }
            BridgeInput::Disconnect => controller.disconnect(),
            BridgeInput::Press { reply } => {
                let _ = reply.send(controller.press());
            }
            BridgeInput::Deliver(delivery) => controller.deliver(&delivery),
            BridgeInput::Snapshot { reply } => {
                let _ = reply.send(controller.snapshot());
            }
            BridgeInput::State { reply } => {
                let _ = reply.send(controller.state().clone());
            }
            BridgeInput::Shutdown => {
                debug!("Shutdown requested");
                break;
            }
        }
    }

    controller.teardown();
    info!("Session bridge stopped");
}
