use std::sync::Arc;

use huddle_common::{Event, PeerId, SessionError, SessionPhase};

use super::*;
use crate::channel::{LoopbackChannel, OutboundCall};
use crate::controller::{ControllerConfig, SessionController};
use crate::peers::PeerEntry;

fn spawn() -> (BridgeHandle, tokio::task::JoinHandle<()>, LoopbackChannel) {
    let channel = LoopbackChannel::new();
    let controller = SessionController::new(
        ControllerConfig::default(),
        Arc::new(channel.clone()),
        Arc::new(channel.clone()),
    );
    let (handle, task) = SessionBridge::spawn(controller, 16);
    (handle, task, channel)
}

async fn emit(handle: &BridgeHandle, channel: &LoopbackChannel, event: &str, payload: &str) {
    for delivery in channel.emit(event, payload) {
        handle.deliver(delivery).await.unwrap();
    }
}

#[tokio::test]
async fn drives_a_session_in_order() {
    let (handle, _task, channel) = spawn();

    handle.connect().await.unwrap();
    emit(&handle, &channel, "Connected", "true").await;
    emit(&handle, &channel, "PeerJoined", "7").await;
    emit(&handle, &channel, "MediaActivity", r#"{"peerId":7,"active":true}"#).await;

    assert_eq!(
        handle.snapshot().await.unwrap(),
        vec![PeerEntry {
            peer_id: PeerId(7),
            is_sending: true
        }]
    );
    assert_eq!(handle.state().await.unwrap().phase, SessionPhase::Connected);

    handle.disconnect().await.unwrap();
    let state = handle.state().await.unwrap();
    assert_eq!(state.phase, SessionPhase::Idle);
    assert!(handle.snapshot().await.unwrap().is_empty());
}

#[tokio::test]
async fn connect_rejection_is_returned() {
    let (handle, _task, _channel) = spawn();
    handle.connect().await.unwrap();
    assert_eq!(
        handle.connect().await,
        Err(SessionError::ConnectRejected {
            phase: SessionPhase::Connecting
        })
    );
}

#[tokio::test]
async fn press_follows_control() {
    let (handle, _task, channel) = spawn();
    handle.press().await.unwrap();
    assert_eq!(handle.state().await.unwrap().phase, SessionPhase::Connecting);

    emit(&handle, &channel, "Connected", "false").await;
    assert_eq!(handle.state().await.unwrap().phase, SessionPhase::Failed);

    handle.press().await.unwrap();
    assert_eq!(handle.state().await.unwrap().phase, SessionPhase::Connecting);
}

#[tokio::test]
async fn try_deliver_is_processed() {
    let (handle, _task, channel) = spawn();
    handle.connect().await.unwrap();
    for delivery in channel.emit("PeerJoined", "3") {
        handle.try_deliver(delivery).unwrap();
    }
    assert_eq!(handle.snapshot().await.unwrap().len(), 1);
}

#[tokio::test]
async fn subscribers_see_changes() {
    let (handle, _task, channel) = spawn();
    let mut rx = handle.subscribe();

    handle.connect().await.unwrap();
    emit(&handle, &channel, "Connected", "true").await;
    // Round-trip so both deliveries have been applied.
    handle.state().await.unwrap();

    assert_eq!(rx.recv().await.unwrap(), Event::PhaseChanged(SessionPhase::Connecting));
    assert_eq!(rx.recv().await.unwrap(), Event::PhaseChanged(SessionPhase::Connected));
}

#[tokio::test]
async fn shutdown_tears_down_and_closes() {
    let (handle, task, channel) = spawn();
    let mut rx = handle.subscribe();

    handle.shutdown().await.unwrap();
    task.await.unwrap();

    assert_eq!(channel.calls(), vec![OutboundCall::Disconnect]);
    assert_eq!(rx.recv().await.unwrap(), Event::Shutdown);
    assert_eq!(handle.state().await, Err(SessionError::BridgeClosed));
    assert!(handle.is_closed());
}

#[tokio::test]
async fn dropping_every_handle_stops_the_task() {
    let (handle, task, channel) = spawn();
    handle.connect().await.unwrap();
    drop(handle);
    task.await.unwrap();

    assert_eq!(channel.calls().last(), Some(&OutboundCall::Disconnect));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_handles_are_serialized() {
    let (handle, _task, channel) = spawn();
    handle.connect().await.unwrap();
    emit(&handle, &channel, "Connected", "true").await;

    let mut joins = Vec::new();
    for id in 0..20 {
        let handle = handle.clone();
        let deliveries = channel.emit("PeerJoined", &id.to_string());
        joins.push(tokio::spawn(async move {
            for delivery in deliveries {
                handle.deliver(delivery).await.unwrap();
            }
        }));
    }
    for join in joins {
        join.await.unwrap();
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 20);
    assert!(snapshot.windows(2).all(|w| w[0].peer_id < w[1].peer_id));
}
