//! Runs a demo script against a session bridge wired to the loopback
//! runtime.

use std::io::Write;

use huddle_common::{Event, SessionError};
use huddle_session::{BridgeHandle, LoopbackChannel};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::presentation::View;
use crate::script::{Action, Step};

/// Execute every step in order, rendering the view to `out` after each.
///
/// A rejected connect is reported and the script carries on; a closed
/// bridge ends the run.
pub async fn run_script(
    handle: &BridgeHandle,
    channel: &LoopbackChannel,
    steps: &[Step],
    out: &mut impl Write,
) -> huddle_common::Result<()> {
    info!(steps = steps.len(), "Running script");

    for (idx, step) in steps.iter().enumerate() {
        debug!(step = idx + 1, ?step, "Step");
        match step {
            Step::Action(action) => {
                let result = match action {
                    Action::Press => handle.press().await,
                    Action::Connect => handle.connect().await,
                    Action::Disconnect => handle.disconnect().await,
                };
                match result {
                    Ok(()) => {}
                    Err(e @ SessionError::ConnectRejected { .. }) => {
                        warn!(step = idx + 1, error = %e, "Action rejected");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Step::Emit {
                event_type,
                payload,
            } => {
                for delivery in channel.emit(event_type, payload) {
                    handle.deliver(delivery).await?;
                }
            }
            Step::Deliver(delivery) => handle.deliver(delivery.clone()).await?,
        }

        let view = View::new(&handle.state().await?, handle.snapshot().await?);
        write!(out, "{view}")?;
        writeln!(out)?;
    }

    Ok(())
}

/// Log change notifications until the session shuts down.
pub async fn log_events(mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(Event::Shutdown) | Err(broadcast::error::RecvError::Closed) => break,
            Ok(event) => debug!(?event, "Session event"),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(skipped = n, "Event log lagged");
            }
        }
    }
}

/// Wait for a background task, logging a panic or cancellation instead of
/// discarding it. Returns whether the task finished cleanly.
pub async fn join_logged(name: &str, task: JoinHandle<()>) -> bool {
    match task.await {
        Ok(()) => true,
        Err(e) => {
            error!(task = name, error = %e, "Background task failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use huddle_session::{ControllerConfig, OutboundCall, SessionBridge, SessionController};

    use super::*;
    use crate::script::parse_script;

    async fn run(script: &str) -> (String, LoopbackChannel) {
        let channel = LoopbackChannel::new();
        let controller = SessionController::new(
            ControllerConfig::default(),
            Arc::new(channel.clone()),
            Arc::new(channel.clone()),
        );
        let (handle, task) = SessionBridge::spawn(controller, 16);

        let mut out = Vec::new();
        run_script(&handle, &channel, &parse_script(script), &mut out)
            .await
            .unwrap();
        handle.shutdown().await.unwrap();
        task.await.unwrap();

        (String::from_utf8(out).unwrap(), channel)
    }

    #[tokio::test]
    async fn renders_a_full_session() {
        let (out, channel) = run(r#"
{"action":"press"}
{"emit":"ConnectionStateChanged","payload":"Joined"}
{"emit":"Connected","payload":"true"}
{"emit":"PeerJoined","payload":"7"}
{"emit":"MediaActivity","payload":"{\"peerId\":7,\"active\":true}"}
{"action":"press"}
"#)
        .await;

        let frames: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(frames[0], "Connection State: connecting\n[Connecting...] (disabled)");
        assert_eq!(frames[1], "Connection State: Joined\n[Connecting...] (disabled)");
        assert_eq!(frames[2], "Connection State: Joined\n[Disconnect]");
        assert_eq!(
            frames[4],
            "Connection State: Joined\n[Disconnect]\nPeer 7 connected, is sending: true"
        );
        assert_eq!(frames[5], "Connection State: Joined\n[Reconnect]");

        assert_eq!(channel.calls().last(), Some(&OutboundCall::Disconnect));
    }

    #[tokio::test]
    async fn raw_envelopes_reach_the_controller() {
        let (out, _channel) = run(r#"
{"action":"connect"}
{"deliver":{"sink":"HuddleBridge","handler":"OnConnected","payload":"false"}}
"#)
        .await;
        assert!(out.ends_with("Connection State: failed\n[Try to Reconnect]\n\n"));
    }

    #[tokio::test]
    async fn rejected_connect_does_not_stop_the_script() {
        let (out, channel) = run(r#"
{"action":"connect"}
{"action":"connect"}
{"emit":"Connected","payload":"true"}
"#)
        .await;
        assert!(out.ends_with("[Disconnect]\n\n"));
        let connects = channel
            .calls()
            .iter()
            .filter(|c| matches!(c, OutboundCall::Connect { .. }))
            .count();
        assert_eq!(connects, 1);
    }

    #[tokio::test]
    async fn join_logged_reports_task_outcome() {
        assert!(join_logged("ok", tokio::spawn(async {})).await);

        let panicking = tokio::spawn(async { panic!("bridge task blew up") });
        assert!(!join_logged("panicking", panicking).await);

        let pending = tokio::spawn(std::future::pending::<()>());
        pending.abort();
        assert!(!join_logged("aborted", pending).await);
    }
}
