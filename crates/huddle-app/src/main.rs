mod cli;
mod host;
mod presentation;
mod script;

use std::sync::Arc;

use huddle_common::ConfigError;
use huddle_config::HuddleConfig;
use huddle_session::{ControllerConfig, LoopbackChannel, SessionBridge, SessionController};
use tracing_subscriber::EnvFilter;

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn env_filter(args: &cli::Args, config: &HuddleConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(config.logging.directive());
    match args.log_level.as_deref() {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| fallback()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    }
}

fn load_config(args: &cli::Args) -> Result<HuddleConfig, ConfigError> {
    match &args.config {
        Some(path) => huddle_config::load_from_path(path),
        None => huddle_config::load_config(),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config comes first since it carries the default log level; any
    // failure is reported once logging is up.
    let (mut config, config_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (HuddleConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&args, &config))
        .init();

    tracing::info!("Huddle v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Some(room) = args.room.clone() {
        config.session.room_id = room;
    }
    if let Some(user) = args.user.clone() {
        config.session.user_id = user;
    }

    let text = match std::fs::read_to_string(&args.script) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to read script {}: {e}", args.script.display());
            std::process::exit(1);
        }
    };
    let steps = script::parse_script(&text);

    let channel = LoopbackChannel::new();
    let controller = SessionController::new(
        ControllerConfig {
            room_id: config.session.room_id.clone(),
            user_id: config.session.user_id.clone(),
            sink_name: config.bridge.sink_name.clone(),
            event_bus_capacity: config.bridge.event_bus_capacity as usize,
        },
        Arc::new(channel.clone()),
        Arc::new(channel.clone()),
    );
    let (handle, task) =
        SessionBridge::spawn(controller, config.bridge.queue_capacity as usize);
    let logger = tokio::spawn(host::log_events(handle.subscribe()));

    let mut stdout = std::io::stdout();
    if let Err(e) = host::run_script(&handle, &channel, &steps, &mut stdout).await {
        tracing::error!("Script aborted: {e}");
    }

    if let Err(e) = handle.shutdown().await {
        tracing::warn!("Bridge already stopped: {e}");
    }
    host::join_logged("bridge", task).await;
    drop(handle);
    host::join_logged("event logger", logger).await;
    tracing::info!("Shutdown complete");
}
