use std::path::PathBuf;

use crate::types::SessionPhase;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// A payload from the external runtime that could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unknown event type: {0}")]
    UnknownEvent(String),

    #[error("invalid peer id payload: {0:?}")]
    InvalidPeerId(String),

    #[error("invalid media activity payload: {0}")]
    InvalidActivity(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("connect rejected while {phase}")]
    ConnectRejected { phase: SessionPhase },

    #[error("session bridge is closed")]
    BridgeClosed,
}

#[derive(Debug, thiserror::Error)]
pub enum HuddleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
