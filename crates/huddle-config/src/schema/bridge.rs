//! Event bridge configuration types.

use serde::{Deserialize, Serialize};

/// Settings for the callback bridge between the external runtime and
/// the local session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Sink identity the external runtime addresses callbacks to.
    pub sink_name: String,
    /// Depth of the bridge input queue (valid range: 1-65536).
    pub queue_capacity: u32,
    /// Depth of the presentation event bus (valid range: 1-4096).
    pub event_bus_capacity: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            sink_name: "HuddleBridge".into(),
            queue_capacity: 256,
            event_bus_capacity: 64,
        }
    }
}
