//! Room and identity settings handed to the external session on connect.

use serde::{Deserialize, Serialize};

/// Which room to enter and as whom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub room_id: String,
    pub user_id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            room_id: "WebGLTest".into(),
            user_id: "Test User".into(),
        }
    }
}
