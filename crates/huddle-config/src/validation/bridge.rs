//! Validation for the `[bridge]` section.

use crate::schema::HuddleConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &HuddleConfig) {
    validate_non_empty(errors, "bridge.sink_name", &config.bridge.sink_name);
    validate_range(
        errors,
        "bridge.queue_capacity",
        config.bridge.queue_capacity,
        1,
        65536,
    );
    validate_range(
        errors,
        "bridge.event_bus_capacity",
        config.bridge.event_bus_capacity,
        1,
        4096,
    );
}
