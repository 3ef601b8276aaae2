//! Callback registration with local de-duplication.
//!
//! Whether the runtime replaces or appends a repeated registration is not
//! something we can observe, so the registry never repeats one: an event
//! type already registered to the same handler is skipped without touching
//! the channel. Registrations live as long as the registry: the runtime
//! has no unregister, so forgetting one would only lead to issuing it twice.
//!
//! A registration the runtime drops is invisible here; the channel gives no
//! acknowledgement.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::channel::{CallbackRegistration, EventChannel};
use crate::protocol::LIFECYCLE_CALLBACKS;

pub struct CallbackRegistry {
    /// Sink identity every registration targets.
    sink: String,
    channel: Arc<dyn EventChannel>,
    /// Issued registrations keyed by event type.
    registrations: HashMap<String, CallbackRegistration>,
}

impl CallbackRegistry {
    pub fn new(sink: impl Into<String>, channel: Arc<dyn EventChannel>) -> Self {
        Self {
            sink: sink.into(),
            channel,
            registrations: HashMap::new(),
        }
    }

    pub fn sink(&self) -> &str {
        &self.sink
    }

    /// Ask the runtime to deliver `event_type` to `handler` on our sink.
    ///
    /// Skipped if that exact registration was already issued. A different
    /// handler for a known event type replaces the local entry and is
    /// issued once.
    pub fn register(&mut self, event_type: &str, handler: &str) {
        if let Some(existing) = self.registrations.get(event_type) {
            if existing.handler == handler {
                debug!(event_type, handler, "Callback already registered");
                return;
            }
        }

        let registration = CallbackRegistration::new(event_type, self.sink.clone(), handler);
        self.channel.register_callback(&registration);
        info!(event_type, handler, sink = %self.sink, "Callback registered");
        self.registrations
            .insert(event_type.to_string(), registration);
    }

    /// Register every lifecycle callback the controller handles.
    pub fn register_lifecycle(&mut self) {
        for (event_type, handler) in LIFECYCLE_CALLBACKS {
            self.register(event_type, handler);
        }
    }

    /// Map an inbound (sink, handler) pair back to its event type.
    pub fn resolve(&self, sink: &str, handler: &str) -> Option<&str> {
        if sink != self.sink {
            return None;
        }
        self.registrations
            .values()
            .find(|r| r.handler == handler)
            .map(|r| r.event_type.as_str())
    }

    pub fn is_registered(&self, event_type: &str) -> bool {
        self.registrations.contains_key(event_type)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
