//! The seam between this process and the external session runtime.
//!
//! The runtime lives outside the process and is reached through two
//! capabilities: registering callbacks ([`EventChannel`]) and issuing
//! session commands ([`SessionCommands`]). Callbacks come back as
//! [`Delivery`] values addressed to a sink and handler by name.

mod loopback;
mod types;

pub use loopback::{LoopbackChannel, OutboundCall};
pub use types::{CallbackRegistration, Delivery, EventChannel, SessionCommands};
