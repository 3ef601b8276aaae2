//! Serialized access to a [`SessionController`](crate::SessionController)
//! from async code.
//!
//! User actions and runtime deliveries may originate on different tasks.
//! The bridge funnels all of them through one bounded queue into a single
//! background task that owns the controller, so every transition and
//! every table mutation happens in arrival order.

mod handle;
mod task;
mod types;

#[cfg(test)]
mod tests;

pub use handle::BridgeHandle;
pub use task::SessionBridge;
pub use types::BridgeInput;
