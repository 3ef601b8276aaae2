pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, HuddleError, ProtocolError, SessionError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, AttemptId};
pub use types::{PeerId, SessionPhase};

pub type Result<T> = std::result::Result<T, HuddleError>;
