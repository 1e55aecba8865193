//! Store errors.

use thiserror::Error;

/// Why a store refused or gave up on an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `send` after `shutdown` began
    #[error("Store is shutting down")]
    ShutdownInProgress,

    /// Effects were still running when the shutdown deadline passed
    #[error("Shutdown timed out with {0} effects still running")]
    ShutdownTimeout(usize),

    /// No matching action arrived before the deadline
    #[error("Timeout waiting for action")]
    Timeout,

    /// The action broadcast has no senders left
    #[error("Action broadcast channel closed")]
    ChannelClosed,
}
