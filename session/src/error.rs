//! Error types for dispatching remote operations through a store.

use cinepass_api::ClassifiedError;
use cinepass_runtime::StoreError;
use thiserror::Error;

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Why a dispatched operation produced no response.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// The remote call failed; the reducer has already applied the rejection.
    #[error(transparent)]
    Rejected(#[from] ClassifiedError),

    /// The store could not deliver an outcome (shutdown, timeout).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl DispatchError {
    /// The classified error, if the call reached the server or the upload path
    #[must_use]
    pub const fn classified(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Store(_) => None,
        }
    }
}
