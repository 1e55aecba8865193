//! # CinePass Runtime
//!
//! The [`Store`] runs one role slice: it reduces actions, spawns the
//! effects the reducer describes and feeds their actions back.
//!
//! Callers that need the outcome of a remote call use
//! [`Store::send_and_wait_for`] or subscribe to the action broadcast. An
//! action is broadcast only after it has been reduced.
//!
//! ## Example
//!
//! ```ignore
//! use cinepass_runtime::Store;
//!
//! let store = Store::new(TheaterState::default(), TheaterReducer::new(), environment);
//! store.send(TheaterAction::ClearError).await?;
//! let signed_in = store.state(|s| s.session.is_authenticated).await;
//! ```

mod error;
mod handle;
pub mod metrics;
mod store;

pub use error::StoreError;
pub use handle::EffectHandle;
pub use store::Store;
