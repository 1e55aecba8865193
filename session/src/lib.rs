//! # CinePass Session
//!
//! Role-scoped session state for the CinePass client: one slice per role
//! (admin, theater owner, end user), each driven by its own reducer and
//! living in its own [`Store`](cinepass_runtime::Store).
//!
//! ## Architecture
//!
//! ```text
//! Request → Reducer (pending) → Effect::Future → Gateway → Fulfilled | Rejected → Reducer
//! ```
//!
//! Reducers never call the network themselves. They hand a request to the
//! gateway in their environment and describe the state change for each
//! outcome. A 401/403 on an authenticated-only operation signs the role out
//! through [`reducers::handle_rejected`], the same way for every role.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cinepass_session::{dispatch, UserStore, actions::UserRequest};
//!
//! let cities = dispatch(&store, UserRequest::GetCities, timeout).await?;
//! let signed_in = store.state(|s| s.session.is_authenticated).await;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod actions;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducers;
pub mod state;

// Mock gateways (for tests and demos)
#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

use cinepass_runtime::Store;

// Re-export main types for convenience
pub use actions::{AdminAction, TheaterAction, UserAction};
pub use dispatch::{RemoteAction, dispatch};
pub use environment::SessionEnvironment;
pub use error::{DispatchError, Result};
pub use reducers::{AdminReducer, TheaterReducer, UserReducer, handle_rejected};
pub use state::{AdminState, Listing, SessionState, TheaterState, UserState};

/// Store holding the admin slice
pub type AdminStore<G> = Store<AdminState, AdminAction, SessionEnvironment<G>, AdminReducer<G>>;

/// Store holding the theater owner slice
pub type TheaterStore<G> =
    Store<TheaterState, TheaterAction, SessionEnvironment<G>, TheaterReducer<G>>;

/// Store holding the end user slice
pub type UserStore<G> = Store<UserState, UserAction, SessionEnvironment<G>, UserReducer<G>>;
