//! # CinePass Core
//!
//! Building blocks shared by the CinePass client crates.
//!
//! Every role slice of the client (admin, theater owner, end user) is a pure
//! state machine driven by a [`Reducer`](reducer::Reducer). Reducers never
//! perform I/O themselves; remote calls are returned as
//! [`Effect`](effect::Effect) values and executed by the runtime, which feeds
//! the resulting actions back into the same reducer.
//!
//! Dependencies a reducer needs (the gateway for its role, a [`Clock`]) are
//! passed in through its environment.
//!
//! [`Clock`]: environment::Clock
//!
//! ## Example
//!
//! ```
//! use cinepass_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct BannerState {
//!     message: Option<String>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum BannerAction {
//!     Show(String),
//!     Dismiss,
//! }
//!
//! struct BannerReducer;
//!
//! impl Reducer for BannerReducer {
//!     type State = BannerState;
//!     type Action = BannerAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut BannerState,
//!         action: BannerAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<BannerAction>; 4]> {
//!         match action {
//!             BannerAction::Show(message) => state.message = Some(message),
//!             BannerAction::Dismiss => state.message = None,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = BannerState::default();
//! BannerReducer.reduce(&mut state, BannerAction::Show("Saved".into()), &());
//! assert_eq!(state.message.as_deref(), Some("Saved"));
//! ```

pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

pub mod effect;
pub mod environment;
pub mod reducer;
