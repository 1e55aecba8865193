//! Role reducers.
//!
//! One reducer per role slice. Reducers are pure functions:
//! `(State, Action, Environment) → (State, Effects)`. A `Request` action
//! applies its pending transition and returns a single `Effect::Future`
//! that runs the gateway call and feeds back `Fulfilled` or `Rejected`.

pub mod admin;
pub mod theater;
pub mod user;

use crate::state::SessionState;
use cinepass_api::ClassifiedError;

// Re-export
pub use admin::AdminReducer;
pub use theater::TheaterReducer;
pub use user::UserReducer;

/// Apply a rejected authenticated-only operation to a session.
///
/// 401 and 403 sign the session out (flag and profile). 403 also drops the
/// booking attempted while signed out. Any other error leaves the session
/// untouched.
#[must_use]
pub fn handle_rejected(mut session: SessionState, error: &ClassifiedError) -> SessionState {
    if error.is_session_failure() {
        tracing::info!(status = ?error.status(), "Session rejected by server, signing out");
        session.is_authenticated = false;
        session.profile = None;
        if error.status() == Some(403) {
            session.booking_info = None;
        }
    }
    session
}

/// Run [`handle_rejected`] in place.
pub(crate) fn reject_session(session: &mut SessionState, error: &ClassifiedError) {
    *session = handle_rejected(std::mem::take(session), error);
}
