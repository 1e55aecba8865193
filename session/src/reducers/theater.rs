//! Theater owner reducer.
//!
//! # Flow
//!
//! 1. Signup sends an OTP; the address is kept in `temp_mail`
//! 2. Login either signs in or answers with an OTP challenge
//! 3. Screen, show, details and stats calls need a live session; a 401/403
//!    on any of them signs the owner out

use super::reject_session;
use crate::actions::{TheaterAction, TheaterOp, TheaterResponse};
use crate::environment::SessionEnvironment;
use crate::providers::TheaterGateway;
use crate::state::TheaterState;
use cinepass_api::ClassifiedError;
use cinepass_core::effect::Effect;
use cinepass_core::reducer::Reducer;
use cinepass_core::{SmallVec, smallvec};
use std::marker::PhantomData;

/// Theater owner reducer.
#[derive(Debug, Clone)]
pub struct TheaterReducer<G> {
    _gateway: PhantomData<fn() -> G>,
}

impl<G> TheaterReducer<G> {
    /// Create a new theater reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _gateway: PhantomData,
        }
    }

    fn fulfilled(state: &mut TheaterState, response: TheaterResponse) {
        match response {
            TheaterResponse::Signup(envelope) => state.session.temp_mail = envelope.data,
            TheaterResponse::Login(envelope) => state.session.sign_in(envelope.data),
            TheaterResponse::Logout(_) => state.session.sign_out(),
            _ => {},
        }
    }

    fn rejected(state: &mut TheaterState, op: TheaterOp, error: ClassifiedError) {
        match op {
            TheaterOp::Signup => {
                if error.is_otp_challenge() {
                    state.session.temp_mail = error.temp_mail();
                }
            },
            TheaterOp::Login => {
                if error.is_otp_challenge() {
                    state.session.temp_mail = error.temp_mail();
                }
                state.session.profile = None;
                state.session.is_authenticated = false;
            },
            TheaterOp::Logout => state.session.error = Some(error),
            op if op.requires_session() => reject_session(&mut state.session, &error),
            _ => {},
        }
    }
}

impl<G> Default for TheaterReducer<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Reducer for TheaterReducer<G>
where
    G: TheaterGateway + Clone + 'static,
{
    type State = TheaterState;
    type Action = TheaterAction;
    type Environment = SessionEnvironment<G>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TheaterAction::Request(request) => {
                let op = request.op();
                if matches!(op, TheaterOp::Signup | TheaterOp::Logout) {
                    state.session.error = None;
                }

                tracing::debug!(?op, "Theater request");
                let gateway = env.gateway.clone();
                smallvec![Effect::future(async move {
                    match gateway.execute(request).await {
                        Ok(response) => TheaterAction::Fulfilled(response),
                        Err(error) => TheaterAction::Rejected { op, error },
                    }
                })]
            },
            TheaterAction::Fulfilled(response) => {
                Self::fulfilled(state, response);
                smallvec![Effect::None]
            },
            TheaterAction::Rejected { op, error } => {
                tracing::debug!(?op, %error, "Theater request rejected");
                Self::rejected(state, op, error);
                smallvec![Effect::None]
            },
            TheaterAction::ClearError => {
                state.session.error = None;
                smallvec![Effect::None]
            },
            TheaterAction::SetError(error) => {
                state.session.error = Some(error);
                smallvec![Effect::None]
            },
            TheaterAction::ToggleAuthenticated => {
                state.session.is_authenticated = !state.session.is_authenticated;
                smallvec![Effect::None]
            },
            TheaterAction::ClearTempMail => {
                state.session.temp_mail = None;
                smallvec![Effect::None]
            },
        }
    }
}
