//! Admin reducer.

use super::reject_session;
use crate::actions::{AdminAction, AdminOp, AdminResponse};
use crate::environment::SessionEnvironment;
use crate::providers::AdminGateway;
use crate::state::AdminState;
use cinepass_api::ClassifiedError;
use cinepass_core::effect::Effect;
use cinepass_core::reducer::Reducer;
use cinepass_core::{SmallVec, smallvec};
use std::marker::PhantomData;

/// Admin reducer.
///
/// Everything but login and logout is an admin-only operation, so any
/// 401/403 on those signs the admin out.
#[derive(Debug, Clone)]
pub struct AdminReducer<G> {
    _gateway: PhantomData<fn() -> G>,
}

impl<G> AdminReducer<G> {
    /// Create a new admin reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _gateway: PhantomData,
        }
    }

    fn fulfilled(state: &mut AdminState, response: AdminResponse) {
        match response {
            AdminResponse::Login(envelope) => state.session.sign_in(envelope.data),
            AdminResponse::Logout(_) => state.session.sign_out(),
            _ => {},
        }
    }

    fn rejected(state: &mut AdminState, op: AdminOp, error: ClassifiedError) {
        match op {
            AdminOp::Login | AdminOp::Logout => state.session.error = Some(error),
            _ => reject_session(&mut state.session, &error),
        }
    }
}

impl<G> Default for AdminReducer<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Reducer for AdminReducer<G>
where
    G: AdminGateway + Clone + 'static,
{
    type State = AdminState;
    type Action = AdminAction;
    type Environment = SessionEnvironment<G>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AdminAction::Request(request) => {
                let op = request.op();
                if op == AdminOp::Login {
                    state.session.error = None;
                }

                tracing::debug!(?op, "Admin request");
                let gateway = env.gateway.clone();
                smallvec![Effect::future(async move {
                    match gateway.execute(request).await {
                        Ok(response) => AdminAction::Fulfilled(response),
                        Err(error) => AdminAction::Rejected { op, error },
                    }
                })]
            },
            AdminAction::Fulfilled(response) => {
                Self::fulfilled(state, response);
                smallvec![Effect::None]
            },
            AdminAction::Rejected { op, error } => {
                tracing::debug!(?op, %error, "Admin request rejected");
                Self::rejected(state, op, error);
                smallvec![Effect::None]
            },
            AdminAction::ClearError => {
                state.session.error = None;
                smallvec![Effect::None]
            },
            AdminAction::SetError(error) => {
                state.session.error = Some(error);
                smallvec![Effect::None]
            },
            AdminAction::ToggleAuthenticated => {
                state.session.is_authenticated = !state.session.is_authenticated;
                smallvec![Effect::None]
            },
            AdminAction::ClearTempMail => {
                state.session.temp_mail = None;
                smallvec![Effect::None]
            },
        }
    }
}
