//! Request/response dispatch through a role store.
//!
//! UI code wants `await` semantics: send a request, get the response or the
//! classified error. The store broadcasts an outcome only after reducing it,
//! so state already reflects the outcome when [`dispatch`] returns.
//!
//! Outcomes are matched by operation only. Two concurrent requests for the
//! same operation on the same store may each receive the other's outcome.

use crate::actions::{
    AdminAction, AdminOp, AdminRequest, AdminResponse, TheaterAction, TheaterOp, TheaterRequest,
    TheaterResponse, UserAction, UserOp, UserRequest, UserResponse,
};
use crate::error::{DispatchError, Result};
use cinepass_api::ClassifiedError;
use cinepass_core::reducer::Reducer;
use cinepass_runtime::{Store, StoreError};
use std::fmt::Debug;
use std::time::Duration;

/// Action type of a role slice that carries remote operations.
pub trait RemoteAction: Sized {
    /// Request payloads
    type Request;
    /// Response payloads
    type Response;
    /// Operation tag
    type Op: Copy + PartialEq + Debug + Send;

    /// Tag of `request`
    fn op_of(request: &Self::Request) -> Self::Op;

    /// Wrap a request
    fn request(request: Self::Request) -> Self;

    /// Whether this action is the outcome of an `op` request
    fn is_outcome_of(&self, op: Self::Op) -> bool;

    /// Unwrap an outcome action
    fn into_outcome(self) -> Option<std::result::Result<Self::Response, ClassifiedError>>;
}

macro_rules! remote_action {
    ($action:ident, $request:ident, $response:ident, $op:ident) => {
        impl RemoteAction for $action {
            type Request = $request;
            type Response = $response;
            type Op = $op;

            fn op_of(request: &$request) -> $op {
                request.op()
            }

            fn request(request: $request) -> Self {
                Self::Request(request)
            }

            fn is_outcome_of(&self, op: $op) -> bool {
                match self {
                    Self::Fulfilled(response) => response.op() == op,
                    Self::Rejected { op: rejected, .. } => *rejected == op,
                    _ => false,
                }
            }

            fn into_outcome(self) -> Option<std::result::Result<$response, ClassifiedError>> {
                match self {
                    Self::Fulfilled(response) => Some(Ok(response)),
                    Self::Rejected { error, .. } => Some(Err(error)),
                    _ => None,
                }
            }
        }
    };
}

remote_action!(AdminAction, AdminRequest, AdminResponse, AdminOp);
remote_action!(TheaterAction, TheaterRequest, TheaterResponse, TheaterOp);
remote_action!(UserAction, UserRequest, UserResponse, UserOp);

/// Send `request` through `store` and wait for its outcome.
///
/// Exactly one gateway call is made. The outcome has been reduced into the
/// store's state when this returns.
///
/// # Errors
///
/// - [`DispatchError::Rejected`] with the classified failure of the call
/// - [`DispatchError::Store`] if no outcome arrives within `timeout` or the
///   store is shutting down
pub async fn dispatch<S, A, E, R>(
    store: &Store<S, A, E, R>,
    request: A::Request,
    timeout: Duration,
) -> Result<A::Response>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: RemoteAction + Send + Clone + Debug + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    let op = A::op_of(&request);
    tracing::debug!(?op, "Dispatching");

    let outcome = store
        .send_and_wait_for(A::request(request), |action| action.is_outcome_of(op), timeout)
        .await?;

    match outcome.into_outcome() {
        Some(Ok(response)) => Ok(response),
        Some(Err(error)) => {
            tracing::debug!(?op, %error, "Dispatch rejected");
            Err(DispatchError::Rejected(error))
        },
        // The predicate only admits outcome actions.
        None => Err(DispatchError::Store(StoreError::ChannelClosed)),
    }
}
