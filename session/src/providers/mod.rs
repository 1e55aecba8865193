//! Gateway traits.
//!
//! A gateway executes one remote operation for a role reducer. The HTTP
//! implementations live in [`http`]; in-memory ones in `crate::mocks`.

use crate::actions::{AdminRequest, AdminResponse, TheaterRequest, TheaterResponse, UserRequest, UserResponse};
use cinepass_api::ClassifiedError;
use std::future::Future;

pub mod http;

/// Executes admin operations.
pub trait AdminGateway: Send + Sync {
    /// Issue exactly one remote call for `request`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    fn execute(
        &self,
        request: AdminRequest,
    ) -> impl Future<Output = Result<AdminResponse, ClassifiedError>> + Send;
}

/// Executes theater owner operations.
pub trait TheaterGateway: Send + Sync {
    /// Issue exactly one remote call for `request`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    fn execute(
        &self,
        request: TheaterRequest,
    ) -> impl Future<Output = Result<TheaterResponse, ClassifiedError>> + Send;
}

/// Executes end user operations.
pub trait UserGateway: Send + Sync {
    /// Issue exactly one remote call for `request`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    fn execute(
        &self,
        request: UserRequest,
    ) -> impl Future<Output = Result<UserResponse, ClassifiedError>> + Send;
}
