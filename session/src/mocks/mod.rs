//! Mock gateway implementations for testing.
//!
//! [`MockGateway`] answers from a script (or a handler, when the order of
//! concurrent calls is not fixed) and records every request it receives, so
//! tests can assert both the state transition and the exact number of remote
//! calls.

use crate::actions::{
    AdminRequest, AdminResponse, TheaterRequest, TheaterResponse, UserRequest, UserResponse,
};
use crate::providers::{AdminGateway, TheaterGateway, UserGateway};
use cinepass_api::ClassifiedError;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

type Handler<Req, Resp> = Arc<dyn Fn(&Req) -> Result<Resp, ClassifiedError> + Send + Sync>;

/// Scripted gateway.
///
/// Clones share the script and the request log.
pub struct MockGateway<Req, Resp> {
    script: Arc<Mutex<VecDeque<Result<Resp, ClassifiedError>>>>,
    handler: Option<Handler<Req, Resp>>,
    requests: Arc<Mutex<Vec<Req>>>,
}

impl<Req, Resp> fmt::Debug for MockGateway<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockGateway")
            .field("call_count", &self.call_count())
            .field("handler", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}

/// Admin mock
pub type MockAdminGateway = MockGateway<AdminRequest, AdminResponse>;
/// Theater owner mock
pub type MockTheaterGateway = MockGateway<TheaterRequest, TheaterResponse>;
/// End user mock
pub type MockUserGateway = MockGateway<UserRequest, UserResponse>;

impl<Req, Resp> Clone for MockGateway<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            script: Arc::clone(&self.script),
            handler: self.handler.clone(),
            requests: Arc::clone(&self.requests),
        }
    }
}

impl<Req, Resp> Default for MockGateway<Req, Resp> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Resp> MockGateway<Req, Resp> {
    /// Mock with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            handler: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every call with `handler` once the script is exhausted
    #[must_use]
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Req) -> Result<Resp, ClassifiedError> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Queue a successful response.
    #[must_use]
    pub fn respond(self, response: Resp) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue a failure.
    #[must_use]
    pub fn fail(self, error: ClassifiedError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, outcome: Result<Resp, ClassifiedError>) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
    }

    /// Number of calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn answer(&self, request: Req) -> Result<Resp, ClassifiedError> {
        let scripted = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let outcome = match (scripted, &self.handler) {
            (Some(outcome), _) => outcome,
            (None, Some(handler)) => handler(&request),
            (None, None) => Err(ClassifiedError::Generic("no scripted response".to_string())),
        };
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        outcome
    }
}

impl<Req: Clone, Resp> MockGateway<Req, Resp> {
    /// Requests received, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<Req> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AdminGateway for MockAdminGateway {
    fn execute(
        &self,
        request: AdminRequest,
    ) -> impl Future<Output = Result<AdminResponse, ClassifiedError>> + Send {
        let outcome = self.answer(request);
        async move { outcome }
    }
}

impl TheaterGateway for MockTheaterGateway {
    fn execute(
        &self,
        request: TheaterRequest,
    ) -> impl Future<Output = Result<TheaterResponse, ClassifiedError>> + Send {
        let outcome = self.answer(request);
        async move { outcome }
    }
}

impl UserGateway for MockUserGateway {
    fn execute(
        &self,
        request: UserRequest,
    ) -> impl Future<Output = Result<UserResponse, ClassifiedError>> + Send {
        let outcome = self.answer(request);
        async move { outcome }
    }
}
