//! Session environment.
//!
//! This module defines the environment type for dependency injection
//! in the role reducers.

/// Session environment.
///
/// Carries the gateway a role reducer hands its remote calls to.
///
/// # Type Parameters
///
/// - `G`: gateway for the role (`AdminGateway`, `TheaterGateway` or `UserGateway`)
#[derive(Debug, Clone)]
pub struct SessionEnvironment<G> {
    /// Executes remote operations.
    pub gateway: G,
}

impl<G> SessionEnvironment<G> {
    /// Create a new session environment.
    #[must_use]
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }
}
