//! Client assembly.
//!
//! Builds the three role stores from a [`Config`], each backed by the HTTP
//! API for its role. All roles share one cookie jar, like a browser tab.
//!
//! # Example
//!
//! ```rust,ignore
//! let client = CinePass::connect(&Config::from_env())?;
//! let cities = dispatch(&client.user, UserRequest::GetCities, client.dispatch_timeout()).await?;
//! client.shutdown().await?;
//! ```

use crate::config::Config;
use cinepass_api::types::Role;
use cinepass_api::{AdminApi, ApiClient, ClassifiedError, TheaterApi, UserApi};
use cinepass_runtime::{Store, StoreError};
use cinepass_session::{
    AdminReducer, AdminState, AdminStore, SessionEnvironment, TheaterReducer, TheaterState,
    TheaterStore, UserReducer, UserState, UserStore,
};
use std::time::Duration;
use thiserror::Error;

/// How long shutdown waits for in-flight calls
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors while assembling or tearing down the client
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// HTTP client could not be built
    #[error("API client setup failed: {0}")]
    Api(#[from] ClassifiedError),

    /// A store did not shut down cleanly
    #[error("Store shutdown failed: {0}")]
    Shutdown(#[from] StoreError),
}

/// The three role stores of one client session
pub struct CinePass {
    /// Admin console
    pub admin: AdminStore<AdminApi>,
    /// Theater owner console
    pub theater: TheaterStore<TheaterApi>,
    /// End user app
    pub user: UserStore<UserApi>,
    config: Config,
}

impl CinePass {
    /// Build every role store against the configured API.
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Api`] if the HTTP client cannot be built.
    pub fn connect(config: &Config) -> Result<Self, BootstrapError> {
        let api = &config.api;
        let admin = ApiClient::new(&api.base_url, &api.admin_prefix, Role::Admin, api.request_timeout)?;
        let theater = admin.for_role(&api.base_url, &api.theater_prefix, Role::Theater);
        let user = admin.for_role(&api.base_url, &api.user_prefix, Role::User);

        tracing::info!(base_url = %api.base_url, "CinePass client ready");

        Ok(Self {
            admin: Store::new(
                AdminState::default(),
                AdminReducer::new(),
                SessionEnvironment::new(AdminApi::new(admin)),
            ),
            theater: Store::new(
                TheaterState::default(),
                TheaterReducer::new(),
                SessionEnvironment::new(TheaterApi::new(theater)),
            ),
            user: Store::new(
                UserState::default(),
                UserReducer::new(),
                SessionEnvironment::new(UserApi::new(user)),
            ),
            config: config.clone(),
        })
    }

    /// Configuration the client was built with
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// How long a dispatch waits for its outcome
    #[must_use]
    pub const fn dispatch_timeout(&self) -> Duration {
        self.config.dispatch.timeout
    }

    /// Shut every store down, waiting for in-flight calls.
    ///
    /// # Errors
    ///
    /// Returns the first store that failed to drain in time.
    pub async fn shutdown(&self) -> Result<(), BootstrapError> {
        let (admin, theater, user) = tokio::join!(
            self.admin.shutdown(SHUTDOWN_TIMEOUT),
            self.theater.shutdown(SHUTDOWN_TIMEOUT),
            self.user.shutdown(SHUTDOWN_TIMEOUT),
        );
        admin?;
        theater?;
        user?;
        tracing::info!("CinePass client shut down");
        Ok(())
    }
}

impl std::fmt::Debug for CinePass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CinePass")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
