//! Admin operations

use crate::{
    client::ApiClient,
    endpoints::{admin, auth},
    envelope::Envelope,
    error::ClassifiedError,
    types::{
        ApprovalStatus, EntityId, EntityKind, EntityPage, LoginData, Movie, MovieInput, MovieType,
        Owner,
    },
};
use serde_json::{Value, json};

/// Admin API
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    /// Wrap a client rooted at the admin prefix
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Sign in
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn login(&self, credentials: &LoginData) -> Result<Envelope<Owner>, ClassifiedError> {
        self.client.post(auth::LOGIN, credentials).await
    }

    /// Sign out
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn logout(&self) -> Result<Envelope<Value>, ClassifiedError> {
        self.client.post(auth::LOGOUT, &json!({})).await
    }

    /// One page of users or theaters
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn entities(
        &self,
        kind: EntityKind,
        page: Option<u32>,
    ) -> Result<Envelope<EntityPage<Owner>>, ClassifiedError> {
        self.client.get(&admin::entities(kind, page)).await
    }

    /// Approve or reject a theater owner
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn update_approval(
        &self,
        owner_id: &str,
        status: ApprovalStatus,
    ) -> Result<Envelope<Owner>, ClassifiedError> {
        self.client
            .patch(&admin::approval(owner_id), &json!({ "isApproved": status }))
            .await
    }

    /// Block or unblock a user or theater; the server answers with the id only
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn set_blocked(
        &self,
        kind: EntityKind,
        entity_id: &str,
        blocked: bool,
    ) -> Result<Envelope<EntityId>, ClassifiedError> {
        self.client
            .patch(&admin::manage_entity(kind, entity_id), &json!({ "isBlocked": blocked }))
            .await
    }

    /// Create a movie
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn add_movie(
        &self,
        movie_type: MovieType,
        movie: &MovieInput,
    ) -> Result<Envelope<Movie>, ClassifiedError> {
        self.client.post(&admin::movies(movie_type, None), movie).await
    }

    /// One page of movies
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn movies(
        &self,
        movie_type: MovieType,
        page: Option<u32>,
    ) -> Result<Envelope<EntityPage<Movie>>, ClassifiedError> {
        self.client.get(&admin::movies(movie_type, page)).await
    }

    /// Replace a movie
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn update_movie(
        &self,
        movie_type: MovieType,
        movie_id: &str,
        movie: &MovieInput,
    ) -> Result<Envelope<Movie>, ClassifiedError> {
        self.client.put(&admin::movie(movie_type, movie_id), movie).await
    }

    /// Delete a movie
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn delete_movie(
        &self,
        movie_type: MovieType,
        movie_id: &str,
    ) -> Result<Envelope<Value>, ClassifiedError> {
        self.client.delete(&admin::movie(movie_type, movie_id)).await
    }
}
