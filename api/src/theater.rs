//! Theater owner operations

use crate::{
    client::ApiClient,
    endpoints::{auth, theater},
    envelope::Envelope,
    error::{ClassifiedError, TempMail},
    types::{
        CountStats, LoginData, Movie, MovieShow, MovieType, OtpVerification, Owner, RevenueReport,
        Screen, ScreenInput, ShowInput, SignUpData, TheaterDetails,
    },
};
use serde_json::{Value, json};

/// Theater owner API
#[derive(Debug, Clone)]
pub struct TheaterApi {
    client: ApiClient,
}

impl TheaterApi {
    /// Wrap a client rooted at the theater prefix
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register; the server answers with the address it sent an OTP to
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn signup(&self, form: &SignUpData) -> Result<Envelope<TempMail>, ClassifiedError> {
        self.client.post(auth::SIGNUP, form).await
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

    /// Submit an OTP
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn verify_otp(&self, otp: &OtpVerification) -> Result<Envelope<Value>, ClassifiedError> {
        self.client.post(auth::VERIFY_OTP, otp).await
    }

    /// Ask for a fresh OTP
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn resend_otp(&self, email: &str) -> Result<Envelope<Value>, ClassifiedError> {
        self.client.post(auth::RESEND_OTP, &json!({ "email": email })).await
    }

    /// Ask for a reset link
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn forgot_password(&self, email: &str) -> Result<Envelope<Value>, ClassifiedError> {
        self.client.post(auth::FORGOT_PASSWORD, &json!({ "email": email })).await
    }

    /// Set a new password with a reset token
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<Envelope<Value>, ClassifiedError> {
        self.client
            .patch(&auth::reset_password(Some(token)), &json!({ "password": password }))
            .await
    }

    /// Theater profile
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn details(&self) -> Result<Envelope<TheaterDetails>, ClassifiedError> {
        self.client.get(theater::DETAILS).await
    }

    /// Update the theater profile
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn update_details(
        &self,
        details: &TheaterDetails,
    ) -> Result<Envelope<TheaterDetails>, ClassifiedError> {
        self.client.put(theater::DETAILS, details).await
    }

    /// Add a screen
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn create_screen(&self, screen: &ScreenInput) -> Result<Envelope<Screen>, ClassifiedError> {
        self.client.post(theater::SCREENS, screen).await
    }

    /// Screens, optionally filtered by amenity
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn screens(&self, amenity: Option<&str>) -> Result<Envelope<Vec<Screen>>, ClassifiedError> {
        match amenity {
            Some(amenity) => self.client.get(&theater::screens_by_amenity(amenity)).await,
            None => self.client.get(theater::SCREENS).await,
        }
    }

    /// Replace a screen
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn update_screen(
        &self,
        screen_id: &str,
        screen: &ScreenInput,
    ) -> Result<Envelope<Screen>, ClassifiedError> {
        self.client.put(&theater::screen(screen_id), screen).await
    }

    /// Delete a screen
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn delete_screen(&self, screen_id: &str) -> Result<Envelope<Value>, ClassifiedError> {
        self.client.delete(&theater::screen(screen_id)).await
    }

    /// Movies available for scheduling
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn movies(&self, movie_type: MovieType) -> Result<Envelope<Vec<Movie>>, ClassifiedError> {
        self.client.get(&theater::movies(movie_type)).await
    }

    /// Scheduled shows
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn shows(&self) -> Result<Envelope<Vec<MovieShow>>, ClassifiedError> {
        self.client.get(theater::SHOWS).await
    }

    /// Schedule a show
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn add_show(&self, show: &ShowInput) -> Result<Envelope<MovieShow>, ClassifiedError> {
        self.client.post(theater::SHOWS, show).await
    }

    /// Reschedule a show
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn update_show(
        &self,
        show_id: &str,
        show: &ShowInput,
    ) -> Result<Envelope<MovieShow>, ClassifiedError> {
        self.client.put(&theater::show(show_id), show).await
    }

    /// Cancel a show
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn delete_show(&self, show_id: &str) -> Result<Envelope<Value>, ClassifiedError> {
        self.client.delete(&theater::show(show_id)).await
    }

    /// Dashboard counters
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn count_stats(&self) -> Result<Envelope<CountStats>, ClassifiedError> {
        self.client.get(theater::COUNT_STATS).await
    }

    /// Revenue per screen
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn revenue_by_screen(&self) -> Result<Envelope<RevenueReport>, ClassifiedError> {
        self.client.get(theater::REVENUE_BY_SCREEN).await
    }
}
