//! End user operations
//!
//! Several user endpoints nest their payload one level deeper
//! (`data.movies`, `data.user`, ...); the wrappers unwrap it so callers see
//! the same envelope shape as on the other roles.

use crate::{
    client::ApiClient,
    endpoints::{auth, user},
    envelope::Envelope,
    error::{ClassifiedError, TempMail},
    types::{
        EntityPage, GoogleSignUp, HlsUrl, LoginData, Movie, MovieShow, OtpVerification, Owner,
        PaymentIntent, PendingBooking, SignUpData, StreamingMovie, StreamingMovies, TheaterSummary,
        UserTicket,
    },
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Listing filters for movies and shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFilter {
    /// Genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Show date `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Ticket listing filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFilter {
    /// 1-based page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Only tickets for shows that already ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past: Option<bool>,
}

/// Partial profile update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// New home city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Deserialize)]
struct UserData {
    user: Owner,
}

#[derive(Deserialize)]
struct CitiesData {
    #[serde(default)]
    cities: Vec<String>,
}

#[derive(Deserialize)]
struct ShowsData<T> {
    shows: T,
}

#[derive(Deserialize)]
struct MoviesData {
    #[serde(default)]
    movies: Vec<Movie>,
}

#[derive(Deserialize)]
struct TheatersData {
    #[serde(default)]
    theater: Vec<TheaterSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingBody<'a> {
    booking_date: &'a str,
    reserved_seats: &'a [String],
}

/// End user API
#[derive(Debug, Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    /// Wrap a client rooted at the user prefix
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
        let envelope: Envelope<UserData> = self.client.post(auth::LOGIN, credentials).await?;
        Ok(envelope.map(|d| d.user))
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

    /// Set a new password, with or without a reset token
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn reset_password(
        &self,
        token: Option<&str>,
        password: &str,
    ) -> Result<Envelope<Value>, ClassifiedError> {
        self.client
            .patch(&auth::reset_password(token), &json!({ "password": password }))
            .await
    }

    /// Exchange a Google identity token for a session
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn google_signup(&self, token: &GoogleSignUp) -> Result<Envelope<Owner>, ClassifiedError> {
        let envelope: Envelope<UserData> = self.client.post(user::GOOGLE_SIGNUP, token).await?;
        Ok(envelope.map(|d| d.user))
    }

    /// Cities with running shows
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn cities(&self) -> Result<Envelope<Vec<String>>, ClassifiedError> {
        let envelope: Envelope<CitiesData> = self.client.get(user::CITIES).await?;
        Ok(envelope.map(|d| d.cities))
    }

    /// Shows of one theater
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn theater_shows(
        &self,
        city: &str,
        theater_id: &str,
    ) -> Result<Envelope<Vec<MovieShow>>, ClassifiedError> {
        let envelope: Envelope<ShowsData<Vec<MovieShow>>> =
            self.client.get(&user::theater_shows(city, theater_id)).await?;
        Ok(envelope.map(|d| d.shows))
    }

    /// One show with its seat layout filters applied
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn single_show(
        &self,
        city: &str,
        show_id: &str,
        filter: &MovieFilter,
    ) -> Result<Envelope<MovieShow>, ClassifiedError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'a> {
            show_id: &'a str,
            #[serde(flatten)]
            filter: &'a MovieFilter,
        }

        let envelope: Envelope<ShowsData<MovieShow>> = self
            .client
            .get_with_query(&user::shows(city), &Query { show_id, filter })
            .await?;
        Ok(envelope.map(|d| d.shows))
    }

    /// Movies running in a city
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn movies(&self, city: &str, filter: &MovieFilter) -> Result<Envelope<Vec<Movie>>, ClassifiedError> {
        let envelope: Envelope<MoviesData> =
            self.client.get_with_query(&user::movies(city), filter).await?;
        Ok(envelope.map(|d| d.movies))
    }

    /// One movie in a city
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn movie(
        &self,
        city: &str,
        movie_id: &str,
        filter: &MovieFilter,
    ) -> Result<Envelope<Vec<Movie>>, ClassifiedError> {
        let envelope: Envelope<MoviesData> = self
            .client
            .get_with_query(&user::movie(city, movie_id), filter)
            .await?;
        Ok(envelope.map(|d| d.movies))
    }

    /// Theaters in a city
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn theaters(&self, city: &str) -> Result<Envelope<Vec<TheaterSummary>>, ClassifiedError> {
        let envelope: Envelope<TheatersData> = self.client.get(&user::theaters(city)).await?;
        Ok(envelope.map(|d| d.theater))
    }

    /// Own profile
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn profile(&self) -> Result<Envelope<Owner>, ClassifiedError> {
        let envelope: Envelope<UserData> = self.client.get(user::PROFILE).await?;
        Ok(envelope.map(|d| d.user))
    }

    /// Update own profile
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Envelope<Owner>, ClassifiedError> {
        let envelope: Envelope<UserData> = self
            .client
            .put(user::PROFILE, &json!({ "payload": update }))
            .await?;
        Ok(envelope.map(|d| d.user))
    }

    /// Reserve seats; the server answers with a payment intent
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn book_tickets(&self, booking: &PendingBooking) -> Result<Envelope<PaymentIntent>, ClassifiedError> {
        let body = BookingBody {
            booking_date: &booking.booking_date,
            reserved_seats: &booking.selected_seats,
        };
        self.client.post(&user::booking(&booking.show_id), &body).await
    }

    /// Booked tickets
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn tickets(&self, filter: &TicketFilter) -> Result<Envelope<EntityPage<UserTicket>>, ClassifiedError> {
        self.client.get_with_query(user::TICKETS, filter).await
    }

    /// Cancel an unpaid payment intent
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn cancel_payment(&self, payment_intent_id: &str) -> Result<Envelope<Value>, ClassifiedError> {
        self.client
            .post(&user::cancel_payment(payment_intent_id), &json!({}))
            .await
    }

    /// Streaming catalogue
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn streaming_movies(&self) -> Result<Envelope<StreamingMovies>, ClassifiedError> {
        self.client.get(user::STREAMING).await
    }

    /// One streaming movie
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn streaming_movie(&self, movie_id: &str) -> Result<Envelope<StreamingMovie>, ClassifiedError> {
        self.client.get(&user::streaming_movie(movie_id)).await
    }

    /// Buy a streaming movie; the server answers with a payment intent
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn purchase_stream(&self, movie_id: &str) -> Result<Envelope<PaymentIntent>, ClassifiedError> {
        self.client
            .post(&user::streaming_movie(movie_id), &json!({}))
            .await
    }

    /// Playback URL for a purchased movie
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn hls_url(&self, movie_id: &str, public_id: &str) -> Result<Envelope<HlsUrl>, ClassifiedError> {
        self.client.get(&user::hls_url(movie_id, public_id)).await
    }
}
