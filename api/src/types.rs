//! Data transfer objects mirrored from the CinePass API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client role; selects the path prefix and session slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator
    Admin,
    /// Theater owner
    Theater,
    /// Ticket buyer / viewer
    User,
}

impl Role {
    /// Label used in logs and metrics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Theater => "theater",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities an admin manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// End users
    Users,
    /// Theater owners
    Theaters,
}

impl EntityKind {
    /// Path segment
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Theaters => "theaters",
        }
    }
}

/// Where a movie is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieType {
    /// Screened in theaters
    Theater,
    /// Available on the streaming catalogue
    Stream,
}

impl MovieType {
    /// Path segment
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theater => "theater",
            Self::Stream => "stream",
        }
    }
}

/// Theater owner approval state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting review
    Pending,
    /// Allowed to operate
    Approved,
    /// Turned down
    Rejected,
}

/// Profile of any signed-in party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Login email
    pub email: String,
    /// Phone number
    #[serde(default, rename = "mobile_number", skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    /// Blocked by an admin
    #[serde(default, rename = "isBlocked")]
    pub is_blocked: bool,
    /// Email verified
    #[serde(default, rename = "isVerified")]
    pub is_verified: bool,
    /// Approval state (theater owners)
    #[serde(default, rename = "isApproved", skip_serializing_if = "Option::is_none")]
    pub approval: Option<ApprovalStatus>,
    /// Theater name (theater owners)
    #[serde(default, rename = "theater_name", skip_serializing_if = "Option::is_none")]
    pub theater_name: Option<String>,
    /// Home city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Bare reference a mutation answers with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityId {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
}

/// Credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    /// Login email
    pub email: String,
    /// Password
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpData {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Phone number
    pub mobile_number: String,
    /// Password
    pub password: String,
    /// Theater name, only for theater owners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theater_name: Option<String>,
}

/// OTP submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpVerification {
    /// Address the OTP was sent to
    pub email: String,
    /// Code
    pub otp: String,
}

/// Google identity token exchanged for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSignUp {
    /// ID token from Google
    pub token: String,
}

/// Movie as listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Title
    pub movie_name: String,
    /// Release date
    pub release_date: DateTime<Utc>,
    /// Run time in minutes, as sent by the API
    pub run_time: String,
    /// Genres
    #[serde(default)]
    pub genres: Vec<String>,
    /// Languages
    #[serde(default)]
    pub languages: Vec<String>,
    /// Formats (2D, 3D, ...)
    #[serde(default)]
    pub format: Vec<String>,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    /// Poster image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_poster: Option<String>,
}

/// Body of a movie create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInput {
    /// Title
    pub movie_name: String,
    /// `YYYY-MM-DD`
    pub release_date: String,
    /// Minutes
    pub run_time: String,
    /// Genres
    pub genres: Vec<String>,
    /// Languages
    pub languages: Vec<String>,
    /// Formats
    pub format: Vec<String>,
    /// Cover image as a data URL
    pub cover_photo: String,
    /// Poster image as a data URL
    pub movie_poster: String,
}

/// Theater screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Name shown to users
    pub screen_name: String,
    /// Amenity tier
    #[serde(default)]
    pub amenity: String,
    /// Seat count
    #[serde(default)]
    pub capacity: u32,
}

/// Body of a screen create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenInput {
    /// Name shown to users
    pub screen_name: String,
    /// Amenity tier
    pub amenity: String,
    /// Seat count
    pub capacity: u32,
}

/// Scheduled show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieShow {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Movie being shown
    #[serde(rename = "movieId")]
    pub movie_id: String,
    /// Screen it runs on
    #[serde(rename = "screenId")]
    pub screen_id: String,
    /// `HH:MM`
    #[serde(rename = "showTime")]
    pub show_time: String,
    /// `HH:MM`
    #[serde(rename = "endTime")]
    pub end_time: String,
    /// Spoken language
    #[serde(default)]
    pub language: String,
    /// Projection format
    #[serde(default)]
    pub format: String,
}

/// Body of a show create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowInput {
    /// Movie being shown
    pub movie_id: String,
    /// Screen it runs on
    pub screen_id: String,
    /// `HH:MM`
    pub show_time: String,
    /// `HH:MM`
    pub end_time: String,
    /// Spoken language
    pub language: String,
    /// Projection format
    pub format: String,
}

/// Theater as listed for a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterSummary {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Name
    pub theater_name: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Theater profile edited by its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterDetails {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Name
    pub theater_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[serde(default)]
    pub mobile_number: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// Free text
    #[serde(default)]
    pub description: String,
}

/// Seats requested for a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBooking {
    /// Show being booked
    pub show_id: String,
    /// `YYYY-MM-DD`
    pub booking_date: String,
    /// Seat labels
    pub selected_seats: Vec<String>,
}

/// Payment intent created for a booking or stream purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// Secret handed to the payment widget
    pub client_secret: String,
    /// Intent id, used for cancellation
    pub payment_intent_id: String,
}

/// Booked ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTicket {
    /// Server id
    #[serde(rename = "_id")]
    pub id: String,
    /// Movie title
    pub movie_name: String,
    /// Theater name
    pub theater_name: String,
    /// Screen name
    #[serde(default)]
    pub screen_name: String,
    /// `HH:MM`
    pub show_time: String,
    /// Show date
    pub booking_date: DateTime<Utc>,
    /// Seat labels
    #[serde(default)]
    pub reserved_seats: Vec<String>,
    /// Amount paid
    #[serde(default)]
    pub total_amount: f64,
    /// Payment status
    #[serde(default)]
    pub payment_status: String,
}

/// Streaming catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingMovie {
    /// The movie
    #[serde(flatten)]
    pub movie: Movie,
    /// Media asset id used for HLS lookup
    #[serde(default, rename = "publicId", skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    /// The user already owns it
    #[serde(default, rename = "isPurchased")]
    pub is_purchased: bool,
}

/// Streaming catalogue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingMovies {
    /// Available now
    #[serde(default)]
    pub running: Vec<StreamingMovie>,
    /// Coming soon
    #[serde(default)]
    pub upcoming: Vec<StreamingMovie>,
}

/// Playback URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HlsUrl {
    /// Signed HLS manifest URL
    #[serde(rename = "hlsURL")]
    pub hls_url: String,
}

/// Theater dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountStats {
    /// Screens
    #[serde(default)]
    pub screens: u64,
    /// Shows
    #[serde(default)]
    pub shows: u64,
    /// Tickets sold
    #[serde(default)]
    pub bookings: u64,
}

/// Revenue of one screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenRevenue {
    /// Screen name
    pub screen_name: String,
    /// Total revenue
    pub revenue: f64,
}

/// Revenue broken down by screen
pub type RevenueReport = Vec<ScreenRevenue>;

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPage<T> {
    /// Rows on this page
    pub data: Vec<T>,
    /// Number of pages
    #[serde(rename = "maxPage")]
    pub max_page: u32,
}

impl<T> Default for EntityPage<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            max_page: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_from_api_json() {
        let movie: Movie = serde_json::from_str(
            r#"{
                "_id": "m1",
                "movie_name": "Aavesham",
                "release_date": "2024-04-11T00:00:00.000Z",
                "run_time": "158",
                "genres": ["Action", "Comedy"],
                "languages": ["Malayalam"],
                "format": ["2D"],
                "cover_photo": "https://img/cover.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(movie.id, "m1");
        assert_eq!(movie.run_time, "158");
        assert!(movie.movie_poster.is_none());
    }

    #[test]
    fn test_owner_defaults() {
        let owner: Owner =
            serde_json::from_str(r#"{"_id":"u1","email":"a@b.in","isBlocked":true}"#).unwrap();
        assert!(owner.is_blocked);
        assert!(owner.name.is_empty());
        assert!(owner.approval.is_none());
    }

    #[test]
    fn test_entity_page() {
        let page: EntityPage<Owner> =
            serde_json::from_str(r#"{"data":[{"_id":"u1","email":"a@b.in"}],"maxPage":4}"#).unwrap();
        assert_eq!(page.max_page, 4);
        assert_eq!(page.data.len(), 1);
    }

    #[test]
    fn test_payment_intent_camel_case() {
        let intent: PaymentIntent =
            serde_json::from_str(r#"{"clientSecret":"cs","paymentIntentId":"pi"}"#).unwrap();
        assert_eq!(intent.payment_intent_id, "pi");
    }
}
