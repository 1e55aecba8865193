//! Role-relative endpoint paths
//!
//! Paths are appended to `<base_url><role_prefix>` by [`ApiClient`](crate::ApiClient).

/// Shared authentication paths
pub mod auth {
    /// `POST` registration
    pub const SIGNUP: &str = "/signup";
    /// `POST` credentials
    pub const LOGIN: &str = "/login";
    /// `POST` end session
    pub const LOGOUT: &str = "/logout";
    /// `POST` OTP code
    pub const VERIFY_OTP: &str = "/otp-verification";
    /// `POST` email for a fresh OTP
    pub const RESEND_OTP: &str = "/resend-otp";
    /// `POST` email for a reset link
    pub const FORGOT_PASSWORD: &str = "/forgot-password";

    /// `PATCH` new password, optionally scoped to a reset token
    #[must_use]
    pub fn reset_password(token: Option<&str>) -> String {
        match token {
            Some(token) => format!("/reset-password/{token}"),
            None => "/reset-password".to_string(),
        }
    }
}

/// Admin paths
pub mod admin {
    use crate::types::{EntityKind, MovieType};

    /// Page of users or theaters
    #[must_use]
    pub fn entities(kind: EntityKind, page: Option<u32>) -> String {
        with_page(format!("/{}", kind.as_str()), page)
    }

    /// Approval decision for a theater owner
    #[must_use]
    pub fn approval(owner_id: &str) -> String {
        format!("/approval/{owner_id}")
    }

    /// Block/unblock a user or theater
    #[must_use]
    pub fn manage_entity(kind: EntityKind, entity_id: &str) -> String {
        format!("/{}/{entity_id}", kind.as_str())
    }

    /// Movie collection
    #[must_use]
    pub fn movies(movie_type: MovieType, page: Option<u32>) -> String {
        with_page(format!("/movie/{}", movie_type.as_str()), page)
    }

    /// Single movie
    #[must_use]
    pub fn movie(movie_type: MovieType, movie_id: &str) -> String {
        format!("/movie/{}/{movie_id}", movie_type.as_str())
    }

    fn with_page(path: String, page: Option<u32>) -> String {
        match page {
            Some(page) => format!("{path}?pageNumber={page}"),
            None => path,
        }
    }
}

/// Theater owner paths
pub mod theater {
    use crate::types::MovieType;

    /// Theater details (`GET`/`PUT`)
    pub const DETAILS: &str = "/theater";
    /// Screen collection (`POST`)
    pub const SCREENS: &str = "/screen";
    /// Show collection (`GET`/`POST`)
    pub const SHOWS: &str = "/shows";
    /// Dashboard counters
    pub const COUNT_STATS: &str = "/stats/count";
    /// Revenue per screen
    pub const REVENUE_BY_SCREEN: &str = "/stats/revenue/screen";

    /// Screens filtered by amenity
    #[must_use]
    pub fn screens_by_amenity(amenity: &str) -> String {
        format!("/screen?amenity={amenity}")
    }

    /// Single screen
    #[must_use]
    pub fn screen(screen_id: &str) -> String {
        format!("/screen/{screen_id}")
    }

    /// Movies a show can be scheduled for
    #[must_use]
    pub fn movies(movie_type: MovieType) -> String {
        format!("/movie/{}", movie_type.as_str())
    }

    /// Single show
    #[must_use]
    pub fn show(show_id: &str) -> String {
        format!("/shows/{show_id}")
    }
}

/// End user paths
pub mod user {
    /// Google identity exchange
    pub const GOOGLE_SIGNUP: &str = "/google-signup";
    /// Cities with theaters
    pub const CITIES: &str = "/cities";
    /// Profile (`GET`/`PUT`)
    pub const PROFILE: &str = "/profile";
    /// Booked tickets
    pub const TICKETS: &str = "/tickets";
    /// Streaming catalogue
    pub const STREAMING: &str = "/stream";

    /// Shows of one theater in a city
    #[must_use]
    pub fn theater_shows(city: &str, theater_id: &str) -> String {
        format!("/shows/{city}?theaterId={theater_id}")
    }

    /// Shows in a city (single show via `showId` query)
    #[must_use]
    pub fn shows(city: &str) -> String {
        format!("/shows/{city}")
    }

    /// Movies running in a city
    #[must_use]
    pub fn movies(city: &str) -> String {
        format!("/movies/{city}")
    }

    /// One movie in a city
    #[must_use]
    pub fn movie(city: &str, movie_id: &str) -> String {
        format!("/movies/{city}?movieId={movie_id}")
    }

    /// Theaters in a city
    #[must_use]
    pub fn theaters(city: &str) -> String {
        format!("/theater/{city}")
    }

    /// Seat booking for a show
    #[must_use]
    pub fn booking(show_id: &str) -> String {
        format!("/booking/{show_id}")
    }

    /// Cancel an unpaid intent
    #[must_use]
    pub fn cancel_payment(payment_intent_id: &str) -> String {
        format!("/payment/cancel/{payment_intent_id}")
    }

    /// Single streaming movie (`GET`) or purchase (`POST`)
    #[must_use]
    pub fn streaming_movie(movie_id: &str) -> String {
        format!("/stream/{movie_id}")
    }

    /// HLS manifest lookup
    #[must_use]
    pub fn hls_url(movie_id: &str, public_id: &str) -> String {
        format!("/stream/{movie_id}/hls?publicId={public_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityKind, MovieType};

    #[test]
    fn test_admin_paths() {
        assert_eq!(admin::entities(EntityKind::Users, Some(2)), "/users?pageNumber=2");
        assert_eq!(admin::entities(EntityKind::Theaters, None), "/theaters");
        assert_eq!(admin::manage_entity(EntityKind::Users, "u1"), "/users/u1");
        assert_eq!(admin::movies(MovieType::Stream, Some(1)), "/movie/stream?pageNumber=1");
        assert_eq!(admin::movie(MovieType::Theater, "m9"), "/movie/theater/m9");
        assert_eq!(admin::approval("t3"), "/approval/t3");
    }

    #[test]
    fn test_reset_password_token_is_optional() {
        assert_eq!(auth::reset_password(Some("abc")), "/reset-password/abc");
        assert_eq!(auth::reset_password(None), "/reset-password");
    }

    #[test]
    fn test_user_paths() {
        assert_eq!(user::theater_shows("Kochi", "t1"), "/shows/Kochi?theaterId=t1");
        assert_eq!(user::movie("Kochi", "m1"), "/movies/Kochi?movieId=m1");
        assert_eq!(user::hls_url("m1", "p1"), "/stream/m1/hls?publicId=p1");
    }

    #[test]
    fn test_theater_paths() {
        assert_eq!(theater::screens_by_amenity("premium"), "/screen?amenity=premium");
        assert_eq!(theater::movies(MovieType::Theater), "/movie/theater");
        assert_eq!(theater::show("s1"), "/shows/s1");
    }
}
