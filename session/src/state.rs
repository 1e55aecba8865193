//! Session state types.
//!
//! One slice per role. Every slice embeds the same [`SessionState`] so the
//! shared rejection helper can work on any of them.

use cinepass_api::{
    ClassifiedError, TempMail,
    types::{Movie, Owner, PendingBooking, TheaterSummary},
};

// ═══════════════════════════════════════════════════════════════════════
// Listing
// ═══════════════════════════════════════════════════════════════════════

/// Collection fetched from the server
///
/// `NotFound` and an empty `Loaded` list mean different things to the UI:
/// the first renders a "nothing in this city" page, the second an empty grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    /// Never fetched, or the last fetch returned nothing
    Unset,
    /// The server answered 404
    NotFound,
    /// Rows from the last successful fetch
    Loaded(Vec<T>),
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Listing<T> {
    /// Rows, if loaded
    #[must_use]
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Loaded(items) => Some(items),
            Self::Unset | Self::NotFound => None,
        }
    }

    /// Whether the server answered 404
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════════════════

/// State shared by every role
///
/// `is_authenticated` and `profile` are not kept in lockstep: some
/// rejections only drop the flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Profile from the last successful login or profile fetch
    pub profile: Option<Owner>,
    /// Whether the server considers this client signed in
    pub is_authenticated: bool,
    /// Last error the UI should show
    pub error: Option<ClassifiedError>,
    /// Address awaiting OTP verification
    pub temp_mail: Option<TempMail>,
    /// Booking attempted while signed out, replayed after login
    pub booking_info: Option<PendingBooking>,
}

impl SessionState {
    /// Reset to the signed-out state, keeping nothing
    pub fn sign_out(&mut self) {
        self.error = None;
        self.is_authenticated = false;
        self.profile = None;
    }

    /// Mark signed in with `profile`
    pub fn sign_in(&mut self, profile: Option<Owner>) {
        self.error = None;
        self.is_authenticated = true;
        self.profile = profile;
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Role slices
// ═══════════════════════════════════════════════════════════════════════

/// Admin slice
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    /// Session
    pub session: SessionState,
}

/// Theater owner slice
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TheaterState {
    /// Session
    pub session: SessionState,
}

/// End user slice
#[derive(Debug, Clone, PartialEq)]
pub struct UserState {
    /// Session
    pub session: SessionState,
    /// Signed in through Google
    pub is_google_auth: bool,
    /// Selected city
    pub city: Option<String>,
    /// Movies running in the selected city
    pub movies: Listing<Movie>,
    /// Theaters in the selected city
    pub city_theaters: Listing<TheaterSummary>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            session: SessionState::default(),
            is_google_auth: false,
            city: None,
            movies: Listing::Unset,
            city_theaters: Listing::Loaded(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_state_starts_with_empty_theater_list() {
        let state = UserState::default();
        assert_eq!(state.movies, Listing::Unset);
        assert_eq!(state.city_theaters.items(), Some(&[][..]));
    }

    #[test]
    fn test_sign_out_clears_profile_and_error() {
        let mut session = SessionState {
            is_authenticated: true,
            error: Some(ClassifiedError::Generic("boom".to_string())),
            ..SessionState::default()
        };
        session.sign_out();
        assert!(!session.is_authenticated);
        assert!(session.error.is_none());
        assert!(session.profile.is_none());
    }

    #[test]
    fn test_listing_not_found() {
        let listing: Listing<u8> = Listing::NotFound;
        assert!(listing.is_not_found());
        assert!(listing.items().is_none());
    }
}
