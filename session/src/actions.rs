//! Actions for the three role slices.
//!
//! Every remote operation appears three times: as a request (what the UI
//! asks for), as a response carrying the server envelope, and as an `Op`
//! tag naming it in a rejection. `Request` actions are turned into a
//! gateway call by the reducer; the call comes back as `Fulfilled` or
//! `Rejected`.

use cinepass_api::{
    ClassifiedError, Envelope, MovieFilter, ProfileUpdate, TempMail, TicketFilter,
    types::{
        ApprovalStatus, CountStats, EntityId, EntityKind, EntityPage, GoogleSignUp, HlsUrl,
        LoginData, Movie, MovieInput, MovieShow, MovieType, OtpVerification, Owner, PaymentIntent,
        PendingBooking, RevenueReport, Screen, ScreenInput, ShowInput, SignUpData, StreamingMovie,
        StreamingMovies, TheaterDetails, TheaterSummary, UserTicket,
    },
};
use serde_json::Value;

// ═══════════════════════════════════════════════════════════════════════
// Admin
// ═══════════════════════════════════════════════════════════════════════

/// Admin remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminOp {
    /// Sign in
    Login,
    /// Sign out
    Logout,
    /// Page of users/theaters
    GetEntities,
    /// Approve/reject a theater
    UpdateApproval,
    /// Block/unblock an entity
    SetBlocked,
    /// Create a movie
    AddMovie,
    /// Page of movies
    GetMovies,
    /// Replace a movie
    UpdateMovie,
    /// Delete a movie
    DeleteMovie,
}

/// Admin request payloads
#[derive(Debug, Clone, PartialEq)]
pub enum AdminRequest {
    /// Sign in
    Login(LoginData),
    /// Sign out
    Logout,
    /// Page of users/theaters
    GetEntities {
        /// Users or theaters
        kind: EntityKind,
        /// 1-based page
        page: Option<u32>,
    },
    /// Approve/reject a theater
    UpdateApproval {
        /// Theater owner id
        owner_id: String,
        /// Decision
        status: ApprovalStatus,
    },
    /// Block/unblock an entity
    SetBlocked {
        /// Users or theaters
        kind: EntityKind,
        /// Entity id
        entity_id: String,
        /// New flag
        blocked: bool,
    },
    /// Create a movie
    AddMovie {
        /// Theater or stream catalogue
        movie_type: MovieType,
        /// Movie body
        movie: MovieInput,
    },
    /// Page of movies
    GetMovies {
        /// Theater or stream catalogue
        movie_type: MovieType,
        /// 1-based page
        page: Option<u32>,
    },
    /// Replace a movie
    UpdateMovie {
        /// Theater or stream catalogue
        movie_type: MovieType,
        /// Movie id
        movie_id: String,
        /// Movie body
        movie: MovieInput,
    },
    /// Delete a movie
    DeleteMovie {
        /// Theater or stream catalogue
        movie_type: MovieType,
        /// Movie id
        movie_id: String,
    },
}

impl AdminRequest {
    /// Operation tag
    #[must_use]
    pub const fn op(&self) -> AdminOp {
        match self {
            Self::Login(_) => AdminOp::Login,
            Self::Logout => AdminOp::Logout,
            Self::GetEntities { .. } => AdminOp::GetEntities,
            Self::UpdateApproval { .. } => AdminOp::UpdateApproval,
            Self::SetBlocked { .. } => AdminOp::SetBlocked,
            Self::AddMovie { .. } => AdminOp::AddMovie,
            Self::GetMovies { .. } => AdminOp::GetMovies,
            Self::UpdateMovie { .. } => AdminOp::UpdateMovie,
            Self::DeleteMovie { .. } => AdminOp::DeleteMovie,
        }
    }
}

/// Admin responses
#[derive(Debug, Clone, PartialEq)]
pub enum AdminResponse {
    /// Signed in
    Login(Envelope<Owner>),
    /// Signed out
    Logout(Envelope<Value>),
    /// Page of users/theaters
    GetEntities(Envelope<EntityPage<Owner>>),
    /// Updated theater owner
    UpdateApproval(Envelope<Owner>),
    /// Id of the toggled entity
    SetBlocked(Envelope<EntityId>),
    /// Created movie
    AddMovie(Envelope<Movie>),
    /// Page of movies
    GetMovies(Envelope<EntityPage<Movie>>),
    /// Updated movie
    UpdateMovie(Envelope<Movie>),
    /// Deleted
    DeleteMovie(Envelope<Value>),
}

impl AdminResponse {
    /// Operation tag
    #[must_use]
    pub const fn op(&self) -> AdminOp {
        match self {
            Self::Login(_) => AdminOp::Login,
            Self::Logout(_) => AdminOp::Logout,
            Self::GetEntities(_) => AdminOp::GetEntities,
            Self::UpdateApproval(_) => AdminOp::UpdateApproval,
            Self::SetBlocked(_) => AdminOp::SetBlocked,
            Self::AddMovie(_) => AdminOp::AddMovie,
            Self::GetMovies(_) => AdminOp::GetMovies,
            Self::UpdateMovie(_) => AdminOp::UpdateMovie,
            Self::DeleteMovie(_) => AdminOp::DeleteMovie,
        }
    }
}

/// Admin slice actions
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    /// Start a remote operation
    Request(AdminRequest),
    /// Remote operation succeeded
    Fulfilled(AdminResponse),
    /// Remote operation failed
    Rejected {
        /// Which operation
        op: AdminOp,
        /// Why
        error: ClassifiedError,
    },
    /// Drop the current error
    ClearError,
    /// Show an error
    SetError(ClassifiedError),
    /// Flip `is_authenticated`
    ToggleAuthenticated,
    /// Drop the pending OTP address
    ClearTempMail,
}

// ═══════════════════════════════════════════════════════════════════════
// Theater
// ═══════════════════════════════════════════════════════════════════════

/// Theater owner remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TheaterOp {
    /// Register
    Signup,
    /// Sign in
    Login,
    /// Sign out
    Logout,
    /// Submit OTP
    VerifyOtp,
    /// Fresh OTP
    ResendOtp,
    /// Reset link
    ForgotPassword,
    /// New password
    ResetPassword,
    /// Theater profile
    GetDetails,
    /// Update theater profile
    UpdateDetails,
    /// Add screen
    CreateScreen,
    /// List screens
    GetScreens,
    /// Replace screen
    UpdateScreen,
    /// Delete screen
    DeleteScreen,
    /// Movies available for scheduling
    GetMovies,
    /// List shows
    GetShows,
    /// Schedule show
    AddShow,
    /// Reschedule show
    UpdateShow,
    /// Cancel show
    DeleteShow,
    /// Dashboard counters
    GetCountStats,
    /// Revenue per screen
    GetRevenueByScreen,
}

impl TheaterOp {
    /// Only reachable with a live session
    #[must_use]
    pub const fn requires_session(self) -> bool {
        !matches!(
            self,
            Self::Signup
                | Self::Login
                | Self::Logout
                | Self::VerifyOtp
                | Self::ResendOtp
                | Self::ForgotPassword
                | Self::ResetPassword
        )
    }
}

/// Theater owner request payloads
#[derive(Debug, Clone, PartialEq)]
pub enum TheaterRequest {
    /// Register
    Signup(SignUpData),
    /// Sign in
    Login(LoginData),
    /// Sign out
    Logout,
    /// Submit OTP
    VerifyOtp(OtpVerification),
    /// Fresh OTP
    ResendOtp {
        /// Address
        email: String,
    },
    /// Reset link
    ForgotPassword {
        /// Address
        email: String,
    },
    /// New password
    ResetPassword {
        /// Token from the reset link
        token: String,
        /// New password
        password: String,
    },
    /// Theater profile
    GetDetails,
    /// Update theater profile
    UpdateDetails(TheaterDetails),
    /// Add screen
    CreateScreen(ScreenInput),
    /// List screens
    GetScreens {
        /// Amenity filter
        amenity: Option<String>,
    },
    /// Replace screen
    UpdateScreen {
        /// Screen id
        screen_id: String,
        /// Screen body
        screen: ScreenInput,
    },
    /// Delete screen
    DeleteScreen {
        /// Screen id
        screen_id: String,
    },
    /// Movies available for scheduling
    GetMovies(MovieType),
    /// List shows
    GetShows,
    /// Schedule show
    AddShow(ShowInput),
    /// Reschedule show
    UpdateShow {
        /// Show id
        show_id: String,
        /// Show body
        show: ShowInput,
    },
    /// Cancel show
    DeleteShow {
        /// Show id
        show_id: String,
    },
    /// Dashboard counters
    GetCountStats,
    /// Revenue per screen
    GetRevenueByScreen,
}

impl TheaterRequest {
    /// Operation tag
    #[must_use]
    pub const fn op(&self) -> TheaterOp {
        match self {
            Self::Signup(_) => TheaterOp::Signup,
            Self::Login(_) => TheaterOp::Login,
            Self::Logout => TheaterOp::Logout,
            Self::VerifyOtp(_) => TheaterOp::VerifyOtp,
            Self::ResendOtp { .. } => TheaterOp::ResendOtp,
            Self::ForgotPassword { .. } => TheaterOp::ForgotPassword,
            Self::ResetPassword { .. } => TheaterOp::ResetPassword,
            Self::GetDetails => TheaterOp::GetDetails,
            Self::UpdateDetails(_) => TheaterOp::UpdateDetails,
            Self::CreateScreen(_) => TheaterOp::CreateScreen,
            Self::GetScreens { .. } => TheaterOp::GetScreens,
            Self::UpdateScreen { .. } => TheaterOp::UpdateScreen,
            Self::DeleteScreen { .. } => TheaterOp::DeleteScreen,
            Self::GetMovies(_) => TheaterOp::GetMovies,
            Self::GetShows => TheaterOp::GetShows,
            Self::AddShow(_) => TheaterOp::AddShow,
            Self::UpdateShow { .. } => TheaterOp::UpdateShow,
            Self::DeleteShow { .. } => TheaterOp::DeleteShow,
            Self::GetCountStats => TheaterOp::GetCountStats,
            Self::GetRevenueByScreen => TheaterOp::GetRevenueByScreen,
        }
    }
}

/// Theater owner responses
#[derive(Debug, Clone, PartialEq)]
pub enum TheaterResponse {
    /// OTP sent
    Signup(Envelope<TempMail>),
    /// Signed in
    Login(Envelope<Owner>),
    /// Signed out
    Logout(Envelope<Value>),
    /// OTP accepted
    VerifyOtp(Envelope<Value>),
    /// OTP re-sent
    ResendOtp(Envelope<Value>),
    /// Reset link sent
    ForgotPassword(Envelope<Value>),
    /// Password changed
    ResetPassword(Envelope<Value>),
    /// Theater profile
    GetDetails(Envelope<TheaterDetails>),
    /// Updated profile
    UpdateDetails(Envelope<TheaterDetails>),
    /// Created screen
    CreateScreen(Envelope<Screen>),
    /// Screens
    GetScreens(Envelope<Vec<Screen>>),
    /// Updated screen
    UpdateScreen(Envelope<Screen>),
    /// Deleted
    DeleteScreen(Envelope<Value>),
    /// Movies available for scheduling
    GetMovies(Envelope<Vec<Movie>>),
    /// Shows
    GetShows(Envelope<Vec<MovieShow>>),
    /// Created show
    AddShow(Envelope<MovieShow>),
    /// Updated show
    UpdateShow(Envelope<MovieShow>),
    /// Deleted
    DeleteShow(Envelope<Value>),
    /// Dashboard counters
    GetCountStats(Envelope<CountStats>),
    /// Revenue per screen
    GetRevenueByScreen(Envelope<RevenueReport>),
}

impl TheaterResponse {
    /// Operation tag
    #[must_use]
    pub const fn op(&self) -> TheaterOp {
        match self {
            Self::Signup(_) => TheaterOp::Signup,
            Self::Login(_) => TheaterOp::Login,
            Self::Logout(_) => TheaterOp::Logout,
            Self::VerifyOtp(_) => TheaterOp::VerifyOtp,
            Self::ResendOtp(_) => TheaterOp::ResendOtp,
            Self::ForgotPassword(_) => TheaterOp::ForgotPassword,
            Self::ResetPassword(_) => TheaterOp::ResetPassword,
            Self::GetDetails(_) => TheaterOp::GetDetails,
            Self::UpdateDetails(_) => TheaterOp::UpdateDetails,
            Self::CreateScreen(_) => TheaterOp::CreateScreen,
            Self::GetScreens(_) => TheaterOp::GetScreens,
            Self::UpdateScreen(_) => TheaterOp::UpdateScreen,
            Self::DeleteScreen(_) => TheaterOp::DeleteScreen,
            Self::GetMovies(_) => TheaterOp::GetMovies,
            Self::GetShows(_) => TheaterOp::GetShows,
            Self::AddShow(_) => TheaterOp::AddShow,
            Self::UpdateShow(_) => TheaterOp::UpdateShow,
            Self::DeleteShow(_) => TheaterOp::DeleteShow,
            Self::GetCountStats(_) => TheaterOp::GetCountStats,
            Self::GetRevenueByScreen(_) => TheaterOp::GetRevenueByScreen,
        }
    }
}

/// Theater owner slice actions
#[derive(Debug, Clone, PartialEq)]
pub enum TheaterAction {
    /// Start a remote operation
    Request(TheaterRequest),
    /// Remote operation succeeded
    Fulfilled(TheaterResponse),
    /// Remote operation failed
    Rejected {
        /// Which operation
        op: TheaterOp,
        /// Why
        error: ClassifiedError,
    },
    /// Drop the current error
    ClearError,
    /// Show an error
    SetError(ClassifiedError),
    /// Flip `is_authenticated`
    ToggleAuthenticated,
    /// Drop the pending OTP address
    ClearTempMail,
}

// ═══════════════════════════════════════════════════════════════════════
// User
// ═══════════════════════════════════════════════════════════════════════

/// End user remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserOp {
    /// Register
    Signup,
    /// Sign in
    Login,
    /// Sign out
    Logout,
    /// Submit OTP
    VerifyOtp,
    /// Fresh OTP
    ResendOtp,
    /// Reset link
    ForgotPassword,
    /// New password
    ResetPassword,
    /// Google identity exchange
    GoogleSignup,
    /// Cities
    GetCities,
    /// Shows of one theater
    GetTheaterShows,
    /// One show
    GetSingleShow,
    /// Movies in a city
    GetMovies,
    /// One movie in a city
    GetSingleMovie,
    /// Theaters in a city
    GetTheaters,
    /// Own profile
    GetProfile,
    /// Update own profile
    UpdateProfile,
    /// Reserve seats
    BookTickets,
    /// Booked tickets
    GetTickets,
    /// Cancel payment intent
    CancelPayment,
    /// Streaming catalogue
    GetStreamingMovies,
    /// One streaming movie
    GetStreamingMovie,
    /// Buy a streaming movie
    PurchaseStream,
    /// Playback URL
    GetHlsUrl,
}

/// End user request payloads
#[derive(Debug, Clone, PartialEq)]
pub enum UserRequest {
    /// Register
    Signup(SignUpData),
    /// Sign in
    Login(LoginData),
    /// Sign out
    Logout,
    /// Submit OTP
    VerifyOtp(OtpVerification),
    /// Fresh OTP
    ResendOtp {
        /// Address
        email: String,
    },
    /// Reset link
    ForgotPassword {
        /// Address
        email: String,
    },
    /// New password
    ResetPassword {
        /// Token from the reset link, if any
        token: Option<String>,
        /// New password
        password: String,
    },
    /// Google identity exchange
    GoogleSignup(GoogleSignUp),
    /// Cities
    GetCities,
    /// Shows of one theater
    GetTheaterShows {
        /// City
        city: String,
        /// Theater id
        theater_id: String,
    },
    /// One show
    GetSingleShow {
        /// City
        city: String,
        /// Show id
        show_id: String,
        /// Filters
        filter: MovieFilter,
    },
    /// Movies in a city
    GetMovies {
        /// City
        city: String,
        /// Filters
        filter: MovieFilter,
    },
    /// One movie in a city
    GetSingleMovie {
        /// City
        city: String,
        /// Movie id
        movie_id: String,
        /// Filters
        filter: MovieFilter,
    },
    /// Theaters in a city
    GetTheaters {
        /// City
        city: String,
    },
    /// Own profile
    GetProfile,
    /// Update own profile
    UpdateProfile(ProfileUpdate),
    /// Reserve seats
    BookTickets(PendingBooking),
    /// Booked tickets
    GetTickets(TicketFilter),
    /// Cancel payment intent
    CancelPayment {
        /// Intent id
        payment_intent_id: String,
    },
    /// Streaming catalogue
    GetStreamingMovies,
    /// One streaming movie
    GetStreamingMovie {
        /// Movie id
        movie_id: String,
    },
    /// Buy a streaming movie
    PurchaseStream {
        /// Movie id
        movie_id: String,
    },
    /// Playback URL
    GetHlsUrl {
        /// Movie id
        movie_id: String,
        /// Media asset id
        public_id: String,
    },
}

impl UserRequest {
    /// Operation tag
    #[must_use]
    pub const fn op(&self) -> UserOp {
        match self {
            Self::Signup(_) => UserOp::Signup,
            Self::Login(_) => UserOp::Login,
            Self::Logout => UserOp::Logout,
            Self::VerifyOtp(_) => UserOp::VerifyOtp,
            Self::ResendOtp { .. } => UserOp::ResendOtp,
            Self::ForgotPassword { .. } => UserOp::ForgotPassword,
            Self::ResetPassword { .. } => UserOp::ResetPassword,
            Self::GoogleSignup(_) => UserOp::GoogleSignup,
            Self::GetCities => UserOp::GetCities,
            Self::GetTheaterShows { .. } => UserOp::GetTheaterShows,
            Self::GetSingleShow { .. } => UserOp::GetSingleShow,
            Self::GetMovies { .. } => UserOp::GetMovies,
            Self::GetSingleMovie { .. } => UserOp::GetSingleMovie,
            Self::GetTheaters { .. } => UserOp::GetTheaters,
            Self::GetProfile => UserOp::GetProfile,
            Self::UpdateProfile(_) => UserOp::UpdateProfile,
            Self::BookTickets(_) => UserOp::BookTickets,
            Self::GetTickets(_) => UserOp::GetTickets,
            Self::CancelPayment { .. } => UserOp::CancelPayment,
            Self::GetStreamingMovies => UserOp::GetStreamingMovies,
            Self::GetStreamingMovie { .. } => UserOp::GetStreamingMovie,
            Self::PurchaseStream { .. } => UserOp::PurchaseStream,
            Self::GetHlsUrl { .. } => UserOp::GetHlsUrl,
        }
    }
}

/// End user responses
#[derive(Debug, Clone, PartialEq)]
pub enum UserResponse {
    /// OTP sent
    Signup(Envelope<TempMail>),
    /// Signed in
    Login(Envelope<Owner>),
    /// Signed out
    Logout(Envelope<Value>),
    /// OTP accepted
    VerifyOtp(Envelope<Value>),
    /// OTP re-sent
    ResendOtp(Envelope<Value>),
    /// Reset link sent
    ForgotPassword(Envelope<Value>),
    /// Password changed
    ResetPassword(Envelope<Value>),
    /// Signed in through Google
    GoogleSignup(Envelope<Owner>),
    /// Cities
    GetCities(Envelope<Vec<String>>),
    /// Shows of one theater
    GetTheaterShows(Envelope<Vec<MovieShow>>),
    /// One show
    GetSingleShow(Envelope<MovieShow>),
    /// Movies in a city
    GetMovies(Envelope<Vec<Movie>>),
    /// One movie in a city
    GetSingleMovie(Envelope<Vec<Movie>>),
    /// Theaters in a city
    GetTheaters(Envelope<Vec<TheaterSummary>>),
    /// Own profile
    GetProfile(Envelope<Owner>),
    /// Updated profile
    UpdateProfile(Envelope<Owner>),
    /// Payment intent for the booking
    BookTickets(Envelope<PaymentIntent>),
    /// Booked tickets
    GetTickets(Envelope<EntityPage<UserTicket>>),
    /// Intent cancelled
    CancelPayment(Envelope<Value>),
    /// Streaming catalogue
    GetStreamingMovies(Envelope<StreamingMovies>),
    /// One streaming movie
    GetStreamingMovie(Envelope<StreamingMovie>),
    /// Payment intent for the purchase
    PurchaseStream(Envelope<PaymentIntent>),
    /// Playback URL
    GetHlsUrl(Envelope<HlsUrl>),
}

impl UserResponse {
    /// Operation tag
    #[must_use]
    pub const fn op(&self) -> UserOp {
        match self {
            Self::Signup(_) => UserOp::Signup,
            Self::Login(_) => UserOp::Login,
            Self::Logout(_) => UserOp::Logout,
            Self::VerifyOtp(_) => UserOp::VerifyOtp,
            Self::ResendOtp(_) => UserOp::ResendOtp,
            Self::ForgotPassword(_) => UserOp::ForgotPassword,
            Self::ResetPassword(_) => UserOp::ResetPassword,
            Self::GoogleSignup(_) => UserOp::GoogleSignup,
            Self::GetCities(_) => UserOp::GetCities,
            Self::GetTheaterShows(_) => UserOp::GetTheaterShows,
            Self::GetSingleShow(_) => UserOp::GetSingleShow,
            Self::GetMovies(_) => UserOp::GetMovies,
            Self::GetSingleMovie(_) => UserOp::GetSingleMovie,
            Self::GetTheaters(_) => UserOp::GetTheaters,
            Self::GetProfile(_) => UserOp::GetProfile,
            Self::UpdateProfile(_) => UserOp::UpdateProfile,
            Self::BookTickets(_) => UserOp::BookTickets,
            Self::GetTickets(_) => UserOp::GetTickets,
            Self::CancelPayment(_) => UserOp::CancelPayment,
            Self::GetStreamingMovies(_) => UserOp::GetStreamingMovies,
            Self::GetStreamingMovie(_) => UserOp::GetStreamingMovie,
            Self::PurchaseStream(_) => UserOp::PurchaseStream,
            Self::GetHlsUrl(_) => UserOp::GetHlsUrl,
        }
    }
}

/// End user slice actions
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Start a remote operation
    Request(UserRequest),
    /// Remote operation succeeded
    Fulfilled(UserResponse),
    /// Remote operation failed
    Rejected {
        /// Which operation
        op: UserOp,
        /// Why
        error: ClassifiedError,
    },
    /// Drop the current error
    ClearError,
    /// Show an error
    SetError(ClassifiedError),
    /// Flip `is_authenticated`
    ToggleAuthenticated,
    /// Drop the pending OTP address
    ClearTempMail,
    /// Select a city
    SetCity(String),
    /// Forget the booking attempted while signed out
    ResetBookingInfo,
}
