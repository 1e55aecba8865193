//! Gateways backed by the HTTP API wrappers.

use super::{AdminGateway, TheaterGateway, UserGateway};
use crate::actions::{
    AdminRequest, AdminResponse, TheaterRequest, TheaterResponse, UserRequest, UserResponse,
};
use cinepass_api::{AdminApi, ClassifiedError, TheaterApi, UserApi};
use std::future::Future;

impl AdminGateway for AdminApi {
    fn execute(
        &self,
        request: AdminRequest,
    ) -> impl Future<Output = Result<AdminResponse, ClassifiedError>> + Send {
        async move {
            Ok(match request {
                AdminRequest::Login(credentials) => AdminResponse::Login(self.login(&credentials).await?),
                AdminRequest::Logout => AdminResponse::Logout(self.logout().await?),
                AdminRequest::GetEntities { kind, page } => {
                    AdminResponse::GetEntities(self.entities(kind, page).await?)
                },
                AdminRequest::UpdateApproval { owner_id, status } => {
                    AdminResponse::UpdateApproval(self.update_approval(&owner_id, status).await?)
                },
                AdminRequest::SetBlocked {
                    kind,
                    entity_id,
                    blocked,
                } => AdminResponse::SetBlocked(self.set_blocked(kind, &entity_id, blocked).await?),
                AdminRequest::AddMovie { movie_type, movie } => {
                    AdminResponse::AddMovie(self.add_movie(movie_type, &movie).await?)
                },
                AdminRequest::GetMovies { movie_type, page } => {
                    AdminResponse::GetMovies(self.movies(movie_type, page).await?)
                },
                AdminRequest::UpdateMovie {
                    movie_type,
                    movie_id,
                    movie,
                } => AdminResponse::UpdateMovie(self.update_movie(movie_type, &movie_id, &movie).await?),
                AdminRequest::DeleteMovie {
                    movie_type,
                    movie_id,
                } => AdminResponse::DeleteMovie(self.delete_movie(movie_type, &movie_id).await?),
            })
        }
    }
}

impl TheaterGateway for TheaterApi {
    fn execute(
        &self,
        request: TheaterRequest,
    ) -> impl Future<Output = Result<TheaterResponse, ClassifiedError>> + Send {
        async move {
            Ok(match request {
                TheaterRequest::Signup(form) => TheaterResponse::Signup(self.signup(&form).await?),
                TheaterRequest::Login(credentials) => {
                    TheaterResponse::Login(self.login(&credentials).await?)
                },
                TheaterRequest::Logout => TheaterResponse::Logout(self.logout().await?),
                TheaterRequest::VerifyOtp(otp) => TheaterResponse::VerifyOtp(self.verify_otp(&otp).await?),
                TheaterRequest::ResendOtp { email } => {
                    TheaterResponse::ResendOtp(self.resend_otp(&email).await?)
                },
                TheaterRequest::ForgotPassword { email } => {
                    TheaterResponse::ForgotPassword(self.forgot_password(&email).await?)
                },
                TheaterRequest::ResetPassword { token, password } => {
                    TheaterResponse::ResetPassword(self.reset_password(&token, &password).await?)
                },
                TheaterRequest::GetDetails => TheaterResponse::GetDetails(self.details().await?),
                TheaterRequest::UpdateDetails(details) => {
                    TheaterResponse::UpdateDetails(self.update_details(&details).await?)
                },
                TheaterRequest::CreateScreen(screen) => {
                    TheaterResponse::CreateScreen(self.create_screen(&screen).await?)
                },
                TheaterRequest::GetScreens { amenity } => {
                    TheaterResponse::GetScreens(self.screens(amenity.as_deref()).await?)
                },
                TheaterRequest::UpdateScreen { screen_id, screen } => {
                    TheaterResponse::UpdateScreen(self.update_screen(&screen_id, &screen).await?)
                },
                TheaterRequest::DeleteScreen { screen_id } => {
                    TheaterResponse::DeleteScreen(self.delete_screen(&screen_id).await?)
                },
                TheaterRequest::GetMovies(movie_type) => {
                    TheaterResponse::GetMovies(self.movies(movie_type).await?)
                },
                TheaterRequest::GetShows => TheaterResponse::GetShows(self.shows().await?),
                TheaterRequest::AddShow(show) => TheaterResponse::AddShow(self.add_show(&show).await?),
                TheaterRequest::UpdateShow { show_id, show } => {
                    TheaterResponse::UpdateShow(self.update_show(&show_id, &show).await?)
                },
                TheaterRequest::DeleteShow { show_id } => {
                    TheaterResponse::DeleteShow(self.delete_show(&show_id).await?)
                },
                TheaterRequest::GetCountStats => TheaterResponse::GetCountStats(self.count_stats().await?),
                TheaterRequest::GetRevenueByScreen => {
                    TheaterResponse::GetRevenueByScreen(self.revenue_by_screen().await?)
                },
            })
        }
    }
}

impl UserGateway for UserApi {
    fn execute(
        &self,
        request: UserRequest,
    ) -> impl Future<Output = Result<UserResponse, ClassifiedError>> + Send {
        async move {
            Ok(match request {
                UserRequest::Signup(form) => UserResponse::Signup(self.signup(&form).await?),
                UserRequest::Login(credentials) => UserResponse::Login(self.login(&credentials).await?),
                UserRequest::Logout => UserResponse::Logout(self.logout().await?),
                UserRequest::VerifyOtp(otp) => UserResponse::VerifyOtp(self.verify_otp(&otp).await?),
                UserRequest::ResendOtp { email } => UserResponse::ResendOtp(self.resend_otp(&email).await?),
                UserRequest::ForgotPassword { email } => {
                    UserResponse::ForgotPassword(self.forgot_password(&email).await?)
                },
                UserRequest::ResetPassword { token, password } => UserResponse::ResetPassword(
                    self.reset_password(token.as_deref(), &password).await?,
                ),
                UserRequest::GoogleSignup(token) => {
                    UserResponse::GoogleSignup(self.google_signup(&token).await?)
                },
                UserRequest::GetCities => UserResponse::GetCities(self.cities().await?),
                UserRequest::GetTheaterShows { city, theater_id } => {
                    UserResponse::GetTheaterShows(self.theater_shows(&city, &theater_id).await?)
                },
                UserRequest::GetSingleShow {
                    city,
                    show_id,
                    filter,
                } => UserResponse::GetSingleShow(self.single_show(&city, &show_id, &filter).await?),
                UserRequest::GetMovies { city, filter } => {
                    UserResponse::GetMovies(self.movies(&city, &filter).await?)
                },
                UserRequest::GetSingleMovie {
                    city,
                    movie_id,
                    filter,
                } => UserResponse::GetSingleMovie(self.movie(&city, &movie_id, &filter).await?),
                UserRequest::GetTheaters { city } => UserResponse::GetTheaters(self.theaters(&city).await?),
                UserRequest::GetProfile => UserResponse::GetProfile(self.profile().await?),
                UserRequest::UpdateProfile(update) => {
                    UserResponse::UpdateProfile(self.update_profile(&update).await?)
                },
                UserRequest::BookTickets(booking) => {
                    UserResponse::BookTickets(self.book_tickets(&booking).await?)
                },
                UserRequest::GetTickets(filter) => UserResponse::GetTickets(self.tickets(&filter).await?),
                UserRequest::CancelPayment { payment_intent_id } => {
                    UserResponse::CancelPayment(self.cancel_payment(&payment_intent_id).await?)
                },
                UserRequest::GetStreamingMovies => {
                    UserResponse::GetStreamingMovies(self.streaming_movies().await?)
                },
                UserRequest::GetStreamingMovie { movie_id } => {
                    UserResponse::GetStreamingMovie(self.streaming_movie(&movie_id).await?)
                },
                UserRequest::PurchaseStream { movie_id } => {
                    UserResponse::PurchaseStream(self.purchase_stream(&movie_id).await?)
                },
                UserRequest::GetHlsUrl { movie_id, public_id } => {
                    UserResponse::GetHlsUrl(self.hls_url(&movie_id, &public_id).await?)
                },
            })
        }
    }
}
