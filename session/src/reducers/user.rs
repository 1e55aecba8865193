//! End user reducer.
//!
//! The user slice carries more than the session: the selected city, the
//! movies and theaters listed for it, and a booking attempted while signed
//! out so it can be replayed after login.
//!
//! Two listing calls (theater shows, single movie) only drop the
//! authenticated flag on 401/403 and leave the profile in place. Every other
//! authenticated-only call goes through [`handle_rejected`](super::handle_rejected).

use super::reject_session;
use crate::actions::{UserAction, UserOp, UserRequest, UserResponse};
use crate::environment::SessionEnvironment;
use crate::providers::UserGateway;
use crate::state::{Listing, UserState};
use cinepass_api::ClassifiedError;
use cinepass_core::effect::Effect;
use cinepass_core::reducer::Reducer;
use cinepass_core::{SmallVec, smallvec};
use std::marker::PhantomData;

/// End user reducer.
#[derive(Debug, Clone)]
pub struct UserReducer<G> {
    _gateway: PhantomData<fn() -> G>,
}

impl<G> UserReducer<G> {
    /// Create a new user reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _gateway: PhantomData,
        }
    }

    fn pending(state: &mut UserState, request: &UserRequest) {
        match request {
            UserRequest::Signup(_) | UserRequest::Login(_) | UserRequest::GoogleSignup(_) => {
                state.session.error = None;
            },
            UserRequest::BookTickets(booking) if !state.session.is_authenticated => {
                tracing::debug!(show_id = %booking.show_id, "Keeping booking until login");
                state.session.booking_info = Some(booking.clone());
            },
            _ => {},
        }
    }

    fn fulfilled(state: &mut UserState, response: UserResponse) {
        match response {
            UserResponse::Signup(envelope) => state.session.temp_mail = envelope.data,
            UserResponse::Login(envelope) => state.session.sign_in(envelope.data),
            UserResponse::GoogleSignup(envelope) => {
                state.session.sign_in(envelope.data);
                state.is_google_auth = true;
            },
            UserResponse::Logout(_) => state.session.sign_out(),
            UserResponse::GetProfile(envelope) | UserResponse::UpdateProfile(envelope) => {
                state.session.profile = envelope.data;
            },
            UserResponse::GetMovies(envelope) => {
                state.movies = match envelope.data {
                    Some(movies) if !movies.is_empty() => Listing::Loaded(movies),
                    _ => Listing::Unset,
                };
            },
            UserResponse::GetTheaters(envelope) => {
                state.city_theaters = Listing::Loaded(envelope.data.unwrap_or_default());
            },
            _ => {},
        }
    }

    fn rejected(state: &mut UserState, op: UserOp, error: ClassifiedError) {
        match op {
            UserOp::Signup | UserOp::Logout | UserOp::GoogleSignup => {
                state.session.error = Some(error);
            },
            UserOp::Login => {
                if error.is_otp_challenge() {
                    state.session.temp_mail = error.temp_mail();
                }
            },
            UserOp::GetTheaterShows | UserOp::GetSingleMovie => {
                if error.is_session_failure() {
                    state.session.is_authenticated = false;
                }
            },
            UserOp::GetMovies | UserOp::GetTheaters => {
                if error.is_not_found() {
                    state.movies = Listing::NotFound;
                    state.city_theaters = Listing::NotFound;
                } else {
                    reject_session(&mut state.session, &error);
                }
            },
            UserOp::GetProfile
            | UserOp::UpdateProfile
            | UserOp::BookTickets
            | UserOp::GetTickets
            | UserOp::CancelPayment
            | UserOp::PurchaseStream
            | UserOp::GetHlsUrl => reject_session(&mut state.session, &error),
            _ => {},
        }
    }
}

impl<G> Default for UserReducer<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Reducer for UserReducer<G>
where
    G: UserGateway + Clone + 'static,
{
    type State = UserState;
    type Action = UserAction;
    type Environment = SessionEnvironment<G>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            UserAction::Request(request) => {
                let op = request.op();
                Self::pending(state, &request);

                tracing::debug!(?op, "User request");
                let gateway = env.gateway.clone();
                smallvec![Effect::future(async move {
                    match gateway.execute(request).await {
                        Ok(response) => UserAction::Fulfilled(response),
                        Err(error) => UserAction::Rejected { op, error },
                    }
                })]
            },
            UserAction::Fulfilled(response) => {
                Self::fulfilled(state, response);
                smallvec![Effect::None]
            },
            UserAction::Rejected { op, error } => {
                tracing::debug!(?op, %error, "User request rejected");
                Self::rejected(state, op, error);
                smallvec![Effect::None]
            },
            UserAction::ClearError => {
                state.session.error = None;
                smallvec![Effect::None]
            },
            UserAction::SetError(error) => {
                state.session.error = Some(error);
                smallvec![Effect::None]
            },
            UserAction::ToggleAuthenticated => {
                state.session.is_authenticated = !state.session.is_authenticated;
                smallvec![Effect::None]
            },
            UserAction::ClearTempMail => {
                state.session.temp_mail = None;
                smallvec![Effect::None]
            },
            UserAction::SetCity(city) => {
                state.city = Some(city);
                smallvec![Effect::None]
            },
            UserAction::ResetBookingInfo => {
                state.session.booking_info = None;
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mocks::MockUserGateway;
    use crate::reducers::handle_rejected;
    use crate::state::SessionState;
    use cinepass_api::{
        Envelope, ErrorBody, MovieFilter,
        types::{GoogleSignUp, Movie, Owner, PendingBooking, TheaterSummary},
    };
    use cinepass_testing::{ReducerTest, assertions, resolve_effect};
    use proptest::prelude::*;
    use serde_json::json;

    type TestReducer = UserReducer<MockUserGateway>;

    fn env() -> SessionEnvironment<MockUserGateway> {
        SessionEnvironment::new(MockUserGateway::new())
    }

    fn user() -> Owner {
        serde_json::from_value(json!({"_id": "u1", "name": "Asha", "email": "asha@cinepass.in"}))
            .unwrap()
    }

    fn movie() -> Movie {
        serde_json::from_value(json!({
            "_id": "m1",
            "movie_name": "Aadujeevitham",
            "release_date": "2024-03-28T00:00:00Z",
            "run_time": "172",
            "genres": ["drama"],
            "languages": ["malayalam"],
            "format": ["2D"]
        }))
        .unwrap()
    }

    fn booking() -> PendingBooking {
        PendingBooking {
            show_id: "s1".to_string(),
            booking_date: "2025-01-05".to_string(),
            selected_seats: vec!["A1".to_string(), "A2".to_string()],
        }
    }

    fn signed_in() -> UserState {
        UserState {
            session: SessionState {
                profile: Some(user()),
                is_authenticated: true,
                booking_info: Some(booking()),
                ..SessionState::default()
            },
            city: Some("Kochi".to_string()),
            ..UserState::default()
        }
    }

    fn http(status: u16, body: serde_json::Value) -> ClassifiedError {
        ClassifiedError::Http {
            status,
            body: serde_json::from_value::<ErrorBody>(body).unwrap(),
        }
    }

    #[test]
    fn test_google_signup_flags_google_auth() {
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Fulfilled(UserResponse::GoogleSignup(Envelope::success(
                "Welcome",
                user(),
            ))))
            .then_state(|s| {
                assert!(s.is_google_auth);
                assert!(s.session.is_authenticated);
                assert_eq!(s.session.profile, Some(user()));
            })
            .run();
    }

    #[test]
    fn test_login_otp_challenge_records_temp_mail() {
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Rejected {
                op: UserOp::Login,
                error: http(
                    401,
                    json!({"error": "otp", "message": "Verify your email", "tempMail": {"email": "asha@cinepass.in"}}),
                ),
            })
            .then_state(|s| {
                assert!(!s.session.is_authenticated);
                assert!(s.session.error.is_none());
                assert_eq!(
                    s.session.temp_mail.as_ref().map(|t| t.email.as_str()),
                    Some("asha@cinepass.in")
                );
            })
            .run();
    }

    #[test]
    fn test_signup_rejected_records_error() {
        let error = http(400, json!({"error": "email", "message": "Email taken"}));
        let expected = error.clone();
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Rejected {
                op: UserOp::Signup,
                error,
            })
            .then_state(move |s| assert_eq!(s.session.error, Some(expected)))
            .run();
    }

    #[test]
    fn test_logout_fulfilled_is_unconditional() {
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(signed_in())
            .when_action(UserAction::SetError(ClassifiedError::Generic("stale".to_string())))
            .when_action(UserAction::Fulfilled(UserResponse::Logout(Envelope::success(
                "Bye",
                json!(null),
            ))))
            .then_state(|s| {
                assert!(!s.session.is_authenticated);
                assert!(s.session.profile.is_none());
                assert!(s.session.error.is_none());
            })
            .run();
    }

    #[test]
    fn test_listing_rejection_only_drops_flag() {
        for op in [UserOp::GetTheaterShows, UserOp::GetSingleMovie] {
            ReducerTest::new(TestReducer::new())
                .with_env(env())
                .given_state(signed_in())
                .when_action(UserAction::Rejected {
                    op,
                    error: http(403, json!({"message": "Forbidden"})),
                })
                .then_state(|s| {
                    assert!(!s.session.is_authenticated);
                    assert_eq!(s.session.profile, Some(user()));
                    assert!(s.session.booking_info.is_some());
                })
                .run();
        }
    }

    #[test]
    fn test_city_not_found_marks_both_listings() {
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(signed_in())
            .when_action(UserAction::Fulfilled(UserResponse::GetMovies(Envelope::success(
                "ok",
                vec![movie()],
            ))))
            .when_action(UserAction::Rejected {
                op: UserOp::GetTheaters,
                error: http(404, json!({"message": "No theaters in this city"})),
            })
            .then_state(|s| {
                assert!(s.movies.is_not_found());
                assert!(s.city_theaters.is_not_found());
                assert!(s.session.is_authenticated);
            })
            .run();
    }

    #[test]
    fn test_movies_fulfilled() {
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Fulfilled(UserResponse::GetMovies(Envelope::success(
                "ok",
                vec![movie()],
            ))))
            .when_action(UserAction::Fulfilled(UserResponse::GetTheaters(Envelope::success(
                "ok",
                vec![TheaterSummary {
                    id: "t1".to_string(),
                    theater_name: "PVR Lulu".to_string(),
                    city: "Kochi".to_string(),
                    address: None,
                }],
            ))))
            .then_state(|s| {
                assert_eq!(s.movies.items().map(<[Movie]>::len), Some(1));
                assert_eq!(s.city_theaters.items().map(<[TheaterSummary]>::len), Some(1));
            })
            .run();

        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Fulfilled(UserResponse::GetMovies(Envelope::success(
                "ok",
                Vec::new(),
            ))))
            .then_state(|s| assert_eq!(s.movies, Listing::Unset))
            .run();
    }

    #[test]
    fn test_booking_while_anonymous_is_kept() {
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Request(UserRequest::BookTickets(booking())))
            .then_state(|s| assert_eq!(s.session.booking_info, Some(booking())))
            .then_effects(|effects| assertions::assert_has_future_effect(effects))
            .run();

        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::Request(UserRequest::BookTickets(booking())))
            .when_action(UserAction::ResetBookingInfo)
            .then_state(|s| assert!(s.session.booking_info.is_none()))
            .run();
    }

    #[test]
    fn test_booking_while_signed_in_is_not_kept() {
        let mut state = signed_in();
        state.session.booking_info = None;
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(state)
            .when_action(UserAction::Request(UserRequest::BookTickets(booking())))
            .then_state(|s| assert!(s.session.booking_info.is_none()))
            .run();
    }

    #[test]
    fn test_set_city() {
        ReducerTest::new(TestReducer::new())
            .with_env(env())
            .given_state(UserState::default())
            .when_action(UserAction::SetCity("Kochi".to_string()))
            .when_action(UserAction::SetCity("Chennai".to_string()))
            .then_state(|s| assert_eq!(s.city.as_deref(), Some("Chennai")))
            .then_effects(|effects| assertions::assert_no_effects(effects))
            .run();
    }

    #[tokio::test]
    async fn test_google_signup_request_round_trip() {
        let gateway =
            MockUserGateway::new().respond(UserResponse::GoogleSignup(Envelope::success("Welcome", user())));
        let environment = SessionEnvironment::new(gateway.clone());
        let reducer = TestReducer::new();
        let mut state = UserState::default();

        let effects = reducer.reduce(
            &mut state,
            UserAction::Request(UserRequest::GoogleSignup(GoogleSignUp {
                token: "google-credential".to_string(),
            })),
            &environment,
        );
        let outcome = resolve_effect(effects).await.unwrap();
        let _ = reducer.reduce(&mut state, outcome, &environment);

        assert!(state.session.is_authenticated);
        assert!(state.is_google_auth);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_movies_request_not_found() {
        let gateway =
            MockUserGateway::new().fail(http(404, json!({"message": "No movies in this city"})));
        let environment = SessionEnvironment::new(gateway);
        let reducer = TestReducer::new();
        let mut state = signed_in();

        let effects = reducer.reduce(
            &mut state,
            UserAction::Request(UserRequest::GetMovies {
                city: "Kochi".to_string(),
                filter: MovieFilter::default(),
            }),
            &environment,
        );
        let outcome = resolve_effect(effects).await.unwrap();
        let _ = reducer.reduce(&mut state, outcome, &environment);

        assert!(state.movies.is_not_found());
        assert!(state.city_theaters.is_not_found());
    }

    fn authenticated_only_op() -> impl Strategy<Value = UserOp> {
        prop_oneof![
            Just(UserOp::GetProfile),
            Just(UserOp::UpdateProfile),
            Just(UserOp::BookTickets),
            Just(UserOp::GetTickets),
            Just(UserOp::CancelPayment),
            Just(UserOp::PurchaseStream),
            Just(UserOp::GetHlsUrl),
        ]
    }

    proptest! {
        #[test]
        fn prop_forbidden_always_signs_out(op in authenticated_only_op(), message in "[a-z ]{0,20}") {
            let reducer = TestReducer::new();
            let mut state = signed_in();
            let error = ClassifiedError::Http { status: 403, body: ErrorBody::message(message) };

            let _ = reducer.reduce(&mut state, UserAction::Rejected { op, error: error.clone() }, &env());

            prop_assert!(!state.session.is_authenticated);
            prop_assert!(state.session.profile.is_none());
            prop_assert!(state.session.booking_info.is_none());
            prop_assert_eq!(&state.session, &handle_rejected(signed_in().session, &error));
        }

        #[test]
        fn prop_non_session_errors_keep_session(op in authenticated_only_op(), status in 405u16..600) {
            let reducer = TestReducer::new();
            let mut state = signed_in();
            let error = ClassifiedError::Http { status, body: ErrorBody::message("nope") };

            let _ = reducer.reduce(&mut state, UserAction::Rejected { op, error }, &env());

            prop_assert_eq!(state, signed_in());
        }
    }
}
