//! Role stores driven end to end: request, gateway, outcome, state.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use cinepass_api::{
    ApiClient, ClassifiedError, Envelope, ErrorBody, UserApi,
    types::{CountStats, LoginData, Owner, PendingBooking, Role},
};
use cinepass_session::{
    DispatchError, Listing, SessionEnvironment, TheaterReducer, TheaterState, TheaterStore,
    UserReducer, UserState, UserStore, dispatch,
    actions::{TheaterRequest, TheaterResponse, UserRequest, UserResponse},
    mocks::{MockTheaterGateway, MockUserGateway},
};
use cinepass_runtime::{Store, StoreError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

fn owner(id: &str) -> Owner {
    serde_json::from_value(json!({"_id": id, "name": "Test", "email": "test@cinepass.in"})).unwrap()
}

fn forbidden() -> ClassifiedError {
    ClassifiedError::Http {
        status: 403,
        body: ErrorBody::message("Session expired"),
    }
}

fn theater_store(gateway: MockTheaterGateway) -> TheaterStore<MockTheaterGateway> {
    Store::new(
        TheaterState::default(),
        TheaterReducer::new(),
        SessionEnvironment::new(gateway),
    )
}

fn user_store<G>(state: UserState, gateway: G) -> UserStore<G>
where
    G: cinepass_session::providers::UserGateway + Clone + 'static,
{
    Store::new(state, UserReducer::new(), SessionEnvironment::new(gateway))
}

#[tokio::test]
async fn test_login_then_forbidden_stats_signs_out() {
    let gateway = MockTheaterGateway::new()
        .respond(TheaterResponse::Login(Envelope::success("Welcome", owner("t1"))))
        .fail(forbidden());
    let store = theater_store(gateway.clone());

    let response = dispatch(
        &store,
        TheaterRequest::Login(LoginData {
            email: "test@cinepass.in".to_string(),
            password: "pw".to_string(),
        }),
        TIMEOUT,
    )
    .await
    .unwrap();
    assert!(matches!(response, TheaterResponse::Login(_)));
    assert!(store.state(|s| s.session.is_authenticated).await);

    let error = dispatch(&store, TheaterRequest::GetCountStats, TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(error, DispatchError::Rejected(forbidden()));

    let session = store.state(|s| s.session.clone()).await;
    assert!(!session.is_authenticated);
    assert!(session.profile.is_none());
    assert_eq!(gateway.call_count(), 2);
}

#[tokio::test]
async fn test_each_dispatch_is_one_call() {
    let gateway = MockTheaterGateway::new()
        .respond(TheaterResponse::GetCountStats(Envelope::success(
            "ok",
            CountStats {
                screens: 3,
                shows: 12,
                bookings: 140,
            },
        )))
        .respond(TheaterResponse::GetCountStats(Envelope::success(
            "ok",
            CountStats {
                screens: 3,
                shows: 13,
                bookings: 141,
            },
        )));
    let store = theater_store(gateway.clone());

    for expected_shows in [12, 13] {
        let response = dispatch(&store, TheaterRequest::GetCountStats, TIMEOUT)
            .await
            .unwrap();
        let TheaterResponse::GetCountStats(envelope) = response else {
            panic!("unexpected response: {response:?}");
        };
        assert_eq!(envelope.into_data().unwrap().shows, expected_shows);
    }
    assert_eq!(gateway.call_count(), 2);
}

#[tokio::test]
async fn test_booking_kept_until_forbidden() {
    let booking = PendingBooking {
        show_id: "s1".to_string(),
        booking_date: "2025-01-05".to_string(),
        selected_seats: vec!["C4".to_string()],
    };
    let gateway = MockUserGateway::new().fail(forbidden());
    let store = user_store(UserState::default(), gateway);

    let error = dispatch(&store, UserRequest::BookTickets(booking.clone()), TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(error.classified().and_then(ClassifiedError::status), Some(403));
    assert!(store.state(|s| s.session.booking_info.is_none()).await);
}

#[tokio::test]
async fn test_dispatch_after_shutdown() {
    let store = user_store(UserState::default(), MockUserGateway::new());
    store.shutdown(TIMEOUT).await.unwrap();

    let error = dispatch(&store, UserRequest::GetCities, TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(error, DispatchError::Store(StoreError::ShutdownInProgress));
    assert!(error.classified().is_none());
}

#[tokio::test]
async fn test_cities_fulfilled_leaves_state_alone() {
    let gateway = MockUserGateway::new().respond(UserResponse::GetCities(Envelope::success(
        "ok",
        vec!["Kochi".to_string(), "Chennai".to_string()],
    )));
    let store = user_store(UserState::default(), gateway);

    let response = dispatch(&store, UserRequest::GetCities, TIMEOUT).await.unwrap();
    let UserResponse::GetCities(envelope) = response else {
        panic!("unexpected response: {response:?}");
    };
    assert_eq!(envelope.data.unwrap().len(), 2);
    assert_eq!(store.state(Clone::clone).await, UserState::default());
}

// ═══════════════════════════════════════════════════════════════════════
// Through the HTTP gateway
// ═══════════════════════════════════════════════════════════════════════

fn http_user_store(server: &MockServer, state: UserState) -> UserStore<UserApi> {
    let client = ApiClient::new(&server.uri(), "/user", Role::User, TIMEOUT).unwrap();
    user_store(state, UserApi::new(client))
}

#[tokio::test]
async fn test_http_city_without_theaters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/theater/Kochi"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "No theaters found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = http_user_store(&server, UserState::default());
    let error = dispatch(
        &store,
        UserRequest::GetTheaters {
            city: "Kochi".to_string(),
        },
        TIMEOUT,
    )
    .await
    .unwrap_err();

    assert_eq!(error.to_string(), "HTTP 404: No theaters found");
    let (movies, theaters) = store
        .state(|s| (s.movies.clone(), s.city_theaters.clone()))
        .await;
    assert_eq!(movies, Listing::NotFound);
    assert_eq!(theaters, Listing::NotFound);
}

#[tokio::test]
async fn test_http_profile_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Login again"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = UserState::default();
    state.session.is_authenticated = true;
    state.session.profile = Some(owner("u1"));
    let store = http_user_store(&server, state);

    let error = dispatch(&store, UserRequest::GetProfile, TIMEOUT)
        .await
        .unwrap_err();

    assert!(error.classified().is_some_and(ClassifiedError::is_session_failure));
    let session = store.state(|s| s.session.clone()).await;
    assert!(!session.is_authenticated);
    assert!(session.profile.is_none());
}

#[tokio::test]
async fn test_http_profile_fetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "ok",
            "data": {"user": {"_id": "u1", "name": "Asha", "email": "asha@cinepass.in"}}
        })))
        .mount(&server)
        .await;

    let store = http_user_store(&server, UserState::default());
    dispatch(&store, UserRequest::GetProfile, TIMEOUT).await.unwrap();

    let profile = store.state(|s| s.session.profile.clone()).await;
    assert_eq!(profile.map(|p| p.name), Some("Asha".to_string()));
}
