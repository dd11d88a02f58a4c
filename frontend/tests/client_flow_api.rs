#![cfg(not(coverage))]

use httpmock::prelude::*;
use serde_json::json;
use std::{sync::Arc, time::Duration};

use sportify_frontend::{
    api::{ApiClient, AuthGateway, LoginRequest, SportsApi},
    config::{Config, SportsDataMode},
    error::{AuthErrorKind, AuthFlowError, SportsError},
    sports::{build_gateway, MAX_MATCHES},
    state::{AuthService, SessionStatus},
    validation::RegistrationForm,
    App,
};

fn auth_service(server: &MockServer, timeout: Duration) -> AuthService {
    let client = ApiClient::new(server.base_url(), timeout).expect("client");
    AuthService::new(AuthGateway::new(Arc::new(client)))
}

fn registration() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        username: "annlee".into(),
        email: "ann@example.com".into(),
        password: "abcdef".into(),
        confirm_password: "abcdef".into(),
    }
}

#[tokio::test]
async fn login_over_http_authenticates_session() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .json_body(json!({ "username": "emilys", "password": "emilyspass" }));
            then.status(200).json_body(json!({
                "id": 1,
                "username": "emilys",
                "email": "emily.johnson@x.dummyjson.com",
                "firstName": "Emily",
                "lastName": "Johnson",
                "gender": "female",
                "image": "https://dummyjson.com/icon/emilys/128",
                "accessToken": "access-123",
                "refreshToken": "refresh-456"
            }));
        })
        .await;

    let auth = auth_service(&server, Duration::from_secs(5));
    auth.login(LoginRequest::new("emilys", "emilyspass"))
        .await
        .expect("login");

    login.assert_async().await;
    let session = auth.session();
    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(session.token(), Some("access-123"));
    assert_eq!(session.user().map(|u| u.last_name.as_str()), Some("Johnson"));
}

#[tokio::test]
async fn rejected_login_fails_session_with_upstream_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(400)
                .json_body(json!({ "message": "Invalid credentials" }));
        })
        .await;

    let auth = auth_service(&server, Duration::from_secs(5));
    let err = auth
        .login(LoginRequest::new("emilys", "nope"))
        .await
        .expect_err("rejected");

    match err {
        AuthFlowError::Auth(auth_err) => {
            assert_eq!(auth_err.kind, AuthErrorKind::InvalidCredentials)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let session = auth.session();
    assert_eq!(session.status(), SessionStatus::Failed);
    assert_eq!(session.error(), Some("Invalid credentials"));
    assert!(session.user().is_none());

    auth.clear_error();
    assert_eq!(auth.session().status(), SessionStatus::Idle);
}

#[tokio::test]
async fn slow_identity_endpoint_fails_with_network_reason() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({ "id": 1, "username": "bob", "accessToken": "x" }));
        })
        .await;

    let auth = auth_service(&server, Duration::from_millis(50));
    let err = auth
        .login(LoginRequest::new("bob", "secret"))
        .await
        .expect_err("timeout");

    assert!(matches!(
        err,
        AuthFlowError::Auth(ref e) if e.kind == AuthErrorKind::Network
    ));
    assert_eq!(auth.session().status(), SessionStatus::Failed);
}

#[tokio::test]
async fn registration_posts_user_and_gets_placeholder_token() {
    let server = MockServer::start_async().await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST).path("/users/add").json_body(json!({
                "firstName": "Ann",
                "lastName": "Lee",
                "username": "annlee",
                "email": "ann@example.com",
                "password": "abcdef",
                "image": "https://dummyjson.com/icon/annlee/128"
            }));
            then.status(201).json_body(json!({
                "id": 209,
                "firstName": "Ann",
                "lastName": "Lee",
                "username": "annlee",
                "email": "ann@example.com"
            }));
        })
        .await;

    let auth = auth_service(&server, Duration::from_secs(5));
    auth.register(registration()).await.expect("register");

    add.assert_async().await;
    let session = auth.session();
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.id), Some(209));
    assert!(session
        .token()
        .is_some_and(|token| token.starts_with("demo-token-")));
}

#[tokio::test]
async fn invalid_registration_never_calls_server() {
    let server = MockServer::start_async().await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST).path("/users/add");
            then.status(201).json_body(json!({ "id": 1 }));
        })
        .await;

    let auth = auth_service(&server, Duration::from_secs(5));
    let form = RegistrationForm {
        confirm_password: "abcdeg".into(),
        ..registration()
    };
    assert!(matches!(
        auth.register(form).await,
        Err(AuthFlowError::Validation(_))
    ));

    assert_eq!(add.hits_async().await, 0);
    assert_eq!(auth.session().status(), SessionStatus::Idle);
}

#[tokio::test]
async fn live_matches_are_truncated_in_upstream_order() {
    let server = MockServer::start_async().await;
    let events: Vec<_> = (0..15)
        .map(|i| {
            json!({
                "idEvent": format!("{}", 500 + i),
                "strEvent": format!("Home {} vs Away {}", i, i),
                "strHomeTeam": format!("Home {}", i),
                "strAwayTeam": format!("Away {}", i),
                "intHomeScore": "2",
                "intAwayScore": null,
                "dateEvent": "2024-01-20",
                "strStatus": "Match Finished"
            })
        })
        .collect();
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/1/eventsseason.php")
                .query_param("id", "4328")
                .query_param("s", "2023-2024");
            then.status(200).json_body(json!({ "events": events }));
        })
        .await;

    let client = ApiClient::new(server.base_url(), Duration::from_secs(5)).expect("client");
    let gateway = build_gateway(
        SportsDataMode::Live,
        SportsApi::new(Arc::new(client), "1"),
    );
    let matches = gateway
        .matches_by_league("4328", "2023-2024")
        .await
        .expect("matches");

    assert_eq!(matches.len(), MAX_MATCHES);
    assert_eq!(matches.first().map(|m| m.id.as_str()), Some("500"));
    assert_eq!(matches.last().map(|m| m.id.as_str()), Some("509"));
    assert!(matches[0].away_score.is_none());
}

#[tokio::test]
async fn live_teams_404_is_data_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/1/search_all_teams.php");
            then.status(404).body("Not Found");
        })
        .await;

    let client = ApiClient::new(server.base_url(), Duration::from_secs(5)).expect("client");
    let gateway = build_gateway(
        SportsDataMode::Live,
        SportsApi::new(Arc::new(client), "1"),
    );
    let err = gateway
        .teams_by_league("English Premier League")
        .await
        .expect_err("404");
    assert_eq!(
        err,
        SportsError::DataUnavailable {
            league: "English Premier League".into()
        }
    );
}

#[tokio::test]
async fn offline_app_serves_samples_without_touching_server() {
    let server = MockServer::start_async().await;
    let any = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(500);
        })
        .await;

    let config = Config::from_lookup(|key| match key {
        "SPORTS_API_BASE_URL" | "AUTH_API_BASE_URL" => Some(server.base_url()),
        _ => None,
    })
    .expect("config");
    let app = App::new(config).expect("app");

    let teams = app
        .sports
        .teams_by_league("English Premier League")
        .await
        .expect("teams");
    let matches = app
        .sports
        .matches_by_league("4328", "2023-2024")
        .await
        .expect("matches");

    assert_eq!(teams.len(), 4);
    assert_eq!(matches.len(), 3);
    assert_eq!(any.hits_async().await, 0);
}
