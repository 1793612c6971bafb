//! Integration tests for the session state container against a mock backend.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agromart_sdk::prelude::*;

fn identity_body() -> serde_json::Value {
    json!({
        "code": 0,
        "message": "ok",
        "data": {"id": 1, "username": "u", "roles": ["USER"]}
    })
}

fn profile_body() -> serde_json::Value {
    json!({
        "code": 0,
        "message": "ok",
        "data": {
            "id": 1,
            "username": "u",
            "nickname": "阿丽",
            "avatarUrl": null,
            "email": "u@example.com",
            "phone": null,
            "bio": null,
            "roles": ["USER"],
            "createdAt": "2024-05-01T08:00:00Z",
            "updatedAt": "2024-05-02T09:30:00Z"
        }
    })
}

async fn store(server: &MockServer) -> SessionStore {
    let client = AgromartClient::builder()
        .base_url(&server.uri())
        .build()
        .expect("client should build");
    SessionStore::new(client)
}

async fn mount_login_and_profile(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_populates_identity_and_chains_profile_fetch() {
    let server = MockServer::start().await;
    mount_login_and_profile(&server).await;

    let session = store(&server).await;
    assert!(!session.is_authenticated().await);

    session
        .login(&LoginRequest {
            username: "u".to_string(),
            password: "p".to_string(),
        })
        .await
        .unwrap();

    assert!(session.is_authenticated().await);
    let user = session.auth_user().await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.roles, vec![Role::User]);

    let profile = session.profile().await.unwrap();
    assert_eq!(profile.nickname.as_deref(), Some("阿丽"));
    assert_eq!(profile.email.as_deref(), Some("u@example.com"));

    assert!(!session.loading().await);
    assert!(session.error().await.is_none());
}

#[tokio::test]
async fn login_failure_clears_identity_and_reraises() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "bad credentials",
            "data": null
        })))
        .mount(&server)
        .await;

    let session = store(&server).await;
    let err = session
        .login(&LoginRequest {
            username: "u".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "bad credentials");
    assert!(!session.is_authenticated().await);
    assert!(session.profile().await.is_none());
    assert_eq!(session.error().await.as_deref(), Some("bad credentials"));
}

#[tokio::test]
async fn register_behaves_like_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let session = store(&server).await;
    session
        .register(&RegisterRequest {
            username: "u".to_string(),
            password: "p".to_string(),
        })
        .await
        .unwrap();
    assert!(session.is_authenticated().await);
    assert!(session.profile().await.is_some());
}

#[tokio::test]
async fn logout_tears_down_even_when_the_call_fails() {
    let server = MockServer::start().await;
    mount_login_and_profile(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500,
            "message": "boom",
            "data": null
        })))
        .mount(&server)
        .await;

    let session = store(&server).await;
    session
        .login(&LoginRequest {
            username: "u".to_string(),
            password: "p".to_string(),
        })
        .await
        .unwrap();
    assert!(session.is_authenticated().await);

    let before = session.epoch().current();
    let err = session.logout().await.unwrap_err();
    assert_eq!(err.user_message(), "boom");

    // Deterministic teardown ran despite the failure.
    assert!(session.auth_user().await.is_none());
    assert!(session.profile().await.is_none());
    assert_eq!(session.error().await.as_deref(), Some("boom"));
    assert_eq!(session.epoch().current(), before + 1);
}

#[tokio::test]
async fn logout_success_clears_everything() {
    let server = MockServer::start().await;
    mount_login_and_profile(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "message": "ok", "data": null
        })))
        .mount(&server)
        .await;

    let session = store(&server).await;
    session
        .login(&LoginRequest {
            username: "u".to_string(),
            password: "p".to_string(),
        })
        .await
        .unwrap();

    session.logout().await.unwrap();
    assert!(session.auth_user().await.is_none());
    assert!(session.profile().await.is_none());
}

#[tokio::test]
async fn fetch_current_user_failure_is_absorbed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "not logged in",
            "data": null
        })))
        .mount(&server)
        .await;

    let session = store(&server).await;
    session.fetch_current_user().await;

    assert!(session.auth_user().await.is_none());
    assert_eq!(session.error().await.as_deref(), Some("not logged in"));
    assert!(!session.loading().await);
}

#[tokio::test]
async fn fetch_profile_failure_clears_profile_but_not_identity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(identity_body()))
        .mount(&server)
        .await;
    // First profile fetch (chained by login) succeeds, the next one fails.
    Mock::given(method("GET"))
        .and(path("/api/v1/me/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/me/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500, "message": "profile unavailable", "data": null
        })))
        .mount(&server)
        .await;

    let session = store(&server).await;
    session
        .login(&LoginRequest {
            username: "u".to_string(),
            password: "p".to_string(),
        })
        .await
        .unwrap();
    assert!(session.profile().await.is_some());

    session.fetch_profile().await;
    assert!(session.profile().await.is_none());
    assert!(session.auth_user().await.is_some());
    assert_eq!(
        session.error().await.as_deref(),
        Some("profile unavailable")
    );
}

#[tokio::test]
async fn clear_error_and_reset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401, "message": "nope", "data": null
        })))
        .mount(&server)
        .await;

    let session = store(&server).await;
    session.fetch_current_user().await;
    assert!(session.error().await.is_some());

    session.clear_error().await;
    assert!(session.error().await.is_none());

    let before = session.epoch().current();
    session.reset().await;
    assert!(session.auth_user().await.is_none());
    assert_eq!(session.epoch().current(), before + 1);
}
