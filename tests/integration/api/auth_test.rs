//! Identity and session API integration tests

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, register_member, test_server};

#[tokio::test]
async fn test_health() {
    let (server, _) = test_server();
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_register_returns_identity_without_credential() {
    let (server, _) = test_server();
    let response = server
        .post("/auth/register")
        .json(&json!({ "displayName": "alice", "avatar": "🙂", "credential": "pw" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let identity = &response.json::<Value>()["identity"];
    assert_eq!(identity["displayName"], "alice");
    assert_eq!(identity["avatar"], "🙂");
    assert_eq!(identity["points"], 0);
    assert!(identity.get("credential").is_none());
}

#[tokio::test]
async fn test_register_conflicts() {
    let (server, _) = test_server();
    register_member(&server, "alice").await;

    crate::assert_error_response!(
        server.post("/auth/register").json(&json!({ "displayName": "alice" })).await,
        StatusCode::CONFLICT
    );
    crate::assert_error_response!(
        server.post("/auth/register").json(&json!({ "displayName": "Admin" })).await,
        StatusCode::CONFLICT
    );
    crate::assert_error_response!(
        server.post("/auth/register").json(&json!({ "displayName": "   " })).await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_login_with_credential() {
    let (server, _) = test_server();
    server
        .post("/auth/register")
        .json(&json!({ "displayName": "bob", "credential": "secret" }))
        .await;

    crate::assert_error_response!(
        server.post("/auth/login").json(&json!({ "displayName": "bob" })).await,
        StatusCode::UNAUTHORIZED
    );

    let response = server
        .post("/auth/login")
        .json(&json!({ "displayName": "bob", "credential": "secret" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["isAdmin"], false);
}

#[tokio::test]
async fn test_me_accepts_bearer_and_raw_token() {
    let (server, _) = test_server();
    let alice = register_member(&server, "alice").await;

    for value in [auth_header(&alice.token), alice.token.clone()] {
        let response = server
            .get("/me")
            .add_header(header::AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body = response.json::<Value>();
        assert_eq!(body["isAdmin"], false);
        assert_eq!(body["identity"]["displayName"], "alice");
    }

    crate::assert_error_response!(server.get("/me").await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_profile_edit() {
    let (server, _) = test_server();
    let alice = register_member(&server, "alice").await;

    let response = server
        .post("/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&auth_header(&alice.token)).unwrap(),
        )
        .json(&json!({ "bio": "likes tales" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let identity = &response.json::<Value>()["identity"];
    assert_eq!(identity["bio"], "likes tales");
    assert_eq!(identity["avatar"], "default");
}

#[tokio::test]
async fn test_users_directory_and_follow() {
    let (server, _) = test_server();
    let alice = register_member(&server, "alice").await;
    let bob = register_member(&server, "bob").await;

    let response = server
        .post(&format!("/users/{}/follow", bob.id))
        .json(&json!({ "token": alice.token }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["identity"]["followingIds"], json!([bob.id]));

    crate::assert_error_response!(
        server
            .post(&format!("/users/{}/follow", alice.id))
            .json(&json!({ "token": alice.token }))
            .await,
        StatusCode::BAD_REQUEST
    );

    let users = server.get("/users").await.json::<Vec<Value>>();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u["online"] == false));
    assert!(users.iter().all(|u| u.get("followerIds").is_none()));

    let response = server
        .delete(&format!("/users/{}/follow", bob.id))
        .json(&json!({ "token": alice.token }))
        .await;
    assert_eq!(response.json::<Value>()["identity"]["followingIds"], json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (server, _) = test_server();
    crate::assert_error_response!(server.get("/nope").await, StatusCode::NOT_FOUND);
}
