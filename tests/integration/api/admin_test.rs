//! Admin and moderation API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{admin_token, register_member, submit_image, test_server};

#[tokio::test]
async fn test_admin_login() {
    let (server, _) = test_server();

    crate::assert_error_response!(
        server.post("/admin/login").json(&json!({ "credential": "guess" })).await,
        StatusCode::UNAUTHORIZED
    );

    let token = admin_token(&server).await;
    let response = server
        .get("/me")
        .add_header(
            axum::http::header::AUTHORIZATION,
            axum::http::HeaderValue::from_str(&token).unwrap(),
        )
        .await;
    assert_eq!(response.json::<Value>(), json!({ "isAdmin": true }));
}

#[tokio::test]
async fn test_admin_login_through_reserved_name() {
    let (server, _) = test_server();
    let response = server
        .post("/auth/login")
        .json(&json!({ "displayName": "admin", "credential": "admin123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["isAdmin"], true);
}

#[tokio::test]
async fn test_moderation_scenario() {
    let (server, state) = test_server();
    let alice = register_member(&server, "alice").await;
    let tale = submit_image(&server, &alice.token, "hi").await;
    let admin = admin_token(&server).await;

    let pending = server
        .get("/admin/pending")
        .add_query_param("adminToken", &admin)
        .await
        .json::<Vec<Value>>();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["ownerId"], json!(alice.id));

    let response = server
        .post("/admin/approve")
        .json(&json!({ "adminToken": admin, "taleId": tale["id"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["tale"]["approved"], true);

    let feed = server.get("/feed").await.json::<Vec<Value>>();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["id"], tale["id"]);
    assert_eq!(feed[0]["caption"], "hi");

    // approving again changes nothing
    server
        .post("/admin/approve")
        .json(&json!({ "adminToken": admin, "taleId": tale["id"] }))
        .await;
    assert_eq!(state.identities.require(alice.id).await.unwrap().points, 11);

    let pending = server
        .get("/admin/pending")
        .add_query_param("adminToken", &admin)
        .await
        .json::<Vec<Value>>();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_member_token_cannot_moderate() {
    let (server, _) = test_server();
    let alice = register_member(&server, "alice").await;
    let tale = submit_image(&server, &alice.token, "hi").await;

    crate::assert_error_response!(
        server
            .get("/admin/pending")
            .add_query_param("adminToken", &alice.token)
            .await,
        StatusCode::FORBIDDEN
    );
    crate::assert_error_response!(
        server
            .post("/admin/approve")
            .json(&json!({ "adminToken": alice.token, "taleId": tale["id"] }))
            .await,
        StatusCode::FORBIDDEN
    );
    crate::assert_error_response!(server.get("/admin/pending").await, StatusCode::UNAUTHORIZED);

    assert!(server.get("/feed").await.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_approve_unknown_tale() {
    let (server, _) = test_server();
    let admin = admin_token(&server).await;

    crate::assert_error_response!(
        server
            .post("/admin/approve")
            .json(&json!({ "adminToken": admin, "taleId": uuid::Uuid::new_v4() }))
            .await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_admin_users_view() {
    let (server, _) = test_server();
    let alice = register_member(&server, "alice").await;
    submit_image(&server, &alice.token, "hi").await;
    let admin = admin_token(&server).await;

    let users = server
        .get("/admin/users")
        .add_query_param("adminToken", &admin)
        .await
        .json::<Vec<Value>>();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["displayName"], "alice");
    assert_eq!(users[0]["ownedTaleIds"].as_array().unwrap().len(), 1);
    assert_eq!(users[0]["points"], 10);
}
