//! Conversation history API integration tests
//!
//! Messages are sent through the router directly; the WebSocket path is
//! covered by the e2e suite.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::{register_member, test_server};

#[tokio::test]
async fn test_offline_message_is_logged_not_delivered() {
    let (server, state) = test_server();
    let alice = register_member(&server, "alice").await;
    let bob = register_member(&server, "bob").await;

    let message = state.router.route(alice.id, bob.id, "yo", None).await.unwrap();
    assert!(!state.presence.is_online(bob.id).await);

    let history = server
        .get(&format!("/profile/{}/chats/{}", bob.token, alice.id))
        .await
        .json::<Vec<Value>>();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["text"], "yo");
    assert_eq!(history[0]["id"], serde_json::json!(message.id));
    assert_eq!(history[0]["fromId"], serde_json::json!(alice.id));

    // sender earns the message reward
    assert_eq!(state.identities.require(alice.id).await.unwrap().points, 1);
}

#[tokio::test]
async fn test_history_errors() {
    let (server, _) = test_server();
    let alice = register_member(&server, "alice").await;

    crate::assert_error_response!(
        server
            .get(&format!("/profile/{}/chats/{}", alice.token, uuid::Uuid::new_v4()))
            .await,
        StatusCode::NOT_FOUND
    );
    crate::assert_error_response!(
        server.get(&format!("/profile/nope/chats/{}", alice.id)).await,
        StatusCode::UNAUTHORIZED
    );
}
