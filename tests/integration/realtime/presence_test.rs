//! Presence as observed through the HTTP directory
//!
//! Channels are opened in-process with `ChannelHandle::open`; no socket is
//! involved.

use pretty_assertions::assert_eq;
use serde_json::Value;
use zcode::backend::realtime::ChannelHandle;

use crate::common::{register_member, test_server};

fn online_flag(users: &[Value], name: &str) -> bool {
    users
        .iter()
        .find(|u| u["displayName"] == name)
        .and_then(|u| u["online"].as_bool())
        .unwrap()
}

#[tokio::test]
async fn test_directory_follows_latest_registration() {
    let (server, state) = test_server();
    let alice = register_member(&server, "alice").await;
    register_member(&server, "bob").await;

    let (first, _first_rx) = ChannelHandle::open();
    let (second, _second_rx) = ChannelHandle::open();
    let (first_id, second_id) = (first.connection_id(), second.connection_id());

    state.presence.register(alice.id, first).await;
    let users = server.get("/users").await.json::<Vec<Value>>();
    assert!(online_flag(&users, "alice"));
    assert!(!online_flag(&users, "bob"));

    state.presence.register(alice.id, second).await;
    state.presence.unregister(alice.id, first_id).await;
    let users = server.get("/users").await.json::<Vec<Value>>();
    assert!(online_flag(&users, "alice"));

    state.presence.unregister(alice.id, second_id).await;
    let users = server.get("/users").await.json::<Vec<Value>>();
    assert!(!online_flag(&users, "alice"));
}

#[tokio::test]
async fn test_points_show_in_directory() {
    let (server, state) = test_server();
    let alice = register_member(&server, "alice").await;
    state.identities.award(alice.id, 7).await.unwrap();

    let users = server.get("/users").await.json::<Vec<Value>>();
    assert_eq!(users[0]["points"], 7);
}
