//! WebSocket channel end-to-end tests
//!
//! Each test serves a fresh app on `127.0.0.1:0` and talks to `/ws` with
//! tokio-tungstenite, seeding identities and sessions through `AppState`.

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{timeout, Duration};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use uuid::Uuid;
use zcode::backend::auth::Principal;
use zcode::backend::server::{config::ServerConfig, create_app_with_state, AppState};
use zcode::backend::tales::NewTale;

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const FRAME_TIMEOUT: Duration = Duration::from_secs(5);

async fn spawn_server() -> (SocketAddr, AppState) {
    let (app, state) = create_app_with_state(ServerConfig::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

async fn member(state: &AppState, name: &str) -> (Uuid, String) {
    let identity = state.identities.register(Some(name), None, None).await.unwrap();
    let token = state.sessions.create(Principal::Member(identity.id)).await;
    (identity.id, token)
}

async fn connect(addr: SocketAddr) -> Client {
    let (client, _) = connect_async(format!("ws://{}/ws", addr)).await.unwrap();
    client
}

async fn send(client: &mut Client, frame: Value) {
    client.send(Message::text(frame.to_string())).await.unwrap();
}

/// Next text frame, parsed as JSON
async fn next_frame(client: &mut Client) -> Value {
    loop {
        let message = timeout(FRAME_TIMEOUT, client.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("connection closed")
            .unwrap();
        if let Message::Text(text) = message {
            return serde_json::from_str(text.as_str()).unwrap();
        }
    }
}

/// Skip frames until one of the given type arrives
async fn next_frame_of(client: &mut Client, kind: &str) -> Value {
    loop {
        let frame = next_frame(client).await;
        if frame["type"] == kind {
            return frame;
        }
    }
}

async fn register(client: &mut Client, token: &str) -> Value {
    send(client, json!({ "type": "register", "token": token })).await;
    let welcome = next_frame(client).await;
    crate::assert_frame_type!(welcome, "welcome");
    welcome
}

#[tokio::test]
async fn test_register_welcome_and_presence() {
    let (addr, state) = spawn_server().await;
    let (alice, token) = member(&state, "alice").await;
    let mut client = connect(addr).await;

    let welcome = register(&mut client, &token).await;
    assert_eq!(welcome["identity"]["id"], json!(alice));
    assert_eq!(welcome["identity"]["online"], true);

    let presence = next_frame_of(&mut client, "presence").await;
    let entry = presence["identities"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == json!(alice))
        .cloned()
        .unwrap();
    assert_eq!(entry["online"], true);
    assert!(state.presence.is_online(alice).await);
}

#[tokio::test]
async fn test_chat_round_trip() {
    let (addr, state) = spawn_server().await;
    let (alice, alice_token) = member(&state, "alice").await;
    let (bob, bob_token) = member(&state, "bob").await;

    let mut alice_client = connect(addr).await;
    let mut bob_client = connect(addr).await;
    register(&mut alice_client, &alice_token).await;
    register(&mut bob_client, &bob_token).await;

    send(
        &mut alice_client,
        json!({ "type": "chat", "token": alice_token, "toId": bob, "text": "yo" }),
    )
    .await;

    let delivered = next_frame_of(&mut bob_client, "chat").await;
    assert_eq!(delivered["message"]["text"], "yo");
    assert_eq!(delivered["message"]["fromId"], json!(alice));

    let ack = next_frame_of(&mut alice_client, "chat_ack").await;
    assert_eq!(ack["message"]["id"], delivered["message"]["id"]);
}

#[tokio::test]
async fn test_bad_frames_keep_channel_open() {
    let (addr, state) = spawn_server().await;
    let (_, token) = member(&state, "alice").await;
    let mut client = connect(addr).await;

    client.send(Message::text("not json")).await.unwrap();
    crate::assert_frame_type!(next_frame(&mut client).await, "error");

    send(&mut client, json!({ "type": "register", "token": "bogus" })).await;
    let error = next_frame(&mut client).await;
    crate::assert_frame_type!(error, "error");
    assert!(error["reason"].as_str().unwrap().contains("Unauthorized"));

    send(
        &mut client,
        json!({ "type": "chat", "token": token, "toId": Uuid::new_v4(), "text": "hello?" }),
    )
    .await;
    crate::assert_frame_type!(next_frame(&mut client).await, "error");

    // the same connection still registers fine
    register(&mut client, &token).await;
}

#[tokio::test]
async fn test_disconnect_marks_offline() {
    let (addr, state) = spawn_server().await;
    let (alice, alice_token) = member(&state, "alice").await;
    let (bob, bob_token) = member(&state, "bob").await;

    let mut alice_client = connect(addr).await;
    let mut bob_client = connect(addr).await;
    register(&mut alice_client, &alice_token).await;
    register(&mut bob_client, &bob_token).await;

    bob_client.close(None).await.unwrap();

    // alice sees a snapshot with bob offline
    loop {
        let presence = next_frame_of(&mut alice_client, "presence").await;
        let bob_online = presence["identities"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["id"] == json!(bob) && e["online"] == true);
        if !bob_online {
            break;
        }
    }
    assert!(!state.presence.is_online(bob).await);
    assert!(state.presence.is_online(alice).await);
}

#[tokio::test]
async fn test_approval_is_pushed_to_channels() {
    let (addr, state) = spawn_server().await;
    let (alice, token) = member(&state, "alice").await;
    let mut client = connect(addr).await;
    register(&mut client, &token).await;

    let tale = state
        .tales
        .submit(
            alice,
            NewTale {
                media_payload: Some("data:video/mp4;base64,AAAA".to_string()),
                media_kind: Some("video".to_string()),
                caption: Some("clip".to_string()),
            },
        )
        .await
        .unwrap();
    state.moderation.approve(Principal::Admin, tale.id).await.unwrap();

    let approved = next_frame_of(&mut client, "tale_approved").await;
    assert_eq!(approved["tale"]["id"], json!(tale.id));
    assert_eq!(approved["tale"]["approved"], true);
    assert_eq!(approved["tale"]["mediaKind"], "video");
}
