//! End-to-end tests over real WebSocket connections against an in-process
//! server bound to an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use parlor_server::{
    infrastructure::{pusher::WebSocketMessagePusher, registry::InMemoryRoomRegistry},
    ui::{AppState, app},
    usecase::{
        ConnectUseCase, DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, SendMessageUseCase,
    },
};
use parlor_shared::time::SystemClock;

type WsClient = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Wire up a fresh relay and serve it on an ephemeral port.
async fn start_server() -> std::net::SocketAddr {
    let registry = Arc::new(InMemoryRoomRegistry::new());
    let pusher = Arc::new(WebSocketMessagePusher::new());
    let clock = Arc::new(SystemClock);

    let state = Arc::new(AppState {
        connect_usecase: Arc::new(ConnectUseCase::new(pusher.clone())),
        join_room_usecase: Arc::new(JoinRoomUseCase::new(registry.clone(), pusher.clone())),
        send_message_usecase: Arc::new(SendMessageUseCase::new(
            registry.clone(),
            pusher.clone(),
            clock,
        )),
        disconnect_usecase: Arc::new(DisconnectUseCase::new(registry.clone(), pusher.clone())),
        list_rooms_usecase: Arc::new(ListRoomsUseCase::new(registry)),
        public_dir: std::env::temp_dir(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    addr
}

async fn connect(addr: std::net::SocketAddr) -> WsClient {
    let (ws, _response) = connect_async(format!("ws://{addr}/ws")).await.unwrap();
    ws
}

/// Receive the next text frame as JSON, failing the test after 5 seconds.
async fn recv_json(ws: &mut WsClient) -> Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("connection closed unexpectedly")
            .expect("websocket error");
        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

/// Assert no text frame arrives within a grace period.
async fn expect_silence(ws: &mut WsClient) {
    let result = tokio::time::timeout(Duration::from_millis(300), ws.next()).await;
    assert!(result.is_err(), "expected no frame, got {:?}", result);
}

async fn send_json(ws: &mut WsClient, value: Value) {
    ws.send(Message::Text(value.to_string().into()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_connecting_lands_in_public_room() {
    // given:
    let addr = start_server().await;

    // when:
    let mut client = connect(addr).await;

    // then: the first event is the presence update for "public"
    let event = recv_json(&mut client).await;
    assert_eq!(event["type"], "presence_update");
    assert_eq!(event["count"], 1);
}

#[tokio::test]
async fn test_join_chat_and_disconnect_flow() {
    // given: alice and bob meet in room "x"
    let addr = start_server().await;

    let mut alice = connect(addr).await;
    let event = recv_json(&mut alice).await;
    assert_eq!(event["count"], 1); // public

    send_json(&mut alice, json!({"type": "join", "room": "x", "nickname": "alice"})).await;
    let event = recv_json(&mut alice).await;
    assert_eq!(event["type"], "presence_update");
    assert_eq!(event["count"], 1); // alone in "x"

    let mut bob = connect(addr).await;
    let event = recv_json(&mut bob).await;
    assert_eq!(event["count"], 1); // alone in "public", alice already left

    send_json(&mut bob, json!({"type": "join", "room": "x"})).await;
    let event = recv_json(&mut bob).await;
    assert_eq!(event["count"], 2);
    let event = recv_json(&mut alice).await;
    assert_eq!(event["type"], "presence_update");
    assert_eq!(event["count"], 2);

    // when: alice sends a message
    send_json(&mut alice, json!({"type": "chat_message", "html": "hi"})).await;

    // then: both members receive exactly that message
    let to_alice = recv_json(&mut alice).await;
    let to_bob = recv_json(&mut bob).await;
    for event in [&to_alice, &to_bob] {
        assert_eq!(event["type"], "chat_message");
        assert_eq!(event["sender"], "alice");
        assert_eq!(event["html"], "hi");
        assert!(event["id"].is_string());
        assert!(event["senderId"].is_string());
        assert!(event["timestamp"].is_string());
    }
    assert_eq!(to_alice["id"], to_bob["id"]);

    // when: bob disconnects
    bob.close(None).await.unwrap();

    // then: alice sees the room shrink back to one
    let event = recv_json(&mut alice).await;
    assert_eq!(event["type"], "presence_update");
    assert_eq!(event["count"], 1);
}

#[tokio::test]
async fn test_whitespace_room_token_joins_public() {
    // given:
    let addr = start_server().await;
    let mut first = connect(addr).await;
    assert_eq!(recv_json(&mut first).await["count"], 1);

    // when: a join with a whitespace-only room token
    send_json(&mut first, json!({"type": "join", "room": "  "})).await;
    assert_eq!(recv_json(&mut first).await["count"], 1); // still public, no churn

    // then: a second client joining "public" explicitly sees both
    let mut second = connect(addr).await;
    assert_eq!(recv_json(&mut second).await["count"], 2);
    assert_eq!(recv_json(&mut first).await["count"], 2);
}

#[tokio::test]
async fn test_messages_stay_inside_their_room() {
    // given: alice in room "x", bob in "public"
    let addr = start_server().await;

    let mut alice = connect(addr).await;
    recv_json(&mut alice).await;
    send_json(&mut alice, json!({"type": "join", "room": "x"})).await;
    recv_json(&mut alice).await;

    let mut bob = connect(addr).await;
    recv_json(&mut bob).await;

    // when:
    send_json(&mut alice, json!({"type": "chat_message", "html": "secret"})).await;

    // then: alice gets her own message back, bob hears nothing
    let event = recv_json(&mut alice).await;
    assert_eq!(event["html"], "secret");
    expect_silence(&mut bob).await;
}

#[tokio::test]
async fn test_bad_frames_do_not_break_the_connection() {
    // given:
    let addr = start_server().await;
    let mut client = connect(addr).await;
    recv_json(&mut client).await;

    // when: garbage, an unknown event, and a join with a non-string room
    client
        .send(Message::Text("not json at all".into()))
        .await
        .unwrap();
    send_json(&mut client, json!({"type": "shrug"})).await;
    send_json(&mut client, json!({"type": "join", "room": 42})).await;

    // then: the non-string room fell back to "public" (same-room rename,
    // presence re-emitted) and chatting still works
    let event = recv_json(&mut client).await;
    assert_eq!(event["type"], "presence_update");
    assert_eq!(event["count"], 1);

    send_json(&mut client, json!({"type": "chat_message", "html": "still here"})).await;
    let event = recv_json(&mut client).await;
    assert_eq!(event["type"], "chat_message");
    assert_eq!(event["html"], "still here");
}

#[tokio::test]
async fn test_empty_message_is_dropped_silently() {
    // given:
    let addr = start_server().await;
    let mut client = connect(addr).await;
    recv_json(&mut client).await;

    // when:
    send_json(&mut client, json!({"type": "chat_message", "html": "   "})).await;

    // then:
    expect_silence(&mut client).await;
}
