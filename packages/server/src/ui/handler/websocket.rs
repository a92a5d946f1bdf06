//! WebSocket connection handlers.
//!
//! One `handle_socket` invocation per connection: it owns the session,
//! drives the inbound event loop, and pairs it with a writer task draining
//! the pusher channel. The session is only ever touched from here, so no
//! locking is needed around it.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{RoomSnapshot, Session},
    infrastructure::dto::websocket::{ClientEvent, ServerEvent},
    ui::state::AppState,
    usecase::JoinOutcome,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the pusher channel onto the WebSocket.
///
/// Messages addressed to this connection (chat fan-out, presence updates)
/// arrive on `rx` already serialized; this loop just writes them out.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    let (tx, rx) = mpsc::unbounded_channel();
    let mut session = state.connect_usecase.execute(tx).await;

    // every connection starts in the default room; the first event the
    // client sees is the presence update for it
    let outcome = state
        .join_room_usecase
        .execute(&mut session, None, None)
        .await;
    publish_join_presence(&state, outcome).await;

    let mut send_task = pusher_loop(rx, sender);

    loop {
        tokio::select! {
            inbound = receiver.next() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => dispatch(&state, &mut session, &text).await,
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!("connection '{}' requested close", session.connection_id());
                        break;
                    }
                    // ping/pong is handled by the protocol layer
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(
                            "WebSocket error on connection '{}': {}",
                            session.connection_id(),
                            e
                        );
                        break;
                    }
                    None => break,
                }
            }
            _ = &mut send_task => break,
        }
    }
    send_task.abort();

    // teardown runs exactly once per connection
    if let Some(snapshot) = state.disconnect_usecase.execute(&session).await {
        if let Some(json) = encode(&ServerEvent::presence_update(&snapshot)) {
            if let Err(e) = state
                .disconnect_usecase
                .broadcast_presence(snapshot.members, &json)
                .await
            {
                tracing::warn!("failed to broadcast presence after disconnect: {}", e);
            }
        }
    }
}

/// Route one inbound frame to its usecase.
///
/// A frame that fails to parse is logged and dropped; it must never affect
/// other connections or this one's state.
async fn dispatch(state: &Arc<AppState>, session: &mut Session, text: &str) {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(ClientEvent::Join { room, nickname }) => {
            let outcome = state
                .join_room_usecase
                .execute(session, room, nickname)
                .await;
            publish_join_presence(state, outcome).await;
        }
        Ok(ClientEvent::ChatMessage { html }) => {
            let Some((message, targets)) = state.send_message_usecase.execute(session, html).await
            else {
                return;
            };
            if let Some(json) = encode(&ServerEvent::chat_message(&message)) {
                if let Err(e) = state.send_message_usecase.broadcast(targets, &json).await {
                    tracing::warn!("failed to broadcast chat message: {}", e);
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                "dropping unparseable frame from connection '{}': {}",
                session.connection_id(),
                e
            );
        }
    }
}

/// Push presence updates for the rooms a join touched.
async fn publish_join_presence(state: &Arc<AppState>, outcome: JoinOutcome) {
    let JoinOutcome { departed, entered } = outcome;
    for snapshot in departed.into_iter().chain(std::iter::once(entered)) {
        publish_presence(state, snapshot).await;
    }
}

async fn publish_presence(state: &Arc<AppState>, snapshot: RoomSnapshot) {
    let Some(json) = encode(&ServerEvent::presence_update(&snapshot)) else {
        return;
    };
    if let Err(e) = state
        .join_room_usecase
        .broadcast_presence(snapshot.members, &json)
        .await
    {
        tracing::warn!("failed to broadcast presence: {}", e);
    }
}

fn encode(event: &ServerEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("failed to encode outbound event: {}", e);
            None
        }
    }
}
