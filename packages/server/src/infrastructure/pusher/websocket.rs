//! WebSocket-backed `MessagePusher` implementation.
//!
//! The WebSocket itself is accepted in the UI layer; this implementation
//! only manages the per-connection `UnboundedSender` halves and writes
//! serialized events into them. Splitting "accept the socket" from "push a
//! message" keeps the usecase layer free of axum types.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel};

/// Map of connection id to the outbound channel of its writer task.
pub struct WebSocketMessagePusher {
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("connection '{}' registered with pusher", connection_id);
        clients.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!("connection '{}' unregistered from pusher", connection_id);
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        if let Some(sender) = clients.get(connection_id) {
            sender
                .send(content.to_string())
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            Ok(())
        } else {
            Err(MessagePushError::ClientNotFound(
                connection_id.as_str().to_string(),
            ))
        }
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        for target in targets {
            if let Some(sender) = clients.get(&target) {
                // fire-and-forget: a closed channel just means the target
                // is on its way out
                if let Err(e) = sender.send(content.to_string()) {
                    tracing::warn!("failed to push message to connection '{}': {}", target, e);
                }
            } else {
                tracing::warn!("connection '{}' not found during broadcast, skipping", target);
            }
        }

        Ok(())
    }
}
