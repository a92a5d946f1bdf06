//! UseCase: connection teardown.
//!
//! Runs exactly once per connection. A session that never joined a room is
//! torn down silently; a bound session leaves its room and hands back the
//! remaining members for the presence fan-out.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomRegistry, RoomSnapshot, Session};

pub struct DisconnectUseCase {
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Tear down a session.
    ///
    /// Unregisters the outbound channel and removes the connection from
    /// its room, if it had one. Returns the room's post-leave snapshot
    /// while it still exists; `None` means there is nothing to notify.
    pub async fn execute(&self, session: &Session) -> Option<RoomSnapshot> {
        self.message_pusher
            .unregister_client(session.connection_id())
            .await;

        let room_id = session.room()?;
        let remaining = self.registry.leave(room_id, session.connection_id()).await;
        tracing::info!(
            "connection '{}' disconnected from room '{}'",
            session.connection_id(),
            room_id
        );
        remaining
    }

    /// Broadcast a serialized presence event to the given members.
    pub async fn broadcast_presence(
        &self,
        targets: Vec<ConnectionId>,
        message: &str,
    ) -> Result<(), String> {
        self.message_pusher
            .broadcast(targets, message)
            .await
            .map_err(|e| e.to_string())
    }
}
