//! UseCase: inbound chat message handling.
//!
//! Invalid sends never error: an unbound session or an empty body is a
//! silent drop, so one misbehaving connection cannot disturb the rest.

use std::sync::Arc;

use parlor_shared::time::Clock;

use crate::domain::{ChatMessage, ConnectionId, MessagePusher, RoomRegistry, Session};
use crate::sanitizer::sanitize;

pub struct SendMessageUseCase {
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        registry: Arc<dyn RoomRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
            clock,
        }
    }

    /// Turn an inbound payload into a broadcastable message.
    ///
    /// Returns the composed message and the room's current member set, or
    /// `None` when the payload is dropped (unbound session, absent or
    /// empty body). The member set is read after the message is composed,
    /// so fan-out always observes current membership.
    pub async fn execute(
        &self,
        session: &Session,
        html: Option<String>,
    ) -> Option<(ChatMessage, Vec<ConnectionId>)> {
        let Some(room_id) = session.room() else {
            tracing::debug!(
                "dropping message from unbound connection '{}'",
                session.connection_id()
            );
            return None;
        };

        let body = html.unwrap_or_default();
        if body.trim().is_empty() {
            tracing::debug!(
                "dropping empty message from connection '{}'",
                session.connection_id()
            );
            return None;
        }

        let clean = sanitize(&body);
        let message = ChatMessage::compose(session, clean, self.clock.as_ref());
        let targets = self.registry.members(room_id).await;
        Some((message, targets))
    }

    /// Broadcast a serialized chat event to the given members.
    pub async fn broadcast(
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
