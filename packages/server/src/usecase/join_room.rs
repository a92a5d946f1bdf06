//! UseCase: join request handling.
//!
//! Implements the session's join state machine: unbound sessions bind to
//! their first room, bound sessions either switch rooms (leave old, join
//! new) or, when the target matches the current room, just update the
//! display name. Collapsing same-room joins into a rename avoids spurious
//! leave/join flicker in presence counts.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRegistry, RoomSnapshot, Session};

/// Result of one join request: the rooms whose presence changed.
#[derive(Debug)]
pub struct JoinOutcome {
    /// Snapshot of the room that was left, while it still exists.
    pub departed: Option<RoomSnapshot>,
    /// Snapshot of the room the session is now bound to.
    pub entered: RoomSnapshot,
}

pub struct JoinRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Apply a join request to the session and the registry.
    ///
    /// `room` and `nickname` are the raw optional payload fields; both are
    /// normalized here. Never fails: bad input falls back to defaults.
    pub async fn execute(
        &self,
        session: &mut Session,
        room: Option<String>,
        nickname: Option<String>,
    ) -> JoinOutcome {
        let target = RoomId::normalize(room.as_deref());
        let display_name = session.resolve_display_name(nickname.as_deref());

        if session.room() == Some(&target) {
            // already there: rename in place, no leave/join churn
            let entered = self
                .registry
                .join(
                    target.clone(),
                    session.connection_id().clone(),
                    display_name.clone(),
                )
                .await;
            session.bind(target, display_name);
            return JoinOutcome {
                departed: None,
                entered,
            };
        }

        let departed = match session.room() {
            Some(old_room) => self.registry.leave(old_room, session.connection_id()).await,
            None => None,
        };

        let entered = self
            .registry
            .join(
                target.clone(),
                session.connection_id().clone(),
                display_name.clone(),
            )
            .await;
        tracing::info!(
            "connection '{}' joined room '{}' as '{}'",
            session.connection_id(),
            target,
            display_name
        );
        session.bind(target, display_name);

        JoinOutcome { departed, entered }
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
