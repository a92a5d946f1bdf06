//! In-memory room registry.
//!
//! Implements the domain layer's `RoomRegistry` trait with a single
//! mutex-guarded map. One lock is the ownership point for all membership
//! state: every join/leave/read is an indivisible unit with respect to the
//! others, and snapshots are captured under the same lock as the mutation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, RoomId, RoomRegistry, RoomSnapshot};

/// Mutex-guarded `room id -> (connection id -> display name)` map.
///
/// Rooms are created lazily on first join and removed the moment the last
/// member leaves, so the map never grows with room churn.
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<RoomId, HashMap<ConnectionId, String>>>,
}

impl InMemoryRoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot(room_id: &RoomId, members: &HashMap<ConnectionId, String>) -> RoomSnapshot {
    RoomSnapshot {
        room_id: room_id.clone(),
        members: members.keys().cloned().collect(),
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn join(
        &self,
        room_id: RoomId,
        connection_id: ConnectionId,
        display_name: String,
    ) -> RoomSnapshot {
        let mut rooms = self.rooms.lock().await;
        let members = rooms.entry(room_id.clone()).or_default();
        members.insert(connection_id, display_name);
        tracing::debug!(
            "room '{}' now has {} member(s) after join",
            room_id,
            members.len()
        );
        snapshot(&room_id, members)
    }

    async fn leave(&self, room_id: &RoomId, connection_id: &ConnectionId) -> Option<RoomSnapshot> {
        let mut rooms = self.rooms.lock().await;
        let members = rooms.get_mut(room_id)?;
        members.remove(connection_id);
        if members.is_empty() {
            rooms.remove(room_id);
            tracing::debug!("room '{}' emptied and was removed", room_id);
            return None;
        }
        tracing::debug!(
            "room '{}' now has {} member(s) after leave",
            room_id,
            members.len()
        );
        Some(snapshot(room_id, members))
    }

    async fn member_count(&self, room_id: &RoomId) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).map_or(0, HashMap::len)
    }

    async fn members(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .map(|members| members.keys().cloned().collect())
            .unwrap_or_default()
    }

    async fn rooms(&self) -> Vec<(RoomId, usize)> {
        let rooms = self.rooms.lock().await;
        rooms
            .iter()
            .map(|(room_id, members)| (room_id.clone(), members.len()))
            .collect()
    }
}
