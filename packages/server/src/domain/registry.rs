//! Room registry trait definition.
//!
//! The registry is the sole source of truth for room membership and
//! presence. The concrete implementation lives in the infrastructure layer
//! (dependency inversion).

use async_trait::async_trait;

use super::{ConnectionId, RoomId};

/// Member list of one room, captured under the registry lock.
///
/// Mutating a room and reading its size for a presence broadcast must be
/// one indivisible unit; the snapshot is how registry operations hand that
/// unit back to callers. The presence count is always derived from the
/// captured member list, never tracked separately.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub members: Vec<ConnectionId>,
}

impl RoomSnapshot {
    /// Live member count of the room at capture time.
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Room membership store.
///
/// A room exists iff it has at least one member: it is created lazily on
/// first join and deleted the moment it empties. None of these operations
/// fail on unknown rooms or members; invalid input degrades to a no-op.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Add or update the connection's entry in the room's member map,
    /// lazily creating the room. Returns the post-join snapshot.
    async fn join(
        &self,
        room_id: RoomId,
        connection_id: ConnectionId,
        display_name: String,
    ) -> RoomSnapshot;

    /// Remove the connection from the room. Deletes the room when it
    /// empties. Returns the post-leave snapshot while the room still
    /// exists, `None` once it is gone (or never existed). Idempotent.
    async fn leave(&self, room_id: &RoomId, connection_id: &ConnectionId) -> Option<RoomSnapshot>;

    /// Live member count; 0 for a room that does not exist.
    async fn member_count(&self, room_id: &RoomId) -> usize;

    /// Current member connection ids; empty for a room that does not exist.
    async fn members(&self, room_id: &RoomId) -> Vec<ConnectionId>;

    /// All live rooms with their member counts.
    async fn rooms(&self) -> Vec<(RoomId, usize)>;
}
