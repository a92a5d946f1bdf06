//! UseCase: live room listing for the HTTP API.

use std::sync::Arc;

use crate::domain::{RoomId, RoomRegistry};

pub struct ListRoomsUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl ListRoomsUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// All live rooms with their member counts, sorted by room id for
    /// consistent ordering.
    pub async fn execute(&self) -> Vec<(RoomId, usize)> {
        let mut rooms = self.registry.rooms().await;
        rooms.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionId;
    use crate::infrastructure::registry::InMemoryRoomRegistry;

    #[tokio::test]
    async fn test_empty_registry_lists_no_rooms() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let usecase = ListRoomsUseCase::new(registry);

        // when:
        let rooms = usecase.execute().await;

        // then:
        assert!(rooms.is_empty());
    }

    #[tokio::test]
    async fn test_rooms_are_listed_sorted_with_counts() {
        // given:
        let registry = Arc::new(InMemoryRoomRegistry::new());
        registry
            .join(
                RoomId::normalize(Some("den")),
                ConnectionId::new("a"),
                "alice".to_string(),
            )
            .await;
        registry
            .join(
                RoomId::normalize(Some("attic")),
                ConnectionId::new("b"),
                "bob".to_string(),
            )
            .await;
        registry
            .join(
                RoomId::normalize(Some("attic")),
                ConnectionId::new("c"),
                "carol".to_string(),
            )
            .await;
        let usecase = ListRoomsUseCase::new(registry);

        // when:
        let rooms = usecase.execute().await;

        // then:
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].0.as_str(), "attic");
        assert_eq!(rooms[0].1, 2);
        assert_eq!(rooms[1].0.as_str(), "den");
        assert_eq!(rooms[1].1, 1);
    }
}
