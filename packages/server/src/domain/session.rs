//! Per-connection session state.

use super::{ConnectionId, RoomId};

/// Mutable state owned by one connection, spanning connect to disconnect.
///
/// A session is in one of two states: unbound (`room == None`, just
/// connected) or bound to exactly one room. Only the handler task that owns
/// the connection mutates its session, so the struct carries no locking.
#[derive(Debug, Clone)]
pub struct Session {
    connection_id: ConnectionId,
    room: Option<RoomId>,
    display_name: String,
}

impl Session {
    /// Create an unbound session with a generated guest display name.
    pub fn new(connection_id: ConnectionId) -> Self {
        let display_name = format!("guest-{}", connection_id.short_suffix());
        Self {
            connection_id,
            room: None,
            display_name,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    /// The room this session is currently bound to, if any.
    pub fn room(&self) -> Option<&RoomId> {
        self.room.as_ref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Resolve the display name a join request lands on.
    ///
    /// A trimmed non-empty nickname wins; otherwise the current name is
    /// kept, so the display name never goes empty.
    pub fn resolve_display_name(&self, nickname: Option<&str>) -> String {
        match nickname.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => self.display_name.clone(),
        }
    }

    /// Bind the session to a room with the resolved display name.
    pub fn bind(&mut self, room: RoomId, display_name: String) {
        self.room = Some(room);
        self.display_name = display_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unbound_with_guest_name() {
        // given:
        let connection_id = ConnectionId::new("conn-1234");

        // when:
        let session = Session::new(connection_id);

        // then:
        assert!(session.room().is_none());
        assert_eq!(session.display_name(), "guest-1234");
    }

    #[test]
    fn test_resolve_display_name_prefers_trimmed_nickname() {
        // given:
        let session = Session::new(ConnectionId::new("conn-1234"));

        // when:
        let resolved = session.resolve_display_name(Some("  alice "));

        // then:
        assert_eq!(resolved, "alice");
    }

    #[test]
    fn test_resolve_display_name_falls_back_on_empty_nickname() {
        // given:
        let mut session = Session::new(ConnectionId::new("conn-1234"));
        session.bind(RoomId::normalize(None), "alice".to_string());

        // when:
        let resolved = session.resolve_display_name(Some("   "));

        // then: the prior name survives, it never goes empty
        assert_eq!(resolved, "alice");
    }

    #[test]
    fn test_resolve_display_name_falls_back_on_absent_nickname() {
        // given:
        let session = Session::new(ConnectionId::new("conn-1234"));

        // when:
        let resolved = session.resolve_display_name(None);

        // then:
        assert_eq!(resolved, "guest-1234");
    }

    #[test]
    fn test_bind_moves_session_into_room() {
        // given:
        let mut session = Session::new(ConnectionId::new("conn-1234"));

        // when:
        let room = RoomId::normalize(Some("lobby"));
        session.bind(room.clone(), "alice".to_string());

        // then:
        assert_eq!(session.room(), Some(&room));
        assert_eq!(session.display_name(), "alice");
    }
}
