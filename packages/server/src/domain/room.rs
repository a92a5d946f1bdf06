//! Room identifier value object.

use std::fmt;

use serde::Serialize;

/// Room every connection lands in when it does not name one.
pub const DEFAULT_ROOM: &str = "public";

/// Identifier of a named broadcast domain.
///
/// Room ids are opaque, case-sensitive client-supplied tokens. A room has
/// no existence of its own: it lives in the registry exactly as long as it
/// has at least one member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoomId(String);

impl RoomId {
    /// Resolve a client-supplied room token into a room id.
    ///
    /// The token is trimmed; an absent, empty, or whitespace-only token
    /// falls back to [`DEFAULT_ROOM`].
    pub fn normalize(candidate: Option<&str>) -> Self {
        let trimmed = candidate.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            Self(DEFAULT_ROOM.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_plain_token() {
        // given:
        let candidate = Some("lobby");

        // when:
        let room_id = RoomId::normalize(candidate);

        // then:
        assert_eq!(room_id.as_str(), "lobby");
    }

    #[test]
    fn test_normalize_trims_surrounding_whitespace() {
        // given:
        let candidate = Some("  lobby \n");

        // when:
        let room_id = RoomId::normalize(candidate);

        // then:
        assert_eq!(room_id.as_str(), "lobby");
    }

    #[test]
    fn test_normalize_defaults_when_absent() {
        // given:
        let candidate = None;

        // when:
        let room_id = RoomId::normalize(candidate);

        // then:
        assert_eq!(room_id.as_str(), DEFAULT_ROOM);
    }

    #[test]
    fn test_normalize_defaults_when_whitespace_only() {
        // given:
        let candidate = Some("   ");

        // when:
        let room_id = RoomId::normalize(candidate);

        // then:
        assert_eq!(room_id.as_str(), DEFAULT_ROOM);
    }

    #[test]
    fn test_room_ids_are_case_sensitive() {
        // given:
        let lower = RoomId::normalize(Some("lobby"));
        let upper = RoomId::normalize(Some("Lobby"));

        // when / then:
        assert_ne!(lower, upper);
    }
}
