//! Connection identifier value object.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for one WebSocket connection.
///
/// Generated server-side when the connection opens and stable for the
/// connection's lifetime. Two connections never share an id, even within
/// the same millisecond, which is what message ids lean on for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Generate a fresh connection id (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing raw id. Used by tests that need predictable ids.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters of the id, used for the default guest label.
    pub fn short_suffix(&self) -> &str {
        let start = self.0.len().saturating_sub(4);
        &self.0[start..]
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_distinct_ids() {
        // given:

        // when:
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();

        // then:
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_suffix_returns_last_four_chars() {
        // given:
        let id = ConnectionId::new("abcdef123456");

        // when:
        let suffix = id.short_suffix();

        // then:
        assert_eq!(suffix, "3456");
    }

    #[test]
    fn test_short_suffix_handles_short_ids() {
        // given:
        let id = ConnectionId::new("ab");

        // when:
        let suffix = id.short_suffix();

        // then:
        assert_eq!(suffix, "ab");
    }
}
