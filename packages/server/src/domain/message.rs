//! Chat message value object.

use parlor_shared::time::{Clock, timestamp_to_utc_rfc3339};

use super::{ConnectionId, Session};

/// One broadcast chat message.
///
/// Messages are transient: they exist only as a broadcast payload and are
/// never persisted. The sender's display name is snapshotted at send time,
/// not referenced live.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// `<unix-millis>-<connection-id>`. Unique within a single process:
    /// two connections can send in the same millisecond, but their
    /// connection ids differ. Not collision-free across processes under
    /// clock skew.
    pub id: String,
    /// Display name of the sender at send time.
    pub sender: String,
    /// Connection id of the sender, for client-side "is this mine" checks.
    pub sender_id: ConnectionId,
    /// Sanitized HTML body.
    pub html: String,
    /// ISO 8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

impl ChatMessage {
    /// Compose a message from the sending session and an already sanitized
    /// body.
    pub fn compose(session: &Session, html: String, clock: &dyn Clock) -> Self {
        let millis = clock.now_utc_millis();
        Self {
            id: format!("{}-{}", millis, session.connection_id()),
            sender: session.display_name().to_string(),
            sender_id: session.connection_id().clone(),
            html,
            timestamp: timestamp_to_utc_rfc3339(millis),
        }
    }
}
