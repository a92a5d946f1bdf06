//! DTOs for the WebSocket wire protocol.
//!
//! Every frame is a JSON object tagged with `type`. Inbound string fields
//! are deserialized leniently: a field carrying a non-string value is
//! treated as absent rather than failing the whole frame, so a sloppy
//! client degrades to default behavior instead of being dropped.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{ChatMessage, RoomSnapshot};

/// Accept any JSON value, keeping it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Inbound events (client to server).
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Join a room and/or update the display name.
    Join {
        #[serde(default, deserialize_with = "lenient_string")]
        room: Option<String>,
        #[serde(default, deserialize_with = "lenient_string")]
        nickname: Option<String>,
    },
    /// Send a rich-text message to the current room.
    ChatMessage {
        #[serde(default, deserialize_with = "lenient_string")]
        html: Option<String>,
    },
}

/// Outbound events (server to room members).
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    ChatMessage {
        id: String,
        sender: String,
        sender_id: String,
        html: String,
        timestamp: String,
    },
    PresenceUpdate { count: usize },
}

impl ServerEvent {
    pub fn chat_message(message: &ChatMessage) -> Self {
        Self::ChatMessage {
            id: message.id.clone(),
            sender: message.sender.clone(),
            sender_id: message.sender_id.as_str().to_string(),
            html: message.html.clone(),
            timestamp: message.timestamp.clone(),
        }
    }

    pub fn presence_update(snapshot: &RoomSnapshot) -> Self {
        Self::PresenceUpdate {
            count: snapshot.count(),
        }
    }
}
