//! WebSocket event DTOs.

use serde::{Deserialize, Serialize};

/// Event type discriminator for server-to-client events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Joined,
    Chat,
}

/// Client-to-server events, tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Subscribe this connection to a room
    Join { room_id: String },
    /// Submit a chat message to a room
    Chat {
        room_id: String,
        sender: String,
        content: String,
        #[serde(default)]
        attachment: Option<String>,
    },
}

/// Ack sent back to a connection after a successful join
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedEvent {
    pub r#type: EventType,
    pub room_id: String,
    pub joined_at: i64,
}

/// Broadcast event delivered to every current subscriber of a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatBroadcastEvent {
    pub r#type: EventType,
    pub id: String,
    pub room_id: String,
    pub sender: String,
    pub content: String,
    pub attachment: Option<String>,
    pub timestamp: i64,
}
