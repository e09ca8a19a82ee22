//! Events arriving on the chat socket.

use serde::{Deserialize, Serialize};
use sitelink_api::dto::ChatMessage;
use uuid::Uuid;

/// A single event pushed over the chat WebSocket (or synthesized from a
/// history replay, for `Message`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    Message { message: ChatMessage },
    Typing { chat_id: Uuid, user_id: String },
    Read { chat_id: Uuid, user_id: String, last_seq: u64 },
}

impl ChatEvent {
    /// Decode one text frame. Unknown event types decode to `None` so a
    /// newer backend never kills the connection.
    pub fn decode(frame: &str) -> Option<ChatEvent> {
        match serde_json::from_str(frame) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::debug!("ignoring undecodable chat frame: {}", e);
                None
            }
        }
    }
}
