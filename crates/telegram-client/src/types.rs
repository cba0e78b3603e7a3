//! Telegram Bot API types.

use serde::Deserialize;

/// Incoming webhook update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    pub chat: Chat,
}

/// Metadata marking a range of message text as having special meaning.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Response envelope of the `sendMessage` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    pub result: Option<SendMessageResult>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResult {
    pub message_id: i64,
}

impl Message {
    /// The first entity, if it marks a bot command.
    ///
    /// Updates without one are skipped by the bot rather than rejected.
    pub fn command_entity(&self) -> Option<&MessageEntity> {
        self.entities.first().filter(|e| e.kind == "bot_command")
    }
}
