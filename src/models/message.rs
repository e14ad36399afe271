use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Suggestion,
    Resource,
}

/// One turn in a chat transcript. Transcripts are append-only; a message
/// is never edited or removed once pushed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Monotonically increasing, derived from creation time.
    pub id: i64,
    pub content: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
    pub language: Option<String>,
    pub kind: Option<MessageKind>,
}

impl ConversationMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
