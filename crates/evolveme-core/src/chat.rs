//! Chat message types and the chat view state.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::text;

/// Role of a message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChatRole {
    /// User message.
    User,
    /// AI coach reply. The backend sends `ai`; `assistant` is accepted too.
    Ai,
    /// System message.
    System,
    /// Anything else, kept verbatim.
    Other(String),
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Ai => "ai",
            ChatRole::System => "system",
            ChatRole::Other(s) => s,
        }
    }
}

impl From<String> for ChatRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "user" => ChatRole::User,
            "ai" | "assistant" => ChatRole::Ai,
            "system" => ChatRole::System,
            _ => ChatRole::Other(s),
        }
    }
}

impl From<ChatRole> for String {
    fn from(role: ChatRole) -> Self {
        role.as_str().to_string()
    }
}

/// A message in the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Backend-assigned id; absent on optimistic local messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Role of this message.
    pub role: ChatRole,
    /// Message content (markdown from the AI).
    pub content: String,
    /// When the message was created.
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new chat message stamped with the current time.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: None,
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an AI message.
    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Ai, content)
    }

    /// Timestamp in local time, `HH:MM:SS`.
    pub fn local_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

/// Response body of `GET /conversations`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConversationsResponse {
    #[serde(default)]
    pub conversations: Vec<ChatMessage>,
}

/// Request body of `POST /conversations`.
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    pub content: String,
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, or a naive date-time (as the backend
/// emits it) which is taken to be UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(CoreError::InvalidTimestamp(s.to_string()))
}

mod timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}

/// Local state of the chat view.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    /// Messages in insertion order.
    pub messages: Vec<ChatMessage>,
    /// Current contents of the input box.
    pub input: String,
    /// A send is in flight.
    pub loading: bool,
    /// Message for the dismissible error banner.
    pub error: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the result of fetching history.
    pub fn load_history(&mut self, result: Result<Vec<ChatMessage>, String>) {
        match result {
            Ok(messages) => self.messages = messages,
            Err(_) => self.error = Some(text::HISTORY_FAILED.to_string()),
        }
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Start sending the current input.
    ///
    /// Blank input or an in-flight request is a no-op returning `None`.
    /// Otherwise the user message is appended right away and its content
    /// returned for posting.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }

        let content = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(content.clone()));
        self.loading = true;
        self.error = None;
        Some(content)
    }

    /// Apply the result of posting a message.
    ///
    /// The optimistic user message is kept on failure.
    pub fn finish_send(&mut self, result: Result<ChatMessage, String>) {
        self.loading = false;
        match result {
            Ok(reply) => self.messages.push(reply),
            Err(message) if message.trim().is_empty() => {
                self.error = Some(text::SEND_FAILED.to_string());
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
