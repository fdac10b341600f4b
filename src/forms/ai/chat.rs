use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::fmt;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    /// Hosted Gemini models name this role `model`
    #[serde(alias = "model")]
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound on `ChatMessage::content`, in characters.
pub const MAX_CONTENT_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 5000)]
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    /// Trimmed and cut to `MAX_CONTENT_CHARS`, so the message can go back
    /// into a later request's history.
    pub fn clipped(role: ChatRole, content: &str) -> Self {
        Self {
            role,
            content: content.trim().chars().take(MAX_CONTENT_CHARS).collect(),
        }
    }
}

/// One chat turn: the conversation so far (oldest first) and the new question.
/// The history belongs to the caller, the assistant flow only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(max_items = 200)]
    #[validate]
    pub history: Vec<ChatMessage>,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 5000)]
    pub question: String,
}
