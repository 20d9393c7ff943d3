//! # Chat Transcript
//!
//! The downstream sink for everything the ordering assistant says.
//!
//! The reconciliation engine returns its action and error reports as plain
//! data; the coordinator pushes them here. `MessageSink` is the seam so the
//! web front end can stream messages out while tests read them back from an
//! owned [`Transcript`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Chat Message
// =============================================================================

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The guest at the table.
    Guest,
    /// The ordering assistant.
    Assistant,
}

/// One line of the session's chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    /// Creates an assistant-side message.
    pub fn assistant(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    /// Creates a guest-side message.
    pub fn guest(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::Guest,
            text: text.into(),
        }
    }
}

// =============================================================================
// Message Sink
// =============================================================================

/// Receives transcript messages as they are produced.
pub trait MessageSink {
    /// Appends one message to the transcript.
    fn push(&mut self, message: ChatMessage);

    /// Convenience: appends an assistant message.
    fn say(&mut self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.push(ChatMessage::assistant(text));
    }
}

// =============================================================================
// Transcript
// =============================================================================

/// An owned, in-order transcript of the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Transcript::default()
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Checks if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Only the assistant-side texts, for asserting on replies.
    pub fn assistant_lines(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.text.as_str())
            .collect()
    }
}

impl MessageSink for Transcript {
    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
