//! Chat message types for LLM calls.
//!
//! Roles: System (first in the list), User, Assistant. Built by the grader
//! and the generate chain, consumed by `LlmClient::invoke`.

/// A single message in an LLM conversation.
///
/// The research agent only ever sends short, purpose-built message lists
/// (system prompt + one user turn); there is no running conversation state.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System prompt; placed first in the message list.
    System(String),
    /// User input.
    User(String),
    /// Model reply.
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }
}
