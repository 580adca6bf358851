//! Model boundary
//!
//! The hosted language model sits behind `ModelClient` so the whole referee
//! can run against a scripted stand-in. No network client ships in this
//! crate; transport belongs to the embedding application.

use serde::{Deserialize, Serialize};

use crate::error::RefereeError;
use crate::tool::ToolCall;

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

/// One entry in the chat transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self { role: Role::Tool, content: content.into() }
    }
}

/// What the model sent back for one request: free text, a tool call,
/// or both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelReply {
    pub text: Option<String>,
    pub tool_call: Option<ToolCall>,
}

/// The narrow interface to the hosted model.
///
/// One call per user turn: the referee supplies the system instruction and
/// the transcript so far, the client returns the model's reply.
pub trait ModelClient {
    fn respond(
        &mut self,
        system: &str,
        transcript: &[ChatMessage],
    ) -> Result<ModelReply, RefereeError>;
}
