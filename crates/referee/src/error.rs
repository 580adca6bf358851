//! Referee-side error taxonomy
//!
//! The engine itself never fails; everything here comes from the model
//! boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefereeError {
    /// The model backend could not produce a reply.
    #[error("model backend unavailable: {0}")]
    ModelUnavailable(String),

    /// The model called `resolve_round` with unusable arguments.
    #[error("malformed tool call arguments: {0}")]
    MalformedToolCall(String),

    /// The model invoked a tool this referee does not expose.
    #[error("model invoked unknown tool '{0}'")]
    UnknownTool(String),
}
