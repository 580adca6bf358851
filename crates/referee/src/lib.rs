//! Referee orchestration for Rock-Paper-Scissors-Bomb
//!
//! Everything between the chat surface and the pure engine: raw-input
//! normalization, the function-calling tool schema, the model-client
//! boundary, and the per-match turn loop. The hosted model is abstracted
//! behind [`ModelClient`] and mocked in all tests — this crate never opens
//! a network connection.

mod client;
mod error;
mod normalize;
mod report;
mod session;
mod tool;

pub use client::{ChatMessage, ModelClient, ModelReply, Role};
pub use error::RefereeError;
pub use normalize::{normalize_bot_move, normalize_user_move};
pub use report::{format_match_end, format_round};
pub use session::{RefereeSession, TurnOutput, TurnReport, SYSTEM_INSTRUCTION};
pub use tool::{parse_resolve_args, resolve_round_declaration, ToolCall, RESOLVE_ROUND_TOOL};
