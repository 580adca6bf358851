//! Raw-text move normalization
//!
//! Maps free-form chat text (or model-emitted tool arguments) onto the
//! engine's closed move set. The engine never sees an unnormalized string.

use match_engine::Move;

/// Normalize the user's raw move text.
///
/// Trims whitespace and lowercases before matching. Anything outside the
/// known names becomes `Invalid`, which the engine charges as a wasted round.
pub fn normalize_user_move(raw: &str) -> Move {
    Move::from_name(raw.trim().to_ascii_lowercase().as_str()).unwrap_or(Move::Invalid)
}

/// Normalize the bot's move as reported by the model.
///
/// The bot is never `Invalid`: an unrecognized choice defaults to `Rock`
/// so a flaky model answer costs the bot a real move instead of the round.
pub fn normalize_bot_move(raw: &str) -> Move {
    match Move::from_name(raw.trim().to_ascii_lowercase().as_str()) {
        Some(Move::Invalid) | None => Move::Rock,
        Some(m) => m,
    }
}
