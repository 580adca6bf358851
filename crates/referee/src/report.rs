//! Deterministic presentation strings
//!
//! Used when the model returns no narration of its own, and directly by
//! tests. All output is derived from engine state — never from model text.

use match_engine::{FinalWinner, MatchState, RoundRecord};

/// One-line round report: moves, reason, running score.
pub fn format_round(record: &RoundRecord, state: &MatchState) -> String {
    format!(
        "Round {}: you played {}, bot played {}. {} Score: you {} - bot {}.",
        record.round_number,
        record.user_move,
        record.bot_move,
        record.reason,
        state.user_score,
        state.bot_score,
    )
}

/// Final match summary.
pub fn format_match_end(state: &MatchState) -> String {
    let verdict = match state.final_winner {
        Some(FinalWinner::User) => "You win the match!",
        Some(FinalWinner::Bot) => "The bot wins the match!",
        Some(FinalWinner::Draw) => "The match is a draw!",
        None => "The match is still in progress.",
    };
    format!(
        "Game over! Final score: you {} - bot {}. {}",
        state.user_score, state.bot_score, verdict
    )
}
