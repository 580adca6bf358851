//! Match state data model

use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors-Bomb
///
/// `Invalid` is the sentinel for unparseable player input. The bot never
/// selects it, but the engine must be able to represent it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
    Invalid,
}

impl Move {
    /// Parse a lowercase move name. Returns `None` for anything outside the
    /// five known names — callers decide how to default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            "bomb" => Some(Move::Bomb),
            "invalid" => Some(Move::Invalid),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
            Move::Invalid => "invalid",
        }
    }

    /// Standard cycle only: rock > scissors > paper > rock.
    /// Bomb and invalid never "beat" anything here — the engine handles
    /// those before consulting the cycle.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winner classification for a single round
///
/// `None` is representable for wire compatibility but resolution always
/// produces one of the other three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    User,
    Bot,
    Draw,
    None,
}

/// Aggregate winner of a finished match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalWinner {
    User,
    Bot,
    Draw,
}

/// Record of one resolved round. Append-only, never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// 1-based round number, taken before the round counter increments
    pub round_number: u8,
    pub user_move: Move,
    pub bot_move: Move,
    pub winner: RoundOutcome,
    /// Human-readable explanation, suitable for direct display
    pub reason: String,
}

/// Authoritative snapshot of a match. Replaced by value on every
/// resolution — never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    /// Next round to be played, starting at 1
    pub current_round: u8,
    pub user_score: u8,
    pub bot_score: u8,
    /// Monotonic: set on the first bomb the user submits, never cleared
    pub user_used_bomb: bool,
    pub bot_used_bomb: bool,
    pub rounds: Vec<RoundRecord>,
    pub is_game_over: bool,
    /// `None` until the match ends, then fixed
    pub final_winner: Option<FinalWinner>,
}

impl MatchState {
    /// Fresh match: round 1, no scores, bombs unused, no history.
    pub fn new() -> Self {
        Self {
            current_round: 1,
            user_score: 0,
            bot_score: 0,
            user_used_bomb: false,
            bot_used_bomb: false,
            rounds: Vec::new(),
            is_game_over: false,
            final_winner: None,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
