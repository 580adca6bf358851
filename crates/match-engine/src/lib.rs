//! Match engine for Rock-Paper-Scissors-Bomb
//!
//! Pure game logic for the chat-refereed best-of-3 match. This crate is
//! compiled to:
//! - Native (for the referee orchestration layer)
//! - WASM (for frontend state display and replay)
//!
//! The engine is a single pure transition function over an immutable match
//! snapshot; everything stateful or effectful lives in its callers.

mod bot;
mod engine;
mod random;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use bot::{choose_bot_move, BOMB_CHANCE_PERCENT};
pub use engine::{resolve_round, MATCH_ROUNDS};
pub use random::SeededRng;
pub use types::{FinalWinner, MatchState, Move, RoundOutcome, RoundRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_table() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));

        let all = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb, Move::Invalid];
        for m in all {
            assert!(!m.beats(m));
            // Bomb and invalid sit outside the cycle entirely
            assert!(!Move::Bomb.beats(m));
            assert!(!Move::Invalid.beats(m));
            assert!(!m.beats(Move::Bomb));
            assert!(!m.beats(Move::Invalid));
        }
    }
}
