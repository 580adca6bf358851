//! Bot move selection
//!
//! The referee's own play when it has to pick a move without the model:
//! spend the bomb early with a small probability, otherwise draw uniformly
//! from the standard moves.

use crate::random::SeededRng;
use crate::types::{MatchState, Move};

/// Chance (in percent) the bot plays its bomb while it still has one
pub const BOMB_CHANCE_PERCENT: u8 = 15;

const STANDARD_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Pick the bot's move for the upcoming round.
///
/// Never returns `Invalid`, and never returns `Bomb` once the bot's bomb
/// flag is set — the bot does not forfeit rounds to illegal reuse.
pub fn choose_bot_move(state: &MatchState, rng: &mut SeededRng) -> Move {
    if !state.bot_used_bomb && rng.next_percent() < BOMB_CHANCE_PERCENT {
        return Move::Bomb;
    }
    STANDARD_MOVES[rng.next_range(STANDARD_MOVES.len() as u32) as usize]
}
