//! Round resolution engine

use crate::types::{FinalWinner, MatchState, Move, RoundOutcome, RoundRecord};

/// A match is always exactly this many rounds — no early exit on a 2-0 sweep.
pub const MATCH_ROUNDS: u8 = 3;

/// Resolve one round and produce the next match snapshot.
///
/// Pure and total: no clock, no randomness, no I/O, and no failure path.
/// Calling on a finished match returns the state unchanged.
///
/// # Arguments
/// * `state` - Snapshot before this round
/// * `user_move` - Normalized user move (`Invalid` if input was unparseable)
/// * `bot_move` - Normalized bot move (never `Invalid` in practice)
pub fn resolve_round(state: &MatchState, user_move: Move, bot_move: Move) -> MatchState {
    if state.is_game_over {
        return state.clone();
    }

    let (winner, reason) = decide_winner(state, user_move, bot_move);

    let mut rounds = state.rounds.clone();
    rounds.push(RoundRecord {
        round_number: state.current_round,
        user_move,
        bot_move,
        winner,
        reason,
    });

    let user_score = state.user_score + u8::from(winner == RoundOutcome::User);
    let bot_score = state.bot_score + u8::from(winner == RoundOutcome::Bot);

    let is_game_over = state.current_round >= MATCH_ROUNDS;
    let final_winner = if is_game_over {
        Some(if user_score > bot_score {
            FinalWinner::User
        } else if bot_score > user_score {
            FinalWinner::Bot
        } else {
            FinalWinner::Draw
        })
    } else {
        None
    };

    MatchState {
        current_round: state.current_round + 1,
        user_score,
        bot_score,
        // Flags track *submitted* bombs, so even a reuse-forfeit re-asserts them
        user_used_bomb: state.user_used_bomb || user_move == Move::Bomb,
        bot_used_bomb: state.bot_used_bomb || bot_move == Move::Bomb,
        rounds,
        is_game_over,
        final_winner,
    }
}

/// Winner determination, in priority order:
/// 1. unparseable user input forfeits the round
/// 2. bomb reuse forfeits the round (user checked before bot)
/// 3. mutual bomb draws
/// 4. identical standard moves draw
/// 5. a lone, non-reused bomb wins outright
/// 6. the standard cycle decides the rest
fn decide_winner(state: &MatchState, user_move: Move, bot_move: Move) -> (RoundOutcome, String) {
    if user_move == Move::Invalid {
        return (
            RoundOutcome::Bot,
            "Invalid input wastes the round for the user.".to_string(),
        );
    }
    if user_move == Move::Bomb && state.user_used_bomb {
        return (
            RoundOutcome::Bot,
            "User tried to use bomb twice! Round wasted.".to_string(),
        );
    }
    if bot_move == Move::Bomb && state.bot_used_bomb {
        return (
            RoundOutcome::User,
            "Bot tried to use bomb twice! Round wasted.".to_string(),
        );
    }
    if user_move == bot_move {
        if user_move == Move::Bomb {
            return (
                RoundOutcome::Draw,
                "Both players played bomb. It's a draw!".to_string(),
            );
        }
        return (
            RoundOutcome::Draw,
            format!("Both players played {user_move}. It's a draw!"),
        );
    }
    if user_move == Move::Bomb {
        return (
            RoundOutcome::User,
            "The Bomb obliterates everything!".to_string(),
        );
    }
    if bot_move == Move::Bomb {
        return (
            RoundOutcome::Bot,
            "The Bot used the Bomb! Total destruction.".to_string(),
        );
    }
    if user_move.beats(bot_move) {
        (RoundOutcome::User, format!("{user_move} beats {bot_move}."))
    } else {
        (RoundOutcome::Bot, format!("{bot_move} beats {user_move}."))
    }
}
