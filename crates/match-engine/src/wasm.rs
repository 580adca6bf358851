//! WASM bindings for the web frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{choose_bot_move, resolve_round, MatchState, Move, SeededRng};

/// Fresh match state as a JS object.
#[wasm_bindgen]
pub fn initial_state() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&MatchState::new())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Resolve one round against a JSON-serialized state.
///
/// Move names outside the known set default the way the referee does:
/// user input to `invalid`, bot input to `rock`.
///
/// # Returns
/// The next state as a JS object.
#[wasm_bindgen]
pub fn resolve_round_js(
    state_json: &str,
    user_move: &str,
    bot_move: &str,
) -> Result<JsValue, JsError> {
    let state: MatchState = serde_json::from_str(state_json)
        .map_err(|e| JsError::new(&format!("Invalid state: {}", e)))?;

    let user = Move::from_name(user_move).unwrap_or(Move::Invalid);
    let bot = match Move::from_name(bot_move) {
        Some(Move::Invalid) | None => Move::Rock,
        Some(m) => m,
    };

    serde_wasm_bindgen::to_value(&resolve_round(&state, user, bot))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay the bot's move choice for a given seed and round stream.
#[wasm_bindgen]
pub fn choose_bot_move_js(
    state_json: &str,
    seed: &[u8],
    stream: u32,
) -> Result<String, JsError> {
    let state: MatchState = serde_json::from_str(state_json)
        .map_err(|e| JsError::new(&format!("Invalid state: {}", e)))?;
    let seed_arr: [u8; 32] = seed
        .try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;

    let mut rng = SeededRng::new(&seed_arr, stream);
    Ok(choose_bot_move(&state, &mut rng).as_str().to_string())
}
