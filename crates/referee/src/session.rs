//! Turn orchestration
//!
//! `RefereeSession` owns the authoritative match state and drives one engine
//! call per user turn: build the state context, ask the model, apply its
//! `resolve_round` tool call (or referee locally when it declines), and hand
//! the caller everything the presentation and feedback layers need.

use match_engine::{
    choose_bot_move, resolve_round, MatchState, Move, RoundRecord, SeededRng,
};
use tracing::{debug, info, warn};

use crate::client::{ChatMessage, ModelClient};
use crate::error::RefereeError;
use crate::normalize::normalize_user_move;
use crate::report::{format_match_end, format_round};
use crate::tool::parse_resolve_args;

/// Persona and protocol handed to the model on every request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are the \"Ref-O-Matic\", a witty and efficient game referee for Rock-Paper-Scissors-Bomb.
RULES:
1. Best of 3 rounds.
2. Moves: rock, paper, scissors, bomb.
3. Bomb: Beats all but bomb (draw). Use once per player per game.
4. Invalid inputs: Round wasted (opponent wins).

YOUR TASK:
- Be competitive! You are also the user's opponent.
- On every turn:
  1. Parse the user's move from their chat.
  2. Decide YOUR move (be smart or random).
  3. CALL the 'resolve_round' tool to update the official game state.
  4. After the tool returns, announce the result (round #, moves played, winner) and current score.
  5. If game is over, announce final result and stop.
- Do NOT hallucinate scores. Only use the tool output.";

/// Everything a caller needs after one resolved round.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    /// The freshly appended round record
    pub record: RoundRecord,
    /// Snapshot after resolution
    pub state: MatchState,
    /// What to show the user: model text when present, local report otherwise
    pub narration: String,
    /// Feedback-layer classification: either move this round was a bomb
    pub bomb_cue: bool,
}

/// Result of one `process_turn` call.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutput {
    /// A round was resolved.
    Round(TurnReport),
    /// The match was already over; no round was played.
    AlreadyOver { summary: String },
}

/// One chat-driven match, start to finish.
///
/// Turns are serialized by `&mut self`: each resolution is applied before
/// the next turn can begin, so the engine never sees a stale snapshot.
pub struct RefereeSession<C: ModelClient> {
    client: C,
    state: MatchState,
    transcript: Vec<ChatMessage>,
    rng: SeededRng,
}

impl<C: ModelClient> RefereeSession<C> {
    pub fn new(client: C, seed: &[u8; 32]) -> Self {
        Self {
            client,
            state: MatchState::new(),
            transcript: Vec::new(),
            rng: SeededRng::new(seed, 0),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Fixed rules text shown once at match start.
    pub fn rules_banner() -> &'static str {
        "Welcome to Rock-Paper-Scissors-Bomb!\n\
         Rules (Best of 3):\n\
         - Valid moves: rock, paper, scissors, bomb\n\
         - Bomb beats everything (use once per player)\n\
         - Bomb vs bomb = draw\n\
         - Invalid input = lose the round\n\
         - Game ends after 3 rounds\n\
         Let's play! Enter your move:"
    }

    /// Process one user turn.
    ///
    /// On a finished match this is a no-op that returns the final summary;
    /// otherwise exactly one round is resolved.
    pub fn process_turn(&mut self, user_input: &str) -> Result<TurnOutput, RefereeError> {
        if self.state.is_game_over {
            debug!("turn after game over; returning final summary");
            return Ok(TurnOutput::AlreadyOver {
                summary: format_match_end(&self.state),
            });
        }

        debug!(round = self.state.current_round, input = user_input, "processing turn");
        let context = self.build_turn_context(user_input);
        self.transcript.push(ChatMessage::user(context));

        let reply = self.client.respond(SYSTEM_INSTRUCTION, &self.transcript)?;

        let (user_move, bot_move) = match reply.tool_call.as_ref() {
            Some(call) => {
                let pair = parse_resolve_args(call)?;
                debug!(tool = call.name.as_str(), "applying model tool call");
                pair
            }
            None => {
                // Model declined the tool; referee the round locally so the
                // match always advances.
                warn!("model returned no tool call; refereeing locally");
                (
                    normalize_user_move(user_input),
                    choose_bot_move(&self.state, &mut self.rng),
                )
            }
        };

        let next = resolve_round(&self.state, user_move, bot_move);
        let record = next
            .rounds
            .last()
            .cloned()
            .expect("resolving a live match always appends a record");
        info!(
            round = record.round_number,
            winner = ?record.winner,
            game_over = next.is_game_over,
            "round resolved"
        );

        // Tool result goes back into the transcript so the model sees the
        // authoritative state on the next turn.
        if let Ok(payload) = serde_json::to_string(&next) {
            self.transcript.push(ChatMessage::tool(payload));
        }

        let narration = match reply.text {
            Some(text) => text,
            None => {
                let mut local = format_round(&record, &next);
                if next.is_game_over {
                    local.push('\n');
                    local.push_str(&format_match_end(&next));
                }
                local
            }
        };
        self.transcript.push(ChatMessage::assistant(narration.clone()));

        let bomb_cue = record.user_move == Move::Bomb || record.bot_move == Move::Bomb;
        self.state = next;

        Ok(TurnOutput::Round(TurnReport {
            record,
            state: self.state.clone(),
            narration,
            bomb_cue,
        }))
    }

    /// State-context prompt wrapped around the raw user input, so the model
    /// never has to remember scores itself.
    fn build_turn_context(&self, user_input: &str) -> String {
        format!(
            "Game State:\n\
             - Round: {}/3\n\
             - Score: User {} - Bot {}\n\
             - User bomb used: {}\n\
             - Bot bomb used: {}\n\
             \n\
             User's input: \"{}\"",
            self.state.current_round,
            self.state.user_score,
            self.state.bot_score,
            self.state.user_used_bomb,
            self.state.bot_used_bomb,
            user_input,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use match_engine::{FinalWinner, RoundOutcome};
    use serde_json::json;

    use crate::client::{ModelReply, Role};
    use crate::tool::{ToolCall, RESOLVE_ROUND_TOOL};

    /// Pops pre-scripted replies; errors once the script runs dry.
    struct ScriptedClient {
        replies: VecDeque<ModelReply>,
        calls: usize,
    }

    impl ScriptedClient {
        fn new(replies: Vec<ModelReply>) -> Self {
            Self {
                replies: replies.into(),
                calls: 0,
            }
        }
    }

    impl ModelClient for ScriptedClient {
        fn respond(
            &mut self,
            _system: &str,
            _transcript: &[ChatMessage],
        ) -> Result<ModelReply, RefereeError> {
            self.calls += 1;
            self.replies
                .pop_front()
                .ok_or_else(|| RefereeError::ModelUnavailable("script exhausted".to_string()))
        }
    }

    fn tool_reply(user: &str, bot: &str) -> ModelReply {
        ModelReply {
            text: None,
            tool_call: Some(ToolCall {
                name: RESOLVE_ROUND_TOOL.to_string(),
                args: json!({ "userMove": user, "botMove": bot }),
            }),
        }
    }

    fn session(replies: Vec<ModelReply>) -> RefereeSession<ScriptedClient> {
        RefereeSession::new(ScriptedClient::new(replies), &[42u8; 32])
    }

    fn unwrap_round(output: TurnOutput) -> TurnReport {
        match output {
            TurnOutput::Round(report) => report,
            TurnOutput::AlreadyOver { summary } => {
                panic!("expected a resolved round, got terminal summary: {summary}")
            }
        }
    }

    #[test]
    fn test_full_match_through_tool_calls() {
        let mut session = session(vec![
            tool_reply("rock", "scissors"),
            tool_reply("bomb", "rock"),
            tool_reply("paper", "scissors"),
        ]);

        let r1 = unwrap_round(session.process_turn("rock").unwrap());
        assert_eq!(r1.record.winner, RoundOutcome::User);
        assert!(!r1.bomb_cue);

        let r2 = unwrap_round(session.process_turn("bomb!").unwrap());
        assert_eq!(r2.record.winner, RoundOutcome::User);
        assert!(r2.bomb_cue);
        assert!(r2.state.user_used_bomb);

        let r3 = unwrap_round(session.process_turn("paper").unwrap());
        assert_eq!(r3.record.winner, RoundOutcome::Bot);
        assert!(r3.state.is_game_over);
        assert_eq!(r3.state.final_winner, Some(FinalWinner::User));
        assert_eq!((r3.state.user_score, r3.state.bot_score), (2, 1));
        assert_eq!(r3.state.rounds.len(), 3);
    }

    #[test]
    fn test_terminal_turn_skips_model() {
        let mut session = session(vec![
            tool_reply("rock", "paper"),
            tool_reply("rock", "paper"),
            tool_reply("rock", "paper"),
        ]);
        for _ in 0..3 {
            session.process_turn("rock").unwrap();
        }
        assert!(session.state().is_game_over);

        // Script is exhausted, so consulting the model now would error.
        let output = session.process_turn("rock").unwrap();
        match output {
            TurnOutput::AlreadyOver { summary } => {
                assert!(summary.contains("Game over!"));
                assert!(summary.contains("The bot wins the match!"));
            }
            TurnOutput::Round(_) => panic!("terminal turn must not resolve a round"),
        }
        assert_eq!(session.state().rounds.len(), 3);
        assert_eq!(session.client.calls, 3);
    }

    #[test]
    fn test_local_fallback_when_model_declines_tool() {
        let mut session = session(vec![ModelReply {
            text: None,
            tool_call: None,
        }]);

        let report = unwrap_round(session.process_turn("  SCISSORS ").unwrap());
        assert_eq!(report.record.user_move, Move::Scissors);
        assert_ne!(report.record.bot_move, Move::Invalid);
        assert_eq!(report.state.current_round, 2);
        // Local narration comes from the deterministic report formatter.
        assert!(report.narration.starts_with("Round 1:"));
    }

    #[test]
    fn test_model_text_wins_over_local_report() {
        let mut session = session(vec![ModelReply {
            text: Some("What a round!".to_string()),
            tool_call: tool_reply("rock", "rock").tool_call,
        }]);
        let report = unwrap_round(session.process_turn("rock").unwrap());
        assert_eq!(report.narration, "What a round!");
    }

    #[test]
    fn test_model_error_propagates() {
        let mut session = session(Vec::new());
        let err = session.process_turn("rock").unwrap_err();
        assert!(matches!(err, RefereeError::ModelUnavailable(_)));
        // Nothing was resolved.
        assert_eq!(session.state().current_round, 1);
    }

    #[test]
    fn test_malformed_tool_call_leaves_state_untouched() {
        let mut session = session(vec![ModelReply {
            text: None,
            tool_call: Some(ToolCall {
                name: RESOLVE_ROUND_TOOL.to_string(),
                args: json!({ "userMove": "rock" }),
            }),
        }]);
        let err = session.process_turn("rock").unwrap_err();
        assert!(matches!(err, RefereeError::MalformedToolCall(_)));
        assert_eq!(session.state().current_round, 1);
        assert!(session.state().rounds.is_empty());
    }

    #[test]
    fn test_transcript_carries_tool_result() {
        let mut session = session(vec![tool_reply("rock", "scissors")]);
        session.process_turn("rock").unwrap();

        let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Tool, Role::Assistant]);

        // The tool entry is the serialized post-round state.
        let payload: serde_json::Value =
            serde_json::from_str(&session.transcript()[1].content).unwrap();
        assert_eq!(payload["currentRound"], 2);
        assert_eq!(payload["userScore"], 1);
    }

    #[test]
    fn test_turn_context_reports_state() {
        let session = session(Vec::new());
        let context = session.build_turn_context("bomb");
        assert!(context.contains("Round: 1/3"));
        assert!(context.contains("Score: User 0 - Bot 0"));
        assert!(context.contains("User's input: \"bomb\""));
    }

    #[test]
    fn test_rules_banner_mentions_every_rule() {
        let banner = RefereeSession::<ScriptedClient>::rules_banner();
        for needle in ["Best of 3", "bomb", "once per player", "Invalid input"] {
            assert!(banner.contains(needle), "missing: {needle}");
        }
    }
}
