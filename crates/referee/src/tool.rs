//! Function-calling tool surface handed to the model

use match_engine::Move;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::RefereeError;
use crate::normalize::{normalize_bot_move, normalize_user_move};

/// Name of the single tool the referee exposes.
pub const RESOLVE_ROUND_TOOL: &str = "resolve_round";

/// A tool invocation as reported by the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub args: serde_json::Value,
}

/// JSON declaration of the `resolve_round` tool, in the schema shape
/// function-calling APIs expect.
pub fn resolve_round_declaration() -> serde_json::Value {
    json!({
        "name": RESOLVE_ROUND_TOOL,
        "description": "Validates moves, determines round winner, and updates the game state.",
        "parameters": {
            "type": "object",
            "properties": {
                "userMove": {
                    "type": "string",
                    "description": "The move the user chose: rock, paper, scissors, or bomb. Use \"invalid\" if input is nonsense.",
                },
                "botMove": {
                    "type": "string",
                    "description": "The move the bot chose for itself: rock, paper, scissors, or bomb.",
                },
            },
            "required": ["userMove", "botMove"],
        },
    })
}

/// Extract and normalize the `(user, bot)` move pair from a tool call.
///
/// # Errors
/// `UnknownTool` for any name other than `resolve_round`;
/// `MalformedToolCall` when either move field is missing or not a string.
pub fn parse_resolve_args(call: &ToolCall) -> Result<(Move, Move), RefereeError> {
    if call.name != RESOLVE_ROUND_TOOL {
        return Err(RefereeError::UnknownTool(call.name.clone()));
    }

    let user_raw = string_field(&call.args, "userMove")?;
    let bot_raw = string_field(&call.args, "botMove")?;

    Ok((normalize_user_move(user_raw), normalize_bot_move(bot_raw)))
}

fn string_field<'a>(args: &'a serde_json::Value, key: &str) -> Result<&'a str, RefereeError> {
    args.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
        RefereeError::MalformedToolCall(format!("missing string field '{}'", key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(args: serde_json::Value) -> ToolCall {
        ToolCall {
            name: RESOLVE_ROUND_TOOL.to_string(),
            args,
        }
    }

    #[test]
    fn test_declaration_shape() {
        let decl = resolve_round_declaration();
        assert_eq!(decl["name"], RESOLVE_ROUND_TOOL);
        assert_eq!(decl["parameters"]["type"], "object");
        let required: Vec<_> = decl["parameters"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["userMove", "botMove"]);
    }

    #[test]
    fn test_parse_happy_path() {
        let pair = parse_resolve_args(&call(json!({
            "userMove": "rock",
            "botMove": "scissors",
        })))
        .unwrap();
        assert_eq!(pair, (Move::Rock, Move::Scissors));
    }

    #[test]
    fn test_parse_normalizes_both_sides() {
        let pair = parse_resolve_args(&call(json!({
            "userMove": "gibberish",
            "botMove": "gibberish",
        })))
        .unwrap();
        // User garbage forfeits; bot garbage downgrades to rock.
        assert_eq!(pair, (Move::Invalid, Move::Rock));
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_resolve_args(&call(json!({"userMove": "rock"}))).unwrap_err();
        assert!(matches!(err, RefereeError::MalformedToolCall(_)));
        assert!(err.to_string().contains("botMove"));
    }

    #[test]
    fn test_parse_non_string_field() {
        let err = parse_resolve_args(&call(json!({
            "userMove": "rock",
            "botMove": 3,
        })))
        .unwrap_err();
        assert!(matches!(err, RefereeError::MalformedToolCall(_)));
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = parse_resolve_args(&ToolCall {
            name: "update_score".to_string(),
            args: json!({}),
        })
        .unwrap_err();
        assert!(matches!(err, RefereeError::UnknownTool(_)));
    }
}
