//! Decoding of move responses from the server-side game engine.
//!
//! The wire format is a single flat JSON object mixing cell keys with status
//! fields:
//!
//! ```json
//! { "0": 1, "6": 0, "winner": -1, "bot_move": 0 }
//! ```
//!
//! Keys `"0".."41"` carry cell values (`0` = human piece, `1` = bot piece;
//! absent = empty). `"winner"` is `0` (human), `1` (bot), or `-1` (tie);
//! absent or any other value means the game is still in progress. `"bot_move"`
//! set to `1` means the engine expects a bot-move request next.
//!
//! Decoding is strict: an
//! unrecognized cell value or an out-of-range cell index is a
//! [`ClientError::Protocol`] rather than an ignored cell, so a drifting server
//! contract surfaces immediately instead of rendering a half-empty board.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde_json::Value;

use crate::board::{Board, CellState, Outcome};
use crate::consts::CELLS;
use crate::error::ClientError;

/// Decoded engine response to either move operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResponse {
    /// Full board snapshot to render.
    pub board: Board,
    /// Game status after the move.
    pub outcome: Outcome,
    /// Whether the engine expects the client to request a bot move next.
    pub bot_move_follows: bool,
}

/// Decode a raw engine response into a [`MoveResponse`].
///
/// # Errors
///
/// Returns [`ClientError::Protocol`] if the payload is not a JSON object, a
/// cell key is out of range, or a cell carries an unrecognized value.
pub fn decode_move_response(value: &Value) -> Result<MoveResponse, ClientError> {
    let Some(fields) = value.as_object() else {
        return Err(ClientError::Protocol("response is not a JSON object".to_owned()));
    };

    let mut board = Board::new();
    for (key, val) in fields {
        // Status fields and any other non-numeric keys are not cells.
        let Ok(index) = key.parse::<usize>() else {
            continue;
        };
        if index >= CELLS {
            return Err(ClientError::Protocol(format!("cell index {index} out of range")));
        }
        board.set(index, decode_cell(index, val)?);
    }

    Ok(MoveResponse {
        board,
        outcome: decode_outcome(fields.get("winner")),
        bot_move_follows: fields.get("bot_move").and_then(Value::as_i64) == Some(1),
    })
}

fn decode_cell(index: usize, val: &Value) -> Result<CellState, ClientError> {
    match val.as_i64() {
        Some(0) => Ok(CellState::Human),
        Some(1) => Ok(CellState::Bot),
        _ => Err(ClientError::Protocol(format!("unrecognized value {val} for cell {index}"))),
    }
}

/// Absent or unrecognized winner values mean the game is still in progress;
/// that is part of the wire contract, not decode leniency.
fn decode_outcome(winner: Option<&Value>) -> Outcome {
    match winner.and_then(Value::as_i64) {
        Some(0) => Outcome::HumanWin,
        Some(1) => Outcome::BotWin,
        Some(-1) => Outcome::Tie,
        _ => Outcome::InProgress,
    }
}
