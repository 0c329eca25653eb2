use serde_json::json;

use super::*;

// --- The reference scenario ---

#[test]
fn decodes_the_tie_scenario() {
    let payload = json!({ "0": 1, "6": 0, "winner": -1, "bot_move": 0 });
    let response = decode_move_response(&payload).unwrap();

    assert_eq!(response.board.get(0), Some(CellState::Bot));
    assert_eq!(response.board.get(6), Some(CellState::Human));
    for index in 1..6 {
        assert_eq!(response.board.get(index), Some(CellState::Empty), "cell {index}");
    }
    for index in 7..CELLS {
        assert_eq!(response.board.get(index), Some(CellState::Empty), "cell {index}");
    }
    assert_eq!(response.outcome, Outcome::Tie);
    assert!(!response.bot_move_follows);
}

// --- Cells ---

#[test]
fn absent_cells_decode_as_empty() {
    let response = decode_move_response(&json!({})).unwrap();
    assert_eq!(response.board, Board::new());
}

#[test]
fn full_column_decodes() {
    // Column 3 filled bottom-up with alternating pieces.
    let payload = json!({
        "3": 0, "10": 1, "17": 0, "24": 1, "31": 0, "38": 1,
    });
    let response = decode_move_response(&payload).unwrap();
    assert_eq!(response.board.get(3), Some(CellState::Human));
    assert_eq!(response.board.get(10), Some(CellState::Bot));
    assert_eq!(response.board.get(38), Some(CellState::Bot));
}

#[test]
fn unrecognized_cell_value_is_a_protocol_error() {
    let err = decode_move_response(&json!({ "5": 7 })).unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));
    assert!(err.to_string().contains("cell 5"));
}

#[test]
fn non_integer_cell_value_is_a_protocol_error() {
    let err = decode_move_response(&json!({ "5": "x" })).unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));
}

#[test]
fn out_of_range_cell_index_is_a_protocol_error() {
    let err = decode_move_response(&json!({ "42": 0 })).unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn unknown_non_numeric_keys_are_ignored() {
    let payload = json!({ "0": 1, "server_ts": 12345, "note": "hi" });
    let response = decode_move_response(&payload).unwrap();
    assert_eq!(response.board.get(0), Some(CellState::Bot));
}

// --- Winner field ---

#[test]
fn winner_zero_is_a_human_win() {
    let response = decode_move_response(&json!({ "winner": 0 })).unwrap();
    assert_eq!(response.outcome, Outcome::HumanWin);
}

#[test]
fn winner_one_is_a_bot_win() {
    let response = decode_move_response(&json!({ "winner": 1 })).unwrap();
    assert_eq!(response.outcome, Outcome::BotWin);
}

#[test]
fn absent_winner_means_in_progress() {
    let response = decode_move_response(&json!({ "0": 0 })).unwrap();
    assert_eq!(response.outcome, Outcome::InProgress);
}

#[test]
fn unrecognized_winner_means_in_progress() {
    let response = decode_move_response(&json!({ "winner": 9 })).unwrap();
    assert_eq!(response.outcome, Outcome::InProgress);
}

// --- Bot-move flag ---

#[test]
fn bot_move_one_sets_the_flag() {
    let response = decode_move_response(&json!({ "bot_move": 1 })).unwrap();
    assert!(response.bot_move_follows);
}

#[test]
fn bot_move_zero_or_absent_clears_the_flag() {
    assert!(!decode_move_response(&json!({ "bot_move": 0 })).unwrap().bot_move_follows);
    assert!(!decode_move_response(&json!({})).unwrap().bot_move_follows);
}

// --- Shape errors ---

#[test]
fn non_object_payload_is_a_protocol_error() {
    let err = decode_move_response(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));

    let err = decode_move_response(&json!(null)).unwrap_err();
    assert!(matches!(err, ClientError::Protocol(_)));
}
