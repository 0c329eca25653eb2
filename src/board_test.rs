use super::*;

// --- CellState ---

#[test]
fn cell_state_defaults_to_empty() {
    assert_eq!(CellState::default(), CellState::Empty);
}

// --- Outcome ---

#[test]
fn outcome_defaults_to_in_progress() {
    assert_eq!(Outcome::default(), Outcome::InProgress);
}

#[test]
fn in_progress_is_not_terminal() {
    assert!(!Outcome::InProgress.is_terminal());
}

#[test]
fn ended_games_are_terminal() {
    assert!(Outcome::HumanWin.is_terminal());
    assert!(Outcome::BotWin.is_terminal());
    assert!(Outcome::Tie.is_terminal());
}

// --- Board ---

#[test]
fn new_board_is_all_empty() {
    let board = Board::new();
    for (index, state) in board.cells() {
        assert_eq!(state, CellState::Empty, "cell {index}");
    }
}

#[test]
fn set_and_get_round_trip() {
    let mut board = Board::new();
    assert!(board.set(0, CellState::Bot));
    assert!(board.set(41, CellState::Human));
    assert_eq!(board.get(0), Some(CellState::Bot));
    assert_eq!(board.get(41), Some(CellState::Human));
    assert_eq!(board.get(1), Some(CellState::Empty));
}

#[test]
fn set_out_of_range_is_rejected() {
    let mut board = Board::new();
    assert!(!board.set(42, CellState::Human));
    assert_eq!(board, Board::new());
}

#[test]
fn get_out_of_range_is_none() {
    assert_eq!(Board::new().get(42), None);
}

#[test]
fn cells_iterates_in_index_order() {
    let board = Board::new();
    let indices: Vec<usize> = board.cells().map(|(i, _)| i).collect();
    assert_eq!(indices.len(), CELLS);
    assert_eq!(indices[0], 0);
    assert_eq!(indices[CELLS - 1], CELLS - 1);
}
