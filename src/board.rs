//! Board domain types: cell occupancy, game outcome, and the per-response
//! board snapshot.
//!
//! The server-side game engine owns the authoritative board. The client keeps
//! no state between renders — every engine response carries the full cell
//! mapping and a [`Board`] is rebuilt from it, drawn, and discarded.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::consts::CELLS;

/// Occupancy of one board cell.
///
/// `Human` pieces render as rings, `Bot` pieces as crosses. The wire encoding
/// is `0` for human and `1` for bot; anything else is rejected at decode time
/// (see [`crate::protocol`]), so the renderer can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Human,
    Bot,
}

/// Terminal or non-terminal status of the game as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    HumanWin,
    BotWin,
    Tie,
}

impl Outcome {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A full 7x6 board snapshot, indexed flat as `row * 7 + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; CELLS],
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self { cells: [CellState::Empty; CELLS] }
    }

    /// The state of the cell at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    /// Set the cell at `index`. Returns `false` if `index` is out of range.
    pub fn set(&mut self, index: usize, state: CellState) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    /// Iterate over all cells with their flat indices, in index order.
    #[must_use]
    pub fn cells(&self) -> impl Iterator<Item = (usize, CellState)> + '_ {
        self.cells.iter().copied().enumerate()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
