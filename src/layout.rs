//! Fixed board layout: clickable regions and cell geometry.
//!
//! Built once at engine construction from the constants in [`crate::consts`]
//! and immutable thereafter. The seven column regions partition the board's
//! horizontal extent into equal, non-overlapping bands spanning the full play
//! height; the two button regions sit below the board, disjoint from the
//! columns and from each other.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    BACK_BUTTON_X, BACK_BUTTON_Y, BOARD_HEIGHT, BOARD_ORIGIN_X, BOARD_ORIGIN_Y, BUTTON_HEIGHT,
    BUTTON_WIDTH, COL_PITCH, COLS, RESTART_BUTTON_X, RESTART_BUTTON_Y, ROW_PITCH,
};
use crate::geom::{Point, Rect};

/// The set of clickable regions on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    /// One region per column, left to right. Clicking anywhere in a band
    /// plays that column.
    pub columns: [Rect; COLS],
    /// Navigates back to the home page.
    pub back: Rect,
    /// Navigates to a fresh game.
    pub restart: Rect,
}

impl BoardLayout {
    #[must_use]
    pub fn new() -> Self {
        let mut x = BOARD_ORIGIN_X;
        let columns = std::array::from_fn(|_| {
            let band = Rect::new(x, BOARD_ORIGIN_Y, COL_PITCH, BOARD_HEIGHT);
            x += COL_PITCH;
            band
        });

        Self {
            columns,
            back: Rect::new(BACK_BUTTON_X, BACK_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
            restart: Rect::new(RESTART_BUTTON_X, RESTART_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel center of the cell at flat index `row * 7 + col`.
///
/// Callers pass indices below [`crate::consts::CELLS`]; the arithmetic itself
/// does not range-check.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cell_center(index: usize) -> Point {
    let col = (index % COLS) as f64;
    let row = (index / COLS) as f64;
    Point::new(
        BOARD_ORIGIN_X + col * COL_PITCH + COL_PITCH / 2.0,
        BOARD_ORIGIN_Y + row * ROW_PITCH + ROW_PITCH / 2.0,
    )
}
