//! Shared pixel-layout constants for the Connect Four canvas.
//!
//! The layout is fixed: the server page hosts a single statically sized
//! canvas, so every coordinate below is in CSS pixels of that surface.

/// Number of board columns.
pub const COLS: usize = 7;

/// Number of board rows.
pub const ROWS: usize = 6;

/// Total number of cells; flat cell indices run `0..CELLS` as `row * COLS + col`.
pub const CELLS: usize = COLS * ROWS;

// ── Board geometry ──────────────────────────────────────────────

/// Left edge of the play area.
pub const BOARD_ORIGIN_X: f64 = 100.0;

/// Top edge of the play area.
pub const BOARD_ORIGIN_Y: f64 = 150.0;

/// Horizontal distance between adjacent column boundaries.
pub const COL_PITCH: f64 = 110.0;

/// Vertical distance between adjacent row boundaries.
pub const ROW_PITCH: f64 = 90.0;

/// Full width of the play area (7 columns).
#[allow(clippy::cast_precision_loss)]
pub const BOARD_WIDTH: f64 = COL_PITCH * COLS as f64;

/// Full height of the play area (6 rows).
#[allow(clippy::cast_precision_loss)]
pub const BOARD_HEIGHT: f64 = ROW_PITCH * ROWS as f64;

// ── Grid and glyph strokes ──────────────────────────────────────

/// Stroke width for grid lines and piece glyphs.
pub const STROKE_WIDTH: f64 = 10.0;

/// Grid line color.
pub const GRID_STROKE: &str = "#1F1A17";

/// Radius of the ring glyph (human piece).
pub const RING_RADIUS: f64 = 30.0;

/// Half-diagonal of the cross glyph (bot piece).
pub const CROSS_ARM: f64 = 20.0;

/// Stroke color for the ring glyph.
pub const RING_STROKE: &str = "#D12B2B";

/// Stroke color for the cross glyph.
pub const CROSS_STROKE: &str = "#1E90FF";

// ── Buttons ─────────────────────────────────────────────────────

/// Button width.
pub const BUTTON_WIDTH: f64 = 100.0;

/// Button height.
pub const BUTTON_HEIGHT: f64 = 50.0;

/// Left edge of the back button.
pub const BACK_BUTTON_X: f64 = 100.0;

/// Top edge of the back button.
pub const BACK_BUTTON_Y: f64 = 700.0;

/// Left edge of the restart button.
pub const RESTART_BUTTON_X: f64 = 800.0;

/// Top edge of the restart button.
pub const RESTART_BUTTON_Y: f64 = 700.0;

/// Button fill color.
pub const BUTTON_FILL: &str = "yellow";

/// Button label color.
pub const BUTTON_TEXT_COLOR: &str = "blue";

/// Button label font.
pub const BUTTON_FONT: &str = "13pt Verdana";

/// Horizontal offset from the button's left edge to its label.
pub const BUTTON_LABEL_DX: f64 = 50.0;

/// Vertical offset from the button's top edge to its label baseline.
pub const BUTTON_LABEL_DY: f64 = 30.0;

// ── Outcome banner ──────────────────────────────────────────────

/// Horizontal center of the outcome banner text.
pub const OUTCOME_TEXT_X: f64 = 200.0;

/// Baseline of the outcome banner text.
pub const OUTCOME_TEXT_Y: f64 = 120.0;

/// Outcome banner font.
pub const OUTCOME_FONT: &str = "60px Verdana";

/// Region wiped before each banner render so repeated renders never overlap.
pub const OUTCOME_CLEAR_X: f64 = 0.0;
pub const OUTCOME_CLEAR_Y: f64 = 55.0;
pub const OUTCOME_CLEAR_WIDTH: f64 = 460.0;
pub const OUTCOME_CLEAR_HEIGHT: f64 = 80.0;
