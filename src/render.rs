//! Rendering: draws the board scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of layout and board state and produces pixels —
//! it does not mutate any application state.
//!
//! The static scene (grid and buttons) is drawn once at mount. Per-update
//! rendering redraws the full glyph set with no diffing; glyphs land on the
//! same pixels every time, so overdraw is invisible. The outcome banner region
//! is cleared before each banner render so repeated terminal renders never
//! stack text.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::board::{Board, CellState, Outcome};
use crate::consts::{
    BOARD_HEIGHT, BOARD_ORIGIN_X, BOARD_ORIGIN_Y, BOARD_WIDTH, BUTTON_FILL, BUTTON_FONT,
    BUTTON_LABEL_DX, BUTTON_LABEL_DY, BUTTON_TEXT_COLOR, COL_PITCH, COLS, CROSS_ARM, CROSS_STROKE,
    GRID_STROKE, OUTCOME_CLEAR_HEIGHT,
    OUTCOME_CLEAR_WIDTH, OUTCOME_CLEAR_X, OUTCOME_CLEAR_Y, OUTCOME_FONT, OUTCOME_TEXT_X,
    OUTCOME_TEXT_Y, RING_RADIUS, RING_STROKE, ROW_PITCH, ROWS, STROKE_WIDTH,
};
use crate::geom::{Point, Rect};
use crate::layout::{self, BoardLayout};

/// Banner color for a human win.
const WIN_COLOR: &str = "green";
/// Banner color for a bot win.
const LOSS_COLOR: &str = "red";
/// Banner color for a tie.
const TIE_COLOR: &str = "blue";

/// Owns the 2D context for the lifetime of the page view.
///
/// Created once when the view mounts and dropped with the engine when it
/// unmounts; render functions borrow it rather than reaching for a global
/// context.
pub struct RenderTarget {
    ctx: CanvasRenderingContext2d,
}

impl RenderTarget {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

/// Draw the static scene: grid lines and the two navigation buttons.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_static(target: &RenderTarget, layout: &BoardLayout) -> Result<(), JsValue> {
    let ctx = &target.ctx;

    ctx.set_line_cap("round");
    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_stroke_style_str(GRID_STROKE);

    // 7 horizontal and 8 vertical lines bound the 7x6 cell grid.
    let right = BOARD_ORIGIN_X + BOARD_WIDTH;
    let bottom = BOARD_ORIGIN_Y + BOARD_HEIGHT;

    for row in 0..=ROWS {
        let y = ROW_PITCH.mul_add(index_f(row), BOARD_ORIGIN_Y);
        ctx.begin_path();
        ctx.move_to(BOARD_ORIGIN_X, y);
        ctx.line_to(right, y);
        ctx.stroke();
    }
    for col in 0..=COLS {
        let x = COL_PITCH.mul_add(index_f(col), BOARD_ORIGIN_X);
        ctx.begin_path();
        ctx.move_to(x, BOARD_ORIGIN_Y);
        ctx.line_to(x, bottom);
        ctx.stroke();
    }

    draw_button(ctx, layout.back, "BACK")?;
    draw_button(ctx, layout.restart, "RESTART")
}

/// Draw the full glyph set for a board snapshot.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_board(target: &RenderTarget, board: &Board) -> Result<(), JsValue> {
    let ctx = &target.ctx;
    for (index, state) in board.cells() {
        let center = layout::cell_center(index);
        match state {
            CellState::Empty => {}
            CellState::Human => draw_ring(ctx, center)?,
            CellState::Bot => draw_cross(ctx, center),
        }
    }
    Ok(())
}

/// Clear the banner region, then draw the outcome text if the game has ended.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_outcome(target: &RenderTarget, outcome: Outcome) -> Result<(), JsValue> {
    let ctx = &target.ctx;
    ctx.clear_rect(OUTCOME_CLEAR_X, OUTCOME_CLEAR_Y, OUTCOME_CLEAR_WIDTH, OUTCOME_CLEAR_HEIGHT);

    let (text, color) = match outcome {
        Outcome::InProgress => return Ok(()),
        Outcome::HumanWin => ("YOU WON!", WIN_COLOR),
        Outcome::BotWin => ("YOU LOST!", LOSS_COLOR),
        Outcome::Tie => ("A TIE!", TIE_COLOR),
    };

    ctx.set_fill_style_str(color);
    ctx.set_font(OUTCOME_FONT);
    ctx.set_text_align("center");
    ctx.fill_text(text, OUTCOME_TEXT_X, OUTCOME_TEXT_Y)
}

// =============================================================
// Glyphs
// =============================================================

fn draw_ring(ctx: &CanvasRenderingContext2d, center: Point) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(RING_STROKE);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.begin_path();
    ctx.arc(center.x, center.y, RING_RADIUS, 0.0, 2.0 * PI)?;
    ctx.stroke();
    Ok(())
}

fn draw_cross(ctx: &CanvasRenderingContext2d, center: Point) {
    ctx.set_stroke_style_str(CROSS_STROKE);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.begin_path();
    ctx.move_to(center.x - CROSS_ARM, center.y - CROSS_ARM);
    ctx.line_to(center.x + CROSS_ARM, center.y + CROSS_ARM);
    ctx.move_to(center.x + CROSS_ARM, center.y - CROSS_ARM);
    ctx.line_to(center.x - CROSS_ARM, center.y + CROSS_ARM);
    ctx.stroke();
}

// =============================================================
// Buttons
// =============================================================

fn draw_button(ctx: &CanvasRenderingContext2d, rect: Rect, label: &str) -> Result<(), JsValue> {
    ctx.set_fill_style_str(BUTTON_FILL);
    ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

    ctx.set_fill_style_str(BUTTON_TEXT_COLOR);
    ctx.set_font(BUTTON_FONT);
    ctx.set_text_align("center");
    ctx.fill_text(label, rect.x + BUTTON_LABEL_DX, rect.y + BUTTON_LABEL_DY)
}

#[allow(clippy::cast_precision_loss)]
fn index_f(n: usize) -> f64 {
    n as f64
}
