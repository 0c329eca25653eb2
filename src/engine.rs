use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::error::ClientError;
use crate::geom::Point;
use crate::hit::{self, ClickTarget};
use crate::input::InputState;
use crate::layout::BoardLayout;
use crate::protocol::MoveResponse;
use crate::render::{self, RenderTarget};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Navigation destinations reachable from the board page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The site home page.
    Home,
    /// A fresh Connect Four game.
    NewGame,
}

impl Route {
    /// The path to navigate to.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::NewGame => "/connect4",
        }
    }
}

/// Actions returned from the engine for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Change the browser location.
    Navigate(Route),
    /// Post this column to the engine as the human's move.
    SubmitMove(usize),
    /// Request the bot's move from the engine.
    RequestBotMove,
    /// Surface a failure notice to the player.
    ShowFailure(Failure),
}

/// What a failure notice should tell the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The request never completed; the same move can be retried.
    Network,
    /// The engine's reply was out of contract; a retry is unlikely to help.
    Protocol,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub layout: BoardLayout,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click at a surface-relative point.
    ///
    /// Clicks are rejected while an exchange is in flight. A click in a
    /// column band locks input and asks the host to submit the move; button
    /// clicks navigate without locking (navigation tears the page down
    /// anyway). A click outside every region is a no-op.
    pub fn on_click(&mut self, surface_pt: Point) -> Action {
        if self.input.is_locked() {
            return Action::None;
        }
        match hit::hit_test(surface_pt, &self.layout) {
            Some(ClickTarget::Back) => Action::Navigate(Route::Home),
            Some(ClickTarget::Restart) => Action::Navigate(Route::NewGame),
            Some(ClickTarget::Column(col)) => {
                self.input = InputState::AwaitingMoveAck;
                Action::SubmitMove(col)
            }
            None => Action::None,
        }
    }

    /// Handle the engine's acknowledgement of a human move.
    ///
    /// When the response carries the bot-move flag the lock stays held and
    /// the host is asked to request the bot's move; otherwise input unlocks.
    pub fn on_move_ack(&mut self, response: &MoveResponse) -> Action {
        if response.bot_move_follows {
            self.input = InputState::AwaitingBotMove;
            Action::RequestBotMove
        } else {
            self.input = InputState::Idle;
            Action::None
        }
    }

    /// Handle the engine's reply to a bot-move request.
    pub fn on_bot_ack(&mut self) {
        self.input = InputState::Idle;
    }

    /// Lock input for a bot-move request not preceded by a human move
    /// (the bot-starts opening).
    pub fn begin_bot_exchange(&mut self) {
        self.input = InputState::AwaitingBotMove;
    }

    /// An exchange failed: release the lock so the player can retry, and ask
    /// the host to surface a failure notice.
    pub fn on_exchange_failed(&mut self, error: &ClientError) -> Action {
        self.input = InputState::Idle;
        let failure = match error {
            ClientError::Network(_) => Failure::Network,
            ClientError::Protocol(_) | ClientError::ColumnOutOfRange(_) => Failure::Protocol,
        };
        Action::ShowFailure(failure)
    }
}

/// The full client engine. Wraps [`EngineCore`] and owns the canvas element
/// and its render target for the lifetime of the page view.
pub struct Engine {
    canvas: HtmlCanvasElement,
    target: RenderTarget,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            target: RenderTarget::new(ctx),
            core: EngineCore::new(),
        })
    }

    /// Draw the grid and buttons. Called once at mount; the static scene is
    /// never redrawn per update.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn draw_static(&self) -> Result<(), JsValue> {
        render::draw_static(&self.target, &self.core.layout)
    }

    /// Handle a click at client (viewport) coordinates.
    ///
    /// Translates through the canvas bounding rect into surface coordinates
    /// and delegates to [`EngineCore::on_click`].
    pub fn handle_click(&mut self, client_pt: Point) -> Action {
        let rect = self.canvas.get_bounding_client_rect();
        let surface_pt = client_pt.relative_to(Point::new(rect.left(), rect.top()));
        self.core.on_click(surface_pt)
    }

    /// Render an engine response: the full glyph set, then the outcome
    /// banner if the game has ended.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn render_response(&self, response: &MoveResponse) -> Result<(), JsValue> {
        render::draw_board(&self.target, &response.board)?;
        render::draw_outcome(&self.target, response.outcome)
    }
}
