//! Host wiring: binds DOM events to the engine and drives move exchanges.
//!
//! The engine itself is synchronous and returns [`Action`]s; this module
//! performs them: navigation, HTTP exchanges spawned as local tasks, the
//! waiting indicator lifecycle around bot-move requests, and the failure
//! notice shown when an exchange fails. The engine is shared
//! through `Rc<RefCell<_>>` and never borrowed across an await, so a click
//! arriving mid-exchange can always reach the engine (and be rejected by the
//! input lock) without a re-entrant borrow.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::config::{self, FirstPlayer};
use crate::engine::{Action, Engine, Failure, Route};
use crate::geom::Point;
use crate::net;
use crate::protocol::MoveResponse;

/// A mounted game view.
///
/// Holds the click listener for the lifetime of the view; dropping the mount
/// unregisters it, tearing the input path down with the page.
pub struct Mount {
    canvas: HtmlCanvasElement,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for Mount {
    fn drop(&mut self) {
        let unregistered = self
            .canvas
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        if unregistered.is_err() {
            log::warn!("failed to unregister click handler on unmount");
        }
    }
}

/// Mount the game onto the page.
///
/// Looks up the canvas, the first-player input, the waiting indicator, and
/// the status element by id; draws the static scene; registers the click
/// listener; and, when the bot opens the game, dispatches the opening
/// bot-move request.
///
/// # Errors
///
/// Returns `Err` if the canvas element is missing, is not a canvas, or has
/// no 2D context.
pub fn mount(
    document: &Document,
    canvas_id: &str,
    player_input_id: &str,
    waiting_id: &str,
    status_id: &str,
) -> Result<Mount, JsValue> {
    init_diagnostics();

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let first_player = config::read_first_player(document, player_input_id);
    let waiting = WaitingIndicator::find(document, waiting_id);
    let status = StatusBanner::find(document, status_id);

    let engine = Engine::new(canvas.clone())?;
    engine.draw_static()?;
    let engine = Rc::new(RefCell::new(engine));

    let on_click = {
        let engine = Rc::clone(&engine);
        let waiting = waiting.clone();
        let status = status.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let client_pt = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            let action = engine.borrow_mut().handle_click(client_pt);
            perform(&engine, &waiting, &status, action);
        })
    };
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    if first_player == FirstPlayer::Bot {
        engine.borrow_mut().core.begin_bot_exchange();
        spawn_local(run_bot_exchange(Rc::clone(&engine), waiting, status));
    }

    Ok(Mount { canvas, on_click })
}

/// Carry out an engine action. A newly dispatched exchange clears any
/// failure notice from the previous attempt.
fn perform(
    engine: &Rc<RefCell<Engine>>,
    waiting: &WaitingIndicator,
    status: &StatusBanner,
    action: Action,
) {
    match action {
        Action::None => {}
        Action::Navigate(route) => navigate(route),
        Action::SubmitMove(column) => {
            status.clear();
            spawn_local(run_human_exchange(
                Rc::clone(engine),
                waiting.clone(),
                status.clone(),
                column,
            ));
        }
        Action::RequestBotMove => {
            status.clear();
            spawn_local(run_bot_exchange(Rc::clone(engine), waiting.clone(), status.clone()));
        }
        Action::ShowFailure(failure) => status.show(failure),
    }
}

/// Post the human's move, render the acknowledgement, and chain into the
/// bot exchange when the engine asks for one.
async fn run_human_exchange(
    engine: Rc<RefCell<Engine>>,
    waiting: WaitingIndicator,
    status: StatusBanner,
    column: usize,
) {
    let follow_up = match net::submit_human_move(column).await {
        Ok(response) => {
            let mut e = engine.borrow_mut();
            render(&e, &response);
            e.core.on_move_ack(&response)
        }
        Err(err) => {
            log::warn!("human move exchange failed: {err}");
            engine.borrow_mut().core.on_exchange_failed(&err)
        }
    };
    match follow_up {
        Action::RequestBotMove => run_bot_exchange(engine, waiting, status).await,
        Action::ShowFailure(failure) => status.show(failure),
        _ => {}
    }
}

/// Request the bot's move with the waiting indicator shown for exactly the
/// duration of the call.
async fn run_bot_exchange(
    engine: Rc<RefCell<Engine>>,
    waiting: WaitingIndicator,
    status: StatusBanner,
) {
    waiting.set_visible(true);
    let result = net::request_bot_move().await;
    // Hidden before the result is even inspected, so the indicator can never
    // outlive the exchange.
    waiting.set_visible(false);

    match result {
        Ok(response) => {
            let mut e = engine.borrow_mut();
            render(&e, &response);
            e.core.on_bot_ack();
        }
        Err(err) => {
            log::warn!("bot move exchange failed: {err}");
            let follow_up = engine.borrow_mut().core.on_exchange_failed(&err);
            if let Action::ShowFailure(failure) = follow_up {
                status.show(failure);
            }
        }
    }
}

fn render(engine: &Engine, response: &MoveResponse) {
    if let Err(err) = engine.render_response(response) {
        log::warn!("render failed: {err:?}");
    }
}

fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to navigate");
        return;
    };
    if window.location().set_href(route.path()).is_err() {
        log::warn!("navigation to {} failed", route.path());
    }
}

fn init_diagnostics() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A second mount finds the logger already installed; keep it.
        log::debug!("logger already initialized");
    }
}

/// The page's "waiting for the bot" element, if present.
#[derive(Clone)]
struct WaitingIndicator {
    element: Option<HtmlElement>,
}

impl WaitingIndicator {
    fn find(document: &Document, id: &str) -> Self {
        let element = match document.get_element_by_id(id) {
            Some(el) => match el.dyn_into::<HtmlElement>() {
                Ok(el) => Some(el),
                Err(_) => None,
            },
            None => None,
        };
        if element.is_none() {
            log::warn!("waiting indicator #{id} not found; bot moves will run without one");
        }
        Self { element }
    }

    fn set_visible(&self, visible: bool) {
        let Some(el) = &self.element else {
            return;
        };
        set_display(el, if visible { "block" } else { "none" });
    }
}

/// The page's failure notice element, if present.
#[derive(Clone)]
struct StatusBanner {
    element: Option<HtmlElement>,
}

impl StatusBanner {
    fn find(document: &Document, id: &str) -> Self {
        let element = match document.get_element_by_id(id) {
            Some(el) => match el.dyn_into::<HtmlElement>() {
                Ok(el) => Some(el),
                Err(_) => None,
            },
            None => None,
        };
        if element.is_none() {
            log::warn!("status element #{id} not found; failures will only reach the console");
        }
        Self { element }
    }

    fn show(&self, failure: Failure) {
        let Some(el) = &self.element else {
            return;
        };
        let message = match failure {
            Failure::Network => "Move failed. Check your connection and click a column to retry.",
            Failure::Protocol => "Something went wrong talking to the game engine.",
        };
        el.set_text_content(Some(message));
        set_display(el, "block");
    }

    fn clear(&self) {
        let Some(el) = &self.element else {
            return;
        };
        el.set_text_content(None);
        set_display(el, "none");
    }
}

fn set_display(el: &HtmlElement, display: &str) {
    if el.style().set_property("display", display).is_err() {
        log::warn!("failed to toggle element visibility");
    }
}
