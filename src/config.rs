//! First-player configuration read from the page.
//!
//! The page that serves the canvas carries a DOM-bound input holding who
//! moves first: `"0"` for the human, `"1"` for the bot. Anything else is
//! logged and falls back to the human starting, which keeps the page usable
//! when the template drifts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// Who makes the first move of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstPlayer {
    #[default]
    Human,
    Bot,
}

impl FirstPlayer {
    /// Parse the DOM input value. Recognizes `"0"` (human) and `"1"` (bot),
    /// tolerating surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "0" => Some(Self::Human),
            "1" => Some(Self::Bot),
            _ => None,
        }
    }
}

/// Read the first-player input from the document, defaulting to the human
/// starting when the element is missing or holds an unrecognized value.
#[must_use]
pub fn read_first_player(document: &Document, input_id: &str) -> FirstPlayer {
    let Some(element) = document.get_element_by_id(input_id) else {
        log::warn!("first-player input #{input_id} not found, defaulting to human start");
        return FirstPlayer::Human;
    };
    let raw = match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => input.value(),
        Err(_) => {
            log::warn!("#{input_id} is not an input element, defaulting to human start");
            return FirstPlayer::Human;
        }
    };
    match FirstPlayer::parse(&raw) {
        Some(first) => first,
        None => {
            log::warn!("unrecognized first-player value {raw:?}, defaulting to human start");
            FirstPlayer::Human
        }
    }
}
