//! DOM lookups and the score/button readouts

use game_core::{Panel, Scoreboard};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlButtonElement, HtmlElement, Window};

pub const CANVAS_ID: &str = "gameCanvas";
pub const TWO_PLAYER_BUTTON_ID: &str = "twoPlayerBtn";
pub const AI_BUTTON_ID: &str = "aiBtn";
pub const START_BUTTON_ID: &str = "startBtn";
pub const PAUSE_BUTTON_ID: &str = "pauseBtn";
pub const STOP_BUTTON_ID: &str = "stopBtn";
pub const PLAYER1_SCORE_ID: &str = "player1Score";
pub const PLAYER2_SCORE_ID: &str = "player2Score";
pub const HIGH_SCORE_ID: &str = "highScore";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("Window has no document"))
}

/// Look up an element by id and cast it to the expected type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has an unexpected type", id)))
}

/// Viewport size in CSS pixels; zero when the browser reports nonsense
pub fn viewport(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as f32, height as f32))
}

/// Score readouts and the buttons whose look follows the session
pub struct Hud {
    player1: HtmlElement,
    player2: HtmlElement,
    high: HtmlElement,
    two_player_button: HtmlButtonElement,
    ai_button: HtmlButtonElement,
    pause_button: HtmlButtonElement,
    shown: Option<Scoreboard>,
}

impl Hud {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            player1: element_by_id(document, PLAYER1_SCORE_ID)?,
            player2: element_by_id(document, PLAYER2_SCORE_ID)?,
            high: element_by_id(document, HIGH_SCORE_ID)?,
            two_player_button: element_by_id(document, TWO_PLAYER_BUTTON_ID)?,
            ai_button: element_by_id(document, AI_BUTTON_ID)?,
            pause_button: element_by_id(document, PAUSE_BUTTON_ID)?,
            shown: None,
        })
    }

    /// Write the three score readouts, skipping the DOM when nothing changed
    pub fn show_scores(&mut self, board: &Scoreboard) {
        if self.shown.as_ref() == Some(board) {
            return;
        }
        self.player1.set_text_content(Some(&board.player1.to_string()));
        self.player2.set_text_content(Some(&board.player2.to_string()));
        self.high.set_text_content(Some(&board.high.to_string()));
        self.shown = Some(*board);
    }

    pub fn show_panel(&self, panel: &Panel) {
        self.pause_button.set_text_content(Some(panel.pause_label));
        self.two_player_button.set_disabled(panel.two_player_disabled);
        self.ai_button.set_disabled(panel.vs_ai_disabled);
    }
}
