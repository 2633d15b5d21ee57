//! Browser client for Pong
//!
//! Paints the game on a 2D canvas and drives it from `requestAnimationFrame`.
//! The simulation itself lives in `game_core`; this crate only binds the DOM.
//! Note: the DOM glue is only compiled for the wasm32 target

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    app::run()
}
