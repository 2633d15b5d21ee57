//! Keyboard input handling

use game_core::{is_bound_key, Controls};
use web_sys::KeyboardEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// Apply a key to the controls
pub fn apply_key(controls: &mut Controls, key: &str, phase: KeyPhase) {
    match phase {
        KeyPhase::Down => controls.handle_key_down(key),
        KeyPhase::Up => controls.handle_key_up(key),
    }
}

/// Handle a DOM keyboard event. Paddle keys must not scroll the page.
pub fn handle_keyboard_event(event: &KeyboardEvent, controls: &mut Controls, phase: KeyPhase) {
    let key = event.key();
    if is_bound_key(&key) {
        event.prevent_default();
    }
    apply_key(controls, &key, phase);
}
