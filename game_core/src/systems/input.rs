//! Keyboard input tracking

/// Logical paddle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
}

impl Control {
    /// Map a DOM `KeyboardEvent.key` value to a control
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Control::P1Up),
            "s" | "S" => Some(Control::P1Down),
            "ArrowUp" => Some(Control::P2Up),
            "ArrowDown" => Some(Control::P2Down),
            _ => None,
        }
    }
}

/// Whether the key drives a paddle (and so must not scroll the page)
pub fn is_bound_key(key: &str) -> bool {
    Control::from_key(key).is_some()
}

/// Pressed state of the four paddle controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        *self.slot(control) = true;
    }

    pub fn release(&mut self, control: Control) {
        *self.slot(control) = false;
    }

    /// Handle key down event; unbound keys are ignored
    pub fn handle_key_down(&mut self, key: &str) {
        if let Some(control) = Control::from_key(key) {
            self.press(control);
        }
    }

    /// Handle key up event; unbound keys are ignored
    pub fn handle_key_up(&mut self, key: &str) {
        if let Some(control) = Control::from_key(key) {
            self.release(control);
        }
    }

    fn slot(&mut self, control: Control) -> &mut bool {
        match control {
            Control::P1Up => &mut self.p1_up,
            Control::P1Down => &mut self.p1_down,
            Control::P2Up => &mut self.p2_up,
            Control::P2Down => &mut self.p2_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Control::from_key("w"), Some(Control::P1Up));
        assert_eq!(Control::from_key("S"), Some(Control::P1Down));
        assert_eq!(Control::from_key("ArrowUp"), Some(Control::P2Up));
        assert_eq!(Control::from_key("ArrowDown"), Some(Control::P2Down));
        assert_eq!(Control::from_key("ArrowLeft"), None);
        assert_eq!(Control::from_key(" "), None);
    }

    #[test]
    fn test_bound_keys_suppress_default() {
        assert!(is_bound_key("ArrowDown"));
        assert!(is_bound_key("w"));
        assert!(!is_bound_key("Enter"));
    }

    #[test]
    fn test_press_and_release() {
        let mut controls = Controls::new();
        controls.handle_key_down("ArrowUp");
        assert!(controls.p2_up);

        controls.handle_key_up("ArrowUp");
        assert!(!controls.p2_up);
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut controls = Controls::new();
        for _ in 0..5 {
            controls.handle_key_down("s");
        }
        assert!(controls.p1_down);
        assert_eq!(
            controls,
            Controls {
                p1_down: true,
                ..Controls::default()
            },
            "Auto-repeat must not touch other controls"
        );

        controls.handle_key_up("s");
        assert_eq!(controls, Controls::default());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut controls = Controls::new();
        controls.handle_key_down("q");
        assert_eq!(controls, Controls::default());
    }
}
