//! Session state machine
//!
//! Owns the simulation and the input tracker, and gates ticks on the
//! stopped / running / paused state.

use crate::{step, Config, Controls, Simulation};
use log::{debug, trace};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Who controls the left paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    TwoPlayer,
    VsAi,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    SelectMode(Mode),
    Start,
    TogglePause,
    Stop,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: SessionState,
    to_state: SessionState,
    action: SessionAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn from_state(&self) -> SessionState {
        self.from_state
    }

    pub fn to_state(&self) -> SessionState {
        self.to_state
    }

    pub fn action(&self) -> SessionAction {
        self.action
    }
}

/// What the control buttons should currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub pause_label: &'static str,
    pub two_player_disabled: bool,
    pub vs_ai_disabled: bool,
}

pub const PAUSE_LABEL: &str = "Pause Game";
pub const RESUME_LABEL: &str = "Resume Game";

/// A Pong session: state machine plus the game it drives
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    mode: Mode,
    selected: Option<Mode>,
    sim: Simulation,
    controls: Controls,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            state: SessionState::Stopped,
            mode: Mode::default(),
            selected: None,
            sim: Simulation::new(config),
            controls: Controls::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition, applying its side effects on success
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        let Some(next_state) = self.get_next_state(action) else {
            trace!("ignored {:?} while {:?}", action, from_state);
            return TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            };
        };

        match action {
            SessionAction::SelectMode(mode) => {
                self.mode = mode;
                self.selected = Some(mode);
                self.sim.reset();
            }
            SessionAction::Start | SessionAction::Stop => self.sim.reset(),
            SessionAction::TogglePause => {}
        }
        self.state = next_state;
        debug!("{:?}: {:?} -> {:?}", action, from_state, next_state);

        TransitionResult {
            success: true,
            from_state,
            to_state: next_state,
            action,
        }
    }

    pub fn select_mode(&mut self, mode: Mode) -> TransitionResult {
        self.transition(SessionAction::SelectMode(mode))
    }

    pub fn start(&mut self) -> TransitionResult {
        self.transition(SessionAction::Start)
    }

    pub fn toggle_pause(&mut self) -> TransitionResult {
        self.transition(SessionAction::TogglePause)
    }

    pub fn stop(&mut self) -> TransitionResult {
        self.transition(SessionAction::Stop)
    }

    /// Advance the game one frame. Does nothing unless running.
    pub fn tick(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        step(&mut self.sim, &self.controls, self.mode);
        true
    }

    /// Button labels and enabled flags for the current state
    pub fn panel(&self) -> Panel {
        Panel {
            pause_label: if self.state == SessionState::Paused {
                RESUME_LABEL
            } else {
                PAUSE_LABEL
            },
            // The button for the other mode is the one greyed out
            two_player_disabled: self.selected == Some(Mode::VsAi),
            vs_ai_disabled: self.selected == Some(Mode::TwoPlayer),
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: SessionAction) -> Option<SessionState> {
        match (self.state, action) {
            // Mode changes never touch the run state
            (state, SessionAction::SelectMode(_)) => Some(state),

            (SessionState::Stopped, SessionAction::Start) => Some(SessionState::Running),

            (SessionState::Running, SessionAction::TogglePause) => Some(SessionState::Paused),
            (SessionState::Paused, SessionAction::TogglePause) => Some(SessionState::Running),

            (_, SessionAction::Stop) => Some(SessionState::Stopped),

            // Invalid transition
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.state(), SessionState::Stopped);
        assert_eq!(session.mode(), Mode::TwoPlayer);
        assert_eq!(
            session.panel(),
            Panel {
                pause_label: "Pause Game",
                two_player_disabled: false,
                vs_ai_disabled: false,
            }
        );
    }

    #[test]
    fn test_start_only_from_stopped() {
        let mut session = Session::default();
        assert!(session.start().success());
        assert_eq!(session.state(), SessionState::Running);

        let result = session.start();
        assert!(!result.success(), "Start while running is a no-op");
        assert_eq!(result.to_state(), SessionState::Running);

        session.toggle_pause();
        assert!(!session.start().success(), "Start while paused is a no-op");
        assert_eq!(session.state(), SessionState::Paused);
    }

    #[test]
    fn test_start_resets_scores() {
        let mut session = Session::default();
        session.sim_mut().score.player2 = 4;
        session.start();
        assert_eq!(session.sim().score.player2, 0);
        assert_eq!(session.sim().ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_redundant_start_does_not_reset() {
        let mut session = Session::default();
        session.start();
        session.sim_mut().score.player1 = 2;
        session.start();
        assert_eq!(session.sim().score.player1, 2);
    }

    #[test]
    fn test_pause_toggle() {
        let mut session = Session::default();
        session.start();

        let result = session.toggle_pause();
        assert!(result.success());
        assert_eq!(result.from_state(), SessionState::Running);
        assert_eq!(session.state(), SessionState::Paused);
        assert_eq!(session.panel().pause_label, "Resume Game");

        session.toggle_pause();
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.panel().pause_label, "Pause Game");
    }

    #[test]
    fn test_pause_while_stopped_is_noop() {
        let mut session = Session::default();
        let result = session.toggle_pause();
        assert!(!result.success());
        assert_eq!(session.state(), SessionState::Stopped);
        assert_eq!(session.panel().pause_label, "Pause Game");
    }

    #[test]
    fn test_stop_from_paused_restores_label() {
        let mut session = Session::default();
        session.start();
        session.toggle_pause();

        let result = session.stop();
        assert!(result.success());
        assert_eq!(result.from_state(), SessionState::Paused);
        assert_eq!(session.state(), SessionState::Stopped);
        assert_eq!(session.panel().pause_label, "Pause Game");
    }

    #[test]
    fn test_select_mode_keeps_run_state() {
        let mut session = Session::default();
        session.start();
        session.sim_mut().score.player1 = 3;

        let result = session.select_mode(Mode::VsAi);

        assert!(result.success());
        assert_eq!(result.action(), SessionAction::SelectMode(Mode::VsAi));
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.mode(), Mode::VsAi);
        assert_eq!(session.sim().score.player1, 0, "Mode change resets scores");
    }

    #[test]
    fn test_select_mode_disables_other_button() {
        let mut session = Session::default();
        session.select_mode(Mode::VsAi);
        let panel = session.panel();
        assert!(panel.two_player_disabled, "AI mode greys out Two Players");
        assert!(!panel.vs_ai_disabled);

        session.select_mode(Mode::TwoPlayer);
        let panel = session.panel();
        assert!(panel.vs_ai_disabled, "Two-player mode greys out the AI button");
        assert!(!panel.two_player_disabled);
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut session = Session::default();
        let before = session.sim().ball;
        assert!(!session.tick(), "Stopped sessions do not tick");
        assert_eq!(session.sim().ball, before);

        session.start();
        assert!(session.tick());

        session.toggle_pause();
        let paused_at = session.sim().ball;
        assert!(!session.tick(), "Paused sessions do not tick");
        assert_eq!(session.sim().ball, paused_at);
    }

    #[test]
    fn test_can_transition() {
        let session = Session::default();
        assert!(session.can_transition(SessionAction::Start));
        assert!(session.can_transition(SessionAction::Stop));
        assert!(session.can_transition(SessionAction::SelectMode(Mode::VsAi)));
        assert!(!session.can_transition(SessionAction::TogglePause));
    }
}
