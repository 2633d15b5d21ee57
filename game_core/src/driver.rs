//! Frame driver
//!
//! The host calls [`FrameDriver::frame`] from its per-frame callback and
//! reschedules only while a scene comes back.

use crate::{render, Scene, Session, SessionState};
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    active: bool,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame callback is currently scheduled
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frames run since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mark the loop live. Returns true if the caller has to schedule the
    /// first frame, false if a loop is already pending.
    pub fn launch(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Run one frame: tick, then build the scene to paint.
    ///
    /// Returns `None` once the session is stopped; the loop is then over and
    /// the last painted frame stays on screen.
    pub fn frame(&mut self, session: &mut Session) -> Option<Scene> {
        if !self.active {
            return None;
        }
        if session.state() == SessionState::Stopped {
            self.active = false;
            debug!("frame loop ended after {} frames", self.frames);
            return None;
        }

        session.tick();
        self.frames += 1;
        Some(render(session.sim()))
    }

    /// Drop the pending frame without waiting for it to observe a stop
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
