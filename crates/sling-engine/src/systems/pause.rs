use serde::Serialize;

use crate::api::config::PauseTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PauseEdge {
    Paused,
    Resumed,
}

/// Fist-driven pause. Only edges of the stabilized fist signal change state,
/// so holding a fist keeps the game paused and opening the hand resumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct PauseController {
    tuning: PauseTuning,
    is_paused: bool,
    last_fist: bool,
    message_timer: u32,
}

impl PauseController {
    pub fn new(tuning: PauseTuning) -> Self {
        Self {
            tuning,
            is_paused: false,
            last_fist: false,
            message_timer: 0,
        }
    }

    /// Feed the stabilized fist signal. The message timer is set on an edge
    /// and then counts down within the same call.
    pub fn update(&mut self, fist: bool) -> Option<PauseEdge> {
        let edge = match (self.last_fist, fist) {
            (false, true) => {
                self.is_paused = true;
                self.message_timer = self.tuning.paused_message_ticks;
                Some(PauseEdge::Paused)
            }
            (true, false) => {
                self.is_paused = false;
                self.message_timer = self.tuning.resumed_message_ticks;
                Some(PauseEdge::Resumed)
            }
            _ => None,
        };
        self.last_fist = fist;
        self.message_timer = self.message_timer.saturating_sub(1);
        edge
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn message_timer(&self) -> u32 {
        self.message_timer
    }
}
