//! Dwell-to-activate restart button.
//!
//! Pointing at the button fills a progress bar; a full bar fires once. The
//! button re-arms only after the pointer leaves the padded hit region.

use glam::Vec2;
use serde::Serialize;

use crate::api::config::ButtonTuning;

/// Axis-aligned rectangle, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { min: pos, max: pos + size }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn inflate(&self, by: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(by),
            max: self.max + Vec2::splat(by),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonPhase {
    /// Pointer outside the hit region. Progress may still be decaying.
    Idle,
    /// Pointer inside, progress filling.
    Hovering,
    /// Fired. Stays here until the pointer leaves the hit region.
    Triggered,
}

/// What the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonVisual {
    Normal,
    Activating,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestartButton {
    tuning: ButtonTuning,
    rect: Rect,
    region: Rect,
    phase: ButtonPhase,
    progress: u32,
    was_in_region: bool,
}

impl RestartButton {
    pub fn new(tuning: ButtonTuning, viewport: Vec2) -> Self {
        let pos = Vec2::new(tuning.x, (viewport.y / 2.0).floor() + tuning.offset_from_center_y);
        let rect = Rect::new(pos, Vec2::new(tuning.width, tuning.height));
        Self {
            region: rect.inflate(tuning.padding),
            rect,
            tuning,
            phase: ButtonPhase::Idle,
            progress: 0,
            was_in_region: false,
        }
    }

    /// Feed this tick's pointer (None when no hand is pointing). Returns true
    /// on the single tick the button fires.
    pub fn update(&mut self, pointer: Option<Vec2>) -> bool {
        let inside = pointer.map_or(false, |p| self.region.contains(p));
        let on_button = pointer.map_or(false, |p| self.rect.contains(p));

        if !inside && self.was_in_region {
            self.phase = ButtonPhase::Idle;
            self.progress = 0;
        }
        self.was_in_region = inside;

        match (inside, self.phase) {
            (true, ButtonPhase::Triggered) => false,
            (true, _) => {
                self.phase = ButtonPhase::Hovering;
                let rate = if on_button { self.tuning.inner_rate } else { self.tuning.outer_rate };
                self.progress += rate;
                if self.progress >= self.tuning.max_progress {
                    self.progress = self.tuning.max_progress;
                    self.phase = ButtonPhase::Triggered;
                    return true;
                }
                false
            }
            (false, _) => {
                self.phase = ButtonPhase::Idle;
                self.progress = self.progress.saturating_sub(self.tuning.decay_rate);
                false
            }
        }
    }

    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn max_progress(&self) -> u32 {
        self.tuning.max_progress
    }

    pub fn progress_fraction(&self) -> f32 {
        self.progress as f32 / self.tuning.max_progress as f32
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Padded hit region.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Pointer is inside the hit region.
    pub fn hover(&self) -> bool {
        self.was_in_region
    }

    /// Progress is filling.
    pub fn active(&self) -> bool {
        self.phase == ButtonPhase::Hovering
    }

    pub fn triggered(&self) -> bool {
        self.phase == ButtonPhase::Triggered
    }

    pub fn was_in_region(&self) -> bool {
        self.was_in_region
    }

    pub fn visual(&self) -> ButtonVisual {
        match self.phase {
            ButtonPhase::Triggered => ButtonVisual::Done,
            ButtonPhase::Hovering => ButtonVisual::Activating,
            ButtonPhase::Idle => ButtonVisual::Normal,
        }
    }

    /// The padded region outline is drawn while the pointer is engaged but
    /// the button has not fired.
    pub fn show_region(&self) -> bool {
        (self.hover() || self.active()) && !self.triggered()
    }
}
