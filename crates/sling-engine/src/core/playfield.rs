use glam::Vec2;
use serde::Serialize;

use crate::api::config::PlayfieldTuning;

/// The play area: a rectangle centered in the viewport. Fixed for the
/// lifetime of an orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Playfield {
    pub origin: Vec2,
    pub size: Vec2,
    launch_inset: Vec2,
    post_inset_y: f32,
}

impl Playfield {
    pub fn from_viewport(viewport: Vec2, tuning: &PlayfieldTuning) -> Self {
        let size = Vec2::new(
            (viewport.x * tuning.viewport_fraction).min(tuning.max_width),
            (viewport.y * tuning.viewport_fraction).min(tuning.max_height),
        );
        let origin = ((viewport - size) * 0.5).floor();
        Self {
            origin,
            size,
            launch_inset: Vec2::new(tuning.launch_inset_x, tuning.launch_inset_y),
            post_inset_y: tuning.post_inset_y,
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Projectile rest position.
    pub fn launch_point(&self) -> Vec2 {
        Vec2::new(self.left() + self.launch_inset.x, self.bottom() - self.launch_inset.y)
    }

    /// Base of the slingshot post.
    pub fn post(&self) -> Vec2 {
        Vec2::new(self.left() + self.launch_inset.x, self.bottom() - self.post_inset_y)
    }

    /// Left, right and bottom edges bound the flight; the top stays open.
    pub fn out_of_bounds(&self, pos: Vec2) -> bool {
        pos.x > self.right() || pos.y > self.bottom() || pos.x < self.left()
    }
}
