//! Slingshot state machine: idle -> pulling -> flying.

use glam::Vec2;
use serde::Serialize;

use crate::api::config::SlingshotTuning;
use crate::core::projectile::Projectile;

/// Half the gap between the two fork tips.
pub const FORK_HALF_WIDTH: f32 = 10.0;
/// Fork tips sit this far above the post base.
pub const FORK_HEIGHT: f32 = 30.0;
/// Post drawn from the base up to this height.
pub const POST_HEIGHT: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlingPhase {
    Idle,
    Pulling,
    Flying,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slingshot {
    tuning: SlingshotTuning,
    pulling: bool,
}

impl Slingshot {
    pub fn new(tuning: SlingshotTuning) -> Self {
        Self { tuning, pulling: false }
    }

    pub fn is_pulling(&self) -> bool {
        self.pulling
    }

    pub fn phase(&self, projectile: &Projectile) -> SlingPhase {
        if projectile.is_flying {
            SlingPhase::Flying
        } else if self.pulling {
            SlingPhase::Pulling
        } else {
            SlingPhase::Idle
        }
    }

    /// Grab the projectile if `point` is close enough to it. Refused while
    /// flying or once the level is won.
    pub fn start_pull(&mut self, projectile: &Projectile, point: Vec2, won: bool) -> bool {
        if projectile.is_flying || won {
            return false;
        }
        if point.distance(projectile.pos) < self.tuning.grab_radius {
            self.pulling = true;
        }
        self.pulling
    }

    /// Drag the projectile toward `point`, at most `max_pull` from its start.
    pub fn update_pull(&mut self, projectile: &mut Projectile, point: Vec2) {
        if !self.pulling {
            return;
        }
        let pull = (point - projectile.start).clamp_length_max(self.tuning.max_pull);
        projectile.pos = projectile.start + pull;
    }

    /// Let go. Returns the launch velocity, or None if nothing was held.
    pub fn release(&mut self, projectile: &mut Projectile) -> Option<Vec2> {
        if !self.pulling {
            return None;
        }
        self.pulling = false;
        let vel = (projectile.start - projectile.pos) * self.tuning.launch_scale;
        projectile.launch(vel);
        Some(vel)
    }

    /// Drop any grab without launching.
    pub fn cancel(&mut self) {
        self.pulling = false;
    }
}

/// Left and right fork tips for a post whose base is at `post`.
pub fn fork_tips(post: Vec2) -> (Vec2, Vec2) {
    let y = post.y - FORK_HEIGHT;
    (Vec2::new(post.x - FORK_HALF_WIDTH, y), Vec2::new(post.x + FORK_HALF_WIDTH, y))
}
