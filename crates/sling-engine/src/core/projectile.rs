use glam::Vec2;
use serde::Serialize;

/// The bird. Position changes only while flying or while dragged by the sling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub start: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub is_flying: bool,
    pub trail: Vec<Vec2>,
}

impl Projectile {
    pub fn new(start: Vec2, radius: f32) -> Self {
        Self {
            pos: start,
            start,
            radius,
            vel: Vec2::ZERO,
            is_flying: false,
            trail: Vec::new(),
        }
    }

    /// Enter flight with `vel`. The trail starts at the launch position.
    pub fn launch(&mut self, vel: Vec2) {
        self.vel = vel;
        self.is_flying = true;
        self.trail.clear();
        self.trail.push(self.pos);
    }

    /// One flight tick: gravity, then drag, then integrate. The trail grows
    /// until it holds `trail_capacity` points and then stops recording.
    pub fn step(&mut self, gravity: f32, drag: f32, trail_capacity: usize) {
        if !self.is_flying {
            return;
        }
        self.vel.y += gravity;
        self.vel.x *= drag;
        self.pos += self.vel;
        if self.trail.len() < trail_capacity {
            self.trail.push(self.pos);
        }
    }

    /// Back to the slingshot, at rest.
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.vel = Vec2::ZERO;
        self.is_flying = false;
        self.trail.clear();
    }
}
