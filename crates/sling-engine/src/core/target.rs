use glam::Vec2;
use serde::Serialize;

/// A static collidable. `destroyed` only ever goes false -> true; a level or
/// game reset builds fresh targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
    pub destroyed: bool,
}

impl Target {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius, destroyed: false }
    }

    /// Mark destroyed on first overlap with a circle. Returns true only on
    /// the tick the target goes down.
    pub fn check_collision(&mut self, pos: Vec2, radius: f32) -> bool {
        if self.destroyed {
            return false;
        }
        if self.pos.distance(pos) < self.radius + radius {
            self.destroyed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_once() {
        let mut t = Target::new(Vec2::new(50.0, 50.0), 20.0);
        assert!(t.check_collision(Vec2::new(60.0, 50.0), 15.0));
        assert!(t.destroyed);
        assert!(!t.check_collision(Vec2::new(50.0, 50.0), 15.0));
    }

    #[test]
    fn touching_is_not_overlap() {
        let mut t = Target::new(Vec2::ZERO, 20.0);
        assert!(!t.check_collision(Vec2::new(35.0, 0.0), 15.0));
        assert!(!t.destroyed);
    }
}
