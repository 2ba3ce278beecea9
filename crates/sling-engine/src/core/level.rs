//! Level layouts and the slide transition between levels.

use glam::Vec2;
use serde::Serialize;

use crate::core::playfield::Playfield;
use crate::core::target::Target;

/// Target offsets per level, measured leftward/upward from the playfield's
/// bottom-right corner.
pub const LEVEL_LAYOUTS: [&[(f32, f32)]; 5] = [
    &[(100.0, 100.0), (150.0, 150.0), (200.0, 100.0)],
    &[(80.0, 80.0), (120.0, 120.0), (160.0, 160.0), (200.0, 80.0)],
    &[(70.0, 70.0), (110.0, 110.0), (150.0, 150.0), (190.0, 110.0), (230.0, 70.0)],
    &[(100.0, 60.0), (140.0, 60.0), (180.0, 60.0), (120.0, 100.0), (160.0, 100.0), (140.0, 140.0)],
    &[
        (80.0, 60.0),
        (120.0, 100.0),
        (160.0, 140.0),
        (200.0, 100.0),
        (240.0, 60.0),
        (130.0, 180.0),
        (170.0, 180.0),
    ],
];

/// Build the targets for `level`. Levels past the table reuse its last row;
/// level 0 is treated as level 1.
pub fn layout(level: u32, field: &Playfield, radius: f32) -> Vec<Target> {
    let row = (level.max(1) as usize - 1).min(LEVEL_LAYOUTS.len() - 1);
    let corner = Vec2::new(field.right(), field.bottom());
    LEVEL_LAYOUTS[row]
        .iter()
        .map(|&(dx, dy)| Target::new(corner - Vec2::new(dx, dy), radius))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransitionDirection {
    /// Current screen slides out to the left, the next one enters from the right.
    Left,
    Right,
}

impl TransitionDirection {
    /// Horizontal sign of the outgoing screen's motion.
    pub fn sign(self) -> f32 {
        match self {
            TransitionDirection::Left => -1.0,
            TransitionDirection::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransitionState {
    Idle,
    /// `progress` runs 0..100.
    Transitioning { progress: u32, direction: TransitionDirection },
}

/// Current level, its targets, and the transition animation.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelManager {
    level: u32,
    max_level: u32,
    speed: u32,
    field: Playfield,
    target_radius: f32,
    pub targets: Vec<Target>,
    pub transition: TransitionState,
}

impl LevelManager {
    pub fn new(max_level: u32, speed: u32, field: Playfield, target_radius: f32) -> Self {
        let mut manager = Self {
            level: 1,
            max_level,
            speed,
            field,
            target_radius,
            targets: Vec::new(),
            transition: TransitionState::Idle,
        };
        manager.load_layout();
        manager
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, TransitionState::Transitioning { .. })
    }

    pub fn is_last_level(&self) -> bool {
        self.level >= self.max_level
    }

    /// Rebuild the current level's targets, all standing.
    pub fn load_layout(&mut self) {
        self.targets = layout(self.level, &self.field, self.target_radius);
    }

    /// Stand every current target back up. The layout itself is untouched,
    /// so a slide in progress keeps showing the outgoing level.
    pub fn revive_targets(&mut self) {
        for target in self.targets.iter_mut() {
            target.destroyed = false;
        }
    }

    /// Targets of the level after this one, for the slide-in preview.
    pub fn upcoming_layout(&self) -> Vec<Target> {
        layout(self.level, &self.field, self.target_radius)
    }

    pub fn all_destroyed(&self) -> bool {
        self.targets.iter().all(|t| t.destroyed)
    }

    pub fn remaining(&self) -> usize {
        self.targets.iter().filter(|t| !t.destroyed).count()
    }

    /// Begin sliding to the next level. The level number advances now; the
    /// layout follows when the slide completes. Returns false (and changes
    /// nothing) while a transition runs or on the last level.
    pub fn next_level(&mut self) -> bool {
        if self.is_transitioning() || self.is_last_level() {
            return false;
        }
        self.start_transition(TransitionDirection::Left);
        self.level += 1;
        true
    }

    pub fn start_transition(&mut self, direction: TransitionDirection) {
        self.transition = TransitionState::Transitioning { progress: 0, direction };
    }

    /// Advance the slide. Returns true on the tick it completes, after the
    /// new layout has been loaded.
    pub fn tick_transition(&mut self) -> bool {
        let TransitionState::Transitioning { progress, direction } = self.transition else {
            return false;
        };
        let progress = progress + self.speed;
        if progress >= 100 {
            self.transition = TransitionState::Idle;
            self.load_layout();
            return true;
        }
        self.transition = TransitionState::Transitioning { progress, direction };
        false
    }
}
