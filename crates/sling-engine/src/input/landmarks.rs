//! Hand landmark snapshots as delivered by the external detector.
//!
//! 21 points per hand in normalized image coordinates (x right, y down,
//! both in [0, 1]). Depth is carried but unused.

use glam::Vec2;

use crate::api::error::LandmarkError;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// Floats per landmark in the flat wire format: x, y, z.
pub const LANDMARK_FLOATS: usize = 3;

/// Floats per hand in the flat wire format.
pub const HAND_FLOATS: usize = LANDMARK_COUNT * LANDMARK_FLOATS;

/// (tip, pip, mcp) for index, middle, ring, pinky.
pub const FINGERS: [(usize, usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
    (RING_TIP, RING_PIP, RING_MCP),
    (PINKY_TIP, PINKY_PIP, PINKY_MCP),
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Image-plane position, still normalized.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One validated hand for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarkSnapshot {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarkSnapshot {
    /// Validate a detector result. `margin` widens the accepted x/y range on
    /// both sides of [0, 1].
    pub fn new(points: &[Landmark], margin: f32) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount(points.len()));
        }

        let lo = -margin;
        let hi = 1.0 + margin;
        let mut out = [Landmark::default(); LANDMARK_COUNT];
        for (index, p) in points.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                return Err(LandmarkError::NonFinite { index });
            }
            if p.x < lo || p.x > hi || p.y < lo || p.y > hi {
                return Err(LandmarkError::OutOfRange { index, x: p.x, y: p.y });
            }
            out[index] = *p;
        }

        Ok(Self { points: out })
    }

    /// Decode one hand from `x, y, z` triples.
    pub fn from_flat(values: &[f32], margin: f32) -> Result<Self, LandmarkError> {
        if values.len() % LANDMARK_FLOATS != 0 {
            return Err(LandmarkError::Truncated(values.len() % LANDMARK_FLOATS));
        }
        let points: Vec<Landmark> = values
            .chunks_exact(LANDMARK_FLOATS)
            .map(|c| Landmark::new(c[0], c[1], c[2]))
            .collect();
        Self::new(&points, margin)
    }

    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// Normalized image-plane position of landmark `index`.
    pub fn xy(&self, index: usize) -> Vec2 {
        self.points[index].xy()
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }
}

/// Split a flat `hands × 21 × 3` buffer into hands. Each hand is validated on
/// its own; a malformed hand yields an `Err` entry without affecting others.
pub fn split_hands(values: &[f32], margin: f32) -> Vec<Result<HandLandmarkSnapshot, LandmarkError>> {
    let mut hands: Vec<_> = values
        .chunks_exact(HAND_FLOATS)
        .map(|chunk| HandLandmarkSnapshot::from_flat(chunk, margin))
        .collect();

    let trailing = values.len() % HAND_FLOATS;
    if trailing != 0 {
        hands.push(Err(LandmarkError::Truncated(trailing)));
    }
    hands
}
