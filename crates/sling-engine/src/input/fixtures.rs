//! Synthetic hand poses for tests. Coordinates are normalized, y grows down.
//! Classifier expectations assume the `VIEWPORT` size below.

use glam::Vec2;

use super::landmarks::{Landmark, HandLandmarkSnapshot, LANDMARK_COUNT};

pub const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);

fn build(xy: [(f32, f32); LANDMARK_COUNT]) -> Vec<Landmark> {
    xy.iter().map(|&(x, y)| Landmark::new(x, y, 0.0)).collect()
}

/// All four fingers up, thumb out to the left.
pub fn open_palm() -> Vec<Landmark> {
    build([
        (0.50, 0.80),
        (0.45, 0.75), (0.42, 0.70), (0.40, 0.66), (0.38, 0.63),
        (0.45, 0.60), (0.45, 0.50), (0.45, 0.45), (0.45, 0.40),
        (0.50, 0.60), (0.50, 0.48), (0.50, 0.43), (0.50, 0.38),
        (0.55, 0.60), (0.55, 0.50), (0.55, 0.45), (0.55, 0.41),
        (0.60, 0.62), (0.60, 0.54), (0.60, 0.50), (0.60, 0.46),
    ])
}

/// Index up, the other three curled.
pub fn pointing() -> Vec<Landmark> {
    build([
        (0.50, 0.80),
        (0.45, 0.75), (0.42, 0.70), (0.40, 0.66), (0.38, 0.63),
        (0.45, 0.60), (0.45, 0.50), (0.45, 0.45), (0.45, 0.40),
        (0.50, 0.60), (0.50, 0.50), (0.50, 0.55), (0.50, 0.56),
        (0.55, 0.60), (0.55, 0.52), (0.55, 0.56), (0.55, 0.57),
        (0.60, 0.62), (0.60, 0.56), (0.60, 0.59), (0.60, 0.60),
    ])
}

/// Every finger curled into the palm, tips bunched.
pub fn fist() -> Vec<Landmark> {
    build([
        (0.50, 0.80),
        (0.46, 0.76), (0.42, 0.70), (0.44, 0.70), (0.47, 0.72),
        (0.45, 0.60), (0.45, 0.55), (0.46, 0.62), (0.47, 0.65),
        (0.50, 0.60), (0.50, 0.55), (0.50, 0.61), (0.50, 0.64),
        (0.55, 0.60), (0.55, 0.55), (0.54, 0.62), (0.53, 0.65),
        (0.60, 0.62), (0.58, 0.57), (0.57, 0.63), (0.56, 0.66),
    ])
}

/// Four fingers curled, thumb sticking out.
pub fn fist_thumb_out() -> Vec<Landmark> {
    let mut points = fist();
    points[4] = Landmark::new(0.36, 0.66, 0.0);
    points
}

/// Open palm with the fingers reaching well left of the wrist.
pub fn swipe_left() -> Vec<Landmark> {
    let mut points = open_palm();
    points[0] = Landmark::new(0.60, 0.80, 0.0);
    points
}

/// Open palm with thumb and index tips touching around (0.45, 0.41).
pub fn pinch() -> Vec<Landmark> {
    let mut points = open_palm();
    points[4] = Landmark::new(0.45, 0.42, 0.0);
    points
}

/// A half-size pinch whose thumb/index midpoint sits at `center` (normalized).
pub fn pinch_at(center: Vec2) -> Vec<Landmark> {
    let pivot = Vec2::new(0.45, 0.41);
    pinch()
        .into_iter()
        .map(|p| {
            let q = center + (p.xy() - pivot) * 0.5;
            Landmark::new(q.x, q.y, p.z)
        })
        .collect()
}

pub fn snapshot(points: &[Landmark]) -> HandLandmarkSnapshot {
    HandLandmarkSnapshot::new(points, 0.0).expect("fixture pose must be valid")
}

pub fn flatten(points: &[Landmark]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}
