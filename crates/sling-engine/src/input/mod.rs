pub mod classifier;
pub mod landmarks;
pub mod queue;
pub mod stabilizer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use classifier::{GestureClassifier, GestureEvent, HandGestures};
pub use landmarks::{split_hands, HandLandmarkSnapshot, Landmark};
pub use queue::GestureFrame;
pub use stabilizer::TemporalStabilizer;
