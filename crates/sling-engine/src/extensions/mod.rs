// extensions/mod.rs
//
// Optional helpers decoupled from the game state machines.

pub mod easing;

pub use easing::{ease, lerp, Easing};
