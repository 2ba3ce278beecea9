//! Tunable constants for the whole pipeline.
//!
//! Every heuristic threshold lives here with its default so hosts can override
//! a subset from JSON without touching logic. Rates and durations are per
//! tick at a nominal 60 Hz.

use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::extensions::easing::Easing;

/// Top-level configuration, grouped by subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub gesture: GestureTuning,
    pub stabilizer: StabilizerTuning,
    pub playfield: PlayfieldTuning,
    pub slingshot: SlingshotTuning,
    pub level: LevelTuning,
    pub button: ButtonTuning,
    pub pause: PauseTuning,
    pub frame: FrameTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gesture: GestureTuning::default(),
            stabilizer: StabilizerTuning::default(),
            playfield: PlayfieldTuning::default(),
            slingshot: SlingshotTuning::default(),
            level: LevelTuning::default(),
            button: ButtonTuning::default(),
            pause: PauseTuning::default(),
            frame: FrameTuning::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the state machines cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stabilizer.fist_window == 0 || self.stabilizer.fist_window > self.stabilizer.fist_capacity {
            return Err(ConfigError::Invalid("stabilizer.fist_window must be in 1..=fist_capacity"));
        }
        if self.stabilizer.swipe_window == 0 || self.stabilizer.swipe_window > self.stabilizer.swipe_capacity {
            return Err(ConfigError::Invalid("stabilizer.swipe_window must be in 1..=swipe_capacity"));
        }
        if self.gesture.fist_min_bent == 0 || self.gesture.fist_min_bent > 5 {
            return Err(ConfigError::Invalid("gesture.fist_min_bent must be in 1..=5"));
        }
        if self.level.max_level == 0 {
            return Err(ConfigError::Invalid("level.max_level must be at least 1"));
        }
        if self.level.transition_speed == 0 {
            return Err(ConfigError::Invalid("level.transition_speed must be positive"));
        }
        if self.button.max_progress == 0 {
            return Err(ConfigError::Invalid("button.max_progress must be positive"));
        }
        if self.slingshot.trail_capacity == 0 {
            return Err(ConfigError::Invalid("slingshot.trail_capacity must be positive"));
        }
        Ok(())
    }
}

/// Thresholds for the per-hand gesture classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureTuning {
    /// Thumb-tip to index-tip distance (pixels) below which a pinch is active.
    pub pinch_threshold_px: f32,
    /// Horizontal thumb offset (normalized) that counts as extended when pointing.
    pub thumb_extension: f32,
    /// Most of {middle, ring, pinky} that may be extended while still pointing.
    pub point_max_other_fingers: usize,
    /// Extended fingers needed for an open palm.
    pub open_palm_min_fingers: usize,
    /// How far (pixels) the middle tip must sit left of the wrist to swipe.
    pub swipe_offset_px: f32,
    /// Finger tip must be closer to the palm than this fraction of its MCP distance.
    pub finger_bend_ratio: f32,
    /// Same test for the thumb, which curls less.
    pub thumb_bend_ratio: f32,
    /// Bent fingers (of five) required for a fist.
    pub fist_min_bent: usize,
    /// Fingertip spread limit as a fraction of hand size (wrist to middle MCP).
    pub fist_spread_ratio: f32,
    /// Tolerance outside [0, 1] accepted for landmark x/y before a hand is rejected.
    pub coordinate_margin: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            pinch_threshold_px: 40.0,
            thumb_extension: 0.02,
            point_max_other_fingers: 1,
            open_palm_min_fingers: 3,
            swipe_offset_px: 50.0,
            finger_bend_ratio: 0.90,
            thumb_bend_ratio: 0.95,
            fist_min_bent: 4,
            fist_spread_ratio: 0.5,
            coordinate_margin: 0.0,
        }
    }
}

/// Window sizes for debouncing the fist and swipe signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerTuning {
    pub fist_capacity: usize,
    /// Most recent samples inspected for the fist signal.
    pub fist_window: usize,
    /// Positive samples within the window that confirm a fist.
    pub fist_min_hits: usize,
    pub swipe_capacity: usize,
    pub swipe_window: usize,
    pub swipe_min_hits: usize,
}

impl Default for StabilizerTuning {
    fn default() -> Self {
        Self {
            fist_capacity: 3,
            fist_window: 2,
            fist_min_hits: 1,
            swipe_capacity: 10,
            swipe_window: 5,
            swipe_min_hits: 3,
        }
    }
}

/// Placement of the play area inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldTuning {
    /// Fraction of the viewport covered by the play area.
    pub viewport_fraction: f32,
    pub max_width: f32,
    pub max_height: f32,
    /// Projectile rest position, measured from the bottom-left corner.
    pub launch_inset_x: f32,
    pub launch_inset_y: f32,
    /// Slingshot post base, measured from the bottom-left corner.
    pub post_inset_y: f32,
    /// Ground strip height drawn by the renderer.
    pub ground_height: f32,
}

impl Default for PlayfieldTuning {
    fn default() -> Self {
        Self {
            viewport_fraction: 0.8,
            max_width: 800.0,
            max_height: 600.0,
            launch_inset_x: 100.0,
            launch_inset_y: 150.0,
            post_inset_y: 100.0,
            ground_height: 50.0,
        }
    }
}

/// Projectile and slingshot physics. Per-tick units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlingshotTuning {
    pub projectile_radius: f32,
    /// How close (pixels) a pinch must start to the projectile to grab it.
    pub grab_radius: f32,
    /// Longest allowed pull vector.
    pub max_pull: f32,
    /// Launch velocity per pixel of pull.
    pub launch_scale: f32,
    /// Added to vy every flying tick.
    pub gravity: f32,
    /// Multiplies vx every flying tick.
    pub drag: f32,
    pub trail_capacity: usize,
    pub target_radius: f32,
    pub points_per_target: u32,
}

impl Default for SlingshotTuning {
    fn default() -> Self {
        Self {
            projectile_radius: 15.0,
            grab_radius: 40.0,
            max_pull: 100.0,
            launch_scale: 0.15,
            gravity: 0.3,
            drag: 0.995,
            trail_capacity: 20,
            target_radius: 20.0,
            points_per_target: 100,
        }
    }
}

/// Level progression and the slide transition between levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    pub max_level: u32,
    /// Progress units (out of 100) added per transition tick.
    pub transition_speed: u32,
    /// Curve the renderer's slide offsets follow.
    pub transition_easing: Easing,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            max_level: 5,
            transition_speed: 3,
            transition_easing: Easing::Linear,
        }
    }
}

/// Restart button geometry and dwell timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonTuning {
    pub x: f32,
    /// Vertical offset from the viewport's middle row.
    pub offset_from_center_y: f32,
    pub width: f32,
    pub height: f32,
    /// Padding that forms the forgiving hit region around the button.
    pub padding: f32,
    /// Progress needed to fire (60 = one second inside the button).
    pub max_progress: u32,
    pub inner_rate: u32,
    pub outer_rate: u32,
    pub decay_rate: u32,
}

impl Default for ButtonTuning {
    fn default() -> Self {
        Self {
            x: 10.0,
            offset_from_center_y: 130.0,
            width: 110.0,
            height: 40.0,
            padding: 20.0,
            max_progress: 60,
            inner_rate: 2,
            outer_rate: 1,
            decay_rate: 3,
        }
    }
}

/// Pause overlay message durations, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseTuning {
    pub paused_message_ticks: u32,
    pub resumed_message_ticks: u32,
}

impl Default for PauseTuning {
    fn default() -> Self {
        Self {
            paused_message_ticks: 120,
            resumed_message_ticks: 60,
        }
    }
}

/// Render output capacities and transient notice timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameTuning {
    /// Most targets the flat protocol reserves room for.
    pub max_targets: usize,
    /// Most game events packed per frame.
    pub max_events: usize,
    /// How long one-shot notices ("GAME RESET!") stay up.
    pub notice_ticks: u32,
}

impl Default for FrameTuning {
    fn default() -> Self {
        Self {
            max_targets: 16,
            max_events: 16,
            notice_ticks: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = GameConfig::default();
        assert_eq!(config.gesture.pinch_threshold_px, 40.0);
        assert_eq!(config.gesture.fist_min_bent, 4);
        assert_eq!(config.slingshot.gravity, 0.3);
        assert_eq!(config.slingshot.drag, 0.995);
        assert_eq!(config.slingshot.launch_scale, 0.15);
        assert_eq!(config.button.max_progress, 60);
        assert_eq!(config.level.transition_speed, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = GameConfig::from_json(r#"{ "slingshot": { "gravity": 0.5 }, "level": { "max_level": 3 } }"#)
            .unwrap();
        assert_eq!(config.slingshot.gravity, 0.5);
        assert_eq!(config.slingshot.drag, 0.995);
        assert_eq!(config.level.max_level, 3);
        assert_eq!(config.button, ButtonTuning::default());
    }

    #[test]
    fn easing_is_read_by_name() {
        let config = GameConfig::from_json(r#"{ "level": { "transition_easing": "QuadInOut" } }"#).unwrap();
        assert_eq!(config.level.transition_easing, Easing::QuadInOut);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn zero_window_is_rejected() {
        let result = GameConfig::from_json(r#"{ "stabilizer": { "fist_window": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
