use thiserror::Error;

/// Why a single hand's landmarks were rejected. Other hands in the same
/// frame are still processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    /// Snapshot did not contain exactly 21 points.
    #[error("expected 21 landmarks, got {0}")]
    WrongCount(usize),

    /// A coordinate was NaN or infinite.
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// x or y fell outside the normalized image range.
    #[error("landmark {index} is out of range ({x}, {y})")]
    OutOfRange { index: usize, x: f32, y: f32 },

    /// Flat input ended partway through a hand.
    #[error("flat landmark buffer has {0} trailing floats")]
    Truncated(usize),
}

/// A tick that could not be committed. The previous game state is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickError {
    #[error("non-finite {what} after tick")]
    NonFinite { what: &'static str },

    #[error("trail holds {len} points, capacity is {capacity}")]
    TrailOverflow { len: usize, capacity: usize },

    #[error("button progress {progress} exceeds {max}")]
    ButtonProgress { progress: u32, max: u32 },

    #[error("level {level} outside 1..={max}")]
    LevelOutOfRange { level: u32, max: u32 },
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Result type for tick processing.
pub type TickResult<T> = Result<T, TickError>;
