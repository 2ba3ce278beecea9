use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// A game event handed to the host each tick (sound cues, analytics).
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }

    pub fn as_floats(&self) -> [f32; Self::FLOATS] {
        [self.kind, self.a, self.b, self.c]
    }
}

/// Event kinds written into `GameEvent::kind`.
pub mod event_kind {
    /// a, b = launch velocity.
    pub const LAUNCHED: f32 = 1.0;
    /// a, b = target position, c = new score.
    pub const TARGET_DESTROYED: f32 = 2.0;
    /// Projectile left the playfield and returned to the slingshot.
    pub const PROJECTILE_RESET: f32 = 3.0;
    /// Restart fired (button dwell or host command).
    pub const RESTARTED: f32 = 4.0;
    /// a = level the transition is heading to.
    pub const LEVEL_ADVANCED: f32 = 5.0;
    /// a = level whose layout was just instantiated.
    pub const LEVEL_LOADED: f32 = 6.0;
    pub const PAUSED: f32 = 7.0;
    pub const RESUMED: f32 = 8.0;
    /// All targets of the current layout are down.
    pub const WON: f32 = 9.0;
}

/// Transient on-screen messages. The renderer picks fonts and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageKind {
    Paused,
    Resumed,
    GameReset,
    NextLevel(u32),
    AllLevelsCompleted,
}

impl MessageKind {
    /// Stable numeric code for the flat protocol.
    pub fn code(self) -> f32 {
        match self {
            MessageKind::Paused => 1.0,
            MessageKind::Resumed => 2.0,
            MessageKind::GameReset => 3.0,
            MessageKind::NextLevel(_) => 4.0,
            MessageKind::AllLevelsCompleted => 5.0,
        }
    }

    pub fn text(self) -> String {
        match self {
            MessageKind::Paused => "GAME PAUSED".to_string(),
            MessageKind::Resumed => "GAME RESUMED".to_string(),
            MessageKind::GameReset => "GAME RESET!".to_string(),
            MessageKind::NextLevel(level) => format!("NEXT LEVEL! ({})", level),
            MessageKind::AllLevelsCompleted => "ALL LEVELS COMPLETED!".to_string(),
        }
    }
}

/// Persistent guidance lines shown while a condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hint {
    NoHands,
    SwipeForNextLevel,
    LeaveButtonToReset,
    ReleaseFistToContinue,
}

impl Hint {
    pub fn code(self) -> f32 {
        match self {
            Hint::NoHands => 1.0,
            Hint::SwipeForNextLevel => 2.0,
            Hint::LeaveButtonToReset => 3.0,
            Hint::ReleaseFistToContinue => 4.0,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Hint::NoHands => "No hands detected - Try moving closer to camera",
            Hint::SwipeForNextLevel => "Swipe LEFT for next level!",
            Hint::LeaveButtonToReset => "Leave to reset",
            Hint::ReleaseFistToContinue => "Release fist to continue",
        }
    }
}
