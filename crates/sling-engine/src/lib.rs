pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{
    ButtonTuning, FrameTuning, GameConfig, GestureTuning, LevelTuning, PauseTuning, PlayfieldTuning,
    SlingshotTuning, StabilizerTuning,
};
pub use api::error::{ConfigError, LandmarkError, TickError, TickResult};
pub use api::game::{GameOrchestrator, GameState, Notice};
pub use api::types::{event_kind, GameEvent, Hint, MessageKind};
pub use bridge::protocol::FrameLayout;
pub use crate::core::{LevelManager, Playfield, Projectile, Target, TransitionDirection, TransitionState};
pub use extensions::Easing;
pub use input::{
    split_hands, GestureClassifier, GestureEvent, GestureFrame, HandGestures, HandLandmarkSnapshot, Landmark,
    TemporalStabilizer,
};
pub use renderer::{RenderFrame, TickOutput};
pub use systems::{ButtonPhase, ButtonVisual, PauseController, RestartButton, SlingPhase, Slingshot};
