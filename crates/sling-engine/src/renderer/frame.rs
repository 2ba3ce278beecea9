//! Render instruction set handed to the external renderer each tick.
//!
//! Everything is in viewport pixels. The renderer owns colors, fonts and
//! pixel work; this is the complete description of what to draw.

use glam::Vec2;
use serde::Serialize;

use crate::api::types::{GameEvent, Hint, MessageKind};
use crate::core::level::TransitionDirection;
use crate::core::target::Target;
use crate::systems::button::{ButtonVisual, Rect};
use crate::systems::slingshot::SlingPhase;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub tick: u64,
    pub viewport: Vec2,
    pub playfield: PlayfieldFrame,
    pub projectile: ProjectileFrame,
    pub targets: Vec<Target>,
    pub sling: SlingFrame,
    pub level: u32,
    pub max_level: u32,
    pub transition: Option<TransitionFrame>,
    pub hud: HudFrame,
    pub button: ButtonFrame,
    /// Dim the scene and draw the pause panel.
    pub paused: bool,
    pub messages: Vec<MessageFrame>,
    pub hints: Vec<HintFrame>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayfieldFrame {
    pub origin: Vec2,
    pub size: Vec2,
    pub ground_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileFrame {
    pub pos: Vec2,
    pub radius: f32,
    /// Oldest first.
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlingFrame {
    pub post: Rect,
    pub bands: SlingBands,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SlingBands {
    /// Single band straight across the fork.
    Rest { left: Vec2, right: Vec2 },
    /// One band from each fork tip to the projectile, plus a tension line
    /// from the rest position to the projectile.
    Pulled { left: Vec2, right: Vec2, projectile: Vec2, anchor: Vec2 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionFrame {
    /// 0..100.
    pub progress: u32,
    /// `progress / 100`.
    pub fraction: f32,
    /// `fraction` after the configured easing curve.
    pub eased: f32,
    pub direction: TransitionDirection,
    /// Horizontal shift of the level being left.
    pub outgoing_offset: f32,
    /// Horizontal shift of the level sliding in.
    pub incoming_offset: f32,
    /// Layout of the level sliding in, unshifted.
    pub incoming_targets: Vec<Target>,
}

impl TransitionFrame {
    pub fn new(
        progress: u32,
        eased: f32,
        direction: TransitionDirection,
        width: f32,
        incoming_targets: Vec<Target>,
    ) -> Self {
        let outgoing_offset = direction.sign() * eased * width;
        Self {
            progress,
            fraction: progress as f32 / 100.0,
            eased,
            direction,
            outgoing_offset,
            incoming_offset: outgoing_offset - direction.sign() * width,
            incoming_targets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudFrame {
    pub status: SlingPhase,
    pub score: u32,
    pub remaining: usize,
    pub won: bool,
}

impl HudFrame {
    pub fn status_text(&self) -> &'static str {
        match self.status {
            SlingPhase::Idle => "READY",
            SlingPhase::Pulling => "PULLING",
            SlingPhase::Flying => "FLYING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ButtonFrame {
    pub rect: Rect,
    pub region: Rect,
    pub visual: ButtonVisual,
    pub progress_fraction: f32,
    /// Outline the padded hit region.
    pub show_region: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageFrame {
    pub kind: MessageKind,
    pub text: String,
    pub remaining_ticks: u32,
}

impl MessageFrame {
    pub fn new(kind: MessageKind, remaining_ticks: u32) -> Self {
        Self { kind, text: kind.text(), remaining_ticks }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HintFrame {
    pub hint: Hint,
    pub text: &'static str,
}

impl From<Hint> for HintFrame {
    fn from(hint: Hint) -> Self {
        Self { hint, text: hint.text() }
    }
}

/// Result of one tick as seen by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TickOutput {
    Frame(RenderFrame),
    /// The tick was rejected; the previous state is still current.
    Diagnostic { message: String },
}
