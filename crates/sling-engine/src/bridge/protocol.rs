/// Flat frame buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 24 floats]
/// [Scene: 30 floats]            playfield, projectile, sling, transition, button
/// [Messages: MAX_MESSAGES × 3]  code, argument, remaining ticks
/// [Hints: MAX_HINTS × 1]        code
/// [Targets: max_targets × 4]    x, y, radius, destroyed
/// [Incoming: max_targets × 3]   x, y, radius (transition preview)
/// [Trail: trail_capacity × 2]   x, y
/// [Events: max_events × 4]      kind, a, b, c
/// ```
///
/// Capacities are written into every header so the host can compute offsets.

use bytemuck::cast_slice;

use crate::api::config::GameConfig;
use crate::api::types::{GameEvent, MessageKind};
use crate::core::level::TransitionDirection;
use crate::renderer::frame::{RenderFrame, SlingBands, TickOutput};
use crate::systems::button::{ButtonVisual, Rect};
use crate::systems::slingshot::SlingPhase;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 24;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_TICK: usize = 1;
/// 0 = frame, 1 = diagnostic (see `get_frame_json` for the message).
pub const HEADER_STATUS: usize = 2;
pub const HEADER_VIEWPORT_WIDTH: usize = 3;
pub const HEADER_VIEWPORT_HEIGHT: usize = 4;
pub const HEADER_LEVEL: usize = 5;
pub const HEADER_MAX_LEVEL: usize = 6;
pub const HEADER_SCORE: usize = 7;
pub const HEADER_REMAINING: usize = 8;
pub const HEADER_FLAGS: usize = 9;
pub const HEADER_SLING_PHASE: usize = 10;
pub const HEADER_MAX_TARGETS: usize = 11;
pub const HEADER_TARGET_COUNT: usize = 12;
pub const HEADER_INCOMING_COUNT: usize = 13;
pub const HEADER_TRAIL_CAPACITY: usize = 14;
pub const HEADER_TRAIL_COUNT: usize = 15;
pub const HEADER_MAX_EVENTS: usize = 16;
pub const HEADER_EVENT_COUNT: usize = 17;
pub const HEADER_MESSAGE_COUNT: usize = 18;
pub const HEADER_HINT_COUNT: usize = 19;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

pub const STATUS_FRAME: f32 = 0.0;
pub const STATUS_DIAGNOSTIC: f32 = 1.0;

/// Bits of `HEADER_FLAGS`.
pub const FLAG_WON: u32 = 1;
pub const FLAG_PAUSED: u32 = 1 << 1;
pub const FLAG_TRANSITIONING: u32 = 1 << 2;
pub const FLAG_SHOW_BUTTON_REGION: u32 = 1 << 3;
pub const FLAG_SLING_PULLED: u32 = 1 << 4;

/// Scene block indices, relative to `scene_offset`.
pub const SCENE_FLOATS: usize = 30;
pub const SCENE_PLAYFIELD_X: usize = 0;
pub const SCENE_PLAYFIELD_Y: usize = 1;
pub const SCENE_PLAYFIELD_W: usize = 2;
pub const SCENE_PLAYFIELD_H: usize = 3;
pub const SCENE_GROUND_HEIGHT: usize = 4;
pub const SCENE_PROJECTILE_X: usize = 5;
pub const SCENE_PROJECTILE_Y: usize = 6;
pub const SCENE_PROJECTILE_RADIUS: usize = 7;
/// Left fork x, y then right fork x, y.
pub const SCENE_FORKS: usize = 8;
/// Post rectangle min x, min y, max x, max y.
pub const SCENE_POST: usize = 12;
pub const SCENE_TRANSITION_EASED: usize = 16;
pub const SCENE_TRANSITION_DIRECTION: usize = 17;
pub const SCENE_OUTGOING_OFFSET: usize = 18;
pub const SCENE_INCOMING_OFFSET: usize = 19;
pub const SCENE_BUTTON_VISUAL: usize = 20;
pub const SCENE_BUTTON_PROGRESS: usize = 21;
/// Button rectangle, then its padded hit region, each as min x, min y, max x, max y.
pub const SCENE_BUTTON_RECT: usize = 22;
pub const SCENE_BUTTON_REGION: usize = 26;

/// Most simultaneous messages (pause overlay plus one notice).
pub const MAX_MESSAGES: usize = 2;
pub const MESSAGE_FLOATS: usize = 3;
pub const MAX_HINTS: usize = 4;

/// Floats per target: x, y, radius, destroyed (fixed wire format).
pub const TARGET_FLOATS: usize = 4;
/// Floats per preview target: x, y, radius.
pub const INCOMING_FLOATS: usize = 3;
pub const TRAIL_FLOATS: usize = 2;
/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub max_targets: usize,
    pub trail_capacity: usize,
    pub max_events: usize,

    pub scene_offset: usize,
    pub message_offset: usize,
    pub hint_offset: usize,
    pub target_offset: usize,
    pub incoming_offset: usize,
    pub trail_offset: usize,
    pub event_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
}

impl FrameLayout {
    pub fn new(max_targets: usize, trail_capacity: usize, max_events: usize) -> Self {
        let scene_offset = HEADER_FLOATS;
        let message_offset = scene_offset + SCENE_FLOATS;
        let hint_offset = message_offset + MAX_MESSAGES * MESSAGE_FLOATS;
        let target_offset = hint_offset + MAX_HINTS;
        let incoming_offset = target_offset + max_targets * TARGET_FLOATS;
        let trail_offset = incoming_offset + max_targets * INCOMING_FLOATS;
        let event_offset = trail_offset + trail_capacity * TRAIL_FLOATS;
        let buffer_total_floats = event_offset + max_events * EVENT_FLOATS;

        Self {
            max_targets,
            trail_capacity,
            max_events,
            scene_offset,
            message_offset,
            hint_offset,
            target_offset,
            incoming_offset,
            trail_offset,
            event_offset,
            buffer_total_floats,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.frame.max_targets, config.slingshot.trail_capacity, config.frame.max_events)
    }

    /// Write `output` into `buf`, resizing it to the full layout. Sections
    /// longer than their capacity are truncated.
    pub fn pack(&self, output: &TickOutput, buf: &mut Vec<f32>) {
        buf.clear();
        buf.resize(self.buffer_total_floats, 0.0);

        buf[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buf[HEADER_MAX_TARGETS] = self.max_targets as f32;
        buf[HEADER_TRAIL_CAPACITY] = self.trail_capacity as f32;
        buf[HEADER_MAX_EVENTS] = self.max_events as f32;

        match output {
            TickOutput::Frame(frame) => self.pack_frame(frame, buf),
            TickOutput::Diagnostic { .. } => buf[HEADER_STATUS] = STATUS_DIAGNOSTIC,
        }
    }

    fn pack_frame(&self, frame: &RenderFrame, buf: &mut [f32]) {
        buf[HEADER_STATUS] = STATUS_FRAME;
        buf[HEADER_TICK] = frame.tick as f32;
        buf[HEADER_VIEWPORT_WIDTH] = frame.viewport.x;
        buf[HEADER_VIEWPORT_HEIGHT] = frame.viewport.y;
        buf[HEADER_LEVEL] = frame.level as f32;
        buf[HEADER_MAX_LEVEL] = frame.max_level as f32;
        buf[HEADER_SCORE] = frame.hud.score as f32;
        buf[HEADER_REMAINING] = frame.hud.remaining as f32;
        buf[HEADER_SLING_PHASE] = match frame.hud.status {
            SlingPhase::Idle => 0.0,
            SlingPhase::Pulling => 1.0,
            SlingPhase::Flying => 2.0,
        };

        let mut flags = 0;
        if frame.hud.won {
            flags |= FLAG_WON;
        }
        if frame.paused {
            flags |= FLAG_PAUSED;
        }
        if frame.transition.is_some() {
            flags |= FLAG_TRANSITIONING;
        }
        if frame.button.show_region {
            flags |= FLAG_SHOW_BUTTON_REGION;
        }

        let scene = &mut buf[self.scene_offset..self.scene_offset + SCENE_FLOATS];
        scene[SCENE_PLAYFIELD_X] = frame.playfield.origin.x;
        scene[SCENE_PLAYFIELD_Y] = frame.playfield.origin.y;
        scene[SCENE_PLAYFIELD_W] = frame.playfield.size.x;
        scene[SCENE_PLAYFIELD_H] = frame.playfield.size.y;
        scene[SCENE_GROUND_HEIGHT] = frame.playfield.ground_height;
        scene[SCENE_PROJECTILE_X] = frame.projectile.pos.x;
        scene[SCENE_PROJECTILE_Y] = frame.projectile.pos.y;
        scene[SCENE_PROJECTILE_RADIUS] = frame.projectile.radius;
        let (left, right) = match frame.sling.bands {
            SlingBands::Rest { left, right } => (left, right),
            SlingBands::Pulled { left, right, .. } => {
                flags |= FLAG_SLING_PULLED;
                (left, right)
            }
        };
        scene[SCENE_FORKS..SCENE_FORKS + 4].copy_from_slice(&[left.x, left.y, right.x, right.y]);
        scene[SCENE_POST..SCENE_POST + 4].copy_from_slice(&rect_floats(frame.sling.post));
        if let Some(t) = &frame.transition {
            scene[SCENE_TRANSITION_EASED] = t.eased;
            scene[SCENE_TRANSITION_DIRECTION] = match t.direction {
                TransitionDirection::Left => 0.0,
                TransitionDirection::Right => 1.0,
            };
            scene[SCENE_OUTGOING_OFFSET] = t.outgoing_offset;
            scene[SCENE_INCOMING_OFFSET] = t.incoming_offset;
        }
        scene[SCENE_BUTTON_VISUAL] = match frame.button.visual {
            ButtonVisual::Normal => 0.0,
            ButtonVisual::Activating => 1.0,
            ButtonVisual::Done => 2.0,
        };
        scene[SCENE_BUTTON_PROGRESS] = frame.button.progress_fraction;
        scene[SCENE_BUTTON_RECT..SCENE_BUTTON_RECT + 4].copy_from_slice(&rect_floats(frame.button.rect));
        scene[SCENE_BUTTON_REGION..SCENE_BUTTON_REGION + 4].copy_from_slice(&rect_floats(frame.button.region));
        buf[HEADER_FLAGS] = flags as f32;

        let messages = frame.messages.iter().take(MAX_MESSAGES);
        buf[HEADER_MESSAGE_COUNT] = messages.len() as f32;
        for (i, m) in messages.enumerate() {
            let arg = match m.kind {
                MessageKind::NextLevel(level) => level as f32,
                _ => 0.0,
            };
            let at = self.message_offset + i * MESSAGE_FLOATS;
            buf[at..at + MESSAGE_FLOATS].copy_from_slice(&[m.kind.code(), arg, m.remaining_ticks as f32]);
        }

        let hints = frame.hints.iter().take(MAX_HINTS);
        buf[HEADER_HINT_COUNT] = hints.len() as f32;
        for (i, h) in hints.enumerate() {
            buf[self.hint_offset + i] = h.hint.code();
        }

        let targets = frame.targets.iter().take(self.max_targets);
        buf[HEADER_TARGET_COUNT] = targets.len() as f32;
        for (i, t) in targets.enumerate() {
            let at = self.target_offset + i * TARGET_FLOATS;
            let destroyed = if t.destroyed { 1.0 } else { 0.0 };
            buf[at..at + TARGET_FLOATS].copy_from_slice(&[t.pos.x, t.pos.y, t.radius, destroyed]);
        }

        if let Some(t) = &frame.transition {
            let incoming = t.incoming_targets.iter().take(self.max_targets);
            buf[HEADER_INCOMING_COUNT] = incoming.len() as f32;
            for (i, target) in incoming.enumerate() {
                let at = self.incoming_offset + i * INCOMING_FLOATS;
                buf[at..at + INCOMING_FLOATS].copy_from_slice(&[target.pos.x, target.pos.y, target.radius]);
            }
        }

        let trail = &frame.projectile.trail[..frame.projectile.trail.len().min(self.trail_capacity)];
        buf[HEADER_TRAIL_COUNT] = trail.len() as f32;
        let trail_floats: &[f32] = cast_slice(trail);
        buf[self.trail_offset..self.trail_offset + trail_floats.len()].copy_from_slice(trail_floats);

        let events = &frame.events[..frame.events.len().min(self.max_events)];
        buf[HEADER_EVENT_COUNT] = events.len() as f32;
        let event_floats: &[f32] = cast_slice(events);
        buf[self.event_offset..self.event_offset + event_floats.len()].copy_from_slice(event_floats);
    }
}

fn rect_floats(r: Rect) -> [f32; 4] {
    [r.min.x, r.min.y, r.max.x, r.max.y]
}
