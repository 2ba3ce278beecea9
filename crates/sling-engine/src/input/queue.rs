use glam::Vec2;

use crate::input::classifier::{GestureEvent, HandGestures};

/// All gesture readings for one tick, one entry per accepted hand.
/// The orchestrator fills it from the classifier, or tests build it directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureFrame {
    hands: Vec<HandGestures>,
}

impl GestureFrame {
    pub fn new() -> Self {
        Self {
            hands: Vec::with_capacity(2),
        }
    }

    pub fn push(&mut self, hand: HandGestures) {
        self.hands.push(hand);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandGestures> {
        self.hands.iter()
    }

    /// True when no hand was detected (or every hand was rejected).
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Number of hands in this frame.
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Center of the first active pinch.
    pub fn pinch(&self) -> Option<Vec2> {
        self.hands.iter().find_map(|h| match h.pinch {
            GestureEvent::Pinch { center, active: true, .. } => Some(center),
            _ => None,
        })
    }

    /// Index tip of the first pointing hand.
    pub fn pointer(&self) -> Option<Vec2> {
        self.hands.iter().find_map(|h| match h.point {
            GestureEvent::Point { position, active: true } => Some(position),
            _ => None,
        })
    }

    /// Raw swipe sample: any hand swiping.
    pub fn swiping(&self) -> bool {
        self.hands.iter().any(|h| h.swipe.is_active())
    }

    /// Raw fist sample: any hand in a fist.
    pub fn fist(&self) -> bool {
        self.hands.iter().any(|h| h.fist.is_active())
    }

    /// Hand-built frame, for hosts and tests that bypass the classifier.
    pub fn synthetic(pinch: Option<Vec2>, pointer: Option<Vec2>, swipe: bool, fist: bool) -> Self {
        let mut frame = Self::new();
        frame.push(HandGestures {
            pinch: GestureEvent::Pinch {
                center: pinch.unwrap_or(Vec2::ZERO),
                distance: if pinch.is_some() { 0.0 } else { f32::INFINITY },
                active: pinch.is_some(),
            },
            point: GestureEvent::Point {
                position: pointer.unwrap_or(Vec2::ZERO),
                active: pointer.is_some(),
            },
            swipe: GestureEvent::SwipeLeft { position: Vec2::ZERO, active: swipe },
            fist: GestureEvent::Fist { active: fist },
        });
        frame
    }
}
