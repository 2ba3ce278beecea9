//! Per-hand gesture heuristics.
//!
//! Pure functions of one snapshot plus tuning. Positions are reported in
//! image-space pixels (normalized coordinates scaled by the viewport size).

use glam::Vec2;

use crate::api::config::GestureTuning;
use crate::input::landmarks::*;

/// One semantic gesture reading for one hand. Every variant carries its
/// presence flag so a full set is produced even for inactive gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Thumb and index tips close together. Distance and center are reported
    /// even when inactive.
    Pinch { center: Vec2, distance: f32, active: bool },
    /// Index extended, most other fingers curled. `position` is the index tip.
    Point { position: Vec2, active: bool },
    /// Open palm with the fingers well left of the wrist.
    SwipeLeft { position: Vec2, active: bool },
    Fist { active: bool },
}

impl GestureEvent {
    pub fn is_active(&self) -> bool {
        match *self {
            GestureEvent::Pinch { active, .. }
            | GestureEvent::Point { active, .. }
            | GestureEvent::SwipeLeft { active, .. }
            | GestureEvent::Fist { active } => active,
        }
    }
}

/// The four readings for one hand, in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandGestures {
    pub pinch: GestureEvent,
    pub point: GestureEvent,
    pub swipe: GestureEvent,
    pub fist: GestureEvent,
}

impl HandGestures {
    pub fn events(&self) -> [GestureEvent; 4] {
        [self.pinch, self.point, self.swipe, self.fist]
    }
}

#[derive(Debug, Clone)]
pub struct GestureClassifier {
    tuning: GestureTuning,
    viewport: Vec2,
}

impl GestureClassifier {
    pub fn new(tuning: GestureTuning, viewport: Vec2) -> Self {
        Self { tuning, viewport }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn classify(&self, hand: &HandLandmarkSnapshot) -> HandGestures {
        HandGestures {
            pinch: self.detect_pinch(hand),
            point: self.detect_point(hand),
            swipe: self.detect_swipe_left(hand),
            fist: self.detect_fist(hand),
        }
    }

    fn px(&self, hand: &HandLandmarkSnapshot, index: usize) -> Vec2 {
        hand.xy(index) * self.viewport
    }

    pub fn detect_pinch(&self, hand: &HandLandmarkSnapshot) -> GestureEvent {
        let thumb = self.px(hand, THUMB_TIP);
        let index = self.px(hand, INDEX_TIP);
        let distance = thumb.distance(index);
        GestureEvent::Pinch {
            center: (thumb + index) * 0.5,
            distance,
            active: distance < self.tuning.pinch_threshold_px,
        }
    }

    /// Extended flags for thumb, index, middle, ring, pinky. The thumb counts
    /// by horizontal offset from its MCP, the rest by tip above pip.
    pub fn extended_fingers(&self, hand: &HandLandmarkSnapshot) -> [bool; 5] {
        let thumb = (hand.get(THUMB_TIP).x - hand.get(THUMB_MCP).x).abs() > self.tuning.thumb_extension;
        let [index, middle, ring, pinky] = finger_extension(hand);
        [thumb, index, middle, ring, pinky]
    }

    /// Index up with at most a few of middle/ring/pinky; the thumb is free.
    pub fn detect_point(&self, hand: &HandLandmarkSnapshot) -> GestureEvent {
        let extended = self.extended_fingers(hand);
        let others = extended[2..].iter().filter(|&&up| up).count();
        GestureEvent::Point {
            position: self.px(hand, INDEX_TIP),
            active: extended[1] && others <= self.tuning.point_max_other_fingers,
        }
    }

    pub fn detect_swipe_left(&self, hand: &HandLandmarkSnapshot) -> GestureEvent {
        let wrist = self.px(hand, WRIST);
        let middle = self.px(hand, MIDDLE_TIP);

        let thumb_open = hand.get(THUMB_TIP).x > hand.get(THUMB_IP).x;
        let open = finger_extension(hand).iter().filter(|&&up| up).count() + thumb_open as usize;

        let leftward = wrist.x - middle.x > self.tuning.swipe_offset_px;
        GestureEvent::SwipeLeft {
            position: (wrist + middle) * 0.5,
            active: open >= self.tuning.open_palm_min_fingers && leftward,
        }
    }

    pub fn detect_fist(&self, hand: &HandLandmarkSnapshot) -> GestureEvent {
        let wrist = hand.xy(WRIST);
        let middle_mcp = hand.xy(MIDDLE_MCP);
        let palm = (wrist + middle_mcp) * 0.5;

        let mut bent = 0;
        for &(tip, pip, mcp) in FINGERS.iter() {
            let curled = hand.xy(tip).y > hand.xy(pip).y;
            let tucked = hand.xy(tip).distance(palm) < self.tuning.finger_bend_ratio * hand.xy(mcp).distance(palm);
            if curled && tucked {
                bent += 1;
            }
        }
        if hand.xy(THUMB_TIP).distance(palm) < self.tuning.thumb_bend_ratio * hand.xy(THUMB_MCP).distance(palm) {
            bent += 1;
        }

        let hand_size = wrist.distance(middle_mcp);
        let tips = FINGERS.map(|(tip, _, _)| hand.xy(tip));
        let mut spread = 0.0f32;
        for (i, a) in tips.iter().enumerate() {
            for b in &tips[i + 1..] {
                spread = spread.max(a.distance(*b));
            }
        }

        GestureEvent::Fist {
            active: bent >= self.tuning.fist_min_bent && spread < self.tuning.fist_spread_ratio * hand_size,
        }
    }
}

/// Extended flags for index, middle, ring, pinky (tip above pip).
fn finger_extension(hand: &HandLandmarkSnapshot) -> [bool; 4] {
    FINGERS.map(|(tip, pip, _)| hand.xy(tip).y < hand.xy(pip).y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::fixtures::{self, VIEWPORT};

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(GestureTuning::default(), VIEWPORT)
    }

    fn active(pose: Vec<Landmark>) -> [bool; 4] {
        let gestures = classifier().classify(&fixtures::snapshot(&pose));
        gestures.events().map(|e| e.is_active())
    }

    #[test]
    fn open_palm_is_nothing_in_particular() {
        assert_eq!(active(fixtures::open_palm()), [false, false, false, false]);
    }

    #[test]
    fn pinch_reports_center_and_distance() {
        let hand = fixtures::snapshot(&fixtures::pinch());
        match classifier().detect_pinch(&hand) {
            GestureEvent::Pinch { center, distance, active } => {
                assert!(active);
                assert!((distance - 16.0).abs() < 1e-3);
                assert!(center.abs_diff_eq(Vec2::new(450.0, 328.0), 1e-3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn pinch_inactive_still_reports_distance() {
        let hand = fixtures::snapshot(&fixtures::open_palm());
        let GestureEvent::Pinch { distance, active, .. } = classifier().detect_pinch(&hand) else {
            panic!("expected pinch");
        };
        assert!(!active);
        assert!(distance > 40.0);
    }

    #[test]
    fn pointing_uses_index_tip() {
        let hand = fixtures::snapshot(&fixtures::pointing());
        let GestureEvent::Point { position, active: pointing } = classifier().detect_point(&hand) else {
            panic!("expected point");
        };
        assert!(pointing);
        assert!(position.abs_diff_eq(Vec2::new(450.0, 320.0), 1e-3));
        assert_eq!(active(fixtures::pointing()), [false, true, false, false]);
    }

    #[test]
    fn thumb_does_not_change_pointing() {
        let c = classifier();
        let out = fixtures::snapshot(&fixtures::pointing());
        assert_eq!(c.extended_fingers(&out), [true, true, false, false, false]);

        let mut pose = fixtures::pointing();
        pose[THUMB_TIP] = Landmark::new(0.43, 0.66, 0.0);
        let tucked = fixtures::snapshot(&pose);
        assert_eq!(c.extended_fingers(&tucked), [false, true, false, false, false]);
        assert!(c.detect_point(&tucked).is_active());
        assert!(c.detect_point(&out).is_active());

        let loose = GestureTuning { thumb_extension: 0.005, ..GestureTuning::default() };
        assert!(GestureClassifier::new(loose, VIEWPORT).extended_fingers(&tucked)[0]);
    }

    #[test]
    fn swipe_needs_fingers_left_of_wrist() {
        assert_eq!(active(fixtures::swipe_left()), [false, false, true, false]);

        let hand = fixtures::snapshot(&fixtures::swipe_left());
        let GestureEvent::SwipeLeft { position, .. } = classifier().detect_swipe_left(&hand) else {
            panic!("expected swipe");
        };
        assert!(position.abs_diff_eq(Vec2::new(550.0, 472.0), 1e-3));
    }

    #[test]
    fn fist_detected() {
        assert_eq!(active(fixtures::fist()), [false, false, false, true]);
    }

    #[test]
    fn four_of_five_is_a_fist_by_default() {
        assert!(active(fixtures::fist_thumb_out())[3]);

        let strict = GestureTuning { fist_min_bent: 5, ..GestureTuning::default() };
        let hand = fixtures::snapshot(&fixtures::fist_thumb_out());
        assert!(!GestureClassifier::new(strict, VIEWPORT).detect_fist(&hand).is_active());
    }

    #[test]
    fn spread_fingertips_are_not_a_fist() {
        let mut pose = fixtures::fist();
        pose[PINKY_TIP] = Landmark::new(0.70, 0.66, 0.0);
        assert!(!active(pose)[3]);
    }
}
