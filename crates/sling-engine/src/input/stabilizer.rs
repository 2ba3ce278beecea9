use std::collections::VecDeque;

use crate::api::config::StabilizerTuning;

/// Debounces the raw fist and swipe signals over short sliding windows.
///
/// Feed exactly one sample per signal per tick. Histories belong to this
/// value; dropping or resetting it forgets everything.
#[derive(Debug, Clone)]
pub struct TemporalStabilizer {
    tuning: StabilizerTuning,
    fist: VecDeque<bool>,
    swipe: VecDeque<bool>,
}

impl TemporalStabilizer {
    pub fn new(tuning: StabilizerTuning) -> Self {
        Self {
            fist: VecDeque::with_capacity(tuning.fist_capacity),
            swipe: VecDeque::with_capacity(tuning.swipe_capacity),
            tuning,
        }
    }

    /// Record a raw fist sample. Until the window has filled the raw value
    /// passes through; after that any hit in the window holds the fist.
    pub fn update_fist(&mut self, raw: bool) -> bool {
        push_bounded(&mut self.fist, raw, self.tuning.fist_capacity);
        if self.fist.len() < self.tuning.fist_window {
            return raw;
        }
        hits(&self.fist, self.tuning.fist_window) >= self.tuning.fist_min_hits
    }

    /// Record a raw swipe sample. Fires while enough of the recent samples
    /// are positive, so it may stay true over consecutive ticks.
    pub fn update_swipe(&mut self, raw: bool) -> bool {
        push_bounded(&mut self.swipe, raw, self.tuning.swipe_capacity);
        if self.swipe.len() < self.tuning.swipe_window {
            return false;
        }
        hits(&self.swipe, self.tuning.swipe_window) >= self.tuning.swipe_min_hits
    }

    pub fn reset(&mut self) {
        self.fist.clear();
        self.swipe.clear();
    }
}

fn push_bounded(history: &mut VecDeque<bool>, sample: bool, capacity: usize) {
    if history.len() == capacity {
        history.pop_front();
    }
    history.push_back(sample);
}

/// Positive samples among the newest `window` entries.
fn hits(history: &VecDeque<bool>, window: usize) -> usize {
    history.iter().rev().take(window).filter(|&&s| s).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stabilizer() -> TemporalStabilizer {
        TemporalStabilizer::new(StabilizerTuning::default())
    }

    #[test]
    fn fist_bridges_single_dropout() {
        let mut s = stabilizer();
        let out: Vec<bool> = [false, true, true, false, true].iter().map(|&raw| s.update_fist(raw)).collect();
        assert_eq!(out, vec![false, true, true, true, true]);
    }

    #[test]
    fn fist_releases_after_two_misses() {
        let mut s = stabilizer();
        s.update_fist(true);
        s.update_fist(true);
        assert!(s.update_fist(false));
        assert!(!s.update_fist(false));
    }

    #[test]
    fn first_fist_sample_passes_through() {
        assert!(stabilizer().update_fist(true));
        assert!(!stabilizer().update_fist(false));
    }

    #[test]
    fn swipe_needs_three_of_five() {
        let mut s = stabilizer();
        let out: Vec<bool> = [true, true, true, false].iter().map(|&raw| s.update_swipe(raw)).collect();
        // Fewer than five samples never fires.
        assert_eq!(out, vec![false; 4]);
        assert!(s.update_swipe(false));
        // Window is now [T, T, F, F, F].
        assert!(!s.update_swipe(false));
    }

    #[test]
    fn swipe_can_fire_on_consecutive_ticks() {
        let mut s = stabilizer();
        for _ in 0..4 {
            s.update_swipe(true);
        }
        assert!(s.update_swipe(true));
        assert!(s.update_swipe(true));
    }

    #[test]
    fn reset_forgets_history() {
        let mut s = stabilizer();
        for _ in 0..5 {
            s.update_swipe(true);
        }
        s.update_fist(true);
        s.reset();
        assert!(!s.update_swipe(true));
        assert!(!s.update_fist(false));
    }
}
