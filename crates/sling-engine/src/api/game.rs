//! The per-tick driver. Owns every state machine and advances them in a
//! fixed order from one frame's gesture readings.

use glam::Vec2;
use log::{debug, info, warn};

use crate::api::config::GameConfig;
use crate::api::error::{ConfigError, TickError, TickResult};
use crate::api::types::{event_kind, GameEvent, Hint, MessageKind};
use crate::core::level::{LevelManager, TransitionState};
use crate::core::playfield::Playfield;
use crate::core::projectile::Projectile;
use crate::extensions::easing::ease;
use crate::input::classifier::GestureClassifier;
use crate::input::landmarks::{split_hands, HandLandmarkSnapshot};
use crate::input::queue::GestureFrame;
use crate::input::stabilizer::TemporalStabilizer;
use crate::renderer::frame::*;
use crate::systems::button::{Rect, RestartButton};
use crate::systems::collision::resolve_collisions;
use crate::systems::pause::{PauseController, PauseEdge};
use crate::systems::slingshot::{fork_tips, SlingPhase, Slingshot, FORK_HALF_WIDTH, POST_HEIGHT};

/// A one-shot message and how many more ticks it stays up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notice {
    pub kind: MessageKind,
    pub remaining: u32,
}

/// Everything that changes from tick to tick. Cloned to stage a tick so a
/// rejected tick leaves the committed state untouched.
#[derive(Debug, Clone)]
pub struct GameState {
    pub tick: u64,
    pub projectile: Projectile,
    pub slingshot: Slingshot,
    pub levels: LevelManager,
    pub button: RestartButton,
    pub pause: PauseController,
    pub stabilizer: TemporalStabilizer,
    pub score: u32,
    pub won: bool,
    pub notice: Option<Notice>,
    pub hands_present: bool,
    /// Events raised during the most recent tick.
    pub events: Vec<GameEvent>,
}

impl GameState {
    fn new(config: &GameConfig, field: &Playfield, viewport: Vec2) -> Self {
        let levels = LevelManager::new(
            config.level.max_level,
            config.level.transition_speed,
            *field,
            config.slingshot.target_radius,
        );
        let won = levels.all_destroyed();
        Self {
            tick: 0,
            projectile: Projectile::new(field.launch_point(), config.slingshot.projectile_radius),
            slingshot: Slingshot::new(config.slingshot),
            levels,
            button: RestartButton::new(config.button, viewport),
            pause: PauseController::new(config.pause),
            stabilizer: TemporalStabilizer::new(config.stabilizer),
            score: 0,
            won,
            notice: None,
            hands_present: false,
            events: Vec::new(),
        }
    }

    /// Projectile home, every target standing, score cleared. The level and
    /// any running transition are kept.
    fn restart(&mut self) {
        self.projectile.reset();
        self.levels.revive_targets();
        self.score = 0;
        self.won = false;
        self.slingshot.cancel();
    }

    fn emit(&mut self, kind: f32, a: f32, b: f32, c: f32) {
        self.events.push(GameEvent::new(kind, a, b, c));
    }

    fn show(&mut self, kind: MessageKind, ticks: u32) {
        self.notice = Some(Notice { kind, remaining: ticks });
    }

    /// Check the invariants every committed state must satisfy.
    pub fn validate(&self, config: &GameConfig) -> TickResult<()> {
        let p = &self.projectile;
        if !(p.pos.is_finite() && p.vel.is_finite()) {
            return Err(TickError::NonFinite { what: "projectile" });
        }
        if p.trail.iter().any(|t| !t.is_finite()) {
            return Err(TickError::NonFinite { what: "trail" });
        }
        if p.trail.len() > config.slingshot.trail_capacity {
            return Err(TickError::TrailOverflow {
                len: p.trail.len(),
                capacity: config.slingshot.trail_capacity,
            });
        }
        if self.button.progress() > self.button.max_progress() {
            return Err(TickError::ButtonProgress {
                progress: self.button.progress(),
                max: self.button.max_progress(),
            });
        }
        let level = self.levels.level();
        if level == 0 || level > self.levels.max_level() {
            return Err(TickError::LevelOutOfRange { level, max: self.levels.max_level() });
        }
        Ok(())
    }
}

pub struct GameOrchestrator {
    config: GameConfig,
    viewport: Vec2,
    playfield: Playfield,
    classifier: GestureClassifier,
    state: GameState,
}

impl GameOrchestrator {
    /// Build a session for a fixed viewport size (pixels). The config is
    /// validated first; a config the state machines cannot run is refused.
    pub fn new(config: GameConfig, viewport: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;
        let playfield = Playfield::from_viewport(viewport, &config.playfield);
        let classifier = GestureClassifier::new(config.gesture, viewport);
        let state = GameState::new(&config, &playfield, viewport);
        info!(
            "Orchestrator created: viewport {}x{}, playfield {}x{} at ({}, {})",
            viewport.x, viewport.y, playfield.size.x, playfield.size.y, playfield.origin.x, playfield.origin.y
        );
        Ok(Self { config, viewport, playfield, classifier, state })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Classify already-validated hands into one tick's gesture frame.
    pub fn classify(&self, hands: &[HandLandmarkSnapshot]) -> GestureFrame {
        let mut frame = GestureFrame::new();
        for hand in hands {
            frame.push(self.classifier.classify(hand));
        }
        frame
    }

    /// Decode a flat `hands x 21 x 3` buffer. Malformed hands are logged and
    /// left out; the rest are classified.
    pub fn classify_flat(&self, values: &[f32]) -> GestureFrame {
        let mut frame = GestureFrame::new();
        for (i, hand) in split_hands(values, self.config.gesture.coordinate_margin).into_iter().enumerate() {
            match hand {
                Ok(hand) => frame.push(self.classifier.classify(&hand)),
                Err(e) => warn!("Hand {} rejected: {}", i, e),
            }
        }
        frame
    }

    /// Advance one tick. On error the previous state stays committed.
    pub fn advance(&mut self, frame: &GestureFrame) -> TickResult<()> {
        let mut next = self.state.clone();
        self.step(&mut next, frame);
        match next.validate(&self.config) {
            Ok(()) => {
                self.state = next;
                Ok(())
            }
            Err(e) => {
                warn!("Tick {} rejected: {}", next.tick, e);
                Err(e)
            }
        }
    }

    /// Advance and describe the result for the host.
    pub fn tick(&mut self, frame: &GestureFrame) -> TickOutput {
        match self.advance(frame) {
            Ok(()) => TickOutput::Frame(self.render()),
            Err(e) => TickOutput::Diagnostic { message: e.to_string() },
        }
    }

    /// Advance from a flat landmark buffer.
    pub fn tick_flat(&mut self, values: &[f32]) -> TickOutput {
        let frame = self.classify_flat(values);
        self.tick(&frame)
    }

    /// Restart the current level and forget gesture history.
    pub fn reset(&mut self) {
        info!("Game reset by command");
        self.state.restart();
        self.state.stabilizer.reset();
        self.state.show(MessageKind::GameReset, self.config.frame.notice_ticks);
        self.state.emit(event_kind::RESTARTED, 0.0, 0.0, 0.0);
    }

    /// Start the slide to the next level. Only honored once the current
    /// level is won, no slide is running, and a next level exists.
    pub fn request_next_level(&mut self) -> bool {
        let s = &mut self.state;
        if !s.won {
            debug!("Next level ignored: level {} not won", s.levels.level());
            return false;
        }
        if !s.levels.next_level() {
            debug!("Next level ignored: transitioning or at last level");
            return false;
        }
        let level = s.levels.level();
        info!("Advancing to level {}", level);
        s.show(MessageKind::NextLevel(level), self.config.frame.notice_ticks);
        s.emit(event_kind::LEVEL_ADVANCED, level as f32, 0.0, 0.0);
        true
    }

    fn step(&self, s: &mut GameState, frame: &GestureFrame) {
        let cfg = &self.config;
        s.tick += 1;
        s.events.clear();
        s.hands_present = !frame.is_empty();

        let fist = s.stabilizer.update_fist(frame.fist());
        let swipe = s.stabilizer.update_swipe(frame.swiping());

        match s.pause.update(fist) {
            Some(PauseEdge::Paused) => {
                info!("Paused");
                s.emit(event_kind::PAUSED, 0.0, 0.0, 0.0);
            }
            Some(PauseEdge::Resumed) => {
                info!("Resumed");
                s.emit(event_kind::RESUMED, 0.0, 0.0, 0.0);
            }
            None => {}
        }
        let paused = s.pause.is_paused();

        if !paused && !s.levels.is_transitioning() {
            self.dispatch_sling(s, frame.pinch());
            if s.button.update(frame.pointer()) {
                info!("Restart button fired");
                s.restart();
                s.show(MessageKind::GameReset, cfg.frame.notice_ticks);
                s.emit(event_kind::RESTARTED, 0.0, 0.0, 0.0);
            }
        }

        if swipe && s.won && !s.levels.is_transitioning() {
            if s.levels.is_last_level() {
                s.show(MessageKind::AllLevelsCompleted, cfg.frame.notice_ticks);
            } else if s.levels.next_level() {
                let level = s.levels.level();
                info!("Swipe: advancing to level {}", level);
                s.show(MessageKind::NextLevel(level), cfg.frame.notice_ticks);
                s.emit(event_kind::LEVEL_ADVANCED, level as f32, 0.0, 0.0);
            }
        }

        if !paused {
            if s.levels.is_transitioning() {
                if s.levels.tick_transition() {
                    self.enter_level(s);
                }
            } else {
                self.step_physics(s);
            }
        }

        if let Some(notice) = s.notice.as_mut() {
            notice.remaining = notice.remaining.saturating_sub(1);
            if notice.remaining == 0 {
                s.notice = None;
            }
        }
    }

    fn dispatch_sling(&self, s: &mut GameState, pinch: Option<Vec2>) {
        match (pinch, s.slingshot.is_pulling()) {
            (Some(point), false) => {
                if s.slingshot.start_pull(&s.projectile, point, s.won) {
                    debug!("Pull started at ({:.1}, {:.1})", point.x, point.y);
                }
            }
            (Some(point), true) => s.slingshot.update_pull(&mut s.projectile, point),
            (None, true) => {
                if let Some(vel) = s.slingshot.release(&mut s.projectile) {
                    s.emit(event_kind::LAUNCHED, vel.x, vel.y, 0.0);
                }
            }
            (None, false) => {}
        }
    }

    fn step_physics(&self, s: &mut GameState) {
        let tuning = &self.config.slingshot;
        s.projectile.step(tuning.gravity, tuning.drag, tuning.trail_capacity);
        debug_assert!(s.projectile.trail.len() <= tuning.trail_capacity);

        for pos in resolve_collisions(&s.projectile, &mut s.levels.targets) {
            s.score += tuning.points_per_target;
            let score = s.score as f32;
            s.emit(event_kind::TARGET_DESTROYED, pos.x, pos.y, score);
        }

        if s.projectile.is_flying && self.playfield.out_of_bounds(s.projectile.pos) {
            s.projectile.reset();
            s.emit(event_kind::PROJECTILE_RESET, 0.0, 0.0, 0.0);
        }

        let won = s.levels.all_destroyed();
        if won && !s.won {
            info!("Level {} cleared, score {}", s.levels.level(), s.score);
            s.emit(event_kind::WON, s.levels.level() as f32, 0.0, 0.0);
        }
        s.won = won;
    }

    /// The slide finished and the new layout is in place: fresh projectile,
    /// no grab held.
    fn enter_level(&self, s: &mut GameState) {
        s.projectile = Projectile::new(self.playfield.launch_point(), self.config.slingshot.projectile_radius);
        s.slingshot.cancel();
        s.won = s.levels.all_destroyed();
        let level = s.levels.level();
        info!("Level {} loaded with {} targets", level, s.levels.targets.len());
        s.emit(event_kind::LEVEL_LOADED, level as f32, 0.0, 0.0);
    }

    /// Describe the committed state for the renderer.
    pub fn render(&self) -> RenderFrame {
        let s = &self.state;
        let phase = s.slingshot.phase(&s.projectile);

        let post = self.playfield.post();
        let (left, right) = fork_tips(post);
        let bands = if phase == SlingPhase::Pulling {
            SlingBands::Pulled { left, right, projectile: s.projectile.pos, anchor: s.projectile.start }
        } else {
            SlingBands::Rest { left, right }
        };
        let post_rect = Rect::new(
            Vec2::new(post.x - FORK_HALF_WIDTH, post.y - POST_HEIGHT),
            Vec2::new(FORK_HALF_WIDTH * 2.0, POST_HEIGHT),
        );

        let transition = match s.levels.transition {
            TransitionState::Idle => None,
            TransitionState::Transitioning { progress, direction } => {
                let eased = ease(0.0, 1.0, progress as f32 / 100.0, self.config.level.transition_easing);
                Some(TransitionFrame::new(progress, eased, direction, self.viewport.x, s.levels.upcoming_layout()))
            }
        };

        let mut messages = Vec::new();
        if s.pause.is_paused() {
            messages.push(MessageFrame::new(MessageKind::Paused, s.pause.message_timer()));
        } else if s.pause.message_timer() > 0 {
            messages.push(MessageFrame::new(MessageKind::Resumed, s.pause.message_timer()));
        }
        if let Some(notice) = s.notice {
            messages.push(MessageFrame::new(notice.kind, notice.remaining));
        }

        let mut hints: Vec<HintFrame> = Vec::new();
        if !s.hands_present {
            hints.push(Hint::NoHands.into());
        }
        if s.won && !s.levels.is_transitioning() && !s.levels.is_last_level() {
            hints.push(Hint::SwipeForNextLevel.into());
        }
        if s.button.triggered() {
            hints.push(Hint::LeaveButtonToReset.into());
        }
        if s.pause.is_paused() {
            hints.push(Hint::ReleaseFistToContinue.into());
        }

        RenderFrame {
            tick: s.tick,
            viewport: self.viewport,
            playfield: PlayfieldFrame {
                origin: self.playfield.origin,
                size: self.playfield.size,
                ground_height: self.config.playfield.ground_height,
            },
            projectile: ProjectileFrame {
                pos: s.projectile.pos,
                radius: s.projectile.radius,
                trail: s.projectile.trail.clone(),
            },
            targets: s.levels.targets.clone(),
            sling: SlingFrame { post: post_rect, bands },
            level: s.levels.level(),
            max_level: s.levels.max_level(),
            transition,
            hud: HudFrame {
                status: phase,
                score: s.score,
                remaining: s.levels.remaining(),
                won: s.won,
            },
            button: ButtonFrame {
                rect: s.button.rect(),
                region: s.button.region(),
                visual: s.button.visual(),
                progress_fraction: s.button.progress_fraction(),
                show_region: s.button.show_region(),
            },
            paused: s.pause.is_paused(),
            messages,
            hints,
            events: s.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::fixtures::{self, VIEWPORT};

    fn game() -> GameOrchestrator {
        GameOrchestrator::new(GameConfig::default(), VIEWPORT).unwrap()
    }

    fn pinch(p: Vec2) -> GestureFrame {
        GestureFrame::synthetic(Some(p), None, false, false)
    }

    fn point(p: Vec2) -> GestureFrame {
        GestureFrame::synthetic(None, Some(p), false, false)
    }

    fn fist() -> GestureFrame {
        GestureFrame::synthetic(None, None, false, true)
    }

    fn swipe() -> GestureFrame {
        GestureFrame::synthetic(None, None, true, false)
    }

    fn open() -> GestureFrame {
        GestureFrame::synthetic(None, None, false, false)
    }

    fn clear_level(g: &mut GameOrchestrator) {
        for t in g.state.levels.targets.iter_mut() {
            t.destroyed = true;
        }
        g.advance(&open()).unwrap();
        assert!(g.state().won);
    }

    #[test]
    fn rejects_unusable_config() {
        let mut config = GameConfig::default();
        config.level.max_level = 0;
        assert!(matches!(GameOrchestrator::new(config, VIEWPORT), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn starts_ready_on_level_one() {
        let g = game();
        let frame = g.render();
        assert_eq!(frame.level, 1);
        assert_eq!(frame.targets.len(), 3);
        assert_eq!(frame.projectile.pos, Vec2::new(200.0, 550.0));
        assert_eq!(frame.hud.status, SlingPhase::Idle);
        assert!(matches!(frame.sling.bands, SlingBands::Rest { .. }));
    }

    #[test]
    fn pinch_drag_release_launches() {
        let mut g = game();
        g.advance(&pinch(Vec2::new(200.0, 550.0))).unwrap();
        assert_eq!(g.render().hud.status, SlingPhase::Pulling);

        g.advance(&pinch(Vec2::new(160.0, 470.0))).unwrap();
        assert_eq!(g.state().projectile.pos, Vec2::new(160.0, 470.0));
        assert!(matches!(g.render().sling.bands, SlingBands::Pulled { .. }));

        g.advance(&open()).unwrap();
        let p = &g.state().projectile;
        assert!(p.is_flying);
        // Launch (6, 12), then one physics step in the same tick.
        assert!(p.vel.abs_diff_eq(Vec2::new(5.97, 12.3), 1e-4));
        assert!(p.pos.abs_diff_eq(Vec2::new(165.97, 482.3), 1e-3));
        assert_eq!(p.trail.len(), 2);
        assert_eq!(g.state().events[0].kind, event_kind::LAUNCHED);
    }

    #[test]
    fn pinch_far_from_projectile_does_nothing() {
        let mut g = game();
        g.advance(&pinch(Vec2::new(400.0, 300.0))).unwrap();
        assert!(!g.state().slingshot.is_pulling());
        g.advance(&open()).unwrap();
        assert!(!g.state().projectile.is_flying);
    }

    #[test]
    fn hit_scores_once_and_wins() {
        let mut g = game();
        let targets: Vec<Vec2> = g.state().levels.targets.iter().map(|t| t.pos).collect();
        for pos in targets {
            g.state.projectile.pos = pos;
            g.advance(&open()).unwrap();
        }
        assert_eq!(g.state().score, 300);
        assert!(g.state().won);
        assert!(g.state().events.iter().any(|e| e.kind == event_kind::WON));

        g.advance(&open()).unwrap();
        assert_eq!(g.state().score, 300);
    }

    #[test]
    fn flight_out_of_bounds_resets() {
        let mut g = game();
        g.state.slingshot.start_pull(&g.state.projectile, Vec2::new(200.0, 550.0), false);
        g.state.projectile.pos = Vec2::new(290.0, 550.0);
        g.advance(&open()).unwrap();
        assert!(g.state().projectile.is_flying);

        // Launched left at about 13.5 px/tick; crosses x = 100 within 15 ticks.
        let mut ticks = 0;
        while g.state().projectile.is_flying {
            g.advance(&open()).unwrap();
            ticks += 1;
            assert!(ticks < 30, "projectile never left the playfield");
        }
        assert!(g.state().events.iter().any(|e| e.kind == event_kind::PROJECTILE_RESET));
        assert_eq!(g.state().projectile.pos, Vec2::new(200.0, 550.0));
        assert!(g.state().projectile.trail.is_empty());
    }

    #[test]
    fn no_grab_while_won() {
        let mut g = game();
        clear_level(&mut g);
        g.advance(&pinch(Vec2::new(200.0, 550.0))).unwrap();
        assert!(!g.state().slingshot.is_pulling());
    }

    #[test]
    fn button_dwell_restarts_level() {
        let mut g = game();
        g.state.levels.targets[0].destroyed = true;
        g.state.score = 100;
        let on_button = Vec2::new(60.0, 550.0);
        for _ in 0..29 {
            g.advance(&point(on_button)).unwrap();
        }
        assert_eq!(g.state().score, 100);
        g.advance(&point(on_button)).unwrap();
        assert_eq!(g.state().score, 0);
        assert!(g.state().levels.targets.iter().all(|t| !t.destroyed));
        assert_eq!(g.render().messages[0].text, "GAME RESET!");

        let hints: Vec<Hint> = g.render().hints.iter().map(|h| h.hint).collect();
        assert!(hints.contains(&Hint::LeaveButtonToReset));
    }

    #[test]
    fn fist_pauses_everything() {
        let mut g = game();
        g.state.projectile.launch(Vec2::new(5.0, -5.0));
        g.advance(&fist()).unwrap();
        assert!(g.state().pause.is_paused());
        let frozen = g.state().projectile.pos;

        for _ in 0..10 {
            g.advance(&fist()).unwrap();
        }
        assert_eq!(g.state().projectile.pos, frozen);
        let frame = g.render();
        assert!(frame.paused);
        assert_eq!(frame.messages[0].kind, MessageKind::Paused);

        // Two open ticks to clear the fist window.
        g.advance(&open()).unwrap();
        assert!(g.state().pause.is_paused());
        g.advance(&open()).unwrap();
        assert!(!g.state().pause.is_paused());
        assert_ne!(g.state().projectile.pos, frozen);
        assert_eq!(g.render().messages[0].kind, MessageKind::Resumed);
    }

    #[test]
    fn button_frozen_while_paused() {
        let mut g = game();
        g.advance(&GestureFrame::synthetic(None, Some(Vec2::new(60.0, 550.0)), false, true)).unwrap();
        assert_eq!(g.state().button.progress(), 0);
    }

    #[test]
    fn swipe_after_win_slides_to_next_level() {
        let mut g = game();
        clear_level(&mut g);

        let mut advanced = false;
        for _ in 0..5 {
            g.advance(&swipe()).unwrap();
            advanced |= g.state().levels.is_transitioning();
        }
        assert!(advanced);
        assert_eq!(g.state().levels.level(), 2);
        // Layout still shows level one until the slide completes.
        assert_eq!(g.state().levels.targets.len(), 3);
        assert!(g.render().transition.is_some());

        for _ in 0..40 {
            g.advance(&open()).unwrap();
        }
        assert!(!g.state().levels.is_transitioning());
        assert_eq!(g.state().levels.targets.len(), 4);
        assert!(!g.state().won);
        assert_eq!(g.state().projectile.pos, g.playfield().launch_point());
    }

    #[test]
    fn swipe_ignored_before_win() {
        let mut g = game();
        for _ in 0..10 {
            g.advance(&swipe()).unwrap();
        }
        assert_eq!(g.state().levels.level(), 1);
    }

    #[test]
    fn last_level_reports_completion() {
        let mut config = GameConfig::default();
        config.level.max_level = 1;
        let mut g = GameOrchestrator::new(config, VIEWPORT).unwrap();
        clear_level(&mut g);
        for _ in 0..5 {
            g.advance(&swipe()).unwrap();
        }
        assert_eq!(g.state().levels.level(), 1);
        assert_eq!(g.state().notice.map(|n| n.kind), Some(MessageKind::AllLevelsCompleted));
    }

    #[test]
    fn request_next_level_preconditions() {
        let mut g = game();
        assert!(!g.request_next_level());
        clear_level(&mut g);
        assert!(g.request_next_level());
        assert!(!g.request_next_level());
        assert_eq!(g.state().levels.level(), 2);
    }

    #[test]
    fn reset_keeps_level() {
        let mut g = game();
        clear_level(&mut g);
        g.request_next_level();
        for _ in 0..40 {
            g.advance(&open()).unwrap();
        }
        g.state.score = 500;
        g.reset();
        assert_eq!(g.state().levels.level(), 2);
        assert_eq!(g.state().score, 0);
    }

    fn assert_restarted(g: &GameOrchestrator) {
        let s = g.state();
        assert!(!s.slingshot.is_pulling());
        assert!(!s.projectile.is_flying);
        assert_eq!(s.projectile.pos, s.projectile.start);
        assert_eq!(s.projectile.vel, Vec2::ZERO);
        assert!(s.projectile.trail.is_empty());
        assert!(!s.won);
        assert_eq!(s.score, 0);
        assert!(s.levels.targets.iter().all(|t| !t.destroyed));
    }

    #[test]
    fn reset_while_pulling_drops_the_grab() {
        let mut g = game();
        g.advance(&pinch(Vec2::new(200.0, 550.0))).unwrap();
        g.advance(&pinch(Vec2::new(160.0, 470.0))).unwrap();
        g.reset();
        assert_restarted(&g);

        // Letting go afterwards launches nothing.
        g.advance(&open()).unwrap();
        assert!(!g.state().projectile.is_flying);
        assert!(g.state().events.iter().all(|e| e.kind != event_kind::LAUNCHED));
    }

    #[test]
    fn reset_mid_flight_returns_home() {
        let mut g = game();
        g.advance(&pinch(Vec2::new(200.0, 550.0))).unwrap();
        g.advance(&pinch(Vec2::new(160.0, 470.0))).unwrap();
        for _ in 0..4 {
            g.advance(&open()).unwrap();
        }
        assert!(g.state().projectile.is_flying);
        assert!(g.state().projectile.trail.len() > 1);
        g.reset();
        assert_restarted(&g);
    }

    #[test]
    fn button_restart_after_win_clears_won() {
        let mut g = game();
        g.state.score = 300;
        clear_level(&mut g);
        let on_button = Vec2::new(60.0, 550.0);
        for _ in 0..30 {
            g.advance(&point(on_button)).unwrap();
        }
        assert_restarted(&g);
        assert_eq!(g.state().levels.level(), 1);

        g.advance(&pinch(Vec2::new(200.0, 550.0))).unwrap();
        assert!(g.state().slingshot.is_pulling());
    }

    #[test]
    fn reset_mid_slide_keeps_outgoing_layout() {
        let mut g = game();
        clear_level(&mut g);
        let outgoing: Vec<Vec2> = g.state().levels.targets.iter().map(|t| t.pos).collect();
        assert!(g.request_next_level());
        g.advance(&open()).unwrap();
        assert!(g.state().levels.is_transitioning());

        g.reset();
        let s = g.state();
        assert!(s.levels.is_transitioning());
        assert_eq!(s.levels.level(), 2);
        assert_eq!(s.levels.targets.iter().map(|t| t.pos).collect::<Vec<_>>(), outgoing);
        assert!(s.levels.targets.iter().all(|t| !t.destroyed));

        for _ in 0..40 {
            g.advance(&open()).unwrap();
        }
        assert_eq!(g.state().levels.targets.len(), 4);
    }

    #[test]
    fn bad_tick_keeps_previous_state() {
        let mut g = game();
        g.advance(&pinch(Vec2::new(200.0, 550.0))).unwrap();
        let tick = g.state().tick;

        match g.tick(&pinch(Vec2::new(f32::NAN, 500.0))) {
            TickOutput::Diagnostic { message } => assert!(message.contains("projectile")),
            other => panic!("expected diagnostic, got {:?}", other),
        }
        assert_eq!(g.state().tick, tick);
        assert_eq!(g.state().projectile.pos, Vec2::new(200.0, 550.0));
    }

    #[test]
    fn classify_merges_hands() {
        let g = game();
        let hands = [fixtures::snapshot(&fixtures::pointing()), fixtures::snapshot(&fixtures::fist())];
        let frame = g.classify(&hands);
        assert_eq!(frame.len(), 2);
        assert!(frame.fist());
        assert!(frame.pointer().is_some());
        assert_eq!(frame.pinch(), None);
    }

    #[test]
    fn no_hands_hint() {
        let mut g = game();
        g.advance(&GestureFrame::new()).unwrap();
        assert_eq!(g.render().hints[0].hint, Hint::NoHands);
    }

    #[test]
    fn landmarks_end_to_end() {
        let mut g = game();
        let bird = g.state().projectile.pos / VIEWPORT;
        let grab = fixtures::flatten(&fixtures::pinch_at(bird));
        let pull = fixtures::flatten(&fixtures::pinch_at((Vec2::new(160.0, 470.0)) / VIEWPORT));

        let mut garbage = vec![0.5; 63];
        garbage[10] = f32::INFINITY;
        let mut with_garbage = grab.clone();
        with_garbage.extend_from_slice(&garbage);

        assert!(matches!(g.tick_flat(&with_garbage), TickOutput::Frame(_)));
        assert!(g.state().slingshot.is_pulling());
        g.tick_flat(&pull);
        g.tick_flat(&fixtures::flatten(&fixtures::open_palm()));
        assert!(g.state().projectile.is_flying);
        assert!(g.state().projectile.vel.abs_diff_eq(Vec2::new(5.97, 12.3), 1e-2));
    }
}
