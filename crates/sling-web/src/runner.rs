use glam::Vec2;
use log::{info, warn};
use sling_engine::{ConfigError, FrameLayout, GameConfig, GameOrchestrator, TickOutput};

/// Owns one play session for the browser host.
///
/// The host calls `frame()` once per video frame with the viewport size and
/// the detector's landmarks. The orchestrator is built lazily on the first
/// frame, sized from it; the size then stays fixed for the session.
pub struct GameRunner {
    config: GameConfig,
    layout: FrameLayout,
    game: Option<GameOrchestrator>,
    output: Option<TickOutput>,
    /// Flat frame buffer read by the host through `frame_ptr()`.
    buffer: Vec<f32>,
    /// Last viewport size that differed from the session's, to log it once.
    ignored_size: Option<Vec2>,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        let layout = FrameLayout::from_config(&config);
        Self {
            buffer: vec![0.0; layout.buffer_total_floats],
            config,
            layout,
            game: None,
            output: None,
            ignored_size: None,
        }
    }

    /// Replace the configuration. The current session is dropped and a new
    /// one starts on the next frame.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = GameConfig::from_json(json)?;
        self.layout = FrameLayout::from_config(&config);
        self.config = config;
        if self.game.take().is_some() {
            info!("Config replaced; session restarts on next frame");
        }
        Ok(())
    }

    /// Run one tick from a flat `hands x 21 x 3` landmark buffer.
    pub fn frame(&mut self, width: f32, height: f32, landmarks: &[f32]) {
        let viewport = Vec2::new(width, height);
        if !(viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0) {
            warn!("Ignoring frame with invalid viewport {}x{}", width, height);
            self.publish(TickOutput::Diagnostic {
                message: format!("invalid viewport {}x{}", width, height),
            });
            return;
        }

        if self.game.is_none() {
            match GameOrchestrator::new(self.config.clone(), viewport) {
                Ok(game) => self.game = Some(game),
                Err(e) => {
                    warn!("Session not started: {}", e);
                    self.publish(TickOutput::Diagnostic { message: e.to_string() });
                    return;
                }
            }
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.viewport() != viewport {
            if self.ignored_size != Some(viewport) {
                warn!(
                    "Viewport changed to {}x{}; session keeps {}x{}",
                    width,
                    height,
                    game.viewport().x,
                    game.viewport().y
                );
                self.ignored_size = Some(viewport);
            }
        } else {
            self.ignored_size = None;
        }

        let output = game.tick_flat(landmarks);
        self.publish(output);
    }

    /// Host command: restart the current level.
    pub fn reset(&mut self) {
        match self.game.as_mut() {
            Some(game) => {
                game.reset();
                let frame = game.render();
                self.publish(TickOutput::Frame(frame));
            }
            None => info!("Reset before first frame ignored"),
        }
    }

    /// Host command: advance to the next level if the current one is won.
    pub fn next_level(&mut self) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        let advanced = game.request_next_level();
        if advanced {
            let frame = game.render();
            self.publish(TickOutput::Frame(frame));
        }
        advanced
    }

    fn publish(&mut self, output: TickOutput) {
        self.layout.pack(&output, &mut self.buffer);
        self.output = Some(output);
    }

    pub fn output(&self) -> Option<&TickOutput> {
        self.output.as_ref()
    }

    pub fn game(&self) -> Option<&GameOrchestrator> {
        self.game.as_ref()
    }

    /// Latest output as JSON, or `null` before the first frame.
    pub fn frame_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.output)
    }

    // ---- Pointer accessors for zero-copy reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.buffer.len() as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
