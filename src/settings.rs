//! Game settings
//!
//! Loaded from a JSON file named by `SHAPEMOTION_SETTINGS`; anything missing
//! falls back to the defaults below.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "SHAPEMOTION_SETTINGS";

/// Tunable game and host parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub screen_width: i32,
    pub screen_height: i32,

    // === Timing ===
    /// Periodic tick rate (Hz)
    pub tick_hz: u32,
    /// Ticks per physics step
    pub physics_divider: u32,

    // === Gameplay ===
    /// Vertical paddle speed while a button is held (pixels per step)
    pub paddle_speed: i32,
    /// Initial ball velocity (pixels per step)
    pub ball_velocity: [i32; 2],
    /// Points needed to win
    pub win_score: u8,

    // === Host ===
    /// Drive both paddles with the demo autopilot
    pub autopilot: bool,
    /// Autopilot RNG seed
    pub seed: u64,
    /// Stop after this many ticks (None = run forever)
    pub run_ticks: Option<u64>,
    /// Write a PPM of the final screen here
    pub snapshot: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: consts::SCREEN_WIDTH,
            screen_height: consts::SCREEN_HEIGHT,
            tick_hz: consts::TICK_HZ,
            physics_divider: consts::PHYSICS_DIVIDER,
            paddle_speed: consts::PADDLE_SPEED,
            ball_velocity: consts::BALL_VELOCITY,
            win_score: consts::WIN_SCORE,
            autopilot: true,
            seed: 0x5eed,
            run_ticks: None,
            snapshot: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        Ok(settings.validate())
    }

    /// Load settings from a JSON file
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `SHAPEMOTION_SETTINGS`, or defaults
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_file(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Replace values the game cannot run with
    pub fn validate(mut self) -> Self {
        let defaults = Self::default();
        if self.tick_hz == 0 {
            log::warn!("tick_hz must be positive, using {}", defaults.tick_hz);
            self.tick_hz = defaults.tick_hz;
        }
        if self.physics_divider == 0 {
            log::warn!(
                "physics_divider must be positive, using {}",
                defaults.physics_divider
            );
            self.physics_divider = defaults.physics_divider;
        }
        if self.win_score == 0 {
            log::warn!("win_score must be positive, using {}", defaults.win_score);
            self.win_score = defaults.win_score;
        }
        if self.screen_width < consts::MIN_SCREEN || self.screen_height < consts::MIN_SCREEN {
            log::warn!(
                "screen {}x{} too small, using {}x{}",
                self.screen_width,
                self.screen_height,
                defaults.screen_width,
                defaults.screen_height
            );
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
        }
        if self.screen_width > consts::MAX_SCREEN || self.screen_height > consts::MAX_SCREEN {
            log::warn!(
                "screen {}x{} too large, clamping each side to {}",
                self.screen_width,
                self.screen_height,
                consts::MAX_SCREEN
            );
            self.screen_width = self.screen_width.min(consts::MAX_SCREEN);
            self.screen_height = self.screen_height.min(consts::MAX_SCREEN);
        }

        // nothing may move further than the short side of the screen per step
        let limit = self.screen_width.min(self.screen_height);
        let speed = self.paddle_speed.saturating_abs();
        if speed > limit {
            log::warn!("paddle_speed {} too large, using {}", self.paddle_speed, limit);
        }
        self.paddle_speed = speed.min(limit);
        let velocity = self.ball_velocity.map(|v| v.clamp(-limit, limit));
        if velocity != self.ball_velocity {
            log::warn!(
                "ball_velocity {:?} too large, using {:?}",
                self.ball_velocity,
                velocity
            );
            self.ball_velocity = velocity;
        }
        self
    }

    /// Wall-clock length of one tick
    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.tick_hz.max(1)
    }
}
