//! Shape Motion - a two-paddle ball game on a tick-driven pixel display
//!
//! Core modules:
//! - `sim`: Scene model, collision rules, scoring and the tick scheduler
//! - `renderer`: Damage-region compositing onto a `Display`
//! - `audio`: Feedback tones
//! - `platform`: Driver traits and the host implementation
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default screen size (pixels)
    pub const SCREEN_WIDTH: i32 = 270;
    pub const SCREEN_HEIGHT: i32 = 240;
    /// Smallest screen the default layout fits on
    pub const MIN_SCREEN: i32 = 64;
    /// Largest screen side accepted from settings
    pub const MAX_SCREEN: i32 = 4096;

    /// Periodic tick rate (Hz)
    pub const TICK_HZ: u32 = 15;
    /// Ticks per physics step (~0.67 s at 15 Hz)
    pub const PHYSICS_DIVIDER: u32 = 10;

    /// Field outline inset from the screen edges
    pub const FIELD_INSET_X: i32 = 5;
    pub const FIELD_INSET_Y: i32 = 11;

    /// Paddle half extents and distance from the side edges
    pub const PADDLE_HALF_WIDTH: i32 = 2;
    pub const PADDLE_HALF_HEIGHT: i32 = 14;
    pub const PADDLE_INSET: i32 = 10;
    /// Vertical paddle speed while a button is held
    pub const PADDLE_SPEED: i32 = 7;

    /// Ball radius and starting velocity
    pub const BALL_RADIUS: i32 = 4;
    pub const BALL_VELOCITY: [i32; 2] = [2, 4];

    /// Points needed to win
    pub const WIN_SCORE: u8 = 10;

    /// HUD placement
    pub const WINNER_TEXT_POS: (i32, i32) = (30, 2);
    pub const SCORE_ROW_FROM_BOTTOM: i32 = 10;
    /// Horizontal advance of one 5x7 glyph
    pub const GLYPH_ADVANCE: i32 = 6;
}
