//! Breakout - a single-screen block-breaking arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, level generation, frame update)
//! - `screen`: Level select / playing / win / lose screen machine
//! - `platform`: Input and clock adapters
//! - `renderer`: Read-only render view (vertex lists for a GPU backend)
//! - `settings`: Window size, end-screen delay, RNG seed

pub mod platform;
pub mod renderer;
pub mod screen;
pub mod settings;
pub mod sim;

pub use screen::{Flow, Screen, Session};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default window dimensions (playfield is centered on the origin)
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 480;

    /// Paddle defaults
    pub const PADDLE_START_Y: f32 = -200.0;
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 6.0;
    pub const PADDLE_SPEED: f32 = 150.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_X: f32 = 0.0;
    pub const BALL_START_Y: f32 = 0.0;
    pub const BALL_START_VEL_X: f32 = 60.0;
    pub const BALL_START_VEL_Y: f32 = 200.0;

    /// Where the ball comes back after falling past the bottom edge
    pub const BALL_RESPAWN_X: f32 = 0.0;
    pub const BALL_RESPAWN_Y: f32 = -30.0;

    /// Powerup defaults (negative speed = falling)
    pub const POWERUP_RADIUS: f32 = 5.0;
    pub const POWERUP_SPEED: f32 = -60.0;

    /// Block grid layout
    pub const BLOCK_SPACING: f32 = 8.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const GRID_TOP_MARGIN: f32 = 32.0;
    /// Strength is row + 1, and there are only five color tiers
    pub const MAX_BLOCK_STRENGTH: u32 = 5;

    /// Win/lose screen display time
    pub const END_SCREEN_DELAY_SECS: f32 = 3.0;
}

/// Half extents of a window centered on the origin
#[inline]
pub fn half_extents(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}
