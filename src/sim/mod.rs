//! Simulation module
//!
//! All gameplay logic lives here:
//! - Entities and per-level state
//! - Axis-aligned collision tests and bounce rules
//! - Level grid generation (seeded RNG only)
//! - The per-frame update
//!
//! No rendering or platform dependencies.

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{ball_x_block, ball_x_paddle, block_bounce, paddle_bounce, powerup_x_paddle};
pub use level::{Level, LevelSpec, generate_level, pick_powerup_slots};
pub use state::{Ball, Block, BlockHit, Contact, GameState, Paddle, Powerup};
pub use tick::{
    BallEvent, Direction, Outcome, TickInput, tick, update_ball, update_paddle, update_powerups,
};
