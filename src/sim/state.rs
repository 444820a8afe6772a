//! Game state and core simulation types
//!
//! One `GameState` is one attempt at one level: a paddle, a ball and the
//! level's block grid. It is rebuilt from scratch every time a level starts.

use anyhow::Result;
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::level::{Level, generate_level};
use crate::consts::*;
use crate::half_extents;

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
    /// Lives belong to the paddle, which stands in for the player
    pub lives: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(0.0, PADDLE_START_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            lives: STARTING_LIVES,
        }
    }
}

impl Paddle {
    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if a point lies inside the paddle rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let half = self.half_size();
        point.y <= self.pos.y + half.y
            && point.y >= self.pos.y - half.y
            && point.x >= self.pos.x - half.x
            && point.x <= self.pos.x + half.x
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Put the ball back in play after it fell past the bottom edge
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(BALL_RESPAWN_X, BALL_RESPAWN_Y);
        self.vel = Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y);
    }

    /// Advance by velocity * dt
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// A bonus life carried by a block, released when the block breaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical speed (negative = falling)
    pub speed: f32,
    /// Caught by the paddle
    pub destroyed: bool,
}

impl Powerup {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: POWERUP_RADIUS,
            speed: POWERUP_SPEED,
            destroyed: false,
        }
    }
}

/// Result of the ball striking a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockHit {
    /// Lost one point of strength but still standing
    Damaged,
    /// Strength reached zero
    Destroyed,
    /// Already gone, nothing happened
    Ignored,
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Center position
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub destroyed: bool,
    /// Hits left before the block breaks (1-5)
    pub strength: u32,
    /// Present only on powered blocks
    pub powerup: Option<Powerup>,
}

impl Block {
    pub fn new(pos: Vec2, width: f32, height: f32, strength: u32, powered: bool) -> Self {
        Self {
            pos,
            width,
            height,
            destroyed: false,
            strength,
            powerup: powered.then(|| Powerup::new(pos)),
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn is_powered(&self) -> bool {
        self.powerup.is_some()
    }

    /// Take one hit. Strength only ever goes down, and a block at zero
    /// strength is always destroyed.
    pub fn hit(&mut self) -> BlockHit {
        if self.destroyed {
            return BlockHit::Ignored;
        }
        self.strength = self.strength.saturating_sub(1);
        if self.strength == 0 {
            self.destroyed = true;
            BlockHit::Destroyed
        } else {
            BlockHit::Damaged
        }
    }

    /// The released powerup, if this block is broken and its powerup is
    /// still falling
    pub fn active_powerup(&self) -> Option<&Powerup> {
        if !self.destroyed {
            return None;
        }
        self.powerup.as_ref().filter(|p| !p.destroyed)
    }

    /// Color tier index (0-4) derived from strength
    pub fn color_tier(&self) -> usize {
        (self.strength.clamp(1, MAX_BLOCK_STRENGTH) - 1) as usize
    }
}

/// What the ball is currently touching.
///
/// A contact is resolved (bounce + damage) only on the frame it starts; while
/// the ball keeps overlapping the paddle or any block the state stays
/// engaged, and it drops back to `Free` on the first frame with no overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Contact {
    #[default]
    Free,
    Paddle,
    /// Index into the block grid
    Block(usize),
}

impl Contact {
    #[inline]
    pub fn is_engaged(&self) -> bool {
        !matches!(self, Contact::Free)
    }
}

/// Complete state of one level being played
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub level: Level,
    pub window_width: u32,
    pub window_height: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major block grid, row 0 at the top
    pub blocks: Vec<Block>,
    pub contact: Contact,
    /// Frames simulated so far
    pub frames: u64,
}

impl GameState {
    /// Build the grid for `level` and place ball and paddle at their defaults
    pub fn new<R: Rng + ?Sized>(
        level: Level,
        window_width: u32,
        window_height: u32,
        rng: &mut R,
    ) -> Result<Self> {
        let blocks = generate_level(&level.spec(), window_width, window_height, rng)?;
        Ok(Self {
            level,
            window_width,
            window_height,
            paddle: Paddle::default(),
            ball: Ball::default(),
            blocks,
            contact: Contact::Free,
            frames: 0,
        })
    }

    /// Half width/height of the playfield
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        half_extents(self.window_width, self.window_height)
    }

    pub fn destroyed_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.destroyed).count()
    }

    pub fn all_blocks_destroyed(&self) -> bool {
        self.destroyed_count() == self.blocks.len()
    }

    pub fn out_of_lives(&self) -> bool {
        self.paddle.lives == 0
    }

    /// Powerups currently falling
    pub fn active_powerups(&self) -> impl Iterator<Item = &Powerup> {
        self.blocks.iter().filter_map(Block::active_powerup)
    }
}
