//! Level presets and block grid generation

use anyhow::{Result, ensure};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Block;
use crate::consts::*;

/// Shape of a level's block grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Total number of blocks
    pub blocks: usize,
    /// Rows the blocks are split into (strength = row + 1)
    pub rows: usize,
    /// How many blocks carry a bonus-life powerup
    pub powerups: usize,
}

impl LevelSpec {
    #[inline]
    pub fn columns(&self) -> usize {
        self.blocks / self.rows
    }

    /// Check the parameters before generating a grid. Drawing more distinct
    /// powerup slots than there are blocks would never terminate.
    pub fn validate(&self, window_width: u32) -> Result<()> {
        ensure!(self.rows >= 1, "level needs at least one row");
        ensure!(
            self.rows as u32 <= MAX_BLOCK_STRENGTH,
            "level has {} rows, at most {} strength tiers exist",
            self.rows,
            MAX_BLOCK_STRENGTH
        );
        ensure!(
            self.blocks % self.rows == 0,
            "{} blocks cannot be split evenly into {} rows",
            self.blocks,
            self.rows
        );
        ensure!(
            self.powerups < self.blocks,
            "{} powerups requested for only {} blocks",
            self.powerups,
            self.blocks
        );
        ensure!(
            block_width(window_width, self.columns()) > 0.0,
            "window width {} too narrow for {} columns",
            window_width,
            self.columns()
        );
        Ok(())
    }
}

/// The three selectable levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    pub fn spec(&self) -> LevelSpec {
        match self {
            Level::One => LevelSpec {
                blocks: 24,
                rows: 3,
                powerups: 2,
            },
            Level::Two => LevelSpec {
                blocks: 32,
                rows: 4,
                powerups: 3,
            },
            Level::Three => LevelSpec {
                blocks: 40,
                rows: 5,
                powerups: 4,
            },
        }
    }

    /// 1-based level number
    pub fn number(&self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }
}

/// Width of one block when `columns` blocks share the window with spacing
/// on both sides of every block
pub fn block_width(window_width: u32, columns: usize) -> f32 {
    if columns == 0 {
        return 0.0;
    }
    (window_width as f32 - BLOCK_SPACING * (columns as f32 + 1.0)) / columns as f32
}

/// Draw `count` distinct powerup slots from `1..=total`.
///
/// Rejection sampling: a draw that repeats an earlier slot is thrown away and
/// redrawn. Requires `count <= total`.
pub fn pick_powerup_slots<R: Rng + ?Sized>(rng: &mut R, count: usize, total: usize) -> Vec<usize> {
    debug_assert!(count <= total);
    let mut slots = Vec::with_capacity(count);
    while slots.len() < count {
        let slot = rng.random_range(1..=total);
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }
    slots
}

/// Build the block grid for a level.
///
/// Blocks are laid out row-major from the top of the window. Row `r` gets
/// strength `r + 1`, so the top row is the weakest. A block is powered when
/// its linear index + 1 was drawn as a powerup slot.
pub fn generate_level<R: Rng + ?Sized>(
    spec: &LevelSpec,
    window_width: u32,
    window_height: u32,
    rng: &mut R,
) -> Result<Vec<Block>> {
    spec.validate(window_width)?;

    let slots = pick_powerup_slots(rng, spec.powerups, spec.blocks);
    let columns = spec.columns();
    let width = block_width(window_width, columns);
    let half_w = window_width as f32 / 2.0;
    let half_h = window_height as f32 / 2.0;

    let mut blocks = Vec::with_capacity(spec.blocks);
    for row in 0..spec.rows {
        let y = half_h
            - (GRID_TOP_MARGIN + (row as f32 + 0.5) * BLOCK_HEIGHT + row as f32 * BLOCK_SPACING);
        for col in 0..columns {
            let x = -half_w + (col as f32 + 1.0) * BLOCK_SPACING + (col as f32 + 0.5) * width;
            let index = row * columns + col;
            let powered = slots.contains(&(index + 1));
            blocks.push(Block::new(
                Vec2::new(x, y),
                width,
                BLOCK_HEIGHT,
                row as u32 + 1,
                powered,
            ));
        }
    }

    log::info!(
        "Generated {} blocks in {} rows, powerup slots {:?}",
        blocks.len(),
        spec.rows,
        slots
    );

    Ok(blocks)
}
