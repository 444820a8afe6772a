//! Render view
//!
//! Turns the current screen into data a graphics backend can draw: a
//! backdrop image for the menu and end screens, and a triangle list for the
//! playfield. Nothing here issues draw calls.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, as_bytes, colors};

use glam::Vec2;

use crate::screen::Screen;
use crate::sim::GameState;

/// Full-window images shown outside of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    LevelSelect,
    Lost,
    Won,
}

impl Backdrop {
    /// Bitmap the host loads for this backdrop
    pub fn asset_path(&self) -> &'static str {
        match self {
            Backdrop::LevelSelect => "breakout_menu/levels.bmp",
            Backdrop::Lost => "breakout_menu/lost2.bmp",
            Backdrop::Won => "breakout_menu/won.bmp",
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub backdrop: Option<Backdrop>,
    /// Triangle list in playfield coordinates (origin at window center)
    pub vertices: Vec<Vertex>,
}

/// Describe one frame for the given screen
pub fn frame(screen: &Screen) -> Frame {
    match screen {
        Screen::LevelSelect => Frame {
            backdrop: Some(Backdrop::LevelSelect),
            vertices: Vec::new(),
        },
        Screen::Lost { .. } => Frame {
            backdrop: Some(Backdrop::Lost),
            vertices: Vec::new(),
        },
        Screen::Won { .. } => Frame {
            backdrop: Some(Backdrop::Won),
            vertices: Vec::new(),
        },
        Screen::Playing(state) => Frame {
            backdrop: None,
            vertices: scene_vertices(state),
        },
    }
}

/// Triangle list for the playfield: ball, paddle, standing blocks colored by
/// strength, falling powerups and the lives indicator
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    vertices.extend(shapes::circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        shapes::CIRCLE_SEGMENTS,
    ));

    let paddle = &state.paddle;
    vertices.extend(shapes::quad(
        paddle.pos,
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    ));

    for block in &state.blocks {
        if !block.destroyed {
            vertices.extend(shapes::quad(
                block.pos,
                Vec2::new(block.width, block.height),
                colors::BLOCK_TIERS[block.color_tier()],
            ));
        } else if let Some(powerup) = block.active_powerup() {
            vertices.extend(shapes::circle(
                powerup.pos,
                powerup.radius,
                colors::POWERUP,
                shapes::CIRCLE_SEGMENTS,
            ));
        }
    }

    vertices.extend(shapes::lives_indicator(paddle.lives, state.half_extents()));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Level;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const CIRCLE: usize = 3 * shapes::CIRCLE_SEGMENTS as usize;
    const QUAD: usize = 6;

    fn level_one() -> GameState {
        GameState::new(Level::One, 640, 480, &mut Pcg32::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn test_backdrops() {
        assert_eq!(frame(&Screen::LevelSelect).backdrop, Some(Backdrop::LevelSelect));
        assert_eq!(frame(&Screen::Lost { remaining: 1.0 }).backdrop, Some(Backdrop::Lost));
        assert_eq!(frame(&Screen::Won { remaining: 1.0 }).backdrop, Some(Backdrop::Won));
        assert!(frame(&Screen::Won { remaining: 1.0 }).vertices.is_empty());
    }

    #[test]
    fn test_fresh_level_scene() {
        let state = level_one();
        let frame = frame(&Screen::Playing(Box::new(state.clone())));
        assert_eq!(frame.backdrop, None);
        // ball + paddle + 24 blocks + 3 lives
        assert_eq!(frame.vertices.len(), CIRCLE + QUAD + 24 * QUAD + 3 * CIRCLE);
    }

    #[test]
    fn test_broken_blocks_show_powerups_only() {
        let mut state = level_one();
        let powered = state.blocks.iter().position(|b| b.is_powered()).unwrap();
        let plain = state.blocks.iter().position(|b| !b.is_powered()).unwrap();
        state.blocks[powered].strength = 0;
        state.blocks[powered].destroyed = true;
        state.blocks[plain].strength = 0;
        state.blocks[plain].destroyed = true;

        let vertices = scene_vertices(&state);
        // Two blocks gone, one powerup falling
        assert_eq!(vertices.len(), CIRCLE + QUAD + 22 * QUAD + CIRCLE + 3 * CIRCLE);
        assert!(vertices.iter().any(|v| v.color == colors::POWERUP
            && v.position[1] == state.blocks[powered].pos.y));
    }

    #[test]
    fn test_block_color_follows_strength() {
        let state = level_one();
        let vertices = scene_vertices(&state);
        // Top row is strength 1
        let top_row_y = state.blocks[0].pos.y + state.blocks[0].height / 2.0;
        let top = vertices
            .iter()
            .find(|v| v.position[1] == top_row_y)
            .unwrap();
        assert_eq!(top.color, colors::BLOCK_TIERS[0]);
    }
}
