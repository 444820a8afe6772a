//! Per-frame simulation step
//!
//! Advances paddle, ball and falling powerups by one frame of `dt` seconds.
//! `dt` is wall-clock time since the previous frame, so results depend on
//! frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    ball_x_paddle, block_bounce, first_block_hit, paddle_bounce, powerup_x_paddle,
};
use super::state::{Ball, Block, BlockHit, Contact, GameState, Paddle};

/// Horizontal movement intent for the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Still,
    Right,
}

impl Direction {
    /// -1, 0 or +1
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Still => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub direction: Direction,
}

/// What happened to the ball this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// Moved freely (possibly off a wall, or still inside an old contact)
    Moved,
    /// Fell past the bottom edge: ball and paddle reset, one life gone
    Missed,
    /// New contact with the paddle
    PaddleHit,
    /// New contact with a block
    BlockHit { index: usize, destroyed: bool },
}

/// How a level ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Move the paddle and keep both of its edges inside the window
pub fn update_paddle(paddle: &mut Paddle, dt: f32, direction: Direction, window_width: u32) {
    paddle.pos.x += paddle.speed * dt * direction.sign();

    let half_window = window_width as f32 / 2.0;
    let half_paddle = paddle.width / 2.0;
    if paddle.pos.x + half_paddle >= half_window {
        paddle.pos.x = half_window - half_paddle;
    }
    if paddle.pos.x - half_paddle <= -half_window {
        paddle.pos.x = -half_window + half_paddle;
    }
}

/// Resolve walls, then the paddle/block contact, then move the ball.
///
/// Walls are checked in a fixed order and at most one applies: bottom (miss),
/// left, right, top. A miss respawns the ball, recenters the paddle and costs
/// a life; the ball does not move further that frame.
///
/// Contacts only bounce the ball on the frame they begin. While the ball is
/// still overlapping the paddle, or any standing block, `contact` stays
/// engaged and nothing is resolved; the first frame with no overlap frees it.
pub fn update_ball(
    ball: &mut Ball,
    dt: f32,
    paddle: &mut Paddle,
    blocks: &mut [Block],
    half_extents: Vec2,
    contact: &mut Contact,
) -> BallEvent {
    let half = half_extents;

    if ball.pos.y - ball.radius <= -half.y {
        ball.respawn();
        paddle.pos.x = 0.0;
        paddle.lives = paddle.lives.saturating_sub(1);
        *contact = Contact::Free;
        return BallEvent::Missed;
    } else if ball.pos.x - ball.radius <= -half.x {
        ball.pos.x = -half.x + ball.radius;
        ball.vel.x = -ball.vel.x;
    } else if ball.pos.x + ball.radius >= half.x {
        ball.pos.x = half.x - ball.radius;
        ball.vel.x = -ball.vel.x;
    } else if ball.pos.y + ball.radius >= half.y {
        ball.pos.y = half.y - ball.radius;
        ball.vel.y = -ball.vel.y;
    }

    let event = if !contact.is_engaged() {
        if ball_x_paddle(ball, paddle) {
            *contact = Contact::Paddle;
            paddle_bounce(ball, paddle);
            BallEvent::PaddleHit
        } else if let Some(index) = first_block_hit(ball, blocks) {
            *contact = Contact::Block(index);
            let block = &mut blocks[index];
            let destroyed = block.hit() == BlockHit::Destroyed;
            block_bounce(ball, block);
            if destroyed {
                log::debug!("Block {} destroyed", index);
            }
            BallEvent::BlockHit { index, destroyed }
        } else {
            BallEvent::Moved
        }
    } else {
        if !ball_x_paddle(ball, paddle) {
            *contact = match first_block_hit(ball, blocks) {
                Some(index) => Contact::Block(index),
                None => Contact::Free,
            };
        }
        BallEvent::Moved
    };

    ball.advance(dt);
    event
}

/// Catch or drop every released powerup. Returns how many were caught.
///
/// The catch test runs before the fall, and a powerup keeps falling past the
/// bottom edge with no further effect.
pub fn update_powerups(blocks: &mut [Block], paddle: &mut Paddle, dt: f32) -> u32 {
    let mut caught = 0;
    for block in blocks.iter_mut().filter(|b| b.destroyed) {
        let Some(powerup) = block.powerup.as_mut() else {
            continue;
        };
        if powerup.destroyed {
            continue;
        }
        if powerup_x_paddle(powerup, paddle) {
            powerup.destroyed = true;
            paddle.lives += 1;
            caught += 1;
            log::debug!("Powerup caught, lives now {}", paddle.lives);
        }
        powerup.pos.y += powerup.speed * dt;
    }
    caught
}

/// Advance a level by one frame. Returns the outcome once the level is over;
/// running out of lives wins over clearing the last block in the same frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<Outcome> {
    state.frames += 1;

    update_powerups(&mut state.blocks, &mut state.paddle, dt);
    update_paddle(&mut state.paddle, dt, input.direction, state.window_width);

    let half = state.half_extents();
    let event = update_ball(
        &mut state.ball,
        dt,
        &mut state.paddle,
        &mut state.blocks,
        half,
        &mut state.contact,
    );
    if event == BallEvent::Missed {
        log::info!("Ball lost, {} lives left", state.paddle.lives);
    }

    if state.out_of_lives() {
        Some(Outcome::Lost)
    } else if state.all_blocks_destroyed() {
        Some(Outcome::Won)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Level;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const HALF: Vec2 = Vec2::new(320.0, 240.0);

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 5.0,
        }
    }

    fn block_at(x: f32, y: f32, strength: u32) -> Block {
        Block::new(Vec2::new(x, y), 71.0, 30.0, strength, false)
    }

    #[test]
    fn test_paddle_moves_with_direction() {
        let mut paddle = Paddle::default();
        update_paddle(&mut paddle, 0.1, Direction::Right, 640);
        assert!((paddle.pos.x - 15.0).abs() < 1e-4);
        update_paddle(&mut paddle, 0.2, Direction::Left, 640);
        assert!((paddle.pos.x + 15.0).abs() < 1e-4);
        update_paddle(&mut paddle, 0.2, Direction::Still, 640);
        assert!((paddle.pos.x + 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_clamped_to_window() {
        let mut paddle = Paddle::default();
        update_paddle(&mut paddle, 10.0, Direction::Right, 640);
        assert_eq!(paddle.pos.x, 300.0);
        update_paddle(&mut paddle, 10.0, Direction::Left, 640);
        assert_eq!(paddle.pos.x, -300.0);
    }

    #[test]
    fn test_miss_resets_ball_and_costs_life() {
        let mut ball = ball_at(50.0, -236.0, -60.0, -200.0);
        let mut paddle = Paddle {
            pos: Vec2::new(120.0, -200.0),
            ..Default::default()
        };
        let mut contact = Contact::Free;

        let event = update_ball(&mut ball, 0.016, &mut paddle, &mut [], HALF, &mut contact);

        assert_eq!(event, BallEvent::Missed);
        assert_eq!(ball.pos, Vec2::new(0.0, -30.0));
        assert_eq!(ball.vel, Vec2::new(60.0, 200.0));
        assert_eq!(paddle.pos.x, 0.0);
        assert_eq!(paddle.lives, 2);
    }

    #[test]
    fn test_no_miss_above_bottom_edge() {
        let mut ball = ball_at(0.0, -196.0, 0.0, -200.0);
        let mut paddle = Paddle {
            pos: Vec2::new(100.0, -200.0),
            ..Default::default()
        };
        let mut contact = Contact::Free;

        let event = update_ball(&mut ball, 0.01, &mut paddle, &mut [], HALF, &mut contact);

        assert_eq!(event, BallEvent::Moved);
        assert_eq!(paddle.lives, 3);
        assert!((ball.pos.y + 198.0).abs() < 1e-4);
    }

    #[test]
    fn test_side_walls_clamp_and_reflect() {
        let mut paddle = Paddle::default();
        let mut contact = Contact::Free;

        let mut ball = ball_at(-317.0, 0.0, -60.0, 200.0);
        update_ball(&mut ball, 0.0, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(ball.pos.x, -315.0);
        assert_eq!(ball.vel.x, 60.0);

        let mut ball = ball_at(318.0, 0.0, 60.0, 200.0);
        update_ball(&mut ball, 0.0, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(ball.pos.x, 315.0);
        assert_eq!(ball.vel.x, -60.0);
    }

    #[test]
    fn test_top_wall_clamps_and_reflects() {
        let mut paddle = Paddle::default();
        let mut contact = Contact::Free;
        let mut ball = ball_at(0.0, 238.0, 60.0, 200.0);
        update_ball(&mut ball, 0.0, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(ball.pos.y, 235.0);
        assert_eq!(ball.vel.y, -200.0);
    }

    #[test]
    fn test_only_first_wall_applies() {
        // Touching left and top at once: only left resolves this frame
        let mut paddle = Paddle::default();
        let mut contact = Contact::Free;
        let mut ball = ball_at(-318.0, 238.0, -60.0, 200.0);
        update_ball(&mut ball, 0.0, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(ball.vel, Vec2::new(60.0, 200.0));
        assert_eq!(ball.pos, Vec2::new(-315.0, 238.0));
    }

    #[test]
    fn test_paddle_contact_resolves_once() {
        let mut paddle = Paddle::default();
        let mut contact = Contact::Free;
        let mut ball = ball_at(-15.0, -199.0, 60.0, -200.0);

        let event = update_ball(&mut ball, 0.0, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(event, BallEvent::PaddleHit);
        assert_eq!(contact, Contact::Paddle);
        assert_eq!(ball.vel, Vec2::new(-60.0, 200.0));

        // Still overlapping: no second bounce
        let event = update_ball(&mut ball, 0.0, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(event, BallEvent::Moved);
        assert_eq!(contact, Contact::Paddle);
        assert_eq!(ball.vel, Vec2::new(-60.0, 200.0));

        // Clear of the paddle: contact released
        ball.pos.y = -150.0;
        update_ball(&mut ball, 0.0, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(contact, Contact::Free);
    }

    #[test]
    fn test_block_takes_one_hit_per_overlap() {
        let mut paddle = Paddle::default();
        let mut contact = Contact::Free;
        let mut blocks = vec![block_at(0.0, 100.0, 3)];
        let mut ball = ball_at(0.0, 82.0, 0.0, 200.0);

        let event = update_ball(&mut ball, 0.0, &mut paddle, &mut blocks, HALF, &mut contact);
        assert_eq!(
            event,
            BallEvent::BlockHit {
                index: 0,
                destroyed: false
            }
        );
        assert_eq!(blocks[0].strength, 2);
        assert_eq!(contact, Contact::Block(0));

        for _ in 0..5 {
            update_ball(&mut ball, 0.0, &mut paddle, &mut blocks, HALF, &mut contact);
        }
        assert_eq!(blocks[0].strength, 2);

        ball.pos.y = 0.0;
        update_ball(&mut ball, 0.0, &mut paddle, &mut blocks, HALF, &mut contact);
        assert_eq!(contact, Contact::Free);
    }

    #[test]
    fn test_only_first_overlapping_block_resolves() {
        let mut paddle = Paddle::default();
        let mut contact = Contact::Free;
        let mut blocks = vec![block_at(0.0, 100.0, 1), block_at(60.0, 100.0, 1)];
        let mut ball = ball_at(30.0, 82.0, 0.0, 200.0);

        update_ball(&mut ball, 0.0, &mut paddle, &mut blocks, HALF, &mut contact);
        assert!(blocks[0].destroyed);
        assert!(!blocks[1].destroyed);

        // The broken block no longer counts, but the neighbour keeps the
        // contact engaged without resolving it
        update_ball(&mut ball, 0.0, &mut paddle, &mut blocks, HALF, &mut contact);
        assert_eq!(contact, Contact::Block(1));
        assert!(!blocks[1].destroyed);
    }

    #[test]
    fn test_ball_advances_after_resolution() {
        let mut paddle = Paddle::default();
        let mut contact = Contact::Free;
        let mut ball = ball_at(0.0, 0.0, 60.0, 200.0);
        update_ball(&mut ball, 0.5, &mut paddle, &mut [], HALF, &mut contact);
        assert_eq!(ball.pos, Vec2::new(30.0, 100.0));
    }

    #[test]
    fn test_powerup_falls_and_is_caught() {
        let mut paddle = Paddle::default();
        let mut block = Block::new(Vec2::new(0.0, -150.0), 71.0, 30.0, 1, true);
        block.hit();
        let mut blocks = vec![block];

        // Falls 60 px/s
        assert_eq!(update_powerups(&mut blocks, &mut paddle, 0.5), 0);
        assert_eq!(blocks[0].powerup.as_ref().unwrap().pos.y, -180.0);

        blocks[0].powerup.as_mut().unwrap().pos.y = -199.0;
        assert_eq!(update_powerups(&mut blocks, &mut paddle, 0.1), 1);
        assert_eq!(paddle.lives, 4);
        let powerup = blocks[0].powerup.as_ref().unwrap();
        assert!(powerup.destroyed);
        // Catch check happens before the fall
        assert!((powerup.pos.y + 205.0).abs() < 1e-4);

        // Never caught twice
        blocks[0].powerup.as_mut().unwrap().pos.y = -199.0;
        assert_eq!(update_powerups(&mut blocks, &mut paddle, 0.1), 0);
        assert_eq!(paddle.lives, 4);
    }

    #[test]
    fn test_powerup_stays_in_standing_block() {
        let mut paddle = Paddle::default();
        let mut blocks = vec![Block::new(Vec2::new(0.0, 100.0), 71.0, 30.0, 2, true)];
        update_powerups(&mut blocks, &mut paddle, 1.0);
        assert_eq!(blocks[0].powerup.as_ref().unwrap().pos.y, 100.0);
    }

    #[test]
    fn test_tick_reports_loss() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState::new(Level::One, 640, 480, &mut rng).unwrap();
        state.paddle.lives = 1;
        state.ball.pos = Vec2::new(100.0, -238.0);
        state.ball.vel = Vec2::new(0.0, -200.0);

        let outcome = tick(&mut state, &TickInput::default(), 0.016);
        assert_eq!(outcome, Some(Outcome::Lost));
        assert_eq!(state.paddle.lives, 0);
    }

    #[test]
    fn test_tick_reports_win() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState::new(Level::One, 640, 480, &mut rng).unwrap();
        for block in state.blocks.iter_mut().skip(1) {
            block.strength = 0;
            block.destroyed = true;
        }
        assert_eq!(tick(&mut state, &TickInput::default(), 0.016), None);

        state.blocks[0].strength = 0;
        state.blocks[0].destroyed = true;
        assert_eq!(tick(&mut state, &TickInput::default(), 0.016), Some(Outcome::Won));
    }

    #[test]
    fn test_tick_moves_paddle_and_ball() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState::new(Level::Two, 640, 480, &mut rng).unwrap();
        let input = TickInput {
            direction: Direction::Left,
        };
        assert_eq!(tick(&mut state, &input, 0.1), None);
        assert!((state.paddle.pos.x + 15.0).abs() < 1e-4);
        assert!((state.ball.pos.x - 6.0).abs() < 1e-4);
        assert!((state.ball.pos.y - 20.0).abs() < 1e-4);
        assert_eq!(state.frames, 1);
    }
}
