//! Collision detection and bounce response
//!
//! Everything here is axis-aligned. The paddle test treats the ball as a
//! point at its center; the block test uses the ball's bounding box.

use super::state::{Ball, Block, Paddle, Powerup};

/// Ball center inside the paddle rectangle (radius ignored)
#[inline]
pub fn ball_x_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    paddle.contains_point(ball.pos)
}

/// Ball bounding box overlaps a standing block
pub fn ball_x_block(ball: &Ball, block: &Block) -> bool {
    if block.destroyed {
        return false;
    }
    let half = block.half_size();
    ball.pos.y - ball.radius <= block.pos.y + half.y
        && ball.pos.y + ball.radius >= block.pos.y - half.y
        && ball.pos.x + ball.radius >= block.pos.x - half.x
        && ball.pos.x - ball.radius <= block.pos.x + half.x
}

/// Powerup center inside the paddle rectangle
#[inline]
pub fn powerup_x_paddle(powerup: &Powerup, paddle: &Paddle) -> bool {
    paddle.contains_point(powerup.pos)
}

/// Index of the first standing block the ball overlaps, in grid order
pub fn first_block_hit(ball: &Ball, blocks: &[Block]) -> Option<usize> {
    blocks.iter().position(|block| ball_x_block(ball, block))
}

/// Deflect the ball off the paddle.
///
/// Coming in from the left onto the left half (or from the right onto the
/// right half) sends the ball back the way it came; otherwise it keeps its
/// horizontal direction. Vertical velocity always flips.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle) {
    let half_width = paddle.width / 2.0;
    let x = ball.pos.x;
    let center = paddle.pos.x;

    let reverse_x = if ball.vel.x > 0.0 {
        x >= center - half_width && x < center
    } else {
        x <= center + half_width && x > center
    };

    if reverse_x {
        ball.vel.x = -ball.vel.x;
    }
    ball.vel.y = -ball.vel.y;
}

/// Deflect the ball off a block.
///
/// A ball whose center is left or right of the block took a side hit and
/// flips horizontally; it also flips vertically unless its whole vertical
/// extent sits strictly inside the block's (a corner hit flips both). A
/// center within the block's horizontal extent is a top/bottom hit.
pub fn block_bounce(ball: &mut Ball, block: &Block) {
    let half = block.half_size();
    let left = block.pos.x - half.x;
    let right = block.pos.x + half.x;

    if ball.pos.x < left || ball.pos.x > right {
        ball.vel.x = -ball.vel.x;

        let within_vertically = ball.pos.y - ball.radius > block.pos.y - half.y
            && ball.pos.y + ball.radius < block.pos.y + half.y;
        if !within_vertically {
            ball.vel.y = -ball.vel.y;
        }
    } else {
        ball.vel.y = -ball.vel.y;
    }
}
