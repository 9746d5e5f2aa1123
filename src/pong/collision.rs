//! Ball collision resolution
//!
//! Wall bounces flip the vertical velocity; paddle hits flip the horizontal
//! velocity and re-aim the vertical component by how far from the paddle
//! center the ball struck. Only the paddle in the ball's direction of travel
//! is ever tested, which rules out double reflections in a single tick.
//! There is no positional correction after a hit, so a fast enough ball can
//! tunnel - accepted for a demo of this size.

use super::state::{Ball, Paddle};

/// Reflect the ball off the top/bottom arena bounds. At most one flip per
/// call (the two bounds are mutually exclusive for any sane arena height).
pub fn resolve_wall_bounce(ball: &mut Ball, arena_height: f32) {
    if ball.pos.y + ball.radius >= arena_height {
        ball.vel.y = -ball.vel.y;
    } else if ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
    }
}

/// Reflect the ball off whichever paddle it is travelling toward, if the
/// ball's center is within the paddle's vertical span and its leading edge
/// has reached the paddle's near face.
///
/// On a hit the vertical velocity becomes
/// `(ball.y - paddle.center_y) / (paddle.height / 2) * max_speed`,
/// so edge hits leave at the steepest angle and center hits leave flat.
pub fn resolve_paddle_hit(ball: &mut Ball, left: &Paddle, right: &Paddle, max_speed: f32) {
    if ball.vel.x < 0.0 {
        let in_span = ball.pos.y >= left.pos.y && ball.pos.y <= left.pos.y + left.size.y;
        if in_span && ball.pos.x - ball.radius <= left.pos.x + left.size.x {
            ball.vel.x = -ball.vel.x;
            ball.vel.y = (ball.pos.y - left.center_y()) / (left.size.y / 2.0) * max_speed;
        }
    } else {
        let in_span = ball.pos.y >= right.pos.y && ball.pos.y <= right.pos.y + right.size.y;
        if in_span && ball.pos.x + ball.radius >= right.pos.x {
            ball.vel.x = -ball.vel.x;
            ball.vel.y = (ball.pos.y - right.center_y()) / (right.size.y / 2.0) * max_speed;
        }
    }
}
