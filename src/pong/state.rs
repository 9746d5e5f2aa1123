//! Game state and entity types

use glam::Vec2;

use crate::config::PongConfig;
use crate::consts::TICK_RATE;

/// Which player / half of the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A player paddle. Bounds are enforced by the input handling in `tick`,
/// not by the entity itself.
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// The ball. Recreated (not reset in place) after each point.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Fresh ball at the arena center, travelling horizontally toward `toward`.
    pub fn serve(center: Vec2, radius: f32, speed: f32, toward: Side) -> Self {
        let x_vel = match toward {
            Side::Left => -speed,
            Side::Right => speed,
        };
        Self {
            pos: center,
            vel: Vec2::new(x_vel, 0.0),
            radius,
        }
    }
}

/// Score counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Normal play
    Rally,
    /// Win banner held on screen; play is frozen until the timer runs out
    Banner { winner: Side, ticks_left: u32 },
}

/// Complete Pong state, advanced by [`tick`](crate::pong::tick).
#[derive(Debug, Clone)]
pub struct PongState {
    /// Arena dimensions (the real drawable size, not necessarily the
    /// configured window size)
    pub arena: Vec2,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    pub phase: MatchPhase,
    /// Set when a right-side win resolves; the frontend quits on it
    pub exit_requested: bool,
}

impl PongState {
    pub fn new(cfg: &PongConfig, arena: Vec2) -> Self {
        let paddle_size = Vec2::new(cfg.paddle_width, cfg.paddle_height);
        let paddle_y = arena.y / 2.0 - cfg.paddle_height / 2.0;

        Self {
            arena,
            left: Paddle::new(Vec2::new(cfg.wall_margin, paddle_y), paddle_size),
            right: Paddle::new(
                Vec2::new(arena.x - cfg.wall_margin - cfg.paddle_width, paddle_y),
                paddle_size,
            ),
            ball: Ball::serve(arena / 2.0, cfg.ball_radius, cfg.max_ball_speed, Side::Right),
            scores: Scores::default(),
            phase: MatchPhase::Rally,
            exit_requested: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.arena / 2.0
    }
}

/// Banner duration in ticks for a given config
pub fn banner_ticks(cfg: &PongConfig) -> u32 {
    (cfg.banner_secs * TICK_RATE as f32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let cfg = PongConfig::default();
        let state = PongState::new(&cfg, Vec2::new(1600.0, 900.0));

        assert_eq!(state.left.pos.x, 10.0);
        assert_eq!(state.right.pos.x, 1600.0 - 10.0 - 40.0);
        // Paddles vertically centered
        assert_eq!(state.left.center_y(), 450.0);
        // Ball serves rightward from the center
        assert_eq!(state.ball.pos, Vec2::new(800.0, 450.0));
        assert_eq!(state.ball.vel, Vec2::new(cfg.max_ball_speed, 0.0));
        assert_eq!(state.scores, Scores::default());
        assert_eq!(state.phase, MatchPhase::Rally);
    }

    #[test]
    fn test_serve_direction() {
        let center = Vec2::new(800.0, 450.0);
        let ball = Ball::serve(center, 15.0, 8.0, Side::Left);
        assert_eq!(ball.vel, Vec2::new(-8.0, 0.0));
        let ball = Ball::serve(center, 15.0, 8.0, Side::Right);
        assert_eq!(ball.vel, Vec2::new(8.0, 0.0));
    }
}
