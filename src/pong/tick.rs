//! Fixed timestep match tick

use super::collision::{resolve_paddle_hit, resolve_wall_bounce};
use super::state::{banner_ticks, Ball, MatchPhase, PongState, Side};
use crate::config::PongConfig;

/// Key state sampled once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Advance the match by one tick: paddles, ball, collisions, scoring, win
/// handling. Velocities are in pixels per tick, so no dt parameter.
pub fn tick(state: &mut PongState, input: &TickInput, cfg: &PongConfig) {
    if let MatchPhase::Banner { winner, ticks_left } = state.phase {
        if ticks_left > 1 {
            state.phase = MatchPhase::Banner {
                winner,
                ticks_left: ticks_left - 1,
            };
        } else {
            resolve_banner(state, winner, cfg);
        }
        return;
    }

    move_paddles(state, input, cfg);

    state.ball.pos += state.ball.vel;
    resolve_wall_bounce(&mut state.ball, state.arena.y);
    resolve_paddle_hit(&mut state.ball, &state.left, &state.right, cfg.max_ball_speed);

    // Scoring: the respawned ball heads toward the scorer's side of the net
    if state.ball.pos.x < 0.0 {
        state.scores.right += 1;
        log::info!("point right ({} - {})", state.scores.left, state.scores.right);
        state.ball = Ball::serve(state.center(), cfg.ball_radius, cfg.max_ball_speed, Side::Right);
    } else if state.ball.pos.x > state.arena.x {
        state.scores.left += 1;
        log::info!("point left ({} - {})", state.scores.left, state.scores.right);
        state.ball = Ball::serve(state.center(), cfg.ball_radius, cfg.max_ball_speed, Side::Left);
    }

    if state.scores.left >= cfg.winning_score {
        log::info!("left player wins");
        state.phase = MatchPhase::Banner {
            winner: Side::Left,
            ticks_left: banner_ticks(cfg),
        };
    } else if state.scores.right >= cfg.winning_score {
        log::info!("right player wins");
        state.phase = MatchPhase::Banner {
            winner: Side::Right,
            ticks_left: banner_ticks(cfg),
        };
    }
}

/// Each direction moves only if the post-move position stays in bounds
/// (pre-check, not clamp-after).
fn move_paddles(state: &mut PongState, input: &TickInput, cfg: &PongConfig) {
    let speed = cfg.paddle_speed;
    let arena_h = state.arena.y;

    if input.left_up && state.left.pos.y - speed >= 0.0 {
        state.left.pos.y -= speed;
    }
    if input.left_down && state.left.pos.y + speed + state.left.size.y <= arena_h {
        state.left.pos.y += speed;
    }
    if input.right_up && state.right.pos.y - speed >= 0.0 {
        state.right.pos.y -= speed;
    }
    if input.right_down && state.right.pos.y + speed + state.right.size.y <= arena_h {
        state.right.pos.y += speed;
    }
}

/// A left win resets the match; a right win ends the session. Asymmetric,
/// but that is the behavior these demos always had.
fn resolve_banner(state: &mut PongState, winner: Side, cfg: &PongConfig) {
    match winner {
        Side::Left => {
            state.scores = Default::default();
            state.ball = Ball::serve(state.center(), cfg.ball_radius, cfg.max_ball_speed, Side::Right);
            state.phase = MatchPhase::Rally;
            log::info!("match reset");
        }
        Side::Right => {
            state.exit_requested = true;
            log::info!("session over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pong::state::Scores;
    use glam::Vec2;

    const ARENA: Vec2 = Vec2::new(1600.0, 900.0);

    fn setup() -> (PongState, PongConfig) {
        let cfg = PongConfig::default();
        let state = PongState::new(&cfg, ARENA);
        (state, cfg)
    }

    #[test]
    fn test_paddle_moves_with_input() {
        let (mut state, cfg) = setup();
        let y0 = state.left.pos.y;

        let input = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        tick(&mut state, &input, &cfg);

        assert_eq!(state.left.pos.y, y0 - cfg.paddle_speed);
        assert_eq!(state.right.pos.y, y0 + cfg.paddle_speed);
    }

    #[test]
    fn test_paddle_pre_check_blocks_move_at_edge() {
        let (mut state, cfg) = setup();
        state.left.pos.y = cfg.paddle_speed - 1.0; // one step would overshoot

        let input = TickInput {
            left_up: true,
            ..Default::default()
        };
        tick(&mut state, &input, &cfg);

        // Move rejected outright, not clamped
        assert_eq!(state.left.pos.y, cfg.paddle_speed - 1.0);
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let (mut state, cfg) = setup();
        let p0 = state.ball.pos;
        tick(&mut state, &TickInput::default(), &cfg);
        assert_eq!(state.ball.pos, p0 + Vec2::new(cfg.max_ball_speed, 0.0));
    }

    #[test]
    fn test_exit_left_scores_right_and_respawns() {
        let (mut state, cfg) = setup();
        state.ball.pos = Vec2::new(2.0, 450.0);
        state.ball.vel = Vec2::new(-8.0, 0.0);

        tick(&mut state, &TickInput::default(), &cfg);

        assert_eq!(state.scores, Scores { left: 0, right: 1 });
        assert_eq!(state.ball.pos, state.center());
        assert_eq!(state.ball.radius, cfg.ball_radius);
        // Respawn heads back toward the scorer
        assert_eq!(state.ball.vel, Vec2::new(cfg.max_ball_speed, 0.0));
    }

    #[test]
    fn test_exit_right_scores_left_and_alternates_direction() {
        let (mut state, cfg) = setup();
        state.ball.pos = Vec2::new(ARENA.x - 2.0, 450.0);
        state.ball.vel = Vec2::new(8.0, 0.0);

        tick(&mut state, &TickInput::default(), &cfg);

        assert_eq!(state.scores, Scores { left: 1, right: 0 });
        assert_eq!(state.ball.vel, Vec2::new(-cfg.max_ball_speed, 0.0));
    }

    #[test]
    fn test_exactly_one_increment_per_exit() {
        let (mut state, cfg) = setup();
        state.ball.pos = Vec2::new(2.0, 450.0);
        state.ball.vel = Vec2::new(-8.0, 0.0);
        tick(&mut state, &TickInput::default(), &cfg);
        // Following tick: fresh centered ball, no further scoring
        tick(&mut state, &TickInput::default(), &cfg);
        assert_eq!(state.scores, Scores { left: 0, right: 1 });
    }

    #[test]
    fn test_winning_score_raises_banner() {
        let (mut state, cfg) = setup();
        state.scores.left = cfg.winning_score - 1;
        state.ball.pos = Vec2::new(ARENA.x - 2.0, 450.0);
        state.ball.vel = Vec2::new(8.0, 0.0);

        tick(&mut state, &TickInput::default(), &cfg);

        assert!(matches!(
            state.phase,
            MatchPhase::Banner {
                winner: Side::Left,
                ..
            }
        ));
        // Scores stay visible while the banner is up
        assert_eq!(state.scores.left, cfg.winning_score);
    }

    #[test]
    fn test_banner_freezes_play() {
        let (mut state, cfg) = setup();
        state.phase = MatchPhase::Banner {
            winner: Side::Left,
            ticks_left: 100,
        };
        let ball_pos = state.ball.pos;
        let paddle_y = state.left.pos.y;

        let input = TickInput {
            left_up: true,
            ..Default::default()
        };
        tick(&mut state, &input, &cfg);

        assert_eq!(state.ball.pos, ball_pos);
        assert_eq!(state.left.pos.y, paddle_y);
    }

    #[test]
    fn test_left_win_resets_match() {
        let (mut state, cfg) = setup();
        state.scores = Scores { left: 10, right: 4 };
        state.phase = MatchPhase::Banner {
            winner: Side::Left,
            ticks_left: 1,
        };

        tick(&mut state, &TickInput::default(), &cfg);

        assert_eq!(state.scores, Scores::default());
        assert_eq!(state.phase, MatchPhase::Rally);
        assert_eq!(state.ball.pos, state.center());
        assert!(!state.exit_requested);
    }

    #[test]
    fn test_right_win_requests_exit() {
        let (mut state, cfg) = setup();
        state.scores = Scores { left: 4, right: 10 };
        state.phase = MatchPhase::Banner {
            winner: Side::Right,
            ticks_left: 1,
        };

        tick(&mut state, &TickInput::default(), &cfg);

        assert!(state.exit_requested);
    }

    #[test]
    fn test_banner_counts_down() {
        let (mut state, cfg) = setup();
        state.phase = MatchPhase::Banner {
            winner: Side::Left,
            ticks_left: 3,
        };
        tick(&mut state, &TickInput::default(), &cfg);
        assert_eq!(
            state.phase,
            MatchPhase::Banner {
                winner: Side::Left,
                ticks_left: 2
            }
        );
    }
}
