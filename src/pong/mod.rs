//! Pong simulation
//!
//! All gameplay logic lives here and stays free of windowing dependencies:
//! fixed timestep only, velocities in pixels per tick, no rendering state.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{resolve_paddle_hit, resolve_wall_bounce};
pub use state::{Ball, MatchPhase, Paddle, PongState, Scores, Side};
pub use tick::{tick, TickInput};
