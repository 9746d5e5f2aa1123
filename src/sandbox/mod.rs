//! Physics sandbox
//!
//! A rapier2d world with static boundaries, a dynamic post-and-lintel
//! structure, and a swinging pendulum. The mouse arms and launches a
//! projectile through an explicit three-state machine.

pub mod debug_draw;
pub mod launcher;
pub mod world;

pub use debug_draw::LineCollector;
pub use launcher::{launch_impulse, Launcher};
pub use world::PhysicsWorld;
