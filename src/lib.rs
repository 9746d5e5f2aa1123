//! Rebound - two small 2D demos
//!
//! Core modules:
//! - `pong`: Pure fixed-timestep Pong simulation (no windowing deps)
//! - `sandbox`: rapier2d world wrapper and projectile launcher
//! - `config`: Explicit configuration structs for both demos
//!
//! The binaries (`pong`, `sandbox`) wrap these in ggez event loops.

pub mod config;
pub mod pong;
pub mod sandbox;

pub use config::{PongConfig, SandboxConfig, WindowConfig};

/// Shared loop constants
pub mod consts {
    /// Logical tick rate for both demos (Hz)
    pub const TICK_RATE: u32 = 120;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
}
