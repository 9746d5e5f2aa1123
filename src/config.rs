//! Demo configuration
//!
//! The original demos kept colors, dimensions, and tuning values in global
//! module-level variables. Here they are explicit structs handed to the
//! event loops at start-up. Each binary accepts an optional JSON config path
//! as its first argument; anything missing or malformed falls back to the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

/// RGB triple, convertible at the draw boundary
pub type Rgb = [u8; 3];

/// Window placement shared by both demos
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Borderless desktop fullscreen; the configured dimensions are ignored
    /// and the real drawable size is queried after window creation.
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 900.0,
            fullscreen: false,
        }
    }
}

/// Pong tuning. Speeds are pixels per tick at the fixed 120 Hz rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    pub window: WindowConfig,
    pub background: Rgb,
    pub foreground: Rgb,
    /// Horizontal inset of each paddle from its wall
    pub wall_margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    /// Serve speed and the cap on the vertical component after a paddle hit
    pub max_ball_speed: f32,
    pub winning_score: u32,
    /// How long the win banner stays up before the match resolves
    pub banner_secs: f32,
    pub score_text_scale: f32,
    pub banner_text_scale: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            background: [0, 0, 0],
            foreground: [255, 255, 255],
            wall_margin: 10.0,
            paddle_width: 40.0,
            paddle_height: 200.0,
            paddle_speed: 6.0,
            ball_radius: 15.0,
            max_ball_speed: 8.0,
            winning_score: 10,
            banner_secs: 5.0,
            score_text_scale: 100.0,
            banner_text_scale: 74.0,
        }
    }
}

/// Sandbox tuning. Distances in pixels, masses in arbitrary units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub background: Rgb,
    pub aim_line: Rgb,
    pub aim_line_width: f32,
    /// Downward gravity in screen coordinates (+y is down)
    pub gravity: f32,
    pub boundary_elasticity: f32,
    pub boundary_friction: f32,
    pub projectile_radius: f32,
    pub projectile_mass: f32,
    pub projectile_elasticity: f32,
    pub projectile_friction: f32,
    /// Impulse magnitude per pixel of drag distance at launch
    pub impulse_per_pixel: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            background: [127, 255, 212],
            aim_line: [0, 0, 0],
            aim_line_width: 3.0,
            gravity: 981.0,
            boundary_elasticity: 0.4,
            boundary_friction: 0.5,
            projectile_radius: 35.0,
            projectile_mass: 10.0,
            projectile_elasticity: 0.95,
            projectile_friction: 0.4,
            impulse_per_pixel: 50.0,
        }
    }
}

impl PongConfig {
    pub fn load(path: Option<&Path>) -> Self {
        load_or_default(path, "pong")
    }
}

impl SandboxConfig {
    pub fn load(path: Option<&Path>) -> Self {
        load_or_default(path, "sandbox")
    }
}

fn load_or_default<T: DeserializeOwned + Default>(path: Option<&Path>, which: &str) -> T {
    let Some(path) = path else {
        log::info!("using default {which} config");
        return T::default();
    };

    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(config) => {
                log::info!("loaded {which} config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("bad {which} config {}: {err}; using defaults", path.display());
                T::default()
            }
        },
        Err(err) => {
            log::warn!("cannot read {which} config {}: {err}; using defaults", path.display());
            T::default()
        }
    }
}
