//! Debug-render backend
//!
//! rapier's debug pipeline emits every collider outline, joint, and contact
//! as colored line segments. We collect them per frame and let the frontend
//! batch them into a single mesh. rapier colors are HSLA; ggez wants RGBA.

use ggez::graphics::Color;
use glam::Vec2;
use rapier2d::math::{Point, Real};
use rapier2d::pipeline::{DebugRenderBackend, DebugRenderObject};

/// One debug line segment in screen coordinates
#[derive(Debug, Clone, Copy)]
pub struct DebugLine {
    pub a: Vec2,
    pub b: Vec2,
    pub color: Color,
}

/// Collects the debug-render output of a frame.
#[derive(Debug, Default)]
pub struct LineCollector {
    pub lines: Vec<DebugLine>,
}

impl LineCollector {
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DebugRenderBackend for LineCollector {
    fn draw_line(
        &mut self,
        _object: DebugRenderObject,
        a: Point<Real>,
        b: Point<Real>,
        color: [f32; 4],
    ) {
        self.lines.push(DebugLine {
            a: Vec2::new(a.x, a.y),
            b: Vec2::new(b.x, b.y),
            color: hsla_to_rgba(color),
        });
    }
}

/// Convert rapier's [hue (deg), saturation, lightness, alpha] to RGBA.
pub fn hsla_to_rgba(hsla: [f32; 4]) -> Color {
    let [h, s, l, a] = hsla;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h / 60.0).rem_euclid(6.0);
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Color::new(r + m, g + m, b + m, a)
}
