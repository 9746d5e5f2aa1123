//! Projectile launcher state machine
//!
//! Three explicit states driven by mouse presses:
//! `Empty` -> press spawns a fixed projectile at the cursor -> `Armed` ->
//! press launches it toward the cursor -> `Launched` -> press removes it ->
//! `Empty`. While armed, the frontend draws an aim line from the stored
//! press position to the live cursor; the impulse uses the cursor position
//! at launch time, not at arm time.

use glam::Vec2;
use rapier2d::prelude::RigidBodyHandle;

use crate::config::SandboxConfig;
use super::world::PhysicsWorld;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Launcher {
    /// No projectile in the world
    Empty,
    /// Projectile placed and fixed, waiting for the launch press
    Armed {
        pressed_at: Vec2,
        body: RigidBodyHandle,
    },
    /// Projectile dynamic and simulating
    Launched { body: RigidBodyHandle },
}

impl Launcher {
    /// Handle a mouse press at `cursor`, mutating the physics world as the
    /// state machine dictates.
    pub fn press(&mut self, world: &mut PhysicsWorld, cfg: &SandboxConfig, cursor: Vec2) {
        *self = match *self {
            Launcher::Empty => {
                let body = world.spawn_projectile(cfg, cursor);
                log::info!("projectile armed at ({:.0}, {:.0})", cursor.x, cursor.y);
                Launcher::Armed {
                    pressed_at: cursor,
                    body,
                }
            }
            Launcher::Armed { pressed_at, body } => {
                let impulse = launch_impulse(pressed_at, cursor, cfg.impulse_per_pixel);
                world.release_projectile(body, impulse);
                log::info!("projectile launched, impulse ({:.0}, {:.0})", impulse.x, impulse.y);
                Launcher::Launched { body }
            }
            Launcher::Launched { body } => {
                world.remove_body(body);
                log::info!("projectile removed");
                Launcher::Empty
            }
        };
    }

    /// Endpoints of the aim line, if one should be drawn this frame.
    pub fn aim_line(&self, cursor: Vec2) -> Option<(Vec2, Vec2)> {
        match *self {
            Launcher::Armed { pressed_at, .. } => Some((pressed_at, cursor)),
            _ => None,
        }
    }
}

/// Impulse for a drag from `pressed_at` to `cursor`: direction is the angle
/// between the two points, magnitude scales with their distance.
pub fn launch_impulse(pressed_at: Vec2, cursor: Vec2, force_per_pixel: f32) -> Vec2 {
    let delta = cursor - pressed_at;
    let angle = delta.y.atan2(delta.x);
    let force = delta.length() * force_per_pixel;
    Vec2::new(angle.cos() * force, angle.sin() * force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rapier2d::prelude::RigidBodyType;

    fn setup() -> (PhysicsWorld, SandboxConfig, Launcher) {
        let cfg = SandboxConfig::default();
        let world = PhysicsWorld::new(Vec2::new(0.0, cfg.gravity));
        (world, cfg, Launcher::Empty)
    }

    #[test]
    fn test_press_arms_fixed_projectile_at_cursor() {
        let (mut world, cfg, mut launcher) = setup();

        launcher.press(&mut world, &cfg, Vec2::new(320.0, 240.0));

        let Launcher::Armed { pressed_at, body } = launcher else {
            panic!("expected Armed, got {launcher:?}");
        };
        assert_eq!(pressed_at, Vec2::new(320.0, 240.0));
        assert_eq!(world.bodies.len(), 1);
        let rb = &world.bodies[body];
        assert_eq!(rb.body_type(), RigidBodyType::Fixed);
        assert_eq!(world.body_position(body).unwrap(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_second_press_launches_with_live_aim() {
        let (mut world, cfg, mut launcher) = setup();

        launcher.press(&mut world, &cfg, Vec2::new(100.0, 100.0));
        // Cursor moved before the launch press; the impulse must follow it
        launcher.press(&mut world, &cfg, Vec2::new(160.0, 180.0));

        let Launcher::Launched { body } = launcher else {
            panic!("expected Launched, got {launcher:?}");
        };
        let rb = &world.bodies[body];
        assert_eq!(rb.body_type(), RigidBodyType::Dynamic);

        // delta (60, 80), distance 100 -> impulse 5000 along (0.6, 0.8);
        // the impulse lands as velocity = impulse / mass
        let vel = Vec2::new(rb.linvel().x, rb.linvel().y);
        let expected = Vec2::new(3000.0, 4000.0) / cfg.projectile_mass;
        assert!((vel - expected).length() < 1.0, "velocity {vel} vs {expected}");
    }

    #[test]
    fn test_third_press_removes_projectile() {
        let (mut world, cfg, mut launcher) = setup();

        launcher.press(&mut world, &cfg, Vec2::new(100.0, 100.0));
        launcher.press(&mut world, &cfg, Vec2::new(200.0, 100.0));
        launcher.press(&mut world, &cfg, Vec2::new(500.0, 500.0));

        assert_eq!(launcher, Launcher::Empty);
        assert_eq!(world.bodies.len(), 0);
        assert_eq!(world.colliders.len(), 0);
    }

    #[test]
    fn test_aim_line_only_while_armed() {
        let (mut world, cfg, mut launcher) = setup();
        let cursor = Vec2::new(50.0, 60.0);

        assert_eq!(launcher.aim_line(cursor), None);

        launcher.press(&mut world, &cfg, Vec2::new(10.0, 20.0));
        assert_eq!(
            launcher.aim_line(cursor),
            Some((Vec2::new(10.0, 20.0), cursor))
        );

        launcher.press(&mut world, &cfg, cursor);
        assert_eq!(launcher.aim_line(cursor), None);
    }

    #[test]
    fn test_armed_projectile_ignores_gravity() {
        let (mut world, cfg, mut launcher) = setup();
        launcher.press(&mut world, &cfg, Vec2::new(300.0, 300.0));

        for _ in 0..60 {
            world.step();
        }

        let Launcher::Armed { body, .. } = launcher else {
            unreachable!()
        };
        assert_eq!(world.body_position(body).unwrap(), Vec2::new(300.0, 300.0));
    }

    proptest! {
        /// The impulse points from the press position to the cursor and its
        /// magnitude is distance * scale.
        #[test]
        fn prop_impulse_direction_and_magnitude(
            px in -500.0f32..500.0,
            py in -500.0f32..500.0,
            dx in 1.0f32..400.0,
            dy in 1.0f32..400.0,
        ) {
            let pressed = Vec2::new(px, py);
            let cursor = pressed + Vec2::new(dx, dy);
            let impulse = launch_impulse(pressed, cursor, 50.0);

            let delta = cursor - pressed;
            let expected_mag = delta.length() * 50.0;
            prop_assert!((impulse.length() - expected_mag).abs() / expected_mag < 1e-3);

            // Collinear with the drag vector
            let cross = impulse.x * delta.y - impulse.y * delta.x;
            prop_assert!(cross.abs() < expected_mag * delta.length() * 1e-3);
        }
    }
}
