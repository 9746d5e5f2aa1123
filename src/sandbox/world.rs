//! rapier2d world wrapper and scene setup
//!
//! Screen coordinates double as physics coordinates (+y down, pixels), so
//! gravity is a positive y vector and debug-rendered geometry needs no
//! transform before drawing.

use glam::Vec2;
use rapier2d::pipeline::{DebugRenderBackend, DebugRenderPipeline};
use rapier2d::prelude::*;

use crate::config::SandboxConfig;
use crate::consts::SIM_DT;

/// Owns every rapier set plus the stepping pipeline.
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec2) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: SIM_DT,
            ..Default::default()
        };

        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            gravity: vector![gravity.x, gravity.y],
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Run the debug-render pass over everything in the world.
    pub fn render_debug(
        &self,
        pipeline: &mut DebugRenderPipeline,
        backend: &mut impl DebugRenderBackend,
    ) {
        pipeline.render(
            backend,
            &self.bodies,
            &self.colliders,
            &self.impulse_joints,
            &self.multibody_joints,
            &self.narrow_phase,
        );
    }

    pub fn add_static_box(
        &mut self,
        center: Vec2,
        size: Vec2,
        elasticity: f32,
        friction: f32,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x, center.y])
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(size.x / 2.0, size.y / 2.0)
            .restitution(elasticity)
            .friction(friction)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    pub fn add_dynamic_box(
        &mut self,
        center: Vec2,
        size: Vec2,
        mass: f32,
        elasticity: f32,
        friction: f32,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![center.x, center.y])
            .build();
        let handle = self.bodies.insert(body);
        // Slightly rounded corners so stacked boxes settle instead of snagging
        let collider = ColliderBuilder::round_cuboid(size.x / 2.0, size.y / 2.0, 2.0)
            .mass(mass)
            .restitution(elasticity)
            .friction(friction)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Spawn the projectile as a fixed body; it starts simulating only once
    /// [`release_projectile`](Self::release_projectile) flips it to dynamic.
    pub fn spawn_projectile(&mut self, cfg: &SandboxConfig, pos: Vec2) -> RigidBodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![pos.x, pos.y])
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::ball(cfg.projectile_radius)
            .mass(cfg.projectile_mass)
            .restitution(cfg.projectile_elasticity)
            .friction(cfg.projectile_friction)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Flip the projectile to dynamic and kick it with an instantaneous
    /// impulse at its origin.
    pub fn release_projectile(&mut self, handle: RigidBodyHandle, impulse: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_body_type(RigidBodyType::Dynamic, true);
            body.apply_impulse(vector![impulse.x, impulse.y], true);
        }
    }

    /// Remove a body together with its colliders and joints.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|b| Vec2::new(b.translation().x, b.translation().y))
    }
}

/// Four static boxes framing the window.
pub fn add_boundaries(world: &mut PhysicsWorld, cfg: &SandboxConfig, width: f32, height: f32) {
    let walls = [
        (Vec2::new(width / 2.0, height - 10.0), Vec2::new(width, 20.0)),
        (Vec2::new(width / 2.0, 10.0), Vec2::new(width, 20.0)),
        (Vec2::new(10.0, height / 2.0), Vec2::new(20.0, height)),
        (Vec2::new(width - 10.0, height / 2.0), Vec2::new(20.0, height)),
    ];
    for (center, size) in walls {
        world.add_static_box(center, size, cfg.boundary_elasticity, cfg.boundary_friction);
    }
}

/// Two posts carrying a lintel, resting on the floor until something hits it.
pub fn add_structure(world: &mut PhysicsWorld, height: f32) {
    let boxes = [
        (Vec2::new(800.0, height - 120.0), Vec2::new(40.0, 200.0), 100.0),
        (Vec2::new(1100.0, height - 120.0), Vec2::new(40.0, 200.0), 100.0),
        (Vec2::new(950.0, height - 240.0), Vec2::new(340.0, 40.0), 150.0),
    ];
    for (center, size, mass) in boxes {
        world.add_dynamic_box(center, size, mass, 0.4, 0.4);
    }
}

/// A heavy bob on an arm, pinned to a fixed pivot so it swings freely.
pub fn add_pendulum(world: &mut PhysicsWorld) -> RigidBodyHandle {
    let pivot = Vec2::new(500.0, 350.0);
    let body_pos = Vec2::new(355.0, 255.0);

    let pivot_body = RigidBodyBuilder::fixed()
        .translation(vector![pivot.x, pivot.y])
        .build();
    let pivot_handle = world.bodies.insert(pivot_body);

    let pendulum = RigidBodyBuilder::dynamic()
        .translation(vector![body_pos.x, body_pos.y])
        .build();
    let pendulum_handle = world.bodies.insert(pendulum);

    // Arm: capsule along +x from the body origin to the bob
    let arm = ColliderBuilder::capsule_x(127.5, 5.0)
        .translation(vector![127.5, 0.0])
        .mass(8.0)
        .friction(0.4)
        .build();
    world
        .colliders
        .insert_with_parent(arm, pendulum_handle, &mut world.bodies);

    let bob = ColliderBuilder::ball(40.0)
        .translation(vector![255.0, 0.0])
        .mass(30.0)
        .restitution(0.95)
        .friction(0.4)
        .build();
    world
        .colliders
        .insert_with_parent(bob, pendulum_handle, &mut world.bodies);

    // Pin the body point that starts under the pivot to the pivot itself
    let anchor = pivot - body_pos;
    let joint = RevoluteJointBuilder::new()
        .local_anchor1(point![0.0, 0.0])
        .local_anchor2(point![anchor.x, anchor.y]);
    world
        .impulse_joints
        .insert(pivot_handle, pendulum_handle, joint, true);

    pendulum_handle
}

/// Populate the full sandbox scene.
pub fn populate(world: &mut PhysicsWorld, cfg: &SandboxConfig, width: f32, height: f32) {
    add_boundaries(world, cfg, width, height);
    add_structure(world, height);
    add_pendulum(world);
    log::info!(
        "sandbox scene ready: {} bodies, {} colliders",
        world.bodies.len(),
        world.colliders.len()
    );
}
