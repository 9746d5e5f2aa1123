//! Physics sandbox
//!
//! Click once to place a projectile, drag to aim, click again to launch it
//! at the structure and the pendulum, click a third time to clear it.

use std::env;
use std::path::PathBuf;

use ggez::conf::{FullscreenType, WindowMode, WindowSetup};
use ggez::event::{self, EventHandler, MouseButton};
use ggez::graphics::{self, Color, DrawParam, Mesh, MeshBuilder};
use ggez::{Context, ContextBuilder, GameResult};
use glam::Vec2;
use rapier2d::pipeline::{DebugRenderMode, DebugRenderPipeline, DebugRenderStyle};

use rebound::config::Rgb;
use rebound::consts::TICK_RATE;
use rebound::sandbox::{world, Launcher, LineCollector, PhysicsWorld};
use rebound::SandboxConfig;

fn rgb(c: Rgb) -> Color {
    Color::from_rgb(c[0], c[1], c[2])
}

struct SandboxGame {
    cfg: SandboxConfig,
    world: PhysicsWorld,
    launcher: Launcher,
    debug_pipeline: DebugRenderPipeline,
    collector: LineCollector,
}

impl SandboxGame {
    fn new(cfg: SandboxConfig, width: f32, height: f32) -> Self {
        let mut physics = PhysicsWorld::new(Vec2::new(0.0, cfg.gravity));
        world::populate(&mut physics, &cfg, width, height);

        Self {
            cfg,
            world: physics,
            launcher: Launcher::Empty,
            debug_pipeline: DebugRenderPipeline::new(
                DebugRenderStyle::default(),
                DebugRenderMode::COLLIDER_SHAPES | DebugRenderMode::IMPULSE_JOINTS,
            ),
            collector: LineCollector::default(),
        }
    }
}

impl EventHandler for SandboxGame {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(TICK_RATE) {
            self.world.step();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, rgb(self.cfg.background));

        // Aim line follows the live cursor, not the press position
        let cursor = ctx.mouse.position();
        if let Some((from, to)) = self.launcher.aim_line(Vec2::new(cursor.x, cursor.y)) {
            if from.distance(to) > 1.0 {
                let line = Mesh::new_line(
                    ctx,
                    &[from, to],
                    self.cfg.aim_line_width,
                    rgb(self.cfg.aim_line),
                )?;
                canvas.draw(&line, DrawParam::default());
            }
        }

        self.collector.clear();
        self.world
            .render_debug(&mut self.debug_pipeline, &mut self.collector);

        if !self.collector.lines.is_empty() {
            let mut mb = MeshBuilder::new();
            for line in &self.collector.lines {
                mb.line(&[line.a, line.b], 1.5, line.color)?;
            }
            let mesh = Mesh::from_data(ctx, mb.build());
            canvas.draw(&mesh, DrawParam::default());
        }

        canvas.finish(ctx)
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        if button == MouseButton::Left {
            self.launcher
                .press(&mut self.world, &self.cfg, Vec2::new(x, y));
        }
        Ok(())
    }
}

fn main() -> GameResult {
    env_logger::init();

    let config_path = env::args().nth(1).map(PathBuf::from);
    let cfg = SandboxConfig::load(config_path.as_deref());

    let mut window_mode =
        WindowMode::default().dimensions(cfg.window.width, cfg.window.height);
    if cfg.window.fullscreen {
        window_mode = window_mode.fullscreen_type(FullscreenType::Desktop);
    }

    let (ctx, event_loop) = ContextBuilder::new("sandbox", "rebound")
        .window_setup(WindowSetup::default().title("Physics Sandbox"))
        .window_mode(window_mode)
        .build()?;

    let (width, height) = ctx.gfx.drawable_size();
    log::info!("sandbox starting at {width}x{height}");

    let game = SandboxGame::new(cfg, width, height);
    event::run(ctx, event_loop, game)
}
