//! Two-player Pong
//!
//! Left paddle: W/S. Right paddle: Up/Down. First to the winning score (10)
//! takes the match; a left win resets the board, a right win ends the
//! session after the banner.

use std::env;
use std::path::PathBuf;

use ggez::conf::{FullscreenType, WindowMode, WindowSetup};
use ggez::event::{self, EventHandler};
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Rect, Text};
use ggez::input::keyboard::KeyCode;
use ggez::{Context, ContextBuilder, GameResult};
use glam::Vec2;

use rebound::config::Rgb;
use rebound::consts::TICK_RATE;
use rebound::pong::{tick, MatchPhase, Paddle, PongState, Side, TickInput};
use rebound::PongConfig;

fn rgb(c: Rgb) -> Color {
    Color::from_rgb(c[0], c[1], c[2])
}

fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect::new(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y)
}

/// Dashed vertical net down the middle: twenty segments, every other one
/// drawn.
fn net_segments(arena: Vec2) -> Vec<Rect> {
    let seg = arena.y / 20.0;
    let mut rects = Vec::new();
    let mut y = 10.0;
    while y < arena.y {
        rects.push(Rect::new(arena.x / 2.0 - 5.0, y, 10.0, seg));
        y += 2.0 * seg;
    }
    rects
}

struct PongGame {
    cfg: PongConfig,
    state: PongState,
}

impl PongGame {
    fn sample_input(&self, ctx: &Context) -> TickInput {
        let k = &ctx.keyboard;
        TickInput {
            left_up: k.is_key_pressed(KeyCode::W),
            left_down: k.is_key_pressed(KeyCode::S),
            right_up: k.is_key_pressed(KeyCode::Up),
            right_down: k.is_key_pressed(KeyCode::Down),
        }
    }

    /// Paddles, net dashes, and ball batched into one mesh per frame.
    fn scene_mesh(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let fg = rgb(self.cfg.foreground);
        let mut mb = MeshBuilder::new();

        for paddle in [&self.state.left, &self.state.right] {
            mb.rectangle(DrawMode::fill(), paddle_rect(paddle), fg)?;
        }
        for rect in net_segments(self.state.arena) {
            mb.rectangle(DrawMode::fill(), rect, fg)?;
        }
        mb.circle(
            DrawMode::fill(),
            self.state.ball.pos,
            self.state.ball.radius,
            0.1,
            fg,
        )?;

        Ok(Mesh::from_data(ctx, mb.build()))
    }

    fn draw_score(
        &self,
        ctx: &mut Context,
        canvas: &mut graphics::Canvas,
        score: u32,
        center_x: f32,
    ) -> GameResult {
        let mut text = Text::new(score.to_string());
        text.set_scale(self.cfg.score_text_scale);
        let dims = text.measure(ctx)?;
        canvas.draw(
            &text,
            DrawParam::default()
                .dest(Vec2::new(center_x - dims.x / 2.0, 20.0))
                .color(rgb(self.cfg.foreground)),
        );
        Ok(())
    }

    fn draw_banner(
        &self,
        ctx: &mut Context,
        canvas: &mut graphics::Canvas,
        winner: Side,
    ) -> GameResult {
        let line = match winner {
            Side::Left => "Left player wins!",
            Side::Right => "Right player wins!",
        };
        let mut text = Text::new(line);
        text.set_scale(self.cfg.banner_text_scale);
        let dims = text.measure(ctx)?;
        canvas.draw(
            &text,
            DrawParam::default()
                .dest(self.state.center() - Vec2::new(dims.x, dims.y) / 2.0)
                .color(rgb(self.cfg.foreground)),
        );
        Ok(())
    }
}

impl EventHandler for PongGame {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let input = self.sample_input(ctx);
        while ctx.time.check_update_time(TICK_RATE) {
            tick(&mut self.state, &input, &self.cfg);
        }
        if self.state.exit_requested {
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, rgb(self.cfg.background));

        let arena = self.state.arena;
        self.draw_score(ctx, &mut canvas, self.state.scores.left, arena.x / 4.0)?;
        self.draw_score(ctx, &mut canvas, self.state.scores.right, 3.0 * arena.x / 4.0)?;

        let scene = self.scene_mesh(ctx)?;
        canvas.draw(&scene, DrawParam::default());

        if let MatchPhase::Banner { winner, .. } = self.state.phase {
            self.draw_banner(ctx, &mut canvas, winner)?;
        }

        canvas.finish(ctx)
    }
}

fn main() -> GameResult {
    env_logger::init();

    let config_path = env::args().nth(1).map(PathBuf::from);
    let cfg = PongConfig::load(config_path.as_deref());

    let mut window_mode =
        WindowMode::default().dimensions(cfg.window.width, cfg.window.height);
    if cfg.window.fullscreen {
        window_mode = window_mode.fullscreen_type(FullscreenType::Desktop);
    }

    let (ctx, event_loop) = ContextBuilder::new("pong", "rebound")
        .window_setup(WindowSetup::default().title("Pong"))
        .window_mode(window_mode)
        .build()?;

    // The fullscreen surface may differ from the configured dimensions
    let (width, height) = ctx.gfx.drawable_size();
    log::info!("pong starting at {width}x{height}");

    let state = PongState::new(&cfg, Vec2::new(width, height));
    event::run(ctx, event_loop, PongGame { cfg, state })
}
