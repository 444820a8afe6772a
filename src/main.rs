//! Breakout entry point
//!
//! There is no window backend here: the native binary runs a headless demo
//! session with a simple ball-tracking pilot and logs how it went.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, ensure};
use clap::Parser;

use breakout::renderer;
use breakout::screen::FrameInput;
use breakout::sim::{Direction, GameState, Level};
use breakout::{Flow, Screen, Session, Settings};

#[derive(Parser)]
#[command(name = "breakout")]
#[command(about = "Play one level of Breakout headlessly with a demo pilot")]
struct Args {
    /// Level to play (1-3)
    #[arg(long, default_value_t = 1)]
    level: u8,
    /// Seed for level generation (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Stop after this many frames
    #[arg(long, default_value_t = 60 * 60 * 10)]
    max_frames: u64,
    /// Simulated time between frames
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

/// Paddle intent for the demo: chase falling powerups while the ball is
/// heading up, otherwise stay under the ball
fn pilot(state: &GameState) -> Direction {
    let paddle_x = state.paddle.pos.x;
    let target_x = if state.ball.vel.y > 0.0 {
        state
            .active_powerups()
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|p| p.pos.x)
            .unwrap_or(state.ball.pos.x)
    } else {
        state.ball.pos.x
    };

    let dead_zone = state.paddle.width / 4.0;
    if target_x > paddle_x + dead_zone {
        Direction::Right
    } else if target_x < paddle_x - dead_zone {
        Direction::Left
    } else {
        Direction::Still
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    ensure!(args.frame_ms > 0, "frame-ms must be > 0");
    let level = Level::from_number(args.level)
        .ok_or_else(|| anyhow!("unknown level {}, expected 1-3", args.level))?;

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path).context("loading settings")?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    log::info!("Breakout (native) starting...");
    let mut session = Session::new(settings);
    session
        .select_level(level)
        .with_context(|| format!("starting level {}", level.number()))?;

    let mut now_ms = 0u64;
    let mut frames = 0u64;
    let mut vertex_bytes = 0usize;
    let mut result = "unfinished";
    let mut last_lives = 0;
    let mut last_destroyed = 0;

    while frames < args.max_frames {
        let direction = session.screen().game().map(pilot).unwrap_or_default();
        let input = FrameInput {
            direction,
            ..Default::default()
        };

        if session.frame(now_ms, &input) == Flow::Quit {
            break;
        }
        now_ms += args.frame_ms;
        frames += 1;

        let frame = renderer::frame(session.screen());
        vertex_bytes = vertex_bytes.max(renderer::as_bytes(&frame.vertices).len());

        match session.screen() {
            Screen::Playing(state) => {
                last_lives = state.paddle.lives;
                last_destroyed = state.destroyed_count();
            }
            Screen::Lost { .. } => {
                result = "lost";
                last_lives = 0;
            }
            Screen::Won { .. } => {
                result = "won";
                last_destroyed = level.spec().blocks;
            }
            Screen::LevelSelect => break,
        }
    }

    log::info!("Largest frame upload: {} bytes", vertex_bytes);
    println!("=== RESULT ===");
    println!("  Level:     {}", level.number());
    println!("  Seed:      {}", session.seed());
    println!("  Outcome:   {}", result);
    println!("  Frames:    {}", frames);
    println!("  Lives:     {}", last_lives);
    println!("  Destroyed: {}/{}", last_destroyed, level.spec().blocks);

    Ok(())
}
