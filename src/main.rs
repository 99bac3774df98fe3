//! Brickfall headless runner
//!
//! Plays one session with the autopilot on a fixed-timestep accumulator and
//! prints the final snapshot as JSON. Rendering is left to real hosts.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use brickfall::Settings;
use brickfall::consts::{MAX_SUBSTEPS, SIM_DT};
use brickfall::sim::{GameEvent, GameSession, TickInput, tick};

#[derive(Parser, Debug)]
#[command(name = "brickfall", about = "Run a Brickfall session headless on autopilot")]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the seed from the settings
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many simulation steps
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_steps: u64,
    /// Simulated host frame duration in seconds
    #[arg(long, default_value_t = SIM_DT)]
    frame_time: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.frame_time.is_nan() || args.frame_time <= 0.0 {
        bail!("--frame-time must be > 0 (got {})", args.frame_time);
    }

    let mut settings = match &args.settings {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    let mut session = GameSession::new(settings).context("building session")?;
    log::info!("Brickfall (headless) starting, seed {}", session.seed);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut accumulator = 0.0f32;
    let mut steps = 0u64;
    while !session.phase().is_terminal() && steps < args.max_steps {
        // Same clamp a real host applies after a stall
        accumulator += args.frame_time.min(0.1);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS && steps < args.max_steps {
            tick(&mut session, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
            steps += 1;
        }

        for event in session.drain_events() {
            match event {
                GameEvent::GameOver => log::info!("Scene: game over"),
                GameEvent::GameWon => log::info!("Scene: you win"),
                GameEvent::LifeLost { lives } => log::info!("Lives: {lives}"),
                other => log::trace!("{other:?}"),
            }
        }
    }

    if !session.phase().is_terminal() {
        log::info!("Step limit reached after {steps} steps");
    }

    let snapshot = session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
