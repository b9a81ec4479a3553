//! Tessel headless driver: the full run loop without a window.
//!
//! Demonstrates:
//!   1. Sizing the grid from a pixel viewport
//!   2. Building a RunController from an EngineConfig
//!   3. Feeding it commands and clicks the way an input layer would
//!   4. Pacing ticks and rendering ASCII frames to stdout
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example headless

use std::io;
use std::thread;

use tessel_engine::{
    AsciiRenderer, Command, EngineConfig, Flow, Renderer, RunController, Viewport,
};
use tessel_space::BoundaryPolicy;
use tracing_subscriber::EnvFilter;

// ─── Run parameters ─────────────────────────────────────────────

const TICKS: usize = 40;
const FRAME_EVERY: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // ─── Setup ──────────────────────────────────────────────────

    let viewport = Viewport::default();
    let config = EngineConfig {
        boundary: BoundaryPolicy::Toroidal,
        seed: 2024,
        tick_rate_hz: 50.0,
        ..EngineConfig::from_viewport(&viewport)
    };
    let mut ctl = RunController::new(config)?;
    let mut renderer = AsciiRenderer::new(io::stdout());

    // A click in the middle of cell (10, 10), translated the way a
    // window driver would.
    let half = viewport.cell / 2;
    let hit = viewport
        .cell_origin(10, 10)
        .and_then(|(x, y)| viewport.cell_at(x.saturating_add(half), y.saturating_add(half)));
    if let Some((row, col)) = hit {
        ctl.handle_click(row, col)?;
    }

    // The gun needs 36 columns; on this 20x20 grid the controller
    // rejects it and leaves the grid alone.
    if let Err(e) = ctl.handle_key(Command::InjectGliderGun) {
        tracing::info!(error = %e, "glider gun skipped");
    }

    ctl.handle_key(Command::ToggleRun)?;
    renderer.render(ctl.grid(), ctl.generation())?;

    // ─── Loop ───────────────────────────────────────────────────

    for tick in 1..=TICKS {
        ctl.tick()?;
        if tick % FRAME_EVERY == 0 {
            renderer.render(ctl.grid(), ctl.generation())?;
        }
        if ctl.cycle_detected() {
            tracing::info!(generation = %ctl.generation(), "settled, reseeding");
            ctl.handle_key(Command::Reseed)?;
            ctl.handle_key(Command::ToggleRun)?;
        }
        thread::sleep(ctl.tick_interval());
    }

    let m = ctl.last_metrics();
    tracing::info!(
        generation = %ctl.generation(),
        population = m.population,
        births = m.births,
        deaths = m.deaths,
        us = m.total_us,
        frames = renderer.frames(),
        "done"
    );

    assert_eq!(ctl.handle_key(Command::Quit)?, Flow::Quit);
    Ok(())
}
