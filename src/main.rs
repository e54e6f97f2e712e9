//! Alien Rush entry point
//!
//! Runs a headless session on a fixed 60 Hz virtual clock with a simple
//! autopilot at the controls, restarting after each game over until the frame
//! budget is spent. Prints a JSON snapshot of the final state.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use alien_rush::audio::LogAudio;
use alien_rush::consts::FRAME_MS;
use alien_rush::input::{InputState, Key};
use alien_rush::renderer::RecordingSurface;
use alien_rush::session::FixedClock;
use alien_rush::sim::GameState;
use alien_rush::{Session, Settings};

#[derive(Parser)]
#[command(name = "alien-rush")]
#[command(about = "Run a headless Alien Rush session with an autopilot")]
struct Args {
    /// Path to a JSON settings file
    settings: Option<PathBuf>,

    /// Number of display frames to simulate (60 per second)
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u64,
}

/// Steer under the lowest alien and keep the trigger held
fn autopilot(state: &GameState, input: &mut InputState) {
    input.set(Key::Space, true);

    let lowest = state.aliens.iter().max_by(|a, b| {
        a.rect
            .pos
            .y
            .partial_cmp(&b.rect.pos.y)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let (left, right) = match lowest {
        Some(target) => {
            let target_x = target.rect.pos.x + target.rect.size.x / 2.0;
            let player_x = state.player.rect.pos.x + state.player.rect.size.x / 2.0;
            let dx = target_x - player_x;
            (dx < -2.0, dx > 2.0)
        }
        None => (false, false),
    };
    input.set(Key::ArrowLeft, left);
    input.set(Key::ArrowRight, right);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Alien Rush (headless) starting...");

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut session = Session::new(&settings, RecordingSurface::default(), LogAudio, 0.0)?;
    let mut clock = FixedClock::new(0.0, FRAME_MS);
    let mut remaining = args.frames;
    let mut games = 1;
    let mut best = 0;

    while remaining > 0 {
        remaining -= session.run(&mut clock, Some(remaining), autopilot);
        best = best.max(session.state().score);
        if session.is_running() {
            break;
        }
        if remaining > 0 && session.click_restart(clock.now_ms) {
            games += 1;
        }
    }

    log::info!("Played {} game(s), best score {}", games, best);
    let json = serde_json::to_string_pretty(&session.state().snapshot())
        .context("serializing final snapshot")?;
    println!("{json}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is driven by the embedding page on wasm
}
