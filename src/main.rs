//! Shape Motion entry point
//!
//! Runs the game on the host board: framebuffer display, autopilot or idle
//! buttons, and a timer thread standing in for the watchdog interrupt.

use anyhow::Context;

use shapemotion::Settings;
use shapemotion::platform::{AutoPilot, ButtonSet, Framebuffer, HostBoard, Input, TickSource, run};
use shapemotion::sim::{GameState, Player};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Shape Motion starting...");

    let settings = Settings::load()?;
    let mut state = GameState::new(&settings);
    let input = if settings.autopilot {
        log::info!("Autopilot on (seed {})", settings.seed);
        Input::Auto(AutoPilot::new(settings.seed))
    } else {
        Input::Fixed(ButtonSet::NONE)
    };
    let display = Framebuffer::new(settings.screen_width, settings.screen_height);
    let mut board = HostBoard::new(display, input);

    let ticks = TickSource::spawn(settings.tick_period(), settings.run_ticks)
        .context("starting tick source")?;
    log::info!(
        "Running at {} Hz, physics every {} ticks",
        settings.tick_hz,
        settings.physics_divider
    );

    let summary = run(&mut state, &mut board, &ticks);
    log::info!(
        "Final score {} - {} after {} ticks",
        state.score.get(Player::One),
        state.score.get(Player::Two),
        summary.ticks
    );

    if let Some(path) = &settings.snapshot {
        std::fs::write(path, board.display.to_ppm())
            .with_context(|| format!("writing snapshot to {path}"))?;
        log::info!("Snapshot written to {}", path);
    }

    Ok(())
}
