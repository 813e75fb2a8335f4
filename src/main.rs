//! Arkanoid entry point
//!
//! Runs a headless session with the autopilot and reports the result.
//! Usage: `arkanoid [settings.json]`

use arkanoid::Settings;
use arkanoid::renderer::CommandRecorder;
use arkanoid::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|err| {
            log::warn!("{err}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };
    log::info!(
        "Arkanoid starting: {}x{}, seed {}, {} substep(s)",
        settings.gui_width,
        settings.gui_height,
        settings.seed,
        settings.substeps
    );

    let max_ticks = settings.max_ticks;
    let mut surface = CommandRecorder::new(settings.gui_width as i32, settings.gui_height as i32);
    let mut state = GameState::new(settings);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    while state.phase == GamePhase::Playing && state.time_ticks < max_ticks {
        surface.clear();
        state.draw_on(&mut surface);
        tick(&mut state, &input);
    }

    match state.phase {
        GamePhase::Won => println!("Player won! Score: {}", state.score()),
        GamePhase::Lost => println!("Player lost. Score: {}", state.score()),
        GamePhase::Playing => {
            log::warn!("Stopped after {} ticks", state.time_ticks);
            println!("Out of time. Score: {}", state.score());
        }
    }
}
