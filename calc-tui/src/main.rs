//! calc-tui - Terminal UI for Calccast
//!
//! Keyboard-driven calculator with a pending-expression line and a
//! history panel.

use anyhow::{Context, Result};
use calc_tui::{
    app::{event::EventHandler, reduce, AppState},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libcalc::{logging::LoggingConfig, Config};

/// Log file path; the screen belongs to the UI, so logs only go to a file
const LOG_FILE_ENV: &str = "CALC_TUI_LOG";

fn main() -> Result<()> {
    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        LoggingConfig::from_env(false)
            .with_file(path)
            .init()
            .context("Failed to initialize logging")?;
    }

    let config = Config::load_or_default().context("Failed to load configuration")?;
    tracing::info!(?config, "Starting calc-tui");

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, AppState::from_config(&config));
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    while !state.should_quit {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let event = event_handler.next()?;
        state = reduce(state, event.into());
    }

    tracing::info!(
        evaluations = state.engine.history().len(),
        "Exiting calc-tui"
    );
    Ok(())
}
