//! Application state
//!
//! All transitions happen through the reducer (see `reducer.rs`).

use libcalc::{Config, Engine, TuiConfig};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// History panel visible?
    pub history_visible: bool,

    /// Calculator engine; the only owner of calculator state
    pub engine: Engine,

    /// Message for the last failed evaluation, cleared by the next good key
    pub last_error: Option<String>,

    pub status: StatusBarState,

    pub config: UiConfig,
}

#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl UiConfig {
    /// Start from the file settings and apply environment overrides:
    /// `NO_COLOR` / `CALC_TUI_NO_COLOR` turn colors off and
    /// `CALC_TUI_TICK_MS` sets the tick rate.
    pub fn from_tui_config(tui: &TuiConfig) -> Self {
        let colors_enabled = tui.colors
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("CALC_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("CALC_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(tui.tick_rate_ms);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_tui_config(&TuiConfig::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            history_visible: config.tui.show_history,
            engine: Engine::with_config(&config.engine),
            last_error: None,
            status: StatusBarState::default(),
            config: UiConfig::from_tui_config(&config.tui),
        }
    }

    /// History panel lines, or the single "no records" line
    pub fn history_lines(&self) -> Vec<String> {
        self.engine.format_history().collect()
    }
}
