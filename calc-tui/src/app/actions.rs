//! Actions for the reducer pattern
//!
//! Every state transition starts from one of these.

use crossterm::event::KeyEvent;
use libcalc::Input;

#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    Quit,

    ShowHelp,

    HideHelp,

    /// Show or hide the history panel
    ToggleHistory,

    // === Calculator ===
    /// Feed one key to the engine
    Input(Input),

    // === Status Bar ===
    SetStatus(String),

    ClearStatus,
}
