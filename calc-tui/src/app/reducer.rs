//! Reducer for state transitions
//!
//! `(State, Action) -> State`. The reducer takes ownership of the state,
//! feeds calculator keys to the engine it carries and returns the result.
//! No terminal IO happens here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libcalc::Input;

use super::actions::Action;
use super::state::{AppState, StatusBarState};

pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::ToggleHistory => AppState {
            history_visible: !state.history_visible,
            ..state
        },

        // === Calculator ===
        Action::Input(input) => apply_input(state, input),

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Map keys to actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => reduce(state, Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => reduce(state, Action::Quit),

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            reduce(state, action)
        }

        (KeyCode::Esc, _) if state.help_visible => reduce(state, Action::HideHelp),
        (KeyCode::Esc, _) => reduce(state, Action::Input(Input::Clear)),

        (KeyCode::Char('h'), KeyModifiers::NONE) => reduce(state, Action::ToggleHistory),

        (KeyCode::Enter, _) => reduce(state, Action::Input(Input::Evaluate)),
        (KeyCode::Backspace, _) => reduce(state, Action::Input(Input::Backspace)),

        // Shift is needed for + * ^ on most layouts
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            match Input::from_char(c) {
                Some(input) => reduce(state, Action::Input(input)),
                None => state,
            }
        }

        _ => state,
    }
}

/// Run one key through the engine and record what happened
fn apply_input(mut state: AppState, input: Input) -> AppState {
    let outcome = state.engine.apply(input);

    let message = match &outcome.error {
        Some(error) => Some(error.to_string()),
        None if outcome.history_appended => state
            .engine
            .history()
            .last()
            .map(|entry| format!("{} appended to history", entry)),
        None if input == Input::Clear => Some("Cleared".to_string()),
        None => None,
    };

    AppState {
        last_error: outcome.error.map(|e| e.to_string()),
        status: StatusBarState { message },
        ..state
    }
}
