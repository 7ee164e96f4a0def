//! calc-tui library
//!
//! Exports the app state, reducer and renderer so they can be driven
//! without a real terminal.

pub mod app;
pub mod error;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState};
pub use error::{Result, TuiError};
