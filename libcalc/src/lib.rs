//! Calccast - a calculator engine with history
//!
//! This library owns the calculator state machine: the input buffer, the
//! pending operation, the error flag and the append-only history log.
//! Front ends (terminal UI, CLI) translate key presses into [`Input`]s and
//! render from the engine's observers.

pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod history;
pub mod input;
pub mod logging;
pub mod operator;

// Re-export commonly used types
pub use config::{Config, EngineConfig, TuiConfig};
pub use engine::{Engine, EngineState, Evaluation, Outcome, PendingOperation};
pub use error::{CalcError, ConfigError, EngineError, InputRejected, Result};
pub use format::format_number;
pub use history::{HistoryEntry, HistoryLog, NO_RECORDS};
pub use input::Input;
pub use operator::Operator;
