//! Error types for calc-tui
//!
//! Wraps engine and configuration errors from libcalc together with
//! terminal IO errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Engine, config or logging setup error
    #[error("Calculator error: {0}")]
    Calc(#[from] libcalc::CalcError),

    /// Raw mode or alternate screen could not be entered
    #[error("Failed to prepare terminal: {0}")]
    Setup(#[source] std::io::Error),

    /// Raw mode or alternate screen could not be left
    #[error("Failed to restore terminal: {0}")]
    Restore(#[source] std::io::Error),

    /// Terminal/IO error while running
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use libcalc::{CalcError, EngineError};

    #[test]
    fn test_calc_error_conversion() {
        let error: TuiError = CalcError::from(EngineError::DivisionByZero).into();
        assert_eq!(
            error.to_string(),
            "Calculator error: Calculation error: Division by zero"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let error: TuiError =
            std::io::Error::new(std::io::ErrorKind::Other, "not a terminal").into();
        assert!(matches!(error, TuiError::Terminal(_)));
    }

    #[test]
    fn test_setup_and_restore_context() {
        use std::error::Error as _;

        let setup = TuiError::Setup(std::io::Error::new(std::io::ErrorKind::Other, "no tty"));
        assert_eq!(setup.to_string(), "Failed to prepare terminal: no tty");
        assert!(setup.source().is_some());

        let restore = TuiError::Restore(std::io::Error::new(std::io::ErrorKind::Other, "gone"));
        assert_eq!(restore.to_string(), "Failed to restore terminal: gone");
    }
}
