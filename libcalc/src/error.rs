//! Error types for Calccast

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Calculation error: {0}")]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalcError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidInput(_) => 3,
            CalcError::Engine(EngineError::InvalidOperator(_)) => 3,
            CalcError::Engine(_) => 2,
            CalcError::Config(_) => 1,
            CalcError::Io(_) => 1,
            CalcError::Serialization(_) => 1,
        }
    }
}

/// Failures reported by the calculator engine.
///
/// `MissingOperand` and `DivisionByZero` put the engine into its error
/// state. `InvalidOperator` is a rejection: the engine state is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unsupported operator: {0}")]
    InvalidOperator(String),

    #[error("Missing operand")]
    MissingOperand,

    #[error("Division by zero")]
    DivisionByZero,
}

impl EngineError {
    /// True for errors that leave the engine state unchanged
    pub fn is_rejection(&self) -> bool {
        matches!(self, EngineError::InvalidOperator(_))
    }
}

/// Reasons a key was dropped by the input buffer.
///
/// These never surface to callers; the buffer stays as it was and the
/// reason is logged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejected {
    #[error("buffer already contains a decimal point")]
    DuplicateDecimal,

    #[error("buffer is full ({0} characters)")]
    BufferFull(usize),

    #[error("'{0}' is not a digit")]
    NotADigit(char),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
