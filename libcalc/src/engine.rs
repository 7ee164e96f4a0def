//! The calculator engine.
//!
//! [`Engine`] owns every piece of calculator state. All mutation goes
//! through its methods, so a fresh instance is a fresh calculator:
//!
//! ```
//! use libcalc::Engine;
//!
//! let mut engine = Engine::new();
//! engine.append_digit('5');
//! engine.set_operator("+").unwrap();
//! engine.append_digit('3');
//!
//! let evaluation = engine.evaluate().unwrap();
//! assert_eq!(evaluation.buffer, "8");
//! assert_eq!(engine.format_history().collect::<Vec<_>>(), vec!["5 + 3 = 8"]);
//! ```
//!
//! # States
//!
//! - `Idle`: no operation pending
//! - `OperandPending`: a first operand and operator wait for the second
//! - `Error`: the last evaluation failed; the next digit, operator or
//!   backspace leaves it, and `clear` resets everything

use tracing::{debug, info, warn};

use crate::buffer::InputBuffer;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::format::format_number;
use crate::history::{HistoryEntry, HistoryLog};
use crate::input::Input;
use crate::operator::Operator;

/// First operand and operator captured by an operator key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    OperandPending,
    Error,
}

/// A successful evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Entry appended to the history log
    pub entry: HistoryEntry,
    /// Buffer after the evaluation (the formatted result)
    pub buffer: String,
}

/// What a front end needs to re-render after one [`Input`]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub buffer: String,
    pub error: Option<EngineError>,
    pub history_appended: bool,
}

impl Outcome {
    /// True when the engine was left in its error state
    pub fn is_error(&self) -> bool {
        self.error.as_ref().is_some_and(|e| !e.is_rejection())
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    buffer: InputBuffer,
    pending: Option<PendingOperation>,
    error: bool,
    history: HistoryLog,
    sentinel: String,
}

impl Engine {
    /// Create an engine with the default 15-character buffer
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            buffer: InputBuffer::with_max_len(config.max_input_len),
            pending: None,
            error: false,
            history: HistoryLog::new(),
            sentinel: config.history_sentinel.clone(),
        }
    }

    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn state(&self) -> EngineState {
        if self.error {
            EngineState::Error
        } else if self.pending.is_some() {
            EngineState::OperandPending
        } else {
            EngineState::Idle
        }
    }

    /// Pending expression for a secondary display, e.g. `"5 +"`
    pub fn pending_display(&self) -> Option<String> {
        self.pending
            .map(|p| format!("{} {}", format_number(p.operand), p.operator))
    }

    /// Append a digit or decimal point to the buffer.
    ///
    /// Duplicate decimal points, keys past the buffer bound and non-digit
    /// characters are dropped without error. Always clears the error flag.
    pub fn append_digit(&mut self, token: char) -> &str {
        self.error = false;

        match self.buffer.push(token) {
            Ok(()) => debug!(buffer = self.buffer.as_str(), "Digit appended"),
            Err(reason) => debug!(%token, %reason, "Key ignored"),
        }

        self.buffer.as_str()
    }

    /// Remove the last character of the buffer
    pub fn backspace(&mut self) -> &str {
        self.error = false;
        self.buffer.pop();
        debug!(buffer = self.buffer.as_str(), "Backspace");
        self.buffer.as_str()
    }

    /// Record an operator given by its symbol.
    ///
    /// Unknown symbols are rejected with [`EngineError::InvalidOperator`]
    /// and leave the engine untouched.
    pub fn set_operator(&mut self, symbol: &str) -> Result<Operator, EngineError> {
        let Some(operator) = Operator::from_symbol(symbol) else {
            warn!(symbol, "Attempted to set unsupported operator");
            return Err(EngineError::InvalidOperator(symbol.to_string()));
        };

        self.set_operator_to(operator)
    }

    /// Record an operator.
    ///
    /// With nothing pending the buffer becomes the first operand. With an
    /// operation pending and a new number entered, the pending operation
    /// is evaluated first and its result becomes the first operand. With an
    /// operation pending and nothing entered, the operator is replaced.
    ///
    /// A failed chained evaluation is returned as-is and leaves the engine
    /// in its error state.
    pub fn set_operator_to(&mut self, operator: Operator) -> Result<Operator, EngineError> {
        self.error = false;

        let pending = self.pending;
        let operand = match pending {
            None => match self.buffer.parse() {
                Some(value) => value,
                None => return Err(self.fail(EngineError::MissingOperand)),
            },
            Some(pending) if self.buffer.is_reset() => pending.operand,
            Some(_) => self.evaluate()?.entry.result,
        };

        self.pending = Some(PendingOperation { operand, operator });
        self.buffer.reset();

        debug!(operand, %operator, "Operator set");
        Ok(operator)
    }

    /// Apply the pending operation to the buffer.
    ///
    /// Fails with [`EngineError::MissingOperand`] when nothing is pending
    /// or the buffer is not a number, and with
    /// [`EngineError::DivisionByZero`]. Either failure sets the error flag,
    /// resets the buffer, drops the pending operation and leaves the
    /// history untouched.
    pub fn evaluate(&mut self) -> Result<Evaluation, EngineError> {
        let (Some(pending), Some(second)) = (self.pending, self.buffer.parse()) else {
            return Err(self.fail(EngineError::MissingOperand));
        };

        let result = match pending.operator.apply(pending.operand, second) {
            Ok(value) => value,
            Err(e) => return Err(self.fail(e)),
        };

        let entry = HistoryEntry::new(pending.operand, pending.operator, second, result);
        self.history.push(entry);
        self.buffer.set(format_number(result));
        self.pending = None;
        self.error = false;

        debug!(%entry, "Evaluated");
        Ok(Evaluation {
            entry,
            buffer: self.buffer.as_str().to_string(),
        })
    }

    /// Reset the buffer, pending operation, error flag and history
    pub fn clear(&mut self) {
        self.buffer.reset();
        self.pending = None;
        self.error = false;
        self.history.clear();
        debug!("Engine cleared");
    }

    /// History as display lines, oldest first, or the single "no records"
    /// line when nothing has been evaluated
    pub fn format_history(&self) -> impl Iterator<Item = String> + '_ {
        self.history.lines(&self.sentinel)
    }

    /// Run one [`Input`] and report the result
    pub fn apply(&mut self, input: Input) -> Outcome {
        let before = self.history.len();

        let error = match input {
            Input::Digit(token) => {
                self.append_digit(token);
                None
            }
            Input::Operator(operator) => self.set_operator_to(operator).err(),
            Input::Evaluate => self.evaluate().err(),
            Input::Backspace => {
                self.backspace();
                None
            }
            Input::Clear => {
                self.clear();
                None
            }
        };

        Outcome {
            buffer: self.buffer.as_str().to_string(),
            error,
            history_appended: self.history.len() > before,
        }
    }

    fn fail(&mut self, error: EngineError) -> EngineError {
        info!(%error, "Calculation failed");
        self.error = true;
        self.buffer.reset();
        self.pending = None;
        error
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
