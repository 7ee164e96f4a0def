//! Binary operators and the arithmetic table behind them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// The five operators the engine understands.
///
/// Each operator has one display symbol (`+ − × ÷ ^`) and accepts the
/// ASCII spellings a keyboard produces (`-`, `*`, `x`, `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,

    #[serde(rename = "−", alias = "-")]
    Subtract,

    #[serde(rename = "×", alias = "*", alias = "x")]
    Multiply,

    #[serde(rename = "÷", alias = "/")]
    Divide,

    #[serde(rename = "^")]
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Look up an operator by any of its accepted spellings
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "*" | "×" | "x" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            "^" => Some(Operator::Power),
            _ => None,
        }
    }

    /// Single-key variant of [`Operator::from_symbol`]
    pub fn from_char(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        Self::from_symbol(c.encode_utf8(&mut buf))
    }

    /// Display symbol used in the history log
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Power => "^",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Only division by exactly zero fails. Exponentiation has no domain
    /// restriction, so `(-8) ^ 0.5` yields NaN as an ordinary value.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EngineError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(EngineError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            Operator::Power => Ok(lhs.powf(rhs)),
        }
    }
}

impl FromStr for Operator {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| EngineError::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
