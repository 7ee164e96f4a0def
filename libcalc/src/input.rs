//! Key tokens understood by the engine.
//!
//! Front ends turn whatever they receive (terminal key events, CLI
//! arguments) into [`Input`] values and hand them to
//! [`Engine::apply`](crate::Engine::apply).

use std::str::FromStr;

use crate::buffer::is_digit_token;
use crate::error::CalcError;
use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Evaluate,
    Backspace,
    Clear,
}

impl Input {
    /// Map a key name or token to an input.
    ///
    /// Accepts single digits and `.`, operator symbols, `=`/`Enter`,
    /// `Backspace`/`<` and `Escape`/`Esc`/`C`/`c`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "=" | "Enter" => Some(Input::Evaluate),
            "Backspace" | "<" => Some(Input::Backspace),
            "Escape" | "Esc" | "C" | "c" => Some(Input::Clear),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => Operator::from_symbol(token).map(Input::Operator),
                }
            }
        }
    }

    /// Map a single typed character to an input
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            c if is_digit_token(c) => Some(Input::Digit(c)),
            '=' => Some(Input::Evaluate),
            '<' => Some(Input::Backspace),
            'c' | 'C' => Some(Input::Clear),
            c => Operator::from_char(c).map(Input::Operator),
        }
    }

    /// Expand a token into inputs.
    ///
    /// A run of digits such as `12.5` becomes one [`Input::Digit`] per
    /// character; anything else must be a single token for
    /// [`Input::parse`].
    pub fn parse_all(token: &str) -> Option<Vec<Self>> {
        if token.len() > 1 && token.chars().all(is_digit_token) {
            return Some(token.chars().map(Input::Digit).collect());
        }

        Self::parse(token).map(|input| vec![input])
    }
}

impl FromStr for Input {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalcError::InvalidInput(format!("unrecognised key '{}'", s)))
    }
}
