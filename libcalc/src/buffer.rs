//! The in-progress numeric input shown on the main display.

use crate::error::InputRejected;

/// Longest buffer the keypad can build
pub const DEFAULT_MAX_LEN: usize = 15;

const RESET: &str = "0";
const NEGATIVE_ZERO: &str = "-0";

/// Digits and at most one decimal point, never empty.
///
/// An empty or reset buffer reads `"0"`. Key presses never grow it past
/// `max_len` characters. Evaluation results are written with
/// [`InputBuffer::set`] and may be longer; such a buffer only shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    max_len: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            text: RESET.to_string(),
            max_len: max_len.max(1),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// True when the buffer holds the reset value `"0"`
    pub fn is_reset(&self) -> bool {
        self.text == RESET
    }

    /// Add one key to the buffer.
    ///
    /// A digit typed over `"0"` replaces it. Rejected keys leave the
    /// buffer unchanged.
    pub fn push(&mut self, token: char) -> Result<(), InputRejected> {
        if !is_digit_token(token) {
            return Err(InputRejected::NotADigit(token));
        }

        if token != '.' {
            if self.is_reset() {
                self.text.clear();
                self.text.push(token);
                return Ok(());
            }
            // "-0" left behind by backspacing a negative result
            if self.text == NEGATIVE_ZERO {
                self.text.truncate(1);
                self.text.push(token);
                return Ok(());
            }
        }

        if token == '.' && self.text.contains('.') {
            return Err(InputRejected::DuplicateDecimal);
        }

        if self.len() >= self.max_len {
            return Err(InputRejected::BufferFull(self.max_len));
        }

        self.text.push(token);
        Ok(())
    }

    /// Drop the last character, falling back to `"0"`
    pub fn pop(&mut self) {
        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(RESET);
    }

    /// Replace the contents with a formatted result
    pub fn set(&mut self, text: String) {
        if text.is_empty() {
            self.reset();
        } else {
            self.text = text;
        }
    }

    /// Read the buffer as a number, if it is one
    pub fn parse(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys the buffer accepts: `0`-`9` and `.`
pub fn is_digit_token(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
