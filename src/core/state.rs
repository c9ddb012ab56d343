//! # Calculator State
//!
//! The whole calculator is one small record. This module contains domain
//! state only - the keypad, highlight and layout live in the `tui` module.
//!
//! ```text
//! Calculator
//! ├── current: Readout           // operand being typed, or the error readout
//! └── pending: Option<Pending>   // operator + captured operand, set together
//! ```
//!
//! State changes only happen through the transition functions in action.rs.
//! Each one takes the current state and returns the next.

use crate::core::arithmetic::{Operator, parse_operand};

pub const INITIAL_INPUT: &str = "0";
pub const ERROR_TEXT: &str = "Error";

/// What the display field shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readout {
    /// Digits (and at most one point) typed or produced by a computation.
    Entry(String),
    /// Result of a division by zero. Rendered as `ERROR_TEXT`, never parsed.
    Error,
}

impl Readout {
    pub fn text(&self) -> &str {
        match self {
            Readout::Entry(text) => text,
            Readout::Error => ERROR_TEXT,
        }
    }

    /// Operand value; the error readout has none and counts as NaN.
    pub fn value(&self) -> f64 {
        match self {
            Readout::Entry(text) => parse_operand(text),
            Readout::Error => f64::NAN,
        }
    }

    /// True for the untouched `"0"` entry.
    pub fn is_initial(&self) -> bool {
        matches!(self, Readout::Entry(text) if text == INITIAL_INPUT)
    }
}

impl Default for Readout {
    fn default() -> Self {
        Readout::Entry(INITIAL_INPUT.to_string())
    }
}

/// An operator waiting for its right-hand operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub operator: Operator,
    pub operand: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    pub(crate) current: Readout,
    pub(crate) pending: Option<Pending>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readout(&self) -> &Readout {
        &self.current
    }

    /// Text for the display surface.
    pub fn display(&self) -> &str {
        self.current.text()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn previous_input(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.current, Readout::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_new_defaults() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.operator(), None);
        assert_eq!(calc.previous_input(), None);
        assert!(!calc.is_error());
        assert!(calc.readout().is_initial());
    }

    #[test]
    fn test_error_readout_text_and_value() {
        assert_eq!(Readout::Error.text(), "Error");
        assert!(Readout::Error.value().is_nan());
        assert!(!Readout::Error.is_initial());
    }

    #[test]
    fn test_entry_value() {
        let readout = Readout::Entry("12.5".to_string());
        assert_eq!(readout.value(), 12.5);
        assert!(!readout.is_initial());
    }

    #[test]
    fn test_pending_accessors_agree() {
        let calc = Calculator {
            current: Readout::default(),
            pending: Some(Pending {
                operator: Operator::Divide,
                operand: "6".to_string(),
            }),
        };
        assert_eq!(calc.operator(), Some(Operator::Divide));
        assert_eq!(calc.previous_input(), Some("6"));
    }
}
