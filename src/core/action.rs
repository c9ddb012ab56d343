//! # Actions
//!
//! Everything that can happen to the calculator becomes an `Action`.
//! User types `7`? That's `Action::Append(Numeral::Digit(..))` holding a 7.
//! User clicks the `=` button? That's `Action::Compute`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&state, action).0, expected)`.
//! And debuggable: log every action, replay the exact session.

use crate::core::arithmetic::{ArithmeticError, Operator, format_number, parse_operand};
use crate::core::state::{Calculator, INITIAL_INPUT, Pending, Readout};

/// A single decimal digit. Only `Digit::new` builds one, so the value is
/// always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Digit(value)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// A digit `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeral {
    Digit(Digit),
    Point,
}

impl Numeral {
    /// `None` for anything above 9.
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(d) => Some(Numeral::Digit(d)),
            None => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Numeral::Point),
            _ => c.to_digit(10).and_then(|d| Numeral::digit(d as u8)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Numeral::Digit(d) => char::from(b'0' + d.value()),
            Numeral::Point => '.',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Append(Numeral),
    SetOperator(Operator),
    Compute,
    Clear,
    DeleteLast,
    Quit,
}

impl Action {
    /// Maps a printable key to its action. Both front-ends share this table.
    pub fn from_key(c: char) -> Option<Self> {
        if let Some(numeral) = Numeral::from_char(c) {
            return Some(Action::Append(numeral));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Some(Action::SetOperator(op));
        }
        match c {
            '=' => Some(Action::Compute),
            _ => None,
        }
    }
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// State unchanged.
    None,
    /// State changed; redraw the display.
    Refresh,
    Quit,
}

pub fn update(state: &Calculator, action: Action) -> (Calculator, Effect) {
    let next = match action {
        Action::Append(numeral) => append_digit(state, numeral),
        Action::SetOperator(op) => set_operator(state, op),
        Action::Compute => compute(state),
        Action::Clear => clear(),
        Action::DeleteLast => delete_last(state),
        Action::Quit => return (state.clone(), Effect::Quit),
    };
    let effect = if next == *state {
        Effect::None
    } else {
        Effect::Refresh
    };
    (next, effect)
}

pub fn append_digit(state: &Calculator, numeral: Numeral) -> Calculator {
    // The error readout is discarded; typing starts over from "0".
    let current = match &state.current {
        Readout::Entry(text) => text.as_str(),
        Readout::Error => INITIAL_INPUT,
    };

    let entry = match numeral {
        Numeral::Point if current.contains('.') => current.to_string(),
        Numeral::Digit(_) if current == INITIAL_INPUT => numeral.as_char().to_string(),
        _ => {
            let mut text = current.to_string();
            text.push(numeral.as_char());
            text
        }
    };

    Calculator {
        current: Readout::Entry(entry),
        pending: state.pending.clone(),
    }
}

pub fn clear() -> Calculator {
    Calculator::default()
}

pub fn delete_last(state: &Calculator) -> Calculator {
    let entry = match &state.current {
        Readout::Entry(text) if text.chars().count() > 1 => {
            let mut text = text.clone();
            text.pop();
            text
        }
        _ => INITIAL_INPUT.to_string(),
    };

    Calculator {
        current: Readout::Entry(entry),
        pending: state.pending.clone(),
    }
}

pub fn set_operator(state: &Calculator, op: Operator) -> Calculator {
    // Nothing entered yet, or nothing usable after an error.
    if state.current.is_initial() || matches!(state.current, Readout::Error) {
        return state.clone();
    }

    // Chain: only auto-compute when an operator is already pending.
    let operand_source = if state.pending.is_some() {
        compute(state)
    } else {
        state.clone()
    };

    match operand_source.current {
        Readout::Entry(operand) => Calculator {
            current: Readout::default(),
            pending: Some(Pending { operator: op, operand }),
        },
        Readout::Error => operand_source,
    }
}

pub fn compute(state: &Calculator) -> Calculator {
    let Some(pending) = &state.pending else {
        return state.clone();
    };

    let lhs = parse_operand(&pending.operand);
    let rhs = state.current.value();

    let current = match pending.operator.apply(lhs, rhs) {
        Ok(value) => Readout::Entry(format_number(value)),
        Err(ArithmeticError::DivisionByZero) => Readout::Error,
    };

    Calculator {
        current,
        pending: None,
    }
}
