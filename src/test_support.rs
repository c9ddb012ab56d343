//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::state::Calculator;

/// Maps one script character to an action.
///
/// Printable keys follow `Action::from_key`; `C` clears, `<` deletes the
/// last character. `keys()` in `tests/engine_properties.rs` copies this table
/// for the integration tests; change both together.
pub fn script_action(c: char) -> Action {
    match c {
        'C' => Action::Clear,
        '<' => Action::DeleteLast,
        _ => Action::from_key(c).unwrap_or_else(|| panic!("no action for script key {c:?}")),
    }
}

/// Feeds a key script through `update` starting from a fresh calculator.
pub fn run_keys(script: &str) -> Calculator {
    script.chars().fold(Calculator::new(), |calc, c| {
        update(&calc, script_action(c)).0
    })
}
