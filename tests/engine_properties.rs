//! Property tests for the calculator engine.
//!
//! Any sequence of actions must keep the state coherent: one decimal point at
//! most, a non-empty readout, and operator/operand always set together.

use pocketcalc::core::action::{self, Action, Effect, Numeral, update};
use pocketcalc::core::arithmetic::Operator;
use pocketcalc::core::state::{Calculator, Readout};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn numeral_strategy() -> impl Strategy<Value = Numeral> {
    prop_oneof![
        4 => (0u8..=9u8).prop_filter_map("digit", Numeral::digit),
        1 => Just(Numeral::Point),
    ]
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Every action except Quit, weighted towards digit entry.
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => numeral_strategy().prop_map(Action::Append),
        2 => operator_strategy().prop_map(Action::SetOperator),
        1 => Just(Action::Compute),
        1 => Just(Action::Clear),
        1 => Just(Action::DeleteLast),
    ]
}

fn run(actions: &[Action]) -> Calculator {
    actions
        .iter()
        .fold(Calculator::new(), |calc, &a| update(&calc, a).0)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_state_stays_coherent(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        for a in actions {
            calc = update(&calc, a).0;

            prop_assert!(!calc.display().is_empty());
            prop_assert!(calc.display().matches('.').count() <= 1);
            prop_assert_eq!(calc.operator().is_some(), calc.previous_input().is_some());
            if calc.is_error() {
                prop_assert_eq!(calc.display(), "Error");
                prop_assert_eq!(calc.operator(), None);
            }
        }
    }

    #[test]
    fn prop_digit_entry_has_one_point_at_most(numerals in prop::collection::vec(numeral_strategy(), 0..40)) {
        let calc = numerals
            .into_iter()
            .fold(Calculator::new(), |calc, n| action::append_digit(&calc, n));
        prop_assert!(calc.display().matches('.').count() <= 1);
    }

    #[test]
    fn prop_clear_always_resets(actions in prop::collection::vec(action_strategy(), 0..30), repeats in 1usize..4) {
        let mut calc = run(&actions);
        for _ in 0..repeats {
            calc = update(&calc, Action::Clear).0;
            prop_assert_eq!(&calc, &Calculator::new());
            prop_assert_eq!(calc.display(), "0");
            prop_assert_eq!(calc.operator(), None);
            prop_assert_eq!(calc.previous_input(), None);
        }
    }

    #[test]
    fn prop_delete_last_removes_one_char(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let calc = run(&actions);
        let after = action::delete_last(&calc);
        match calc.readout() {
            Readout::Entry(text) if text.len() > 1 => {
                prop_assert_eq!(after.display(), &text[..text.len() - 1]);
            }
            _ => prop_assert_eq!(after.display(), "0"),
        }
        prop_assert_eq!(after.operator(), calc.operator());
    }

    #[test]
    fn prop_compute_clears_pending(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let calc = action::compute(&run(&actions));
        prop_assert_eq!(calc.operator(), None);
        prop_assert_eq!(calc.previous_input(), None);
    }

    #[test]
    fn prop_integer_addition(a in 1u32..100_000, b in 0u32..100_000) {
        let mut calc = Calculator::new();
        let script = format!("{a}+{b}=");
        for c in script.chars() {
            calc = update(&calc, Action::from_key(c).unwrap()).0;
        }
        prop_assert_eq!(calc.display(), (a + b).to_string());
    }

    #[test]
    fn prop_update_effect_matches_change(actions in prop::collection::vec(action_strategy(), 0..30), next in action_strategy()) {
        let calc = run(&actions);
        let (after, effect) = update(&calc, next);
        let expected = if after == calc { Effect::None } else { Effect::Refresh };
        prop_assert_eq!(effect, expected);
    }
}

// ============================================================================
// Worked examples
// ============================================================================

/// Integration tests cannot reach the crate's `#[cfg(test)]` helpers, so this
/// mirrors `test_support::script_action` / `run_keys`: `C` clears, `<` deletes
/// and every other key goes through `Action::from_key`. Keep the two in step.
fn keys(script: &str) -> Calculator {
    let mut calc = Calculator::new();
    for c in script.chars() {
        let action = match c {
            'C' => Action::Clear,
            '<' => Action::DeleteLast,
            _ => Action::from_key(c).expect("script key"),
        };
        calc = update(&calc, action).0;
    }
    calc
}

#[test]
fn five_plus_three() {
    assert_eq!(keys("5+3=").display(), "8");
}

#[test]
fn chained_addition_without_equals() {
    assert_eq!(keys("9+1+2=").display(), "12");
}

#[test]
fn leading_point() {
    assert_eq!(keys(".").display(), "0.");
}

#[test]
fn divide_by_zero_shows_error_and_clears_operator() {
    let calc = keys("6/0=");
    assert_eq!(calc.display(), "Error");
    assert_eq!(calc.operator(), None);
    assert_eq!(calc.previous_input(), None);

    // Ready for new input straight away
    assert_eq!(keys("6/0=4*2=").display(), "8");
}

#[test]
fn quit_leaves_state_untouched() {
    let calc = keys("12+3");
    let (after, effect) = update(&calc, Action::Quit);
    assert_eq!(effect, Effect::Quit);
    assert_eq!(after, calc);
}
