//! # Core Application Logic
//!
//! This module contains the calculator engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (Calculator)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │  Keyboard  │          │   Keypad   │
//!             │ (crossterm)│          │  (mouse)   │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Calculator` struct: the readout and the pending operation
//! - [`action`]: The `Action` enum and the transition functions
//! - [`arithmetic`]: Operators and number formatting
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod arithmetic;
pub mod config;
pub mod state;

pub use action::{Action, Digit, Effect, Numeral, update};
pub use arithmetic::{ArithmeticError, Operator};
pub use state::{Calculator, Readout};
