//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top line showing the pending operation
//! - `Display`: The readout field
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Keypad`: Clickable button grid; remembers its area and the last press
//!
//! Components receive external data as props, not by reaching into the
//! calculator state:
//!
//! ```rust,ignore
//! Display::new(calc.readout().clone()).render(frame, area);
//! ```

pub mod display;
pub mod keypad;
pub mod title_bar;

pub use display::Display;
pub use keypad::Keypad;
pub use title_bar::TitleBar;
