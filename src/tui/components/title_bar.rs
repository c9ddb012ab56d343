//! # TitleBar Component
//!
//! Top status line showing the application name and the pending operation.
//!
//! ## Conditional Formatting
//!
//! 1. **Operator pending**: `"pocketcalc | 9 +"`
//! 2. **Default**: `"pocketcalc"`
//!
//! The bar is purely presentational. It receives the pending operation as a
//! prop and has no internal state.

use crate::core::state::Pending;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub const APP_TITLE: &str = "pocketcalc";

pub struct TitleBar {
    /// Captured operand and operator, if one is waiting for its second operand
    pub pending: Option<Pending>,
}

impl TitleBar {
    pub fn new(pending: Option<Pending>) -> Self {
        Self { pending }
    }

    pub fn text(&self) -> String {
        match &self.pending {
            Some(pending) => format!(
                "{} | {} {}",
                APP_TITLE,
                pending.operand,
                pending.operator.symbol()
            ),
            None => APP_TITLE.to_string(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
