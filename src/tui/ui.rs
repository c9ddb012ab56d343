use crate::core::state::Calculator;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::display::DISPLAY_HEIGHT;
use crate::tui::components::keypad::MIN_HEIGHT as KEYPAD_MIN_HEIGHT;
use crate::tui::components::{Display, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub const HELP_TEXT: &str = "Enter/= compute · Esc clear · Backspace delete · q quit";

pub fn draw_ui(frame: &mut Frame, calc: &Calculator, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(DISPLAY_HEIGHT),
        Min(KEYPAD_MIN_HEIGHT),
        Length(1),
    ]);
    let [title_area, display_area, keypad_area, help_area] = layout.areas(frame.area());

    TitleBar::new(calc.pending().cloned()).render(frame, title_area);
    Display::new(calc.readout().clone()).render(frame, display_area);

    if tui.show_keypad {
        tui.keypad.render(frame, keypad_area);
    }

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
