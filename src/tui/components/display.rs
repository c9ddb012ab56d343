//! # Display Component
//!
//! The single text field the calculator writes to. Shows the readout
//! right-aligned inside a bordered box; the error readout is drawn in red.

use crate::core::state::Readout;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

/// Rows the display needs: one line of text plus the border.
pub const DISPLAY_HEIGHT: u16 = 3;

pub struct Display {
    pub readout: Readout,
}

impl Display {
    pub fn new(readout: Readout) -> Self {
        Self { readout }
    }

    fn style(&self) -> Style {
        match self.readout {
            Readout::Entry(_) => Style::default().add_modifier(Modifier::BOLD),
            Readout::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

impl Component for Display {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.readout.text())
            .block(Block::bordered().border_style(Style::default().fg(Color::Cyan)))
            .style(self.style())
            .alignment(Alignment::Right);

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_lines(readout: Readout) -> Vec<String> {
        let backend = TestBackend::new(20, DISPLAY_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut display = Display::new(readout);

        terminal
            .draw(|f| {
                display.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_display_right_aligns_entry() {
        let lines = rendered_lines(Readout::Entry("12.5".to_string()));
        // Inner row ends with the text right before the right border
        assert!(lines[1].ends_with("12.5│"));
    }

    #[test]
    fn test_display_shows_error_text() {
        let lines = rendered_lines(Readout::Error);
        assert!(lines[1].contains("Error"));
    }

    #[test]
    fn test_error_is_red() {
        assert_eq!(Display::new(Readout::Error).style().fg, Some(Color::Red));
        assert_eq!(Display::new(Readout::default()).style().fg, None);
    }
}
