//! # Keypad Component
//!
//! The on-screen buttons. Each button maps to the same `Action` its keyboard
//! key produces, so clicking `7` and typing `7` are indistinguishable to the
//! core.
//!
//! ```text
//! [ C ] [ ⌫ ] [ / ] [ * ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0 ] [ . ]
//! ```
//!
//! ## State
//!
//! - `pressed`: the last button triggered, by click or by key, drawn highlighted
//! - `area`: where the keypad was last rendered, for hit testing clicks

use crate::core::action::{Action, Numeral};
use crate::core::arithmetic::Operator;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// Smallest area that still fits one row per button plus the border.
pub const MIN_HEIGHT: u16 = ROWS as u16 + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub action: Action,
}

const fn button(label: &'static str, action: Action) -> Option<KeypadButton> {
    Some(KeypadButton { label, action })
}

const fn digit(label: &'static str, d: u8) -> Option<KeypadButton> {
    match Numeral::digit(d) {
        Some(numeral) => button(label, Action::Append(numeral)),
        None => None,
    }
}

const fn operator(label: &'static str, op: Operator) -> Option<KeypadButton> {
    button(label, Action::SetOperator(op))
}

/// Row-major button grid. `None` slots are left blank.
pub const LAYOUT: [[Option<KeypadButton>; COLS]; ROWS] = [
    [
        button("C", Action::Clear),
        button("⌫", Action::DeleteLast),
        operator("/", Operator::Divide),
        operator("*", Operator::Multiply),
    ],
    [
        digit("7", 7),
        digit("8", 8),
        digit("9", 9),
        operator("-", Operator::Subtract),
    ],
    [
        digit("4", 4),
        digit("5", 5),
        digit("6", 6),
        operator("+", Operator::Add),
    ],
    [
        digit("1", 1),
        digit("2", 2),
        digit("3", 3),
        button("=", Action::Compute),
    ],
    [
        digit("0", 0),
        button(".", Action::Append(Numeral::Point)),
        None,
        None,
    ],
];

#[derive(Debug, Default)]
pub struct Keypad {
    pressed: Option<Action>,
    area: Option<Rect>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressed(&self) -> Option<Action> {
        self.pressed
    }

    pub fn button_at(row: usize, col: usize) -> Option<KeypadButton> {
        LAYOUT.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Grid position of the button that triggers `action`, if there is one.
    pub fn position_of(action: Action) -> Option<(usize, usize)> {
        LAYOUT.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|b| b.is_some_and(|b| b.action == action))
                .map(|col| (row, col))
        })
    }

    /// Highlights the button for `action`; actions without a button clear it.
    pub fn highlight(&mut self, action: Action) {
        self.pressed = Self::position_of(action).map(|_| action);
    }

    /// Maps a screen position to the button under it, using the last rendered area.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Action> {
        let area = self.area?;
        let inner = Block::bordered().inner(area);
        let (btn_width, btn_height) = button_size(inner)?;

        if !inner.contains(Position::new(x, y)) {
            return None;
        }

        let col = ((x - inner.x) / btn_width) as usize;
        let row = ((y - inner.y) / btn_height) as usize;
        Self::button_at(row, col).map(|b| b.action)
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        if self.pressed == Some(button.action) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.action {
            Action::Append(_) => Style::default().fg(Color::White),
            Action::SetOperator(_) => Style::default().fg(Color::Yellow),
            Action::Compute => Style::default().fg(Color::Green),
            Action::Clear | Action::DeleteLast => Style::default().fg(Color::Red),
            Action::Quit => Style::default(),
        }
    }
}

/// Width and height of one button cell, or `None` if the grid does not fit.
fn button_size(inner: Rect) -> Option<(u16, u16)> {
    let width = inner.width / COLS as u16;
    let height = inner.height / ROWS as u16;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = Some(area);

        let block = Block::bordered()
            .title(" Keypad ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some((btn_width, btn_height)) = button_size(inner) else {
            return;
        };

        for (row, buttons) in LAYOUT.iter().enumerate() {
            for (col, slot) in buttons.iter().enumerate() {
                let Some(button) = slot else { continue };
                let cell = Rect::new(
                    inner.x + col as u16 * btn_width,
                    inner.y + row as u16 * btn_height,
                    btn_width,
                    btn_height,
                );
                let style = self.button_style(button);

                // Boxed buttons once there is room for a border, bracketed labels otherwise
                let paragraph = if btn_height >= 3 && btn_width >= 3 {
                    Paragraph::new(button.label)
                        .block(Block::bordered().border_style(style))
                } else {
                    Paragraph::new(format!("[{}]", button.label))
                };
                frame.render_widget(paragraph.style(style).alignment(Alignment::Center), cell);
            }
        }
    }
}

impl EventHandler for Keypad {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let action = match *event {
            TuiEvent::Press(action) => action,
            TuiEvent::Click(x, y) => self.hit_test(x, y)?,
            TuiEvent::Resize => return None,
        };
        self.highlight(action);
        Some(action)
    }
}
