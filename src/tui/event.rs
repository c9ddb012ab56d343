use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Keyboard input already resolved to a calculator action
    Press(Action),
    /// Left click at (column, row)
    Click(u16, u16),
    Resize,
}

/// Wait up to `timeout` for the next event we care about.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Translate a raw crossterm event. Returns `None` for anything ignored.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event).map(TuiEvent::Press),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Action> {
    // Some terminals report releases and repeats too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::trace!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        // Shift is part of `+` and `*` on most layouts, so modifiers are ignored here
        (_, KeyCode::Char(c)) => Action::from_key(c),
        (_, KeyCode::Enter) => Some(Action::Compute),
        (_, KeyCode::Esc) => Some(Action::Clear),
        (_, KeyCode::Backspace) => Some(Action::DeleteLast),
        _ => None,
    }
}
