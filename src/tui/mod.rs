//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One event at a time: poll, run `update()` to completion, redraw. Nothing
//! animates, so the loop only redraws after an event or a resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Calculator;
use crate::tui::component::EventHandler;
use crate::tui::components::Keypad;
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub keypad: Keypad,
    pub show_keypad: bool,
}

impl TuiState {
    pub fn new(show_keypad: bool) -> Self {
        Self {
            keypad: Keypad::new(),
            show_keypad,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, config));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> io::Result<()> {
    let mut calc = Calculator::new();
    let mut tui = TuiState::new(config.show_keypad);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &calc, &mut tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(config.poll_interval)? else {
            continue;
        };
        needs_redraw = true;

        // Resize just needs a redraw (already flagged above)
        if matches!(event, TuiEvent::Resize) {
            continue;
        }

        // Keys pass through the keypad so the matching button lights up
        let action = if tui.show_keypad {
            tui.keypad.handle_event(&event)
        } else {
            match event {
                TuiEvent::Press(action) => Some(action),
                _ => None,
            }
        };
        let Some(action) = action else {
            continue;
        };

        debug!("Action: {:?}", action);
        let (next, effect) = update(&calc, action);
        calc = next;

        match effect {
            Effect::Quit => break,
            Effect::Refresh => debug!("Display: {}", calc.display()),
            Effect::None => {}
        }
    }

    info!("Event loop finished");
    Ok(())
}
