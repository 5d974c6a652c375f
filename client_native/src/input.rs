//! Keyboard boundary
//!
//! The pause toggle and quit are the only local controls; everything else
//! comes in over the control channel.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePause,
    Quit,
}

/// Drain pending key events without blocking.
///
/// The loop's cadence is owned by the control channel, so this must never
/// wait; it only picks up keys pressed since the last iteration.
pub fn poll_keys() -> io::Result<Option<KeyCommand>> {
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char(' ') => return Ok(Some(KeyCommand::TogglePause)),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(KeyCommand::Quit)),
                _ => {}
            }
        }
    }
    Ok(None)
}
