//! Event handling - convert crossterm events to toolbar input.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
};

/// Input the host loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Left mouse button pressed.
    Click { x: u16, y: u16 },
    /// Key press.
    Key(Key),
    /// Terminal resized.
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Convert a crossterm event, dropping the ones the toolbar has no use for.
pub fn convert_event(event: CrosstermEvent) -> Option<Input> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            convert_key(key.code).map(Input::Key)
        }
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Input::Click {
                x: mouse.column,
                y: mouse.row,
            }),
            _ => None,
        },
        CrosstermEvent::Resize(width, height) => Some(Input::Resize { width, height }),
        CrosstermEvent::FocusGained => Some(Input::FocusGained),
        CrosstermEvent::FocusLost => Some(Input::FocusLost),
        _ => None,
    }
}
