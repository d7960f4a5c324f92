use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use stepbar_tui::{Input, Key, convert_event};

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// =============================================================================
// Key Tests
// =============================================================================

#[test]
fn test_quit_keys_convert() {
    assert_eq!(convert_event(key(KeyCode::Char('q'))), Some(Input::Key(Key::Char('q'))));
    assert_eq!(convert_event(key(KeyCode::Esc)), Some(Input::Key(Key::Escape)));
}

#[test]
fn test_navigation_keys_are_dropped() {
    assert_eq!(convert_event(key(KeyCode::Enter)), None);
    assert_eq!(convert_event(key(KeyCode::Left)), None);
    assert_eq!(convert_event(key(KeyCode::Right)), None);
    assert_eq!(convert_event(key(KeyCode::Tab)), None);
}

#[test]
fn test_key_release_is_dropped() {
    let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(convert_event(CrosstermEvent::Key(release)), None);
}

// =============================================================================
// Mouse Tests
// =============================================================================

#[test]
fn test_left_click_converts() {
    assert_eq!(
        convert_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
        Some(Input::Click { x: 4, y: 2 })
    );
}

#[test]
fn test_other_mouse_events_are_dropped() {
    assert_eq!(convert_event(mouse(MouseEventKind::Down(MouseButton::Right), 4, 2)), None);
    assert_eq!(convert_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 2)), None);
    assert_eq!(convert_event(mouse(MouseEventKind::Moved, 4, 2)), None);
}

// =============================================================================
// Terminal Tests
// =============================================================================

#[test]
fn test_resize_converts() {
    assert_eq!(
        convert_event(CrosstermEvent::Resize(80, 24)),
        Some(Input::Resize { width: 80, height: 24 })
    );
}
