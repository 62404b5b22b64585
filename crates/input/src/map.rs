//! Key and mouse mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::CursorDown),

        // Tiles
        KeyCode::Char(' ') => Some(GameAction::Place),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Rotate),

        // Start panel
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::CycleDifficulty),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::CycleSkill),

        // Reload
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Place,
    Rotate,
}

/// A click at a terminal position (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub col: u16,
    pub row: u16,
}

/// Map a mouse press to a pointer request: left places, right rotates.
pub fn handle_mouse_event(ev: MouseEvent) -> Option<PointerEvent> {
    let action = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerAction::Place,
        MouseEventKind::Down(MouseButton::Right) => PointerAction::Rotate,
        _ => return None,
    };
    Some(PointerEvent {
        action,
        col: ev.column,
        row: ev.row,
    })
}
