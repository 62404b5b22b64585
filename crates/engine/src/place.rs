use thiserror::Error;

use tui_pipes_core::{BoardError, Session, SessionState};
use tui_pipes_types::Pos;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    #[error("game is not running")]
    NotRunning,
    #[error("target cell is outside the board")]
    OutOfBounds,
    #[error("target cell holds a fixture")]
    FixedCell,
    #[error("target cell has no tile")]
    EmptyCell,
    #[error("no moves left")]
    NoMovesLeft,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotRunning => "not_running",
            PlaceError::NoMovesLeft => "no_moves",
            PlaceError::OutOfBounds | PlaceError::FixedCell | PlaceError::EmptyCell => {
                "invalid_target"
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotRunning => "game is not running",
            PlaceError::OutOfBounds => "target cell is outside the board",
            PlaceError::FixedCell => "sources and power nodes cannot be changed",
            PlaceError::EmptyCell => "there is no tile to rotate",
            PlaceError::NoMovesLeft => "no moves left",
        }
    }
}

impl From<BoardError> for PlaceError {
    fn from(value: BoardError) -> Self {
        match value {
            BoardError::OutOfBounds(_) => PlaceError::OutOfBounds,
            BoardError::FixedCell(_) => PlaceError::FixedCell,
            BoardError::EmptyCell(_) => PlaceError::EmptyCell,
        }
    }
}

fn check_playable(session: &Session) -> Result<(), PlaceError> {
    if session.state() != SessionState::Running {
        return Err(PlaceError::NotRunning);
    }
    if session.num_moves() <= 0 {
        return Err(PlaceError::NoMovesLeft);
    }
    Ok(())
}

/// Move the cursor to `target` and place the cursor tile there.
///
/// The session is left untouched when the request is rejected.
pub fn apply_place(session: &mut Session, target: Pos) -> Result<(), PlaceError> {
    check_playable(session)?;
    session.board().can_place(target)?;

    if !session.move_cursor_to(target) || !session.place_cursor_tile() {
        // Pre-checks cover every rejection the session knows about.
        log::warn!("place at ({}, {}) rejected after validation", target.x, target.y);
        return Err(PlaceError::NotRunning);
    }
    Ok(())
}

/// Move the cursor to `target` and rotate the tile there.
pub fn apply_rotate(session: &mut Session, target: Pos) -> Result<(), PlaceError> {
    check_playable(session)?;
    session.board().can_rotate(target)?;

    if !session.move_cursor_to(target) || !session.rotate_at_cursor() {
        log::warn!("rotate at ({}, {}) rejected after validation", target.x, target.y);
        return Err(PlaceError::NotRunning);
    }
    Ok(())
}
