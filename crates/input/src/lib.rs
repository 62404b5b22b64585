//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]s
//! and pointer requests. It knows nothing about layout; turning a pointer
//! position into a board cell is the view's job.

pub mod map;

pub use tui_pipes_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, PointerAction, PointerEvent};
