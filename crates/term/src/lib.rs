//! Terminal game renderer.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled cells and
//! flushes it to the terminal with diffing. Widgets and layout engines are
//! avoided; the board maps directly to cells so pointer positions can be
//! mapped back to board cells.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pipes_core as core;
pub use tui_pipes_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{pipe_glyph, AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
