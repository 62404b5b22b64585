//! TUI Pipes (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pipes::{core,engine,input,term,types}`
//! and hosts the binary's logging setup and frame clock.

pub mod clock;
pub mod logging;

pub use tui_pipes_core as core;
pub use tui_pipes_engine as engine;
pub use tui_pipes_input as input;
pub use tui_pipes_term as term;
pub use tui_pipes_types as types;
