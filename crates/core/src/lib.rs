//! Core game logic - pure, deterministic and testable
//!
//! Everything here is independent of the terminal: the same seed yields the
//! same tiles and fixtures, and time only moves when [`Session::tick`] is
//! called.
//!
//! # Module Structure
//!
//! - [`catalog`]: connection directions per tile kind, rotation and the sprite registry
//! - [`tile`]: the tile value type and its free-list pool
//! - [`rng`]: random tile generation and fixture placement
//! - [`queue`]: the preview conveyor of upcoming tiles
//! - [`settings`]: difficulty and skill selectors
//! - [`board`]: the grid, fixtures and power propagation
//! - [`schedule`]: repeating tasks driven by frame ticks
//! - [`session`]: the game controller and its win/lose lifecycle
//! - [`config`]: defaults, JSON and environment overrides
//!
//! # Example
//!
//! ```
//! use tui_pipes_core::{GameConfig, Session, SessionState};
//! use tui_pipes_types::GameAction;
//!
//! let mut session = Session::new(GameConfig {
//!     seed: Some(7),
//!     ..GameConfig::default()
//! })
//! .unwrap();
//!
//! session.apply_action(GameAction::CycleSkill);
//! session.apply_action(GameAction::Start);
//! assert_eq!(session.state(), SessionState::Running);
//! assert_eq!(session.num_moves(), 50);
//!
//! // Each tick runs the due countdown checks.
//! session.tick(16);
//! assert!(session.timer_ms() < session.start_timer_ms());
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod queue;
pub mod rng;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod tile;

pub use tui_pipes_types as types;

pub use board::{Board, BoardError, Cell, CellRole};
pub use catalog::{connections, rotated_connections, Sprite, SpriteId, SpriteRegistry};
pub use config::GameConfig;
pub use error::{ConfigError, Error, Result};
pub use queue::PreviewQueue;
pub use rng::TileGenerator;
pub use schedule::{Scheduler, TaskHandle};
pub use session::{Labels, LoseReason, Panels, Session, SessionEvent, SessionState};
pub use settings::{Difficulty, Skill};
pub use snapshot::{CellSnapshot, GameSnapshot, TileSnapshot};
pub use tile::{Tile, TilePool};
