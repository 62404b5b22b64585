//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! from core logic, the terminal view and the input layer alike.
//!
//! # Coordinates
//!
//! Two frames are in play:
//!
//! - **Directions** are unit vectors with `y` pointing *up* (`UP = (0, 1)`),
//!   which makes a counter-clockwise quarter turn the usual `(x, y) -> (-y, x)`.
//! - **Board positions** ([`Pos`]) use screen order: `x` grows to the right,
//!   `y` grows *down*. The neighbour of `(x, y)` in direction `d` is
//!   `(x + d.x, y - d.y)`; see [`Pos::step`].
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the event loop (~60 FPS) |
//! | `DEFAULT_CHECK_INTERVAL_MS` | 10 | Period of the repeating lose check |
//! | `DEFAULT_START_TIMER_MS` | 30000 | Countdown at game start |
//!
//! # Difficulty / Skill Tables
//!
//! | Level | Power nodes | Move budget |
//! |-------|-------------|-------------|
//! | 0 | 2 | 70 |
//! | 1 | 3 | 50 |
//! | 2 | 4 | 30 |
//!
//! Boards are limited to `MAX_BOARD_DIM` (256) cells per side and
//! `MAX_NUM_SOURCES` (64) sources.
//!
//! # Examples
//!
//! ```
//! use tui_pipes_types::{Direction, Rotation, TileKind};
//!
//! assert_eq!(TileKind::from_index(3), Some(TileKind::Straight));
//! assert_eq!(Direction::RIGHT.rotated(Rotation::R90), Direction::UP);
//! assert_eq!(Rotation::R270.rotate_ccw(), Rotation::R0);
//! ```

/// Frame interval of the event loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default period of the repeating lose-condition check (10ms)
pub const DEFAULT_CHECK_INTERVAL_MS: u32 = 10;

/// Default countdown at game start (30 seconds)
pub const DEFAULT_START_TIMER_MS: i64 = 30_000;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 8;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 6;

/// Largest accepted board width or height in cells
pub const MAX_BOARD_DIM: u16 = 256;

/// Largest accepted number of power sources
pub const MAX_NUM_SOURCES: u32 = 64;

/// Default number of power sources placed on the board
pub const DEFAULT_NUM_SOURCES: u32 = 1;

/// Default preview queue capacity before skill adjustment
pub const DEFAULT_PREVIEW_CAPACITY: usize = 4;

/// Node count before any difficulty is applied
pub const DEFAULT_NUM_NODES: u32 = 2;

/// Move budget before any skill is applied
pub const DEFAULT_NUM_MOVES: i32 = 15;

/// Power nodes per difficulty level (index = dropdown value)
pub const DIFFICULTY_NODE_COUNTS: [u32; 3] = [2, 3, 4];

/// Move budget per skill level (index = dropdown value)
pub const SKILL_MOVE_BUDGETS: [i32; 3] = [70, 50, 30];


/// Tile shapes in catalog order.
///
/// The ordinal matters: sprites are assigned to kinds by position, and random
/// draws only pick from the inner range of the registry (see
/// `tui_pipes_core::catalog`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TileKind {
    /// Nothing placed
    #[default]
    Empty,
    /// Four-way cross
    Quad,
    /// Elbow
    Angle,
    /// Straight pipe
    Straight,
    /// Three-way junction
    T,
    /// Power node (board fixture)
    Node,
}

impl TileKind {
    /// Number of kinds in the catalog
    pub const COUNT: usize = 6;

    /// All kinds in catalog order
    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Empty,
        TileKind::Quad,
        TileKind::Angle,
        TileKind::Straight,
        TileKind::T,
        TileKind::Node,
    ];

    /// Catalog ordinal
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a catalog ordinal
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pipes_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_str("angle"), Some(TileKind::Angle));
    /// assert_eq!(TileKind::from_str("T"), Some(TileKind::T));
    /// assert_eq!(TileKind::from_str("pipe"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(TileKind::Empty),
            "quad" => Some(TileKind::Quad),
            "angle" => Some(TileKind::Angle),
            "straight" => Some(TileKind::Straight),
            "t" => Some(TileKind::T),
            "node" => Some(TileKind::Node),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Empty => "empty",
            TileKind::Quad => "quad",
            TileKind::Angle => "angle",
            TileKind::Straight => "straight",
            TileKind::T => "t",
            TileKind::Node => "node",
        }
    }
}

/// Axis-aligned unit vector (`y` up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

impl Direction {
    pub const RIGHT: Direction = Direction { x: 1, y: 0 };
    pub const LEFT: Direction = Direction { x: -1, y: 0 };
    pub const UP: Direction = Direction { x: 0, y: 1 };
    pub const DOWN: Direction = Direction { x: 0, y: -1 };

    /// The four cardinal directions, counter-clockwise from `RIGHT`
    pub const CARDINALS: [Direction; 4] = [
        Direction::RIGHT,
        Direction::UP,
        Direction::LEFT,
        Direction::DOWN,
    ];

    /// Rotate a quarter turn counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        Direction {
            x: -self.y,
            y: self.x,
        }
    }

    /// Rotate by a whole rotation
    pub fn rotated(self, rotation: Rotation) -> Self {
        let mut d = self;
        for _ in 0..rotation.quarter_turns() {
            d = d.rotate_ccw();
        }
        d
    }

    pub fn opposite(self) -> Self {
        Direction {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Single-bit mask (right=1, up=2, left=4, down=8)
    pub fn bit(self) -> u8 {
        match (self.x, self.y) {
            (1, 0) => 1,
            (0, 1) => 2,
            (-1, 0) => 4,
            (0, -1) => 8,
            _ => 0,
        }
    }
}

/// Counter-clockwise quarter-turn rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Build from a quarter-turn count (wraps modulo 4)
    pub fn from_quarter_turns(turns: u32) -> Self {
        Self::ALL[(turns % 4) as usize]
    }

    pub fn quarter_turns(self) -> u32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    pub fn degrees(self) -> u32 {
        self.quarter_turns() * 90
    }

    /// Add a counter-clockwise quarter turn
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pipes_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_ccw(), Rotation::R90);
    /// assert_eq!(Rotation::R270.rotate_ccw(), Rotation::R0);
    /// ```
    pub fn rotate_ccw(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }
}

/// Board cell coordinate (`y` grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Neighbour in `dir`, or `None` when it would leave the non-negative quadrant.
    ///
    /// Upper bounds are the board's concern.
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let x = self.x as i32 + dir.x as i32;
        let y = self.y as i32 - dir.y as i32;
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return None;
        }
        Some(Pos::new(x as u16, y as u16))
    }
}

/// Player actions that modify the session
///
/// Used by keyboard input and by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one cell left
    CursorLeft,
    /// Move the board cursor one cell right
    CursorRight,
    /// Move the board cursor one cell up
    CursorUp,
    /// Move the board cursor one cell down
    CursorDown,
    /// Place the cursor tile on the cell under the board cursor
    Place,
    /// Rotate the placed tile under the board cursor
    Rotate,
    /// Start the game from the start panel
    Start,
    /// Step the difficulty selector
    CycleDifficulty,
    /// Step the skill selector
    CycleSkill,
    /// Reload the scene (fresh session, selectors kept)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pipes_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("place"), Some(GameAction::Place));
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("drop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "place" => Some(GameAction::Place),
            "rotate" => Some(GameAction::Rotate),
            "start" => Some(GameAction::Start),
            "cycledifficulty" => Some(GameAction::CycleDifficulty),
            "cycleskill" => Some(GameAction::CycleSkill),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::Place => "place",
            GameAction::Rotate => "rotate",
            GameAction::Start => "start",
            GameAction::CycleDifficulty => "cycleDifficulty",
            GameAction::CycleSkill => "cycleSkill",
            GameAction::Restart => "restart",
        }
    }
}
