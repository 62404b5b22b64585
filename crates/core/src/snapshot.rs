use crate::board::CellRole;
use crate::session::{Labels, LoseReason, Panels, SessionState};
use crate::settings::{Difficulty, Skill};
use crate::types::{Pos, Rotation, TileKind};

/// Render-ready view of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileSnapshot {
    pub kind: TileKind,
    /// Exposed directions as bits (right=1, up=2, left=4, down=8)
    pub mask: u8,
    pub rotation: Rotation,
    pub color: [u8; 3],
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSnapshot {
    pub tile: TileSnapshot,
    pub role: CellRole,
    pub activated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width * height` entries
    pub cells: Vec<CellSnapshot>,
    pub cursor: Pos,
    pub cursor_tile: TileSnapshot,
    pub queue: Vec<TileSnapshot>,
    pub state: SessionState,
    pub lose_reason: Option<LoseReason>,
    pub panels: Panels,
    pub labels: Labels,
    pub num_nodes: u32,
    pub nodes_powered: u32,
    pub nodes_total: u32,
    pub difficulty: Option<Difficulty>,
    pub skill: Option<Skill>,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn cell(&self, pos: Pos) -> Option<&CellSnapshot> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.cells
            .get(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}
