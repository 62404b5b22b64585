//! Board module - the grid of pipe tiles
//!
//! Cells are stored row-major in a flat `Vec`. Each cell holds a [`Tile`], a
//! [`CellRole`] and an `activated` flag. Sources and power nodes are fixtures:
//! they are placed by [`Board::initialize`] and cannot be replaced or rotated.
//!
//! Activation is a breadth-first flood from every source. Power flows from a
//! cell to its neighbour in direction `d` only when the cell exposes `d` and
//! the neighbour exposes the opposite direction.

use std::collections::VecDeque;

use thiserror::Error;

use crate::catalog::{rotated_connections, SpriteId};
use crate::rng::TileGenerator;
use crate::tile::Tile;
use crate::types::{Direction, Pos, Rotation, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellRole {
    /// Player-editable
    #[default]
    Open,
    /// Power source fixture
    Source,
    /// Power node fixture
    Node,
}

impl CellRole {
    pub fn is_fixed(self) -> bool {
        self != CellRole::Open
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub tile: Tile,
    pub role: CellRole,
    pub activated: bool,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0:?} is outside the board")]
    OutOfBounds(Pos),
    #[error("cell {0:?} holds a fixture")]
    FixedCell(Pos),
    #[error("cell {0:?} has no tile to rotate")]
    EmptyCell(Pos),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    sources: Vec<Pos>,
    power_nodes: Vec<Pos>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            sources: Vec::new(),
            power_nodes: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn sources(&self) -> &[Pos] {
        &self.sources
    }

    pub fn power_node_positions(&self) -> &[Pos] {
        &self.power_nodes
    }

    /// Cells of every power node
    pub fn power_nodes(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.power_nodes.iter().filter_map(move |&p| self.get(p))
    }

    pub fn activated_node_count(&self) -> usize {
        self.power_nodes().filter(|c| c.activated).count()
    }

    pub fn all_nodes_activated(&self) -> bool {
        self.power_nodes().all(|c| c.activated)
    }

    /// Clear the grid and place fixtures on distinct random cells.
    ///
    /// Sources are four-way `Quad` tiles, nodes are `Node` tiles. When the grid
    /// is too small, as many fixtures as fit are placed (sources first).
    pub fn initialize(&mut self, num_sources: u32, num_nodes: u32, gen: &mut TileGenerator) {
        for cell in &mut self.cells {
            cell.tile.reset();
            cell.role = CellRole::Open;
            cell.activated = false;
        }
        self.sources.clear();
        self.power_nodes.clear();

        let wanted = usize::try_from(num_sources as u64 + num_nodes as u64).unwrap_or(usize::MAX);
        let picks = gen.distinct_cells(self.width, self.height, wanted);
        for (i, pos) in picks.into_iter().enumerate() {
            if i < num_sources as usize {
                self.put_fixture(pos, CellRole::Source, TileKind::Quad);
            } else {
                self.put_fixture(pos, CellRole::Node, TileKind::Node);
            }
        }

        self.refresh_activation();
    }

    /// Place a fixture directly (board setup and tests).
    pub fn put_fixture(&mut self, pos: Pos, role: CellRole, kind: TileKind) {
        let Some(i) = self.index(pos) else {
            return;
        };
        let cell = &mut self.cells[i];
        cell.tile.set(
            SpriteId(kind.index() as u8),
            kind,
            rotated_connections(kind, Rotation::R0),
            Rotation::R0,
        );
        cell.role = role;
        match role {
            CellRole::Source if !self.sources.contains(&pos) => self.sources.push(pos),
            CellRole::Node if !self.power_nodes.contains(&pos) => self.power_nodes.push(pos),
            _ => {}
        }
    }

    fn open_cell_mut(&mut self, pos: Pos) -> Result<&mut Cell, BoardError> {
        let i = self.index(pos).ok_or(BoardError::OutOfBounds(pos))?;
        let cell = &mut self.cells[i];
        if cell.role.is_fixed() {
            return Err(BoardError::FixedCell(pos));
        }
        Ok(cell)
    }

    /// Check that `pos` can take a tile without changing anything
    pub fn can_place(&self, pos: Pos) -> Result<(), BoardError> {
        let cell = self.get(pos).ok_or(BoardError::OutOfBounds(pos))?;
        if cell.role.is_fixed() {
            return Err(BoardError::FixedCell(pos));
        }
        Ok(())
    }

    /// Check that `pos` holds a rotatable tile
    pub fn can_rotate(&self, pos: Pos) -> Result<(), BoardError> {
        self.can_place(pos)?;
        if self.get(pos).map_or(true, |c| c.tile.is_empty()) {
            return Err(BoardError::EmptyCell(pos));
        }
        Ok(())
    }

    /// Put `tile` on an open cell, returning the tile it replaced.
    ///
    /// Activation is not recomputed; call [`Board::refresh_activation`].
    pub fn place(&mut self, pos: Pos, tile: &Tile) -> Result<Tile, BoardError> {
        let cell = self.open_cell_mut(pos)?;
        let previous = cell.tile.clone();
        cell.tile.copy_from(tile);
        cell.tile.active = true;
        Ok(previous)
    }

    /// Rotate the tile on an open cell a quarter turn counter-clockwise.
    pub fn rotate(&mut self, pos: Pos) -> Result<(), BoardError> {
        let cell = self.open_cell_mut(pos)?;
        if cell.tile.is_empty() {
            return Err(BoardError::EmptyCell(pos));
        }
        cell.tile.rotate_ccw();
        Ok(())
    }

    /// Neighbour of `pos` in `dir`, if it is on the board
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        pos.step(dir).filter(|p| self.contains(*p))
    }

    /// Recompute which cells carry power. Returns the number of powered cells.
    pub fn refresh_activation(&mut self) -> usize {
        for cell in &mut self.cells {
            cell.activated = false;
        }

        let mut queue: VecDeque<Pos> = VecDeque::with_capacity(self.cells.len());
        for &src in &self.sources {
            if let Some(i) = self.index(src) {
                if !self.cells[i].activated {
                    self.cells[i].activated = true;
                    queue.push_back(src);
                }
            }
        }

        let mut powered = queue.len();
        while let Some(pos) = queue.pop_front() {
            let Some(i) = self.index(pos) else {
                continue;
            };
            let from = self.cells[i].tile.directions.clone();
            for dir in from {
                let Some(next) = self.neighbor(pos, dir) else {
                    continue;
                };
                let Some(j) = self.index(next) else {
                    continue;
                };
                let target = &mut self.cells[j];
                if target.activated || !target.tile.connects(dir.opposite()) {
                    continue;
                }
                target.activated = true;
                powered += 1;
                queue.push_back(next);
            }
        }

        powered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpriteRegistry;

    fn tile(kind: TileKind, rotation: Rotation) -> Tile {
        let mut t = Tile::blank();
        t.set(
            SpriteId(kind.index() as u8),
            kind,
            rotated_connections(kind, rotation),
            rotation,
        );
        t
    }

    /// Source at (0,0), node at (3,0) on a 4x2 board.
    fn corridor() -> Board {
        let mut b = Board::new(4, 2);
        b.put_fixture(Pos::new(0, 0), CellRole::Source, TileKind::Quad);
        b.put_fixture(Pos::new(3, 0), CellRole::Node, TileKind::Node);
        b
    }

    #[test]
    fn new_board_is_empty() {
        let b = Board::new(5, 3);
        assert_eq!(b.cells().len(), 15);
        assert!(b.cells().iter().all(|c| c.tile.is_empty() && !c.activated));
        assert!(b.all_nodes_activated());
    }

    #[test]
    fn source_alone_powers_only_itself() {
        let mut b = corridor();
        assert_eq!(b.refresh_activation(), 1);
        assert!(!b.all_nodes_activated());
    }

    #[test]
    fn horizontal_pipes_connect_source_to_node() {
        let mut b = corridor();
        let horizontal = tile(TileKind::Straight, Rotation::R90);
        b.place(Pos::new(1, 0), &horizontal).unwrap();
        b.place(Pos::new(2, 0), &horizontal).unwrap();

        assert_eq!(b.refresh_activation(), 4);
        assert!(b.all_nodes_activated());
        assert_eq!(b.activated_node_count(), 1);
    }

    #[test]
    fn mismatched_pipe_blocks_power() {
        let mut b = corridor();
        b.place(Pos::new(1, 0), &tile(TileKind::Straight, Rotation::R90))
            .unwrap();
        // Vertical straight does not expose LEFT/RIGHT.
        b.place(Pos::new(2, 0), &tile(TileKind::Straight, Rotation::R0))
            .unwrap();

        b.refresh_activation();
        assert!(b.get(Pos::new(1, 0)).unwrap().activated);
        assert!(!b.get(Pos::new(2, 0)).unwrap().activated);
        assert!(!b.all_nodes_activated());

        b.rotate(Pos::new(2, 0)).unwrap();
        b.refresh_activation();
        assert!(b.all_nodes_activated());
    }

    #[test]
    fn angle_routes_around_a_corner() {
        // Source (0,0) -> Angle at (1,0) turning down -> node at (1,1)
        let mut b = Board::new(2, 2);
        b.put_fixture(Pos::new(0, 0), CellRole::Source, TileKind::Quad);
        b.put_fixture(Pos::new(1, 1), CellRole::Node, TileKind::Node);
        // Unrotated Angle exposes LEFT and DOWN.
        b.place(Pos::new(1, 0), &tile(TileKind::Angle, Rotation::R0))
            .unwrap();

        b.refresh_activation();
        assert!(b.all_nodes_activated());
    }

    #[test]
    fn fixtures_cannot_be_replaced_or_rotated() {
        let mut b = corridor();
        let t = tile(TileKind::Quad, Rotation::R0);
        assert_eq!(
            b.place(Pos::new(0, 0), &t),
            Err(BoardError::FixedCell(Pos::new(0, 0)))
        );
        assert_eq!(
            b.rotate(Pos::new(3, 0)),
            Err(BoardError::FixedCell(Pos::new(3, 0)))
        );
        assert_eq!(
            b.place(Pos::new(9, 9), &t),
            Err(BoardError::OutOfBounds(Pos::new(9, 9)))
        );
        assert_eq!(
            b.rotate(Pos::new(1, 1)),
            Err(BoardError::EmptyCell(Pos::new(1, 1)))
        );
    }

    #[test]
    fn place_returns_the_replaced_tile() {
        let mut b = corridor();
        let first = tile(TileKind::T, Rotation::R0);
        let second = tile(TileKind::Angle, Rotation::R180);
        assert!(b.place(Pos::new(1, 1), &first).unwrap().is_empty());
        assert_eq!(b.place(Pos::new(1, 1), &second).unwrap(), first);
    }

    #[test]
    fn initialize_places_distinct_fixtures() {
        let mut gen = TileGenerator::new(Some(5), &SpriteRegistry::default()).unwrap();
        let mut b = Board::new(6, 4);
        b.initialize(1, 4, &mut gen);

        assert_eq!(b.sources().len(), 1);
        assert_eq!(b.power_node_positions().len(), 4);
        let src = b.get(b.sources()[0]).unwrap();
        assert_eq!(src.role, CellRole::Source);
        assert!(src.activated);
        for node in b.power_nodes() {
            assert_eq!(node.role, CellRole::Node);
            assert_eq!(node.tile.kind, TileKind::Node);
        }

        // Re-initializing clears previous fixtures.
        b.initialize(1, 2, &mut gen);
        assert_eq!(b.power_node_positions().len(), 2);
        let fixtures = b.cells().iter().filter(|c| c.role.is_fixed()).count();
        assert_eq!(fixtures, 3);
    }

    #[test]
    fn initialize_with_huge_counts_fills_the_board() {
        let mut gen = TileGenerator::new(Some(9), &SpriteRegistry::default()).unwrap();
        let mut b = Board::new(3, 2);
        b.initialize(u32::MAX, u32::MAX, &mut gen);

        assert_eq!(b.sources().len(), 6);
        assert!(b.power_node_positions().is_empty());
        assert!(b.cells().iter().all(|c| c.role == CellRole::Source));
    }
}
