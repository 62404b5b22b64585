//! Tile instances and the tile pool
//!
//! A [`Tile`] is a reusable slot: the preview queue and the board mutate tiles
//! in place (`copy_from` / `set`) instead of building new ones, and tiles
//! dropped from play go back to a [`TilePool`] where they are reset.

use crate::catalog::{direction_mask, rotate_directions, DirectionSet, SpriteId};
use crate::types::{Direction, Rotation, TileKind};

/// A placed or queued tile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tile {
    pub sprite: SpriteId,
    pub kind: TileKind,
    /// Connections after `rotation` has been applied
    pub directions: DirectionSet,
    pub rotation: Rotation,
    /// Whether the tile is shown / in play
    pub active: bool,
}

impl Tile {
    /// An inactive empty tile.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Copy visual and logical state from `other`.
    pub fn copy_from(&mut self, other: &Tile) {
        self.clone_from(other);
    }

    /// Assign a new identity.
    pub fn set(
        &mut self,
        sprite: SpriteId,
        kind: TileKind,
        directions: DirectionSet,
        rotation: Rotation,
    ) {
        self.sprite = sprite;
        self.kind = kind;
        self.directions = directions;
        self.rotation = rotation;
        self.active = true;
    }

    /// Return to the blank state.
    pub fn reset(&mut self) {
        self.sprite = SpriteId::default();
        self.kind = TileKind::Empty;
        self.directions.clear();
        self.rotation = Rotation::R0;
        self.active = false;
    }

    /// Rotate a quarter turn counter-clockwise in place.
    pub fn rotate_ccw(&mut self) {
        self.directions = rotate_directions(&self.directions, Rotation::R90);
        self.rotation = self.rotation.rotate_ccw();
    }

    pub fn connects(&self, dir: Direction) -> bool {
        self.directions.contains(&dir)
    }

    pub fn is_empty(&self) -> bool {
        self.kind == TileKind::Empty
    }

    pub fn mask(&self) -> u8 {
        direction_mask(&self.directions)
    }
}

/// Free list of released tiles.
///
/// Holds at most [`TilePool::MAX_FREE`] tiles; further releases are dropped.
#[derive(Debug, Clone, Default)]
pub struct TilePool {
    free: Vec<Tile>,
}

impl TilePool {
    pub const MAX_FREE: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    /// Take a blank tile, reusing a released one when available.
    pub fn acquire(&mut self) -> Tile {
        self.free.pop().unwrap_or_default()
    }

    /// Deactivate `tile` and keep it for reuse.
    pub fn release(&mut self, mut tile: Tile) {
        if self.free.len() >= Self::MAX_FREE {
            return;
        }
        tile.reset();
        self.free.push(tile);
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::rotated_connections;

    fn straight() -> Tile {
        let mut t = Tile::blank();
        t.set(
            SpriteId(3),
            TileKind::Straight,
            rotated_connections(TileKind::Straight, Rotation::R0),
            Rotation::R0,
        );
        t
    }

    #[test]
    fn set_activates_tile() {
        let t = straight();
        assert!(t.active);
        assert!(t.connects(Direction::UP));
        assert!(!t.connects(Direction::LEFT));
    }

    #[test]
    fn copy_from_duplicates_state() {
        let src = straight();
        let mut dst = Tile::blank();
        dst.copy_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn rotate_ccw_turns_straight_sideways() {
        let mut t = straight();
        t.rotate_ccw();
        assert_eq!(t.rotation, Rotation::R90);
        assert!(t.connects(Direction::LEFT));
        assert!(t.connects(Direction::RIGHT));
        assert_eq!(t.directions.len(), 2);
    }

    #[test]
    fn pool_resets_released_tiles() {
        let mut pool = TilePool::new();
        pool.release(straight());
        assert_eq!(pool.free_count(), 1);

        let t = pool.acquire();
        assert_eq!(t, Tile::blank());
        assert_eq!(pool.free_count(), 0);
    }

    #[test]
    fn pool_stops_growing_at_its_cap() {
        let mut pool = TilePool::new();
        for _ in 0..TilePool::MAX_FREE + 10 {
            pool.release(straight());
        }
        assert_eq!(pool.free_count(), TilePool::MAX_FREE);
    }
}
