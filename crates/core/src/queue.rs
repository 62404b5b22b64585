//! Preview queue - the conveyor of upcoming tiles
//!
//! The front slot is always the next tile to be placed. Advancing copies each
//! slot's content one step toward the front and refills only the back slot,
//! so slot objects are reused rather than reallocated.

use crate::error::ConfigError;
use crate::rng::TileGenerator;
use crate::tile::{Tile, TilePool};

#[derive(Debug, Clone)]
pub struct PreviewQueue {
    slots: Vec<Tile>,
}

impl PreviewQueue {
    /// Create a queue of `capacity` blank slots taken from `pool`.
    pub fn new(capacity: usize, pool: &mut TilePool) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::EmptyPreviewQueue);
        }
        let slots = (0..capacity).map(|_| pool.acquire()).collect();
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a constructed queue; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn front(&self) -> &Tile {
        &self.slots[0]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.slots
    }

    /// Assign a fresh random tile to every slot.
    pub fn regenerate_all(&mut self, gen: &mut TileGenerator) {
        for slot in &mut self.slots {
            gen.fill(slot);
        }
    }

    /// Consume the front tile and shift the conveyor.
    ///
    /// Returns a copy of the consumed front tile. Every other slot moves one
    /// step toward the front and the back slot gets a freshly generated tile.
    pub fn advance(&mut self, gen: &mut TileGenerator) -> Tile {
        let consumed = self.slots[0].clone();

        let last = self.slots.len() - 1;
        for i in 0..last {
            let (head, tail) = self.slots.split_at_mut(i + 1);
            head[i].copy_from(&tail[0]);
        }
        gen.fill(&mut self.slots[last]);

        consumed
    }

    /// Drop the back slot into `pool`.
    ///
    /// The last remaining slot is never removed; returns whether a slot was dropped.
    pub fn remove_last(&mut self, pool: &mut TilePool) -> bool {
        if self.slots.len() <= 1 {
            return false;
        }
        if let Some(tile) = self.slots.pop() {
            pool.release(tile);
        }
        true
    }

    /// Release every slot and start over with `capacity` blank slots (at least one).
    ///
    /// Used when a whole new game is set up; within a game the queue only shrinks.
    pub fn reset(&mut self, capacity: usize, pool: &mut TilePool) {
        for tile in self.slots.drain(..) {
            pool.release(tile);
        }
        self.slots
            .extend((0..capacity.max(1)).map(|_| pool.acquire()));
    }

    /// Shrink to `len` slots (never below one), releasing the removed slots.
    ///
    /// Growing is not supported; a larger `len` is a no-op.
    pub fn truncate_to(&mut self, len: usize, pool: &mut TilePool) {
        let target = len.max(1);
        while self.slots.len() > target {
            if !self.remove_last(pool) {
                break;
            }
        }
    }
}
