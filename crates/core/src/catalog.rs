//! Catalog module - static tile metadata
//!
//! Two lookups keyed by [`TileKind`] ordinal:
//!
//! - [`connections`]: the unrotated connection directions of each kind
//! - [`SpriteRegistry`]: the visual asset (name + colour) of each kind
//!
//! Both are plain arrays indexed by `TileKind::index()`, built once and never
//! mutated afterwards.

use std::ops::RangeInclusive;

use arrayvec::ArrayVec;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{Direction, Rotation, TileKind};

/// Connection directions of one tile (at most four).
pub type DirectionSet = ArrayVec<Direction, 4>;

const R: Direction = Direction::RIGHT;
const L: Direction = Direction::LEFT;
const U: Direction = Direction::UP;
const D: Direction = Direction::DOWN;

/// Unrotated connections by catalog ordinal.
const CONNECTIONS: [&[Direction]; TileKind::COUNT] = [
    &[],           // Empty
    &[R, L, U, D], // Quad
    &[L, D],       // Angle
    &[U, D],       // Straight
    &[R, L, D],    // T
    &[R, L, U, D], // Node
];

/// Fixed, unrotated connection directions for a kind.
pub fn connections(kind: TileKind) -> &'static [Direction] {
    CONNECTIONS[kind.index()]
}

/// Rotate every direction of `dirs`, preserving order and count.
pub fn rotate_directions(dirs: &[Direction], rotation: Rotation) -> DirectionSet {
    dirs.iter().map(|d| d.rotated(rotation)).collect()
}

/// Connections of `kind` after applying `rotation`.
pub fn rotated_connections(kind: TileKind, rotation: Rotation) -> DirectionSet {
    rotate_directions(connections(kind), rotation)
}

/// Bitmask of a direction set (right=1, up=2, left=4, down=8).
pub fn direction_mask(dirs: &[Direction]) -> u8 {
    dirs.iter().fold(0, |m, d| m | d.bit())
}

/// Index of a sprite in the registry (equal to the kind ordinal it was assigned to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteId(pub u8);

/// Visual asset of a tile kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sprite {
    pub name: String,
    /// RGB colour used by the terminal view
    pub color: [u8; 3],
}

impl Sprite {
    pub fn new(name: &str, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            color,
        }
    }
}

/// The default sprite set, one per kind in catalog order.
pub fn default_sprites() -> Vec<Sprite> {
    vec![
        Sprite::new("empty", [90, 90, 100]),
        Sprite::new("quad", [200, 200, 210]),
        Sprite::new("angle", [120, 180, 230]),
        Sprite::new("straight", [120, 220, 150]),
        Sprite::new("t", [220, 170, 90]),
        Sprite::new("node", [230, 90, 110]),
    ]
}

/// Kind → sprite lookup.
///
/// Sprites are assigned to kinds by position: `sprites[i]` belongs to
/// `TileKind::from_index(i)`. The registry length also bounds random draws,
/// see [`SpriteRegistry::drawable_range`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRegistry {
    sprites: Vec<Sprite>,
}

impl SpriteRegistry {
    pub fn new(sprites: Vec<Sprite>) -> Result<Self, ConfigError> {
        Self::check_len(sprites.len())?;
        Ok(Self { sprites })
    }

    pub(crate) fn check_len(count: usize) -> Result<(), ConfigError> {
        if count < 3 {
            return Err(ConfigError::TooFewSprites { count });
        }
        if count > TileKind::COUNT {
            return Err(ConfigError::TooManySprites {
                count,
                max: TileKind::COUNT,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Sprite registered for `kind`, if the registry is long enough to cover it.
    pub fn get(&self, kind: TileKind) -> Option<&Sprite> {
        self.sprites.get(kind.index())
    }

    pub fn sprite_id(&self, kind: TileKind) -> Option<SpriteId> {
        self.get(kind).map(|_| SpriteId(kind.index() as u8))
    }

    pub fn by_id(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id.0 as usize)
    }

    /// Kind ordinals eligible for random draws: `[1, len - 2]`.
    ///
    /// The first entry (`Empty`) and the last registered entry (`Node` with the
    /// default set) are never drawn.
    pub fn drawable_range(&self) -> RangeInclusive<usize> {
        1..=self.sprites.len() - 2
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self {
            sprites: default_sprites(),
        }
    }
}
