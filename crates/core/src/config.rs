//! Game configuration
//!
//! Defaults cover a playable game. A JSON file and environment variables can
//! override them:
//!
//! - `PIPES_CONFIG`: path to a JSON file with any subset of [`GameConfig`] fields
//! - `PIPES_SEED`: fixed RNG seed (reproducible tiles and fixtures)
//! - `PIPES_START_TIMER_SECS`: countdown length in seconds
//! - `PIPES_PREVIEW_CAPACITY`: preview queue length before skill adjustment
//!
//! ```json
//! { "board_width": 10, "board_height": 7, "start_timer_ms": 45000, "seed": 7 }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::catalog::{default_sprites, Sprite, SpriteRegistry};
use crate::error::{ConfigError, Error, Result};
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_CHECK_INTERVAL_MS, DEFAULT_NUM_MOVES,
    DEFAULT_NUM_NODES, DEFAULT_NUM_SOURCES, DEFAULT_PREVIEW_CAPACITY, DEFAULT_START_TIMER_MS,
    DIFFICULTY_NODE_COUNTS, MAX_BOARD_DIM, MAX_NUM_SOURCES,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    pub num_sources: u32,
    pub preview_capacity: usize,
    pub start_timer_ms: i64,
    pub check_interval_ms: u32,
    /// Node count before a difficulty is applied
    pub num_nodes: u32,
    /// Move budget before a skill is applied
    pub num_moves: i32,
    pub seed: Option<u64>,
    /// One sprite per tile kind, in catalog order
    pub sprites: Vec<Sprite>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            num_sources: DEFAULT_NUM_SOURCES,
            preview_capacity: DEFAULT_PREVIEW_CAPACITY,
            start_timer_ms: DEFAULT_START_TIMER_MS,
            check_interval_ms: DEFAULT_CHECK_INTERVAL_MS,
            num_nodes: DEFAULT_NUM_NODES,
            num_moves: DEFAULT_NUM_MOVES,
            seed: None,
            sprites: default_sprites(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Build from `PIPES_CONFIG` plus individual overrides.
    pub fn from_env() -> Result<Self> {
        use std::env;

        let mut config = match env::var("PIPES_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim())?,
            _ => Self::default(),
        };

        if let Some(seed) = env::var("PIPES_SEED").ok().and_then(|s| s.parse().ok()) {
            config.seed = Some(seed);
        }
        if let Some(secs) = env::var("PIPES_START_TIMER_SECS")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
        {
            config.start_timer_ms = secs.saturating_mul(1000);
        }
        if let Some(cap) = env::var("PIPES_PREVIEW_CAPACITY")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.preview_capacity = cap;
        }

        log::debug!("loaded config: {:?}", config);
        Ok(config)
    }

    /// Reject configurations a session cannot run with.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        SpriteRegistry::check_len(self.sprites.len())?;
        if self.preview_capacity == 0 {
            return Err(ConfigError::EmptyPreviewQueue);
        }
        if self.num_sources == 0 {
            return Err(ConfigError::NoSources);
        }
        if self.num_sources > MAX_NUM_SOURCES {
            return Err(ConfigError::TooManySources {
                count: self.num_sources,
                max: MAX_NUM_SOURCES,
            });
        }
        if self.start_timer_ms <= 0 {
            return Err(ConfigError::NonPositiveTimer(self.start_timer_ms));
        }
        if self.check_interval_ms == 0 {
            return Err(ConfigError::ZeroCheckInterval);
        }
        if self.board_width > MAX_BOARD_DIM || self.board_height > MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge {
                width: self.board_width,
                height: self.board_height,
                max: MAX_BOARD_DIM,
            });
        }

        // Room for the sources plus the largest node count any selector can ask for.
        let max_nodes = DIFFICULTY_NODE_COUNTS
            .iter()
            .copied()
            .chain(std::iter::once(self.num_nodes))
            .max()
            .unwrap_or(self.num_nodes);
        let required = self.num_sources as u64 + max_nodes as u64;
        let cells = self.board_width as u64 * self.board_height as u64;
        if cells < required {
            return Err(ConfigError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
                required: usize::try_from(required).unwrap_or(usize::MAX),
            });
        }
        Ok(())
    }

    pub fn sprite_registry(&self) -> std::result::Result<SpriteRegistry, ConfigError> {
        SpriteRegistry::new(self.sprites.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = GameConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.start_timer_ms, 30_000);
        assert_eq!(c.check_interval_ms, 10);
        assert_eq!(c.sprites.len(), 6);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = GameConfig::from_json_str(r#"{ "board_width": 10, "seed": 7 }"#).unwrap();
        assert_eq!(c.board_width, 10);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.board_height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(c.preview_capacity, DEFAULT_PREVIEW_CAPACITY);
    }

    #[test]
    fn sprites_parse_from_json() {
        let c = GameConfig::from_json_str(
            r#"{ "sprites": [
                { "name": "e", "color": [0, 0, 0] },
                { "name": "q", "color": [1, 2, 3] },
                { "name": "a", "color": [4, 5, 6] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(c.sprites[1].color, [1, 2, 3]);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_json_str("{ nope"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.json"),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn validation_failures() {
        let mut c = GameConfig::default();
        c.sprites.truncate(2);
        assert_eq!(c.validate(), Err(ConfigError::TooFewSprites { count: 2 }));

        let c = GameConfig {
            preview_capacity: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::EmptyPreviewQueue));

        let c = GameConfig {
            start_timer_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::NonPositiveTimer(0)));

        let c = GameConfig {
            check_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroCheckInterval));

        let c = GameConfig {
            num_sources: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::NoSources));

        let c = GameConfig {
            board_width: 2,
            board_height: 2,
            ..GameConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::BoardTooSmall {
                width: 2,
                height: 2,
                required: 5
            })
        );

        let c = GameConfig {
            board_width: 30_000,
            board_height: 2,
            ..GameConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::BoardTooLarge {
                width: 30_000,
                height: 2,
                max: MAX_BOARD_DIM
            })
        );

        let c = GameConfig {
            num_sources: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::TooManySources {
                count: u32::MAX,
                max: MAX_NUM_SOURCES
            })
        );

        // Node counts near u32::MAX must not overflow the fit check.
        let c = GameConfig {
            num_sources: MAX_NUM_SOURCES,
            num_nodes: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::BoardTooSmall {
                width: DEFAULT_BOARD_WIDTH,
                height: DEFAULT_BOARD_HEIGHT,
                required: usize::try_from(MAX_NUM_SOURCES as u64 + u32::MAX as u64)
                    .unwrap_or(usize::MAX)
            })
        );
    }

    #[test]
    fn largest_accepted_board_is_valid() {
        let c = GameConfig {
            board_width: MAX_BOARD_DIM,
            board_height: MAX_BOARD_DIM,
            num_sources: MAX_NUM_SOURCES,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Ok(()));
    }
}
