//! Error types for the core crate

use thiserror::Error;

/// Setup-time configuration problems.
///
/// All of these are fatal: a session is never built from a configuration
/// that fails [`GameConfig::validate`](crate::config::GameConfig::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("sprite registry has {count} entries; at least 3 are needed to draw random tiles")]
    TooFewSprites { count: usize },

    #[error("sprite registry has {count} entries but only {max} tile kinds exist")]
    TooManySprites { count: usize, max: usize },

    #[error("preview queue capacity must be at least 1")]
    EmptyPreviewQueue,

    #[error("board {width}x{height} cannot hold {required} sources and nodes")]
    BoardTooSmall {
        width: u16,
        height: u16,
        required: usize,
    },

    #[error("board {width}x{height} exceeds the {max}x{max} limit")]
    BoardTooLarge { width: u16, height: u16, max: u16 },

    #[error("at least one power source is required")]
    NoSources,

    #[error("{count} power sources requested; at most {max} are supported")]
    TooManySources { count: u32, max: u32 },

    #[error("start timer must be positive, got {0}ms")]
    NonPositiveTimer(i64),

    #[error("lose check interval must be positive")]
    ZeroCheckInterval,
}

/// Main error type for the core crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
