//! File logging for the terminal binary.
//!
//! The game owns the terminal, so log records never go to stderr. Set
//! `PIPES_LOG_PATH` to a file to capture them; `PIPES_LOG` takes the usual
//! `env_logger` filter syntax and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

pub const LOG_PATH_ENV: &str = "PIPES_LOG_PATH";
pub const LOG_FILTER_ENV: &str = "PIPES_LOG";
const DEFAULT_FILTER: &str = "info";

/// Install a file logger when `PIPES_LOG_PATH` is set.
///
/// Returns whether a logger was installed.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV).filter(|p| !p.is_empty()) else {
        return Ok(false);
    };
    let filter = std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    init_file(Path::new(&path), &filter)?;
    Ok(true)
}

/// Append log records matching `filter` to `path`.
pub fn init_file(path: &Path, filter: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    Builder::new()
        .parse_filters(filter)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}
