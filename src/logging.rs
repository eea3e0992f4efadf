//! File logging for the binaries.
//!
//! The terminal is in raw mode while a game runs, so log records go to the
//! file named by `SNAKE_LOG_PATH`; without it no logger is installed.

use std::fs::File;

use anyhow::{anyhow, Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::core::GameConfig;

/// Install a `WriteLogger` for `config.log_path` at `config.log_level`.
pub fn init(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let level = parse_level(&config.log_level)?;
    let file = File::create(path).with_context(|| format!("failed to create log file {path}"))?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|err| anyhow!("failed to initialize logger: {err}"))?;
    Ok(())
}

fn parse_level(name: &str) -> Result<LevelFilter> {
    name.parse()
        .map_err(|_| anyhow!("invalid log level {:?}", name))
}
