//! XDG-style path utilities for configuration, cache and data directories.
//!
//! The XDG environment variables take priority over the platform defaults
//! so that the same layout is used on every OS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "medichat";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/medichat` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/medichat` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the cache directory (translation cache).
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/medichat` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/medichat` otherwise
pub fn cache_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CACHE_HOME", &[".cache"])
}

/// Returns the data directory (stored preferences and auth token).
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/medichat` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/medichat` otherwise
pub fn data_dir() -> Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_dir(var: &str, home_relative: &[&str]) -> Result<PathBuf> {
    if let Ok(base) = std::env::var(var)
        && !base.is_empty()
    {
        return Ok(PathBuf::from(base).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home_relative
        .iter()
        .fold(home, |path, segment| path.join(segment))
        .join(APP_DIR))
}
