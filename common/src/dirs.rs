//! XDG directory utilities for tcmp.

use std::path::PathBuf;

use anyhow::{Context, Result};
use xdg::BaseDirectories;

pub const APP_NAME: &str = "tcmp";

fn base_dirs() -> BaseDirectories {
    BaseDirectories::with_prefix(APP_NAME)
}

/// Return the XDG config directory (no creation - config may not exist yet).
/// `~/.config/tcmp/`
pub fn config_dir() -> Result<PathBuf> {
    base_dirs()
        .get_config_home()
        .context("Could not determine config directory (HOME not set?)")
}

/// Default config file path.
/// `~/.config/tcmp/config.toml`
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
