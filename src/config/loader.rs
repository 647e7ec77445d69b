// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a command file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a command file from path and run basic validation.
///
/// - Reads TOML.
/// - Checks for:
///   - an empty `path`,
///   - a file with no commands,
///   - empty command names,
///   - nonsensical option values.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// `MISOCMD_CONFIG` if set, otherwise `Misocmd.toml` in the current
/// directory.
pub fn default_config_path() -> PathBuf {
    std::env::var_os("MISOCMD_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Misocmd.toml"))
}
