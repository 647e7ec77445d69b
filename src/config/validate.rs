// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{MisoError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::MisoError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.path, raw.options, raw.command))
    }
}

pub fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_path(cfg)?;
    ensure_has_commands(cfg)?;
    validate_command_names(cfg)?;
    validate_options(cfg)?;
    Ok(())
}

fn ensure_has_path(cfg: &RawConfigFile) -> Result<()> {
    if cfg.path.trim().is_empty() {
        return Err(MisoError::ConfigError(
            "`path` must name an executable (got an empty string)".to_string(),
        ));
    }
    Ok(())
}

fn ensure_has_commands(cfg: &RawConfigFile) -> Result<()> {
    if cfg.command.is_empty() {
        return Err(MisoError::ConfigError(
            "config must contain at least one [command.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_command_names(cfg: &RawConfigFile) -> Result<()> {
    for name in cfg.command.keys() {
        if name.trim().is_empty() {
            return Err(MisoError::ConfigError(format!(
                "command name '{}' must not be empty or whitespace",
                name
            )));
        }
    }
    Ok(())
}

fn validate_options(cfg: &RawConfigFile) -> Result<()> {
    if cfg.options.max_buffer == Some(0) {
        return Err(MisoError::ConfigError(
            "[options].max_buffer must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
