// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::command::MisoCommandBuilder;
use crate::exec::{SpawnOptions, Spawner};

/// Command file exactly as read from TOML, before validation.
///
/// ```toml
/// path = "git"
///
/// [options]
/// timeout_ms = 5000
///
/// [options.env]
/// GIT_PAGER = "cat"
///
/// [command.status]
/// args = ["status", "--short"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Executable every command runs.
    pub path: String,

    /// Build-time defaults from `[options]`.
    #[serde(default)]
    pub options: OptionsSection,

    /// All commands from `[command.<name>]`.
    #[serde(default)]
    pub command: BTreeMap<String, CommandConfig>,
}

/// `[options]` section; each key maps onto one [`SpawnOptions`] field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsSection {
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Text fed to stdin.
    #[serde(default)]
    pub input: Option<String>,

    #[serde(default)]
    pub cwd: Option<PathBuf>,

    #[serde(default)]
    pub env: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub clear_env: Option<bool>,

    #[serde(default)]
    pub max_buffer: Option<usize>,
}

impl OptionsSection {
    pub fn to_spawn_options(&self) -> SpawnOptions {
        SpawnOptions {
            timeout: self.timeout_ms.map(std::time::Duration::from_millis),
            input: self.input.as_ref().map(|s| s.clone().into_bytes()),
            cwd: self.cwd.clone(),
            env: self.env.clone(),
            clear_env: self.clear_env,
            max_buffer: self.max_buffer,
        }
    }
}

/// `[command.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandConfig {
    /// Preset args, placed before call-time args.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Validated command file. Build one with `ConfigFile::try_from(raw)` or
/// [`load_and_validate`](crate::config::load_and_validate).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: String,
    options: OptionsSection,
    command: BTreeMap<String, CommandConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        path: String,
        options: OptionsSection,
        command: BTreeMap<String, CommandConfig>,
    ) -> Self {
        Self {
            path,
            options,
            command,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn options(&self) -> &OptionsSection {
        &self.options
    }

    pub fn commands(&self) -> &BTreeMap<String, CommandConfig> {
        &self.command
    }

    /// Builder with every `[command.<name>]` already registered.
    pub fn builder(&self) -> MisoCommandBuilder {
        self.register_all(MisoCommandBuilder::new(
            self.path.clone(),
            self.options.to_spawn_options(),
        ))
    }

    pub fn builder_with_spawner(&self, spawner: Arc<dyn Spawner>) -> MisoCommandBuilder {
        self.register_all(MisoCommandBuilder::with_spawner(
            self.path.clone(),
            self.options.to_spawn_options(),
            spawner,
        ))
    }

    fn register_all(&self, builder: MisoCommandBuilder) -> MisoCommandBuilder {
        self.command
            .iter()
            .fold(builder, |b, (name, cmd)| b.command(name, &cmd.args))
    }
}
