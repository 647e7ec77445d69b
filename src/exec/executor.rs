// src/exec/executor.rs

use std::sync::Arc;

use tracing::debug;

use crate::exec::{SpawnOptions, Spawner, SystemSpawner};
use crate::result::MisoCommandResult;

/// Owns one executable path plus its build-time options, and runs it.
///
/// Read-only after construction, so one executor is shared (via `Arc`) by
/// every command registered through the same builder.
#[derive(Debug, Clone)]
pub struct MisoCommandExecutor {
    path: String,
    options: SpawnOptions,
    spawner: Arc<dyn Spawner>,
}

impl MisoCommandExecutor {
    pub fn new(path: impl Into<String>, options: SpawnOptions) -> Self {
        Self::with_spawner(path, options, Arc::new(SystemSpawner))
    }

    pub fn with_spawner(
        path: impl Into<String>,
        options: SpawnOptions,
        spawner: Arc<dyn Spawner>,
    ) -> Self {
        Self {
            path: path.into(),
            options,
            spawner,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Build-time options; call-time overrides never modify these.
    pub fn options(&self) -> &SpawnOptions {
        &self.options
    }

    /// Full argument vector for a call: preset args, then extra args.
    pub fn argv<S: AsRef<str>>(preset: &[String], extra: &[S]) -> Vec<String> {
        preset
            .iter()
            .cloned()
            .chain(extra.iter().map(|a| a.as_ref().to_string()))
            .collect()
    }

    /// Run the executable once and wrap whatever happened.
    ///
    /// Never fails: spawn errors and timeouts end up in the outcome.
    pub fn execute<S: AsRef<str>>(
        &self,
        preset: &[String],
        extra: &[S],
        options: Option<&SpawnOptions>,
    ) -> MisoCommandResult {
        let args = Self::argv(preset, extra);
        let merged = SpawnOptions::merge(&self.options, options);

        debug!(
            path = %self.path,
            ?args,
            timeout = ?merged.effective_timeout(),
            has_input = merged.input.is_some(),
            "spawning command"
        );

        MisoCommandResult::new(self.spawner.spawn_sync(&self.path, &args, &merged))
    }
}
