// src/command/builder.rs

use std::sync::Arc;

use tracing::{debug, warn};

use crate::command::CommandRegistry;
use crate::exec::{MisoCommandExecutor, SpawnOptions, Spawner};

/// Fluent, immutable builder for a [`CommandRegistry`].
///
/// Every [`command`](Self::command) call returns a new builder holding a
/// snapshot of the registry so far. Earlier builders are untouched, so one
/// base can be extended along several independent paths:
///
/// ```no_run
/// use misocmd::{build_miso_command, SpawnOptions, NO_ARGS};
///
/// let base = build_miso_command("git", SpawnOptions::default())
///     .command("status", ["status", "--short"]);
/// let with_log = base.command("log", ["log", "--oneline"]);
///
/// let git = with_log.build();
/// let out = git["status"].call(NO_ARGS);
/// println!("{}", out.as_text());
/// assert!(!base.build().contains("log"));
/// ```
#[derive(Debug, Clone)]
pub struct MisoCommandBuilder {
    registry: CommandRegistry,
    executor: Arc<MisoCommandExecutor>,
}

impl MisoCommandBuilder {
    /// Empty builder for `path`, spawning through the system spawner.
    pub fn new(path: impl Into<String>, options: SpawnOptions) -> Self {
        Self::from_executor(Arc::new(MisoCommandExecutor::new(path, options)))
    }

    /// Empty builder for `path`, spawning through `spawner`.
    pub fn with_spawner(
        path: impl Into<String>,
        options: SpawnOptions,
        spawner: Arc<dyn Spawner>,
    ) -> Self {
        Self::from_executor(Arc::new(MisoCommandExecutor::with_spawner(
            path, options, spawner,
        )))
    }

    pub fn from_executor(executor: Arc<MisoCommandExecutor>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            executor,
        }
    }

    pub fn executor(&self) -> &Arc<MisoCommandExecutor> {
        &self.executor
    }

    /// New builder with `name` registered on top of this one.
    ///
    /// Re-registering a name replaces the earlier definition. An empty name
    /// is ignored.
    pub fn command<I, S>(&self, name: &str, args: I) -> MisoCommandBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if name.is_empty() {
            warn!(path = %self.executor.path(), "ignoring command with empty name");
            return self.clone();
        }

        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        if self.registry.contains(name) {
            debug!(command = name, "replacing existing command definition");
        }
        debug!(command = name, ?args, path = %self.executor.path(), "registering command");

        let entry = CommandRegistry::entry(name, args, Arc::clone(&self.executor));
        MisoCommandBuilder {
            registry: CommandRegistry::combine(&self.registry, &entry),
            executor: Arc::clone(&self.executor),
        }
    }

    /// Snapshot of the registry. The builder stays usable afterwards.
    pub fn build(&self) -> CommandRegistry {
        self.registry.clone()
    }
}

/// Start building commands for the executable at `path`.
///
/// `options` are the build-time defaults shared by every command; use
/// `SpawnOptions::default()` for none.
pub fn build_miso_command(path: impl Into<String>, options: SpawnOptions) -> MisoCommandBuilder {
    MisoCommandBuilder::new(path, options)
}
