// src/command/entry.rs

use std::sync::Arc;

use crate::exec::{MisoCommandExecutor, SpawnOptions};
use crate::result::MisoCommandResult;

/// Empty extra-argument list, for calls that only need the preset args.
pub const NO_ARGS: &[&str] = &[];

/// One registered sub-command: a name, its preset args, and the shared
/// executor that runs it.
///
/// Cloning is cheap; the executor is reference-counted.
#[derive(Debug, Clone)]
pub struct MisoCommand {
    name: String,
    args: Vec<String>,
    executor: Arc<MisoCommandExecutor>,
}

impl MisoCommand {
    pub fn new(
        name: impl Into<String>,
        args: Vec<String>,
        executor: Arc<MisoCommandExecutor>,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            executor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preset args, placed before any extra args on every call.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn executor(&self) -> &MisoCommandExecutor {
        &self.executor
    }

    /// Run with extra args and optional call-time overrides.
    pub fn invoke<S: AsRef<str>>(
        &self,
        extra: &[S],
        options: Option<&SpawnOptions>,
    ) -> MisoCommandResult {
        self.executor.execute(&self.args, extra, options)
    }

    /// Run with the preset args and build-time options only.
    pub fn run(&self) -> MisoCommandResult {
        self.invoke(NO_ARGS, None)
    }

    pub fn run_with(&self, options: &SpawnOptions) -> MisoCommandResult {
        self.invoke(NO_ARGS, Some(options))
    }

    pub fn call<S: AsRef<str>>(&self, extra: &[S]) -> MisoCommandResult {
        self.invoke(extra, None)
    }

    pub fn call_with<S: AsRef<str>>(
        &self,
        extra: &[S],
        options: &SpawnOptions,
    ) -> MisoCommandResult {
        self.invoke(extra, Some(options))
    }
}

/// Two commands are equal when they share a name, preset args and the same
/// executor instance.
impl PartialEq for MisoCommand {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.args == other.args
            && Arc::ptr_eq(&self.executor, &other.executor)
    }
}

impl Eq for MisoCommand {}
