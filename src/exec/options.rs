// src/exec/options.rs

//! Spawn options shared by build-time defaults and call-time overrides.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Options for one synchronous spawn.
///
/// Every field is optional. `None` means "not specified at this tier", so the
/// value falls through to the next tier in [`SpawnOptions::merge`]:
/// call-time override > build-time default > platform default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnOptions {
    /// Kill the child once it has run this long. `Duration::ZERO` disables
    /// the limit.
    pub timeout: Option<Duration>,

    /// Bytes written to the child's stdin before it is closed.
    ///
    /// When unset, the child gets an empty stdin.
    pub input: Option<Vec<u8>>,

    /// Working directory of the child.
    pub cwd: Option<PathBuf>,

    /// Variables added to the child's environment.
    ///
    /// The map is replaced as a whole during merging, never merged key by key.
    pub env: Option<BTreeMap<String, String>>,

    /// Start the child from an empty environment (plus `env`).
    pub clear_env: Option<bool>,

    /// Upper bound on captured bytes per output stream. Exceeding it kills
    /// the child.
    pub max_buffer: Option<usize>,
}

impl SpawnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout_ms(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    pub fn input(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn clear_env(mut self, clear: bool) -> Self {
        self.clear_env = Some(clear);
        self
    }

    pub fn max_buffer(mut self, bytes: usize) -> Self {
        self.max_buffer = Some(bytes);
        self
    }

    /// Resolve the options for one call.
    ///
    /// Fields set in `call` win; the rest come from `base`. Neither input is
    /// modified, so a call-time override never leaks into later calls.
    pub fn merge(base: &SpawnOptions, call: Option<&SpawnOptions>) -> SpawnOptions {
        let Some(call) = call else {
            return base.clone();
        };

        SpawnOptions {
            timeout: call.timeout.or(base.timeout),
            input: call.input.clone().or_else(|| base.input.clone()),
            cwd: call.cwd.clone().or_else(|| base.cwd.clone()),
            env: call.env.clone().or_else(|| base.env.clone()),
            clear_env: call.clear_env.or(base.clear_env),
            max_buffer: call.max_buffer.or(base.max_buffer),
        }
    }

    /// The timeout to enforce, if any.
    pub fn effective_timeout(&self) -> Option<Duration> {
        self.timeout.filter(|t| !t.is_zero())
    }
}
