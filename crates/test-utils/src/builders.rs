#![allow(dead_code)]

use std::collections::BTreeMap;
use std::time::Duration;

use misocmd::config::{CommandConfig, ConfigFile, OptionsSection, RawConfigFile};
use misocmd::{ProcessOutcome, SpawnFailure};

/// Builder for `ProcessOutcome` to simplify fake spawner setup.
pub struct OutcomeBuilder {
    outcome: ProcessOutcome,
}

impl OutcomeBuilder {
    /// Exit code 0, empty output.
    pub fn new() -> Self {
        Self {
            outcome: ProcessOutcome {
                status: Some(0),
                ..ProcessOutcome::default()
            },
        }
    }

    pub fn status(mut self, code: i32) -> Self {
        self.outcome.status = Some(code);
        self
    }

    pub fn stdout(mut self, stdout: impl Into<Vec<u8>>) -> Self {
        self.outcome.stdout = stdout.into();
        self
    }

    pub fn stdout_json(self, value: &serde_json::Value) -> Self {
        self.stdout(value.to_string())
    }

    pub fn stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.outcome.stderr = stderr.into();
        self
    }

    /// Process killed by `signal` with no exit code.
    pub fn killed(mut self, signal: i32) -> Self {
        self.outcome.status = None;
        self.outcome.signal = Some(signal);
        self
    }

    pub fn timed_out(mut self, limit: Duration) -> Self {
        self.outcome.status = None;
        self.outcome.signal = Some(9);
        self.outcome.error = Some(SpawnFailure::TimedOut { limit });
        self
    }

    pub fn not_found(mut self, path: &str) -> Self {
        self.outcome.status = None;
        self.outcome.error = Some(SpawnFailure::Spawn {
            path: path.to_string(),
            kind: std::io::ErrorKind::NotFound,
            message: "No such file or directory (os error 2)".to_string(),
        });
        self
    }

    pub fn build(self) -> ProcessOutcome {
        self.outcome
    }
}

impl Default for OutcomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new(path: &str) -> Self {
        Self {
            config: RawConfigFile {
                path: path.to_string(),
                options: OptionsSection::default(),
                command: BTreeMap::new(),
            },
        }
    }

    pub fn with_command(mut self, name: &str, args: &[&str]) -> Self {
        self.config.command.insert(
            name.to_string(),
            CommandConfig {
                args: args.iter().map(|a| a.to_string()).collect(),
            },
        );
        self
    }

    pub fn with_timeout_ms(mut self, millis: u64) -> Self {
        self.config.options.timeout_ms = Some(millis);
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.config
            .options
            .env
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}
