// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::exec::SpawnOptions;

/// Command-line arguments for `misocmd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "misocmd",
    version,
    about = "Run named sub-commands of one executable, defined in a command file.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the command file (TOML).
    ///
    /// Default: `MISOCMD_CONFIG`, or `Misocmd.toml` in the current working
    /// directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MISOCMD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Kill the command after this many milliseconds (overrides the file).
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Text written to the command's stdin (overrides the file).
    #[arg(long, value_name = "TEXT")]
    pub input: Option<String>,

    /// Working directory for the command (overrides the file).
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// How to print the command's stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print the registered command names and exit.
    #[arg(long)]
    pub list: bool,

    /// Print the resolved argument vector, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Name of the command to run.
    #[arg(value_name = "COMMAND", required_unless_present = "list")]
    pub command: Option<String>,

    /// Extra arguments appended after the command's preset arguments.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl CliArgs {
    /// Call-time overrides taken from the flags.
    pub fn call_options(&self) -> SpawnOptions {
        SpawnOptions {
            timeout: self.timeout_ms.map(std::time::Duration::from_millis),
            input: self.input.as_ref().map(|s| s.clone().into_bytes()),
            cwd: self.cwd.clone(),
            ..SpawnOptions::default()
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Output view printed for the command's stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Decoded text, as-is.
    Text,
    /// Parsed JSON, pretty-printed.
    Json,
    /// One numbered line per stdout line.
    Lines,
    /// Raw bytes, untouched.
    Raw,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
