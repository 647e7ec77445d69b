// src/lib.rs

//! Named, reusable invocations of one external executable.
//!
//! Register sub-commands on a builder, then run them synchronously and read
//! the output as text, JSON, lines or a blob:
//!
//! ```no_run
//! use misocmd::{build_miso_command, SpawnOptions, NO_ARGS};
//!
//! let cat = build_miso_command("cat", SpawnOptions::new().timeout_ms(1000))
//!     .command("json_test", NO_ARGS)
//!     .build();
//!
//! let result = cat["json_test"].run_with(&SpawnOptions::new().input(r#"{"a": 1}"#));
//! assert_eq!(result.as_object().unwrap()["a"], 1);
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod macros;
pub mod result;

use std::io::{self, Write};

use anyhow::{anyhow, Context};
use tracing::{debug, info};

pub use crate::command::{
    build_miso_command, CommandRegistry, MisoCommand, MisoCommandBuilder, MisoCommandSet, NO_ARGS,
};
pub use crate::errors::{MisoError, Result, SpawnFailure, Stream};
pub use crate::exec::{
    MisoCommandExecutor, ProcessOutcome, SpawnOptions, Spawner, SystemSpawner,
};
pub use crate::result::{Blob, MisoCommandResult};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::{default_config_path, load_and_validate};

/// Exit code reported when the command timed out.
pub const EXIT_TIMED_OUT: i32 = 124;
/// Exit code reported when the executable could not be started.
pub const EXIT_SPAWN_FAILED: i32 = 127;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - command file loading
/// - registry construction
/// - one invocation with the CLI overrides
/// - printing the requested output view
///
/// Returns the exit code the process should end with.
pub fn run(args: CliArgs) -> anyhow::Result<i32> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let cfg = load_and_validate(&config_path)
        .with_context(|| format!("loading command file {:?}", config_path))?;

    let registry = cfg.builder().build();
    debug!(path = cfg.path(), commands = registry.len(), "command file loaded");

    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(0);
    }

    let name = args
        .command
        .as_deref()
        .ok_or_else(|| anyhow!("no command given (use --list to see them)"))?;
    let command = registry.command(name)?;

    if args.dry_run {
        print_dry_run(command, &args.args);
        return Ok(0);
    }

    let result = command.invoke(&args.args, Some(&args.call_options()));
    info!(
        command = name,
        exit_code = ?result.exit_code(),
        elapsed = ?result.spawn_result().elapsed,
        "command finished"
    );

    io::stderr().write_all(&result.spawn_result().stderr)?;
    if let Some(failure) = result.error() {
        eprintln!("misocmd: {failure}");
    }

    write_output(&result, args.output)?;

    Ok(exit_code_for(&result))
}

/// Exit code mirroring the child's: its own code when it exited normally,
/// `124` on timeout, `127` when it never started, otherwise `1`.
pub fn exit_code_for(result: &MisoCommandResult) -> i32 {
    match (result.exit_code(), result.error()) {
        (Some(code), None) => code,
        (_, Some(failure)) if failure.is_timeout() => EXIT_TIMED_OUT,
        (_, Some(failure)) if failure.is_spawn() => EXIT_SPAWN_FAILED,
        _ => 1,
    }
}

fn write_output(result: &MisoCommandResult, format: OutputFormat) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => write!(out, "{}", result.as_text())?,
        OutputFormat::Json => {
            let value = result.as_object().context("command output is not JSON")?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Lines => {
            for (i, line) in result.as_lines().iter().enumerate() {
                writeln!(out, "{:>4}  {line}", i + 1)?;
            }
        }
        OutputFormat::Raw => out.write_all(result.as_blob(None).bytes())?,
    }
    out.flush()?;
    Ok(())
}

/// Simple dry-run output: executable, preset args and extra args.
fn print_dry_run(command: &MisoCommand, extra: &[String]) {
    let executor = command.executor();
    let argv = MisoCommandExecutor::argv(command.args(), extra);

    println!("misocmd dry-run");
    println!("  command: {}", command.name());
    println!("  path: {}", executor.path());
    println!("  argv: {:?}", argv);
    if let Some(timeout) = executor.options().effective_timeout() {
        println!("  timeout: {timeout:?}");
    }
    if let Some(ref cwd) = executor.options().cwd {
        println!("  cwd: {}", cwd.display());
    }

    debug!("dry-run complete (no execution)");
}
