// tests/integration/error_handling.rs

use std::io::Write;
use std::time::Duration;

use misocmd::config::load_and_validate;
use misocmd::{exit_code_for, MisoCommandResult, MisoError, EXIT_SPAWN_FAILED, EXIT_TIMED_OUT};
use misocmd_test_utils::builders::{ConfigFileBuilder, OutcomeBuilder};
use tempfile::NamedTempFile;

fn load(contents: &str) -> misocmd::Result<misocmd::config::ConfigFile> {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    load_and_validate(file.path())
}

#[test]
fn test_empty_path_returns_config_error() {
    let result = load(
        r#"
path = "  "

[command.a]
args = []
"#,
    );

    match result {
        Err(MisoError::ConfigError(msg)) => assert!(msg.contains("path")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_no_commands_returns_config_error() {
    let result = load(r#"path = "ls""#);

    match result {
        Err(MisoError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_blank_command_name_returns_config_error() {
    let raw = ConfigFileBuilder::new("ls").with_command(" ", &["-l"]).raw();

    match misocmd::config::ConfigFile::try_from(raw) {
        Err(MisoError::ConfigError(msg)) => assert!(msg.contains("must not be empty")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_max_buffer_returns_config_error() {
    let result = load(
        r#"
path = "ls"

[options]
max_buffer = 0

[command.a]
"#,
    );

    assert!(matches!(result, Err(MisoError::ConfigError(_))));
}

#[test]
fn test_unknown_keys_return_toml_error() {
    let result = load(
        r#"
path = "ls"

[command.a]
argz = ["-l"]
"#,
    );

    assert!(matches!(result, Err(MisoError::TomlError(_))));
}

#[test]
fn test_missing_file_returns_io_error() {
    let result = load_and_validate("/definitely/not/here/Misocmd.toml");
    assert!(matches!(result, Err(MisoError::IoError(_))));
}

#[test]
fn exit_codes_follow_outcome() {
    let ok = MisoCommandResult::new(OutcomeBuilder::new().status(3).build());
    let timed_out = MisoCommandResult::new(
        OutcomeBuilder::new()
            .timed_out(Duration::from_millis(5))
            .build(),
    );
    let missing = MisoCommandResult::new(OutcomeBuilder::new().not_found("nope").build());
    let killed = MisoCommandResult::new(OutcomeBuilder::new().killed(15).build());

    assert_eq!(exit_code_for(&ok), 3);
    assert_eq!(exit_code_for(&timed_out), EXIT_TIMED_OUT);
    assert_eq!(exit_code_for(&missing), EXIT_SPAWN_FAILED);
    assert_eq!(exit_code_for(&killed), 1);
}
