// tests/integration/config_loading.rs

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use misocmd::config::load_and_validate;
use misocmd_test_utils::builders::ConfigFileBuilder;
use misocmd_test_utils::FakeSpawner;
use tempfile::NamedTempFile;

#[test]
fn command_file_becomes_registry() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
path = "git"

[options]
timeout_ms = 5000

[options.env]
GIT_PAGER = "cat"

[command.status]
args = ["status", "--short"]

[command.log]
args = ["log", "--oneline"]

[command.raw]
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    let registry = cfg.builder().build();

    assert_eq!(cfg.path(), "git");
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["log", "raw", "status"]);
    assert_eq!(registry["status"].args(), &["status", "--short"]);
    assert!(registry["raw"].args().is_empty());

    let options = registry["log"].executor().options();
    assert_eq!(options.timeout, Some(Duration::from_millis(5000)));
    assert_eq!(
        options.env.as_ref().and_then(|env| env.get("GIT_PAGER")).map(String::as_str),
        Some("cat")
    );
}

#[test]
fn built_config_runs_through_spawner() {
    let fake = Arc::new(FakeSpawner::echo());
    let cfg = ConfigFileBuilder::new("docker")
        .with_command("ps", &["ps", "--all"])
        .with_timeout_ms(250)
        .build();

    let registry = cfg.builder_with_spawner(fake.clone()).build();
    registry["ps"].call(&["--quiet"]);

    let call = fake.last().unwrap();
    assert_eq!(call.path, "docker");
    assert_eq!(call.args, vec!["ps", "--all", "--quiet"]);
    assert_eq!(call.options.timeout, Some(Duration::from_millis(250)));
}

#[test]
fn env_from_builder_is_carried_into_options() {
    let cfg = ConfigFileBuilder::new("env")
        .with_command("show", &[])
        .with_env("A", "1")
        .build();

    let spawn_options = cfg.options().to_spawn_options();
    assert_eq!(
        spawn_options.env.unwrap().get("A").map(String::as_str),
        Some("1")
    );
}
