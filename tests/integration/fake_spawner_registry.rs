// tests/integration/fake_spawner_registry.rs

use std::sync::Arc;
use std::time::Duration;

use misocmd::{MisoCommandBuilder, MisoError, SpawnOptions, NO_ARGS};
use misocmd_test_utils::builders::OutcomeBuilder;
use misocmd_test_utils::{init_tracing, FakeSpawner};
use serde_json::json;

fn builder_with(fake: &Arc<FakeSpawner>, options: SpawnOptions) -> MisoCommandBuilder {
    MisoCommandBuilder::with_spawner("tool", options, fake.clone())
}

#[test]
fn distinct_commands_keep_their_own_preset_args() {
    init_tracing();
    let fake = Arc::new(FakeSpawner::echo());

    let registry = builder_with(&fake, SpawnOptions::default())
        .command("a", ["--alpha", "1"])
        .command("b", ["--beta"])
        .build();

    registry["a"].call(&["x"]);
    registry["b"].call(&["y", "z"]);

    let calls = fake.invocations();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].path, "tool");
    assert_eq!(calls[0].args, vec!["--alpha", "1", "x"]);
    assert_eq!(calls[1].args, vec!["--beta", "y", "z"]);
}

#[test]
fn duplicate_name_uses_last_registration() {
    let fake = Arc::new(FakeSpawner::echo());

    let registry = builder_with(&fake, SpawnOptions::default())
        .command("run", ["first"])
        .command("run", ["second"])
        .build();

    assert_eq!(registry.len(), 1);
    let result = registry.invoke("run", NO_ARGS, None).unwrap();

    assert_eq!(result.as_text(), "second");
    assert_eq!(fake.last().unwrap().args, vec!["second"]);
}

#[test]
fn builds_of_same_builder_behave_the_same() {
    let fake = Arc::new(FakeSpawner::echo());
    let builder = builder_with(&fake, SpawnOptions::default()).command("show", ["v"]);

    let first = builder.build();
    let second = builder.build();

    assert_eq!(first, second);
    assert_eq!(first["show"].run(), second["show"].run());
}

#[test]
fn build_time_options_apply_when_call_sets_nothing() {
    let fake = Arc::new(FakeSpawner::echo());
    let base = SpawnOptions::new().timeout_ms(10).env("LANG", "C");

    let registry = builder_with(&fake, base.clone()).command("x", NO_ARGS).build();
    registry["x"].run();

    assert_eq!(fake.last().unwrap().options, base);
}

#[test]
fn call_time_override_does_not_leak_into_next_call() {
    let fake = Arc::new(FakeSpawner::echo());
    let registry = builder_with(&fake, SpawnOptions::new().timeout_ms(10))
        .command("x", NO_ARGS)
        .build();

    registry["x"].run_with(&SpawnOptions::new().timeout_ms(2_000).input("hi"));
    registry["x"].run();

    let calls = fake.invocations();
    assert_eq!(calls[0].options.timeout, Some(Duration::from_millis(2_000)));
    assert_eq!(calls[0].options.input.as_deref(), Some(&b"hi"[..]));
    assert_eq!(calls[1].options.timeout, Some(Duration::from_millis(10)));
    assert_eq!(calls[1].options.input, None);
    assert_eq!(
        registry["x"].executor().options().timeout,
        Some(Duration::from_millis(10))
    );
}

#[test]
fn input_becomes_parsed_object() {
    let fake = Arc::new(FakeSpawner::echo());
    let registry = builder_with(&fake, SpawnOptions::default())
        .command("json_test", NO_ARGS)
        .build();

    let result = registry["json_test"].run_with(&SpawnOptions::new().input(r#"{"a":1}"#));

    assert_eq!(result.as_object().unwrap(), json!({"a": 1}));
}

#[test]
fn canned_outcome_is_passed_through_untouched() {
    let outcome = OutcomeBuilder::new()
        .status(2)
        .stdout("partial\n")
        .stderr("boom")
        .build();
    let fake = Arc::new(FakeSpawner::new(outcome.clone()));

    let registry = builder_with(&fake, SpawnOptions::default())
        .command("fail", NO_ARGS)
        .build();
    let result = registry["fail"].run();

    assert_eq!(result.spawn_result(), &outcome);
    assert_eq!(result.exit_code(), Some(2));
    assert_eq!(result.stderr_text(), "boom");
}

#[test]
fn unknown_command_is_not_spawned() {
    let fake = Arc::new(FakeSpawner::echo());
    let registry = builder_with(&fake, SpawnOptions::default())
        .command("list", NO_ARGS)
        .build();

    match registry.invoke("lst", &["."], None) {
        Err(MisoError::UnknownCommand(name)) => assert_eq!(name, "lst"),
        Err(e) => panic!("Expected UnknownCommand error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    assert!(fake.invocations().is_empty());
}

#[test]
fn registry_is_shareable_across_threads() {
    let fake = Arc::new(FakeSpawner::echo());
    let registry = Arc::new(
        builder_with(&fake, SpawnOptions::default())
            .command("n", NO_ARGS)
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry["n"].call(&[i.to_string()]).as_text())
        })
        .collect();

    let mut outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    outputs.sort();

    assert_eq!(outputs, vec!["0", "1", "2", "3"]);
    assert_eq!(fake.invocations().len(), 4);
}
