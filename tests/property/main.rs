// tests/property/main.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use misocmd::{MisoCommandBuilder, MisoCommandResult, ProcessOutcome, SpawnOptions};
use misocmd_test_utils::FakeSpawner;
use proptest::prelude::*;

fn result_with(stdout: &str) -> MisoCommandResult {
    MisoCommandResult::new(ProcessOutcome {
        status: Some(0),
        stdout: stdout.as_bytes().to_vec(),
        ..ProcessOutcome::default()
    })
}

// Registrations drawn from a small name pool so duplicates are common.
fn registrations() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    proptest::collection::vec(
        (
            "[a-d]",
            proptest::collection::vec("[a-z0-9-]{0,6}", 0..4),
        ),
        0..12,
    )
}

proptest! {
    #[test]
    fn lines_rejoin_to_text(text in "[a-z\n]{0,40}") {
        let result = result_with(&text);
        let lines = result.as_lines();

        prop_assert_eq!(lines.join("\n"), text.clone());
        prop_assert_eq!(lines.len(), text.matches('\n').count() + 1);
    }

    #[test]
    fn text_views_are_pure(text in "\\PC{0,40}") {
        let result = result_with(&text);

        prop_assert_eq!(result.as_text(), result.as_text());
        prop_assert_eq!(result.as_lines(), result.as_lines());
        prop_assert_eq!(result.as_blob(None), result.as_blob(None));
        prop_assert_eq!(result.as_text(), text);
    }

    #[test]
    fn builder_keeps_last_registration_per_name(regs in registrations()) {
        let fake = Arc::new(FakeSpawner::echo());
        let builder = regs.iter().fold(
            MisoCommandBuilder::with_spawner("tool", SpawnOptions::default(), fake.clone()),
            |b, (name, args)| b.command(name, args),
        );
        let registry = builder.build();

        let mut expected: BTreeMap<&str, &Vec<String>> = BTreeMap::new();
        for (name, args) in &regs {
            expected.insert(name, args);
        }

        prop_assert_eq!(registry.len(), expected.len());
        for (name, args) in expected {
            prop_assert_eq!(registry[name].args(), args.as_slice());
        }
    }

    #[test]
    fn invocation_argv_is_preset_then_extra(
        preset in proptest::collection::vec("[a-z]{1,4}", 0..4),
        extra in proptest::collection::vec("[A-Z]{1,4}", 0..4),
    ) {
        let fake = Arc::new(FakeSpawner::echo());
        let registry = MisoCommandBuilder::with_spawner("tool", SpawnOptions::default(), fake.clone())
            .command("cmd", &preset)
            .build();

        registry["cmd"].call(&extra);

        let call = fake.last().unwrap();
        let expected: Vec<String> = preset.iter().chain(extra.iter()).cloned().collect();
        prop_assert_eq!(call.args, expected);
    }
}
