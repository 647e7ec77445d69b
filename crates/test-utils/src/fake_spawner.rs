use std::sync::{Arc, Mutex};

use misocmd::{ProcessOutcome, SpawnOptions, Spawner};

/// One recorded call to [`FakeSpawner::spawn_sync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: String,
    pub args: Vec<String>,
    pub options: SpawnOptions,
}

#[derive(Debug, Clone)]
enum Response {
    /// Always return this outcome.
    Fixed(ProcessOutcome),
    /// Exit 0, stdout = stdin if input was given, else args joined by '\n'.
    Echo,
}

/// A fake spawner that:
/// - records every invocation (path, argv, merged options)
/// - never starts a process, answering with a canned outcome instead.
#[derive(Debug, Clone)]
pub struct FakeSpawner {
    response: Response,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl FakeSpawner {
    pub fn new(outcome: ProcessOutcome) -> Self {
        Self {
            response: Response::Fixed(outcome),
            invocations: Arc::default(),
        }
    }

    pub fn echo() -> Self {
        Self {
            response: Response::Echo,
            invocations: Arc::default(),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Invocation> {
        self.invocations.lock().unwrap().last().cloned()
    }
}

impl Spawner for FakeSpawner {
    fn spawn_sync(&self, path: &str, args: &[String], options: &SpawnOptions) -> ProcessOutcome {
        {
            let mut guard = self.invocations.lock().unwrap();
            guard.push(Invocation {
                path: path.to_string(),
                args: args.to_vec(),
                options: options.clone(),
            });
        }

        match &self.response {
            Response::Fixed(outcome) => outcome.clone(),
            Response::Echo => ProcessOutcome {
                status: Some(0),
                stdout: match &options.input {
                    Some(input) => input.clone(),
                    None => args.join("\n").into_bytes(),
                },
                ..ProcessOutcome::default()
            },
        }
    }
}
