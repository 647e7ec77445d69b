// src/exec/spawner.rs

//! Pluggable process-spawn abstraction.
//!
//! The executor talks to a `Spawner` instead of `std::process` directly.
//! This keeps the blocking OS interaction behind one seam, so tests can swap
//! in a fake spawner that records invocations and returns canned outcomes.
//!
//! - [`SystemSpawner`] is the production implementation. It runs the
//!   executable with its argument vector verbatim (never through a shell),
//!   feeds `input` to stdin, captures stdout/stderr fully, and enforces
//!   `timeout` / `max_buffer` by killing the child.

use std::fmt::Debug;
use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use wait_timeout::ChildExt;

use crate::errors::{SpawnFailure, Stream};
use crate::exec::{ProcessOutcome, SpawnOptions};

/// How often the wait loop checks for an overflowing output stream.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long to keep reading pipes after the child has been killed.
const KILL_GRACE: Duration = Duration::from_millis(100);

/// Trait abstracting the platform's synchronous spawn primitive.
///
/// Implementations must not fail: everything that goes wrong is reported in
/// the returned [`ProcessOutcome`].
pub trait Spawner: Send + Sync + Debug {
    fn spawn_sync(&self, path: &str, args: &[String], options: &SpawnOptions) -> ProcessOutcome;
}

/// Spawner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn_sync(&self, path: &str, args: &[String], options: &SpawnOptions) -> ProcessOutcome {
        let started = Instant::now();

        let mut cmd = Command::new(path);
        cmd.args(args)
            .stdin(if options.input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &options.cwd {
            cmd.current_dir(dir);
        }
        if options.clear_env.unwrap_or(false) {
            cmd.env_clear();
        }
        if let Some(env) = &options.env {
            cmd.envs(env);
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(err) => {
                warn!(path, error = %err, "failed to spawn process");
                return ProcessOutcome {
                    elapsed: started.elapsed(),
                    ..ProcessOutcome::failed_to_spawn(SpawnFailure::spawn(path, &err))
                };
            }
        };

        let writer = spawn_stdin_writer(&mut child, options.input.clone());
        let stdout = StreamReader::spawn(child.stdout.take(), Stream::Stdout, options.max_buffer);
        let stderr = StreamReader::spawn(child.stderr.take(), Stream::Stderr, options.max_buffer);

        let timeout = options.effective_timeout();
        let deadline = timeout.map(|limit| Instant::now() + limit);
        let (status, mut failure) =
            wait_for_exit(&mut child, deadline, timeout, options.max_buffer, [&stdout, &stderr]);

        // After a kill, anything still holding the pipes (a grandchild) gets a
        // short grace period. Otherwise the timeout bounds the whole call.
        let killed = failure.is_some();
        let io_deadline = if killed {
            Some(Instant::now() + KILL_GRACE)
        } else {
            deadline
        };

        let mut detached = false;
        let mut record = |err: io::Error| {
            failure.get_or_insert_with(|| SpawnFailure::io(&err));
        };

        if let Some(writer) = writer {
            match await_worker(&writer, io_deadline) {
                Some(Err(err)) => record(err),
                Some(Ok(())) => {}
                None => detached = true,
            }
        }

        let overflow = [&stdout, &stderr]
            .into_iter()
            .find(|r| r.overflowed())
            .map(|r| r.stream);
        let mut collect = |reader: StreamReader| match reader.finish(io_deadline) {
            Collected::Done(Ok(bytes)) => bytes,
            Collected::Done(Err(err)) => {
                record(err);
                Vec::new()
            }
            Collected::Detached(bytes) => {
                detached = true;
                bytes
            }
        };
        let stdout = collect(stdout);
        let stderr = collect(stderr);

        if let (Some(stream), Some(limit)) = (overflow, options.max_buffer) {
            failure.get_or_insert(SpawnFailure::MaxBufferExceeded { stream, limit });
        }
        if let (true, Some(limit)) = (detached, timeout) {
            failure.get_or_insert(SpawnFailure::TimedOut { limit });
        }

        let (code, signal) = match status {
            Ok(status) => (status.code(), exit_signal(&status)),
            Err(err) => {
                failure.get_or_insert_with(|| SpawnFailure::io(&err));
                (None, None)
            }
        };

        if let Some(ref failure) = failure {
            warn!(path, error = %failure, "process did not complete normally");
        }
        debug!(path, status = ?code, signal = ?signal, detached, "process finished");

        ProcessOutcome {
            status: reported_status(code, failure.as_ref()),
            signal,
            stdout,
            stderr,
            error: failure,
            elapsed: started.elapsed(),
        }
    }
}

/// Exit code to report alongside `failure`.
///
/// Timeouts and overflows drop the code, since the child was cut short (a
/// killed child may still report one on some platforms). An i/o error on a
/// pipe of a child that exited on its own keeps it.
fn reported_status(code: Option<i32>, failure: Option<&SpawnFailure>) -> Option<i32> {
    match failure {
        None | Some(SpawnFailure::Io { .. }) => code,
        Some(_) => None,
    }
}

/// Block until the child exits, `deadline` passes, or an output stream
/// overflows. The latter two kill the child.
fn wait_for_exit(
    child: &mut Child,
    deadline: Option<Instant>,
    timeout: Option<Duration>,
    max_buffer: Option<usize>,
    readers: [&StreamReader; 2],
) -> (io::Result<ExitStatus>, Option<SpawnFailure>) {
    if deadline.is_none() && max_buffer.is_none() {
        return (child.wait(), None);
    }

    let deadline = deadline.zip(timeout);

    loop {
        if let (Some(reader), Some(limit)) = (readers.iter().find(|r| r.overflowed()), max_buffer) {
            let failure = SpawnFailure::MaxBufferExceeded {
                stream: reader.stream,
                limit,
            };
            return (kill_and_wait(child), Some(failure));
        }

        let slice = match deadline {
            Some((at, limit)) => {
                let now = Instant::now();
                if now >= at {
                    return (kill_and_wait(child), Some(SpawnFailure::TimedOut { limit }));
                }
                let remaining = at - now;
                if max_buffer.is_some() {
                    remaining.min(POLL_INTERVAL)
                } else {
                    remaining
                }
            }
            None => POLL_INTERVAL,
        };

        match child.wait_timeout(slice) {
            Ok(Some(status)) => return (Ok(status), None),
            Ok(None) => continue,
            Err(err) => {
                let _ = child.kill();
                return (Err(err), None);
            }
        }
    }
}

fn kill_and_wait(child: &mut Child) -> io::Result<ExitStatus> {
    if let Err(err) = child.kill() {
        debug!(error = %err, "kill failed (process may already have exited)");
    }
    child.wait()
}

/// Run `work` on its own thread; its result arrives on the returned channel.
fn spawn_worker<T, F>(work: F) -> Receiver<io::Result<T>>
where
    T: Send + 'static,
    F: FnOnce() -> io::Result<T> + Send + 'static,
{
    let (done, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = done.send(work());
    });
    rx
}

/// Wait for a worker until `deadline`. `None` means it was still running
/// and has been left behind.
fn await_worker<T>(done: &Receiver<io::Result<T>>, deadline: Option<Instant>) -> Option<io::Result<T>> {
    let received = match deadline {
        Some(at) => done.recv_timeout(at.saturating_duration_since(Instant::now())),
        None => done.recv().map_err(|_| RecvTimeoutError::Disconnected),
    };

    match received {
        Ok(result) => Some(result),
        Err(RecvTimeoutError::Timeout) => None,
        Err(RecvTimeoutError::Disconnected) => {
            Some(Err(io::Error::other("process i/o thread panicked")))
        }
    }
}

fn spawn_stdin_writer(child: &mut Child, input: Option<Vec<u8>>) -> Option<Receiver<io::Result<()>>> {
    let mut stdin = child.stdin.take()?;
    let input = input?;

    Some(spawn_worker(move || {
        // The child may exit without reading all of its input.
        match stdin.write_all(&input) {
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }))
}

/// Bytes read from one pipe so far. Once `detached`, the reader stops.
#[derive(Debug, Default)]
struct Capture {
    bytes: Vec<u8>,
    detached: bool,
}

fn lock(capture: &Mutex<Capture>) -> MutexGuard<'_, Capture> {
    capture.lock().unwrap_or_else(PoisonError::into_inner)
}

enum Collected {
    Done(io::Result<Vec<u8>>),
    /// The pipe was still open at the deadline; holds what was read by then.
    Detached(Vec<u8>),
}

/// Background reader that drains one output pipe.
struct StreamReader {
    stream: Stream,
    overflow: Arc<AtomicBool>,
    capture: Arc<Mutex<Capture>>,
    done: Option<Receiver<io::Result<()>>>,
}

impl StreamReader {
    fn spawn<R>(source: Option<R>, stream: Stream, limit: Option<usize>) -> Self
    where
        R: Read + Send + 'static,
    {
        let overflow = Arc::new(AtomicBool::new(false));
        let capture = Arc::new(Mutex::new(Capture::default()));
        let done = source.map(|mut source| {
            let flag = Arc::clone(&overflow);
            let sink = Arc::clone(&capture);
            spawn_worker(move || read_capped(&mut source, limit, &flag, &sink))
        });

        Self {
            stream,
            overflow,
            capture,
            done,
        }
    }

    fn overflowed(&self) -> bool {
        self.overflow.load(Ordering::Acquire)
    }

    fn finish(self, deadline: Option<Instant>) -> Collected {
        let Some(done) = self.done else {
            return Collected::Done(Ok(Vec::new()));
        };

        let finished = await_worker(&done, deadline);
        let mut capture = lock(&self.capture);
        match finished {
            Some(result) => Collected::Done(result.map(|()| mem::take(&mut capture.bytes))),
            None => {
                debug!(stream = %self.stream, "pipe still open after deadline, detaching reader");
                capture.detached = true;
                Collected::Detached(mem::take(&mut capture.bytes))
            }
        }
    }
}

fn read_capped(
    source: &mut impl Read,
    limit: Option<usize>,
    overflow: &AtomicBool,
    capture: &Mutex<Capture>,
) -> io::Result<()> {
    let mut chunk = [0u8; 8192];

    loop {
        let n = match source.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };

        let mut held = lock(capture);
        if held.detached {
            break;
        }

        match limit {
            Some(limit) if held.bytes.len() + n > limit => {
                let room = limit - held.bytes.len();
                held.bytes.extend_from_slice(&chunk[..room]);
                overflow.store(true, Ordering::Release);
                drop(held);
                // Keep draining until the child is killed so it never blocks on a full pipe.
                let _ = io::copy(source, &mut io::sink());
                break;
            }
            _ => held.bytes.extend_from_slice(&chunk[..n]),
        }
    }

    Ok(())
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
