//! External command execution with a timeout.

use crate::error::{DevcheckError, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::interrupt;

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing a command that ran to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// First line of trimmed stdout; tools usually print their version there.
    pub fn first_line(&self) -> &str {
        self.stdout.trim().lines().next().unwrap_or("")
    }

    /// Trimmed stderr.
    pub fn error_output(&self) -> &str {
        self.stderr.trim()
    }
}

/// Runs external programs.
///
/// Probes depend on this trait rather than on `std::process` so tests can
/// substitute canned output (see [`MockRunner`](super::MockRunner)).
pub trait CommandRunner {
    /// Run `program` with `args`, killing it after `timeout`.
    ///
    /// Returns `Ok` for any exit status, `CommandTimeout` when the deadline
    /// passes, `CommandSpawn` when the program cannot be started and
    /// `Interrupted` on SIGINT.
    fn run(&self, program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult>;
}

/// Runs programs as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        execute(program, args, timeout)
    }
}

/// Human-readable command line, used in logs and error messages.
pub fn display_command(program: &Path, args: &[&str]) -> String {
    let name = program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string());
    if args.is_empty() {
        name
    } else {
        format!("{} {}", name, args.join(" "))
    }
}

/// Execute a program directly (no shell), capturing stdout and stderr.
pub fn execute(program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult> {
    let command_line = display_command(program, args);
    tracing::debug!(
        command = %command_line,
        timeout_secs = timeout.as_secs(),
        "running command"
    );

    let start = Instant::now();

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| DevcheckError::CommandSpawn {
            command: command_line.clone(),
            message: e.to_string(),
        })?;

    // Drain both pipes on their own threads so a chatty child can't block on
    // a full pipe while we wait for it.
    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }

        if interrupt::is_interrupted() {
            let _ = child.kill();
            let _ = child.wait();
            return Err(DevcheckError::Interrupted);
        }

        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            tracing::debug!(command = %command_line, "command timed out");
            return Err(DevcheckError::CommandTimeout {
                command: command_line,
                seconds: timeout.as_secs(),
            });
        }

        thread::sleep(POLL_INTERVAL);
    };

    // Ctrl-C reaches the child too, and it often exits before the loop sees
    // the flag.
    interrupt::check()?;

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);
    let duration = start.elapsed();

    tracing::debug!(
        command = %command_line,
        code = ?status.code(),
        elapsed_ms = duration.as_millis() as u64,
        "command finished"
    );

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}
