//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with canned responses keyed by
//! command line (program file name plus arguments) and records every
//! invocation for later assertion.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use std::time::Duration;
//! use devcheck::shell::{CommandRunner, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.respond_ok("git --version", "git version 2.43.0\n");
//!
//! let result = runner
//!     .run(Path::new("/usr/bin/git"), &["--version"], Duration::from_secs(10))
//!     .unwrap();
//! assert_eq!(result.first_line(), "git version 2.43.0");
//! assert_eq!(runner.calls(), vec!["git --version".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{DevcheckError, Result};

use super::command::{display_command, CommandResult, CommandRunner};

/// A canned response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Command ran to completion.
    Completed(CommandResult),
    /// Command exceeded its timeout.
    Timeout,
    /// Command could not be started.
    SpawnError(String),
    /// SIGINT arrived while the command ran.
    Interrupted,
}

/// Mock runner with canned responses.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, MockResponse>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no responses configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for a command line such as `"aws sts get-caller-identity"`.
    pub fn respond(&mut self, command: &str, response: MockResponse) {
        self.responses.insert(command.to_string(), response);
    }

    /// Respond with exit 0 and the given stdout.
    pub fn respond_ok(&mut self, command: &str, stdout: &str) {
        self.respond(
            command,
            MockResponse::Completed(CommandResult::success(
                stdout.to_string(),
                String::new(),
                Duration::ZERO,
            )),
        );
    }

    /// Respond with a non-zero exit and the given stderr.
    pub fn respond_fail(&mut self, command: &str, code: i32, stderr: &str) {
        self.respond(
            command,
            MockResponse::Completed(CommandResult::failure(
                Some(code),
                String::new(),
                stderr.to_string(),
                Duration::ZERO,
            )),
        );
    }

    /// Respond with a timeout.
    pub fn respond_timeout(&mut self, command: &str) {
        self.respond(command, MockResponse::Timeout);
    }

    /// All command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether a command line was run.
    pub fn was_called(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &Path, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());

        match self.responses.get(&command) {
            Some(MockResponse::Completed(result)) => Ok(result.clone()),
            Some(MockResponse::Timeout) => Err(DevcheckError::CommandTimeout {
                command,
                seconds: timeout.as_secs(),
            }),
            Some(MockResponse::SpawnError(message)) => Err(DevcheckError::CommandSpawn {
                command,
                message: message.clone(),
            }),
            Some(MockResponse::Interrupted) => Err(DevcheckError::Interrupted),
            None => Err(DevcheckError::CommandSpawn {
                command,
                message: "no mock response configured".to_string(),
            }),
        }
    }
}
