//! Command presence and version probes.

use std::path::{Path, PathBuf};

use super::{Checker, RunOutcome};
use crate::error::Result;
use crate::report::CheckStatus;
use crate::shell::resolve_tool_path;

impl Checker<'_> {
    /// Record whether `command` is on the search path. Returns its resolved
    /// location.
    pub fn check_command_exists(
        &mut self,
        command: &str,
        category: &str,
        description: &str,
    ) -> Option<PathBuf> {
        match resolve_tool_path(command, &self.ctx.path_entries) {
            Some(path) => {
                tracing::debug!(command, path = %path.display(), "tool found");
                self.add(
                    category,
                    description,
                    CheckStatus::Ok,
                    format!("Path: {}", path.display()),
                );
                Some(path)
            }
            None => {
                tracing::debug!(command, "tool not found");
                self.add(category, description, CheckStatus::Missing, "Command not found");
                None
            }
        }
    }

    /// Record `<description> (installed)` and, when present,
    /// `<description> (version)` from `<command> <flag>`.
    pub fn check_command_version(
        &mut self,
        command: &str,
        category: &str,
        description: &str,
        flag: &str,
    ) -> Result<()> {
        let installed = format!("{} (installed)", description);
        let Some(program) = self.check_command_exists(command, category, &installed) else {
            return Ok(());
        };

        let item = format!("{} (version)", description);
        self.version_probe(&program, &[flag], category, &item)
    }

    /// Run a version command with the version timeout and record the first
    /// line of its output under `item`.
    pub(crate) fn version_probe(
        &mut self,
        program: &Path,
        args: &[&str],
        category: &str,
        item: &str,
    ) -> Result<()> {
        let timeout = self.ctx.timeouts.version();
        let (status, details) = match self.run(program, args, timeout)? {
            RunOutcome::Completed(result) if result.success => {
                (CheckStatus::Ok, result.first_line().to_string())
            }
            RunOutcome::Completed(result) => {
                (CheckStatus::Error, result.error_output().to_string())
            }
            RunOutcome::TimedOut => (CheckStatus::Error, "Command timeout".to_string()),
            RunOutcome::Failed(message) => (CheckStatus::Error, message),
        };
        self.add(category, item, status, details);
        Ok(())
    }
}
