//! Environment probes.
//!
//! A [`Checker`] runs every enabled probe in a fixed order and appends the
//! outcome of each one to a [`Report`]. Probes never fail the run: missing
//! files, non-zero exits, timeouts and parse errors all become records. The
//! only error that escapes is [`DevcheckError::Interrupted`].
//!
//! # Example
//!
//! ```
//! use devcheck::checks::{CheckContext, Checker};
//! use devcheck::config::{CheckGroup, DevcheckConfig};
//! use devcheck::shell::MockRunner;
//! use devcheck::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let home = TempDir::new().unwrap();
//! let config = DevcheckConfig {
//!     skip: vec![CheckGroup::System, CheckGroup::Tools],
//!     ..Default::default()
//! };
//! let ctx = CheckContext::new(home.path(), &config).with_path_entries(Vec::new());
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! let report = Checker::new(&runner, &ctx, &mut ui).run_all().unwrap();
//! let ssh = report.find("SSH", "SSH config").unwrap();
//! assert_eq!(ssh.status.label(), "MISSING");
//! ```

mod ansible;
mod cloud;
mod files;
mod ssh;
mod system;
mod terraform;
mod tools;

use std::path::{Path, PathBuf};

use crate::config::{CheckGroup, DevcheckConfig, PathsConfig, Timeouts};
use crate::error::{DevcheckError, Result};
use crate::report::{CheckStatus, Report};
use crate::shell::{display_command, interrupt, parse_system_path, CommandResult, CommandRunner};
use crate::ui::UserInterface;

/// Header printed before the progress lines.
pub const HEADER: &str = "Local Development Environment Check";

/// Everything a probe needs to know about the machine it inspects.
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Home directory that `~` expands to.
    pub home: PathBuf,
    /// Directories searched for tools, in order.
    pub path_entries: Vec<PathBuf>,
    pub timeouts: Timeouts,
    pub paths: PathsConfig,
    /// Groups left out of the run.
    pub skip: Vec<CheckGroup>,
}

impl CheckContext {
    /// Build a context from config, searching the system `PATH`.
    pub fn new(home: &Path, config: &DevcheckConfig) -> Self {
        Self {
            home: home.to_path_buf(),
            path_entries: parse_system_path(),
            timeouts: config.timeouts,
            paths: config.paths.clone(),
            skip: config.skip.clone(),
        }
    }

    /// Replace the tool search path.
    pub fn with_path_entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = entries;
        self
    }

    /// Add more groups to skip.
    pub fn skipping(mut self, groups: impl IntoIterator<Item = CheckGroup>) -> Self {
        for group in groups {
            if !self.skip.contains(&group) {
                self.skip.push(group);
            }
        }
        self
    }

    pub fn is_enabled(&self, group: CheckGroup) -> bool {
        !self.skip.contains(&group)
    }

    fn any_enabled(&self, groups: &[CheckGroup]) -> bool {
        groups.iter().any(|g| self.is_enabled(*g))
    }
}

/// How an external command ended, from a probe's point of view.
#[derive(Debug)]
pub(crate) enum RunOutcome {
    /// Ran to completion with any exit status.
    Completed(CommandResult),
    /// Killed after the timeout.
    TimedOut,
    /// Could not be started.
    Failed(String),
}

/// Runs probes and accumulates their records.
pub struct Checker<'a> {
    runner: &'a dyn CommandRunner,
    ctx: &'a CheckContext,
    ui: &'a mut dyn UserInterface,
    report: Report,
}

impl<'a> Checker<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        ctx: &'a CheckContext,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            runner,
            ctx,
            ui,
            report: Report::new(),
        }
    }

    /// Records gathered so far.
    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }

    /// Run every enabled probe in order and return the report.
    pub fn run_all(mut self) -> Result<Report> {
        use CheckGroup::*;

        self.ui.show_header(HEADER);

        if self.ctx.any_enabled(&[System, Ssh]) {
            self.ui.message("Checking system files...");
            if self.ctx.is_enabled(System) {
                self.check_system();
            }
            if self.ctx.is_enabled(Ssh) {
                self.check_ssh();
            }
        }
        interrupt::check()?;

        if self.ctx.any_enabled(&[Tools, Ansible, Terraform]) {
            self.ui.message("Checking command line tools...");
            if self.ctx.is_enabled(Tools) {
                self.check_command_version("git", "Tools", "Git", "--version")?;
                self.check_command_version("docker", "Tools", "Docker", "--version")?;
            }
            if self.ctx.is_enabled(Ansible) {
                self.check_command_version("ansible", "Ansible", "Ansible", "--version")?;
            }
            if self.ctx.is_enabled(Terraform) {
                self.check_command_version("terraform", "Terraform", "Terraform", "--version")?;
            }
        }
        interrupt::check()?;

        if self.ctx.any_enabled(&[Aws, Gcp, Digitalocean]) {
            self.ui.message("Checking cloud providers...");
            if self.ctx.is_enabled(Aws) {
                self.check_aws()?;
            }
            if self.ctx.is_enabled(Gcp) {
                self.check_gcp()?;
            }
            if self.ctx.is_enabled(Digitalocean) {
                self.check_digitalocean()?;
            }
        }
        interrupt::check()?;

        if self.ctx.is_enabled(Ansible) {
            self.ui.message("Checking Ansible configuration...");
            self.check_ansible_config();
        }
        interrupt::check()?;

        if self.ctx.is_enabled(Terraform) {
            self.ui.message("Checking Terraform configuration...");
            self.check_terraform_config()?;
        }
        interrupt::check()?;

        tracing::debug!(records = self.report.len(), "checks complete");
        Ok(self.report)
    }

    fn add(&mut self, category: &str, item: &str, status: CheckStatus, details: impl Into<String>) {
        self.report.add(category, item, status, details);
    }

    /// Run an external command, echoing it in verbose mode.
    ///
    /// Only an interruption is returned as an error.
    fn run(&mut self, program: &Path, args: &[&str], timeout: std::time::Duration) -> Result<RunOutcome> {
        interrupt::check()?;
        self.ui.command(&display_command(program, args));
        match self.runner.run(program, args, timeout) {
            Ok(result) => Ok(RunOutcome::Completed(result)),
            Err(DevcheckError::CommandTimeout { .. }) => Ok(RunOutcome::TimedOut),
            Err(DevcheckError::Interrupted) => Err(DevcheckError::Interrupted),
            Err(e) => Ok(RunOutcome::Failed(e.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A fake home and tool directory with no tools installed.
    pub struct Sandbox {
        pub home: TempDir,
        pub bin: TempDir,
    }

    impl Sandbox {
        pub fn new() -> Self {
            Self {
                home: TempDir::new().unwrap(),
                bin: TempDir::new().unwrap(),
            }
        }

        /// Write a file under home, creating parent directories.
        pub fn write(&self, relative: &str, content: &str) -> PathBuf {
            let path = self.home.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            path
        }

        /// Put an executable named `name` on the search path.
        pub fn install_tool(&self, name: &str) -> PathBuf {
            let path = self.bin.path().join(name);
            fs::write(&path, "#!/bin/sh\n").unwrap();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            }
            path
        }

        /// Context with system files pointed inside the sandbox.
        pub fn context(&self) -> CheckContext {
            let mut config = DevcheckConfig::default();
            config.paths.hosts_file = self.home.path().join("etc/hosts");
            config.paths.ansible_global_config = self.home.path().join("etc/ansible/ansible.cfg");
            CheckContext::new(self.home.path(), &config)
                .with_path_entries(vec![self.bin.path().to_path_buf()])
        }
    }
}
