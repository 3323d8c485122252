//! The `devcheck check` command.

use std::path::{Path, PathBuf};

use crate::checks::{CheckContext, Checker};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, ConfigSource};
use crate::error::Result;
use crate::report::{render_human, render_json};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    home: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
    runner: Box<dyn CommandRunner>,
    path_entries: Option<Vec<PathBuf>>,
}

impl CheckCommand {
    /// Create a check command that runs real tools.
    pub fn new(home: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            config_path,
            args,
            runner: Box::new(SystemRunner),
            path_entries: None,
        }
    }

    /// Use another command runner.
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Search these directories for tools instead of `PATH`.
    pub fn with_path_entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = Some(entries);
        self
    }

    fn context(&self) -> Result<CheckContext> {
        let source = ConfigSource::resolve(self.config_path.as_deref(), &self.home);
        let config = load_config(&source)?;

        let mut ctx =
            CheckContext::new(&self.home, &config).skipping(self.args.skip.iter().copied());
        if let Some(entries) = &self.path_entries {
            ctx = ctx.with_path_entries(entries.clone());
        }
        Ok(ctx)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context()?;

        // JSON goes to stdout on its own; progress lines would corrupt it.
        let mode = ui.output_mode();
        if self.args.json {
            ui.set_output_mode(OutputMode::Quiet);
        }
        let result = Checker::new(self.runner.as_ref(), &ctx, &mut *ui).run_all();
        ui.set_output_mode(mode);
        let report = result?;

        let output = if self.args.json {
            format!("{}\n", render_json(&report)?)
        } else {
            render_human(&report, ui.theme())
        };
        ui.emit(&output);

        let summary = report.summary();
        tracing::debug!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            warnings = summary.warnings,
            "report rendered"
        );

        if self.args.strict && summary.failed > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
