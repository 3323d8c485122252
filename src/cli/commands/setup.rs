//! The `devcheck setup` command.

use std::path::{Path, PathBuf};

use crate::cli::args::SetupArgs;
use crate::error::Result;
use crate::setup::{run_setup, TemplateSource};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    home: PathBuf,
    args: SetupArgs,
}

impl SetupCommand {
    pub fn new(home: &Path, args: SetupArgs) -> Self {
        Self {
            home: home.to_path_buf(),
            args,
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = TemplateSource::from_option(self.args.from.as_deref());
        let outcome = run_setup(&source, &self.home, ui)?;
        tracing::debug!(
            copied = outcome.copied().count(),
            backups = outcome.backups().count(),
            "setup finished"
        );
        Ok(CommandResult::success())
    }
}
