//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::CheckGroup;

/// devcheck - Local development environment diagnostics.
#[derive(Debug, Parser)]
#[command(name = "devcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.config/devcheck/config.yml)
    #[arg(short, long, global = true, env = "DEVCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Echo external commands before running them
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the report only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation runs the checks (`check` or no subcommand).
    ///
    /// Only the check run handles Ctrl-C itself; other commands keep the
    /// default SIGINT behavior.
    pub fn runs_checks(&self) -> bool {
        matches!(self.command, None | Some(Commands::Check(_)))
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the environment and print a report (default if no command specified)
    Check(CheckArgs),

    /// Copy example Ansible and doctl configs into the home directory
    Setup(SetupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip a group of checks (repeatable or comma separated)
    #[arg(long, value_enum, value_delimiter = ',', value_name = "GROUP")]
    pub skip: Vec<CheckGroup>,

    /// Exit with status 1 when any check failed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// Read templates from this directory instead of the built-in ones
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["devcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn check_flags_parse() {
        let cli = Cli::try_parse_from([
            "devcheck",
            "check",
            "--json",
            "--strict",
            "--skip",
            "gcp,digitalocean",
            "--skip",
            "ssh",
        ])
        .unwrap();
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check");
        };
        assert!(args.json);
        assert!(args.strict);
        assert_eq!(
            args.skip,
            [CheckGroup::Gcp, CheckGroup::Digitalocean, CheckGroup::Ssh]
        );
    }

    #[test]
    fn unknown_group_is_rejected() {
        assert!(Cli::try_parse_from(["devcheck", "check", "--skip", "azure"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["devcheck", "setup", "--quiet", "--no-color"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Setup(_))));
    }

    #[test]
    fn only_check_runs_checks() {
        assert!(Cli::try_parse_from(["devcheck"]).unwrap().runs_checks());
        assert!(Cli::try_parse_from(["devcheck", "check"]).unwrap().runs_checks());
        assert!(!Cli::try_parse_from(["devcheck", "setup"]).unwrap().runs_checks());
        assert!(!Cli::try_parse_from(["devcheck", "completions", "bash"])
            .unwrap()
            .runs_checks());
    }

    #[test]
    fn setup_from_dir() {
        let cli = Cli::try_parse_from(["devcheck", "setup", "--from", "/srv/templates"]).unwrap();
        let Some(Commands::Setup(args)) = cli.command else {
            panic!("expected setup");
        };
        assert_eq!(args.from, Some(PathBuf::from("/srv/templates")));
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["devcheck", "completions"]).is_err());
        let cli = Cli::try_parse_from(["devcheck", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }
}
