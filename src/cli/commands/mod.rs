//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations:
//! - `devcheck` / `devcheck check` run the checks and print the report
//! - `devcheck setup` installs example configs
//! - `devcheck completions <shell>` prints a completion script

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
