//! devcheck - Local development environment diagnostics.
//!
//! devcheck inspects the files and command-line tools a typical
//! infrastructure workstation relies on (SSH, AWS, Google Cloud,
//! DigitalOcean, Ansible, Terraform) and prints a grouped report with a
//! pass/fail/warning tally. `devcheck setup` installs example configs.
//!
//! # Modules
//!
//! - [`checks`] - Probes and the check run order
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`parsers`] - Dotfile parsers (SSH, INI, hosts, GCP, doctl)
//! - [`report`] - Check records, summaries and rendering
//! - [`setup`] - Template installation
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use devcheck::parsers::SshConfig;
//!
//! let config = SshConfig::parse("Host bastion\n  HostName 10.0.0.1\nHost *\n");
//! assert_eq!(config.hosts, ["bastion"]);
//! assert_eq!(config.patterns, ["*"]);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod parsers;
pub mod report;
pub mod setup;
pub mod shell;
pub mod ui;

pub use error::{DevcheckError, Result};
