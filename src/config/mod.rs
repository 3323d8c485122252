//! Configuration loading for devcheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use devcheck::config::{load_config, CheckGroup, ConfigSource};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("devcheck.yml");
//! fs::write(&path, "skip: [gcp]\ntimeouts:\n  api: 30\n").unwrap();
//!
//! let config = load_config(&ConfigSource::resolve(Some(&path), temp.path())).unwrap();
//! assert_eq!(config.skip, [CheckGroup::Gcp]);
//! assert_eq!(config.timeouts.api, 30);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. `--config <path>` or `DEVCHECK_CONFIG` (must exist)
//! 2. `~/.config/devcheck/config.yml` (optional)

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigSource, DEFAULT_CONFIG_PATH};
pub use schema::{CheckGroup, DevcheckConfig, PathsConfig, Timeouts};
