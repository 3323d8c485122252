//! Configuration schema for devcheck.
//!
//! The config file is optional; every field has a default matching the
//! built-in behavior.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevcheckConfig {
    /// Subprocess timeouts.
    pub timeouts: Timeouts,

    /// Check groups to leave out of the run.
    pub skip: Vec<CheckGroup>,

    /// System file locations.
    pub paths: PathsConfig,
}

/// Subprocess timeouts in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    /// `--version` style invocations.
    pub version: u64,
    /// Cloud API calls (`aws sts`, `gcloud auth`, `doctl account`).
    pub api: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            version: 10,
            api: 15,
        }
    }
}

impl Timeouts {
    pub fn version(&self) -> Duration {
        Duration::from_secs(self.version)
    }

    pub fn api(&self) -> Duration {
        Duration::from_secs(self.api)
    }
}

/// Locations of system-wide files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub hosts_file: PathBuf,
    pub ansible_global_config: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            hosts_file: PathBuf::from("/etc/hosts"),
            ansible_global_config: PathBuf::from("/etc/ansible/ansible.cfg"),
        }
    }
}

/// A set of probes that can be skipped as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CheckGroup {
    /// `/etc/hosts`
    System,
    /// SSH config and known_hosts
    Ssh,
    /// git and docker
    Tools,
    /// AWS credentials, config and API
    Aws,
    /// Google Cloud credentials and auth
    Gcp,
    /// DigitalOcean config and API
    Digitalocean,
    /// Ansible CLI and config files
    Ansible,
    /// Terraform CLI and version
    Terraform,
}
