//! Parsers for the dotfiles devcheck inspects.
//!
//! All parsers are line-oriented or delegate to serde, and are tolerant:
//! anything they do not understand is skipped or counted as invalid rather
//! than aborting, except where the format itself (JSON, YAML) is broken.
//!
//! # Modules
//!
//! - [`ini`] - AWS credentials/config and `ansible.cfg`
//! - [`aws`] - AWS profile summaries and `sts` output
//! - [`ssh_config`] - `~/.ssh/config` host patterns
//! - [`known_hosts`] - `~/.ssh/known_hosts` key counts
//! - [`hosts`] - `/etc/hosts` entries
//! - [`gcp`] - Google Cloud credential JSON and `gcloud auth list`
//! - [`doctl`] - DigitalOcean CLI config

pub mod aws;
pub mod doctl;
pub mod gcp;
pub mod hosts;
pub mod ini;
pub mod known_hosts;
pub mod ssh_config;

pub use aws::{config_profiles, credential_profiles, AwsProfile, CallerIdentity};
pub use doctl::{DoctlConfig, TokenState};
pub use gcp::{CredentialKind, GcpCredentials};
pub use hosts::{HostEntry, HostsFile};
pub use ini::{IniFile, IniSection};
pub use known_hosts::KnownHosts;
pub use ssh_config::SshConfig;
