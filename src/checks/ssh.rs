//! SSH client config and known_hosts probes.

use super::Checker;
use crate::parsers::{KnownHosts, SshConfig};
use crate::report::CheckStatus;

const CATEGORY: &str = "SSH";

impl Checker<'_> {
    pub(crate) fn check_ssh(&mut self) {
        if let Some(path) = self.check_file_exists("~/.ssh/config", CATEGORY, "SSH config") {
            if let Some(content) = self.read_for_parse(&path, CATEGORY, "Host entries") {
                let config = SshConfig::parse(&content);
                let (status, details) = describe_ssh_config(&config);
                self.add(CATEGORY, "Host entries", status, details);
            }
        }

        if let Some(path) = self.check_file_exists("~/.ssh/known_hosts", CATEGORY, "Known hosts") {
            if let Some(content) = self.read_for_parse(&path, CATEGORY, "Known host keys") {
                let known = KnownHosts::parse(&content);
                let (status, details) = describe_known_hosts(&known);
                self.add(CATEGORY, "Known host keys", status, details);
            }
        }
    }
}

fn describe_ssh_config(config: &SshConfig) -> (CheckStatus, String) {
    // Hosts may live in included files.
    if config.is_empty() && config.includes.is_empty() {
        return (CheckStatus::Warning, "No Host entries".to_string());
    }

    let mut details = format!("{} hosts", config.hosts.len());
    if !config.hosts.is_empty() {
        details.push_str(": ");
        details.push_str(&config.hosts.join(", "));
    }
    match config.patterns.len() {
        0 => {}
        1 => details.push_str(" (+1 default pattern)"),
        n => details.push_str(&format!(" (+{} default patterns)", n)),
    }
    match config.includes.len() {
        0 => {}
        1 => details.push_str("; 1 include"),
        n => details.push_str(&format!("; {} includes", n)),
    }
    (CheckStatus::Info, details)
}

fn describe_known_hosts(known: &KnownHosts) -> (CheckStatus, String) {
    let mut details = format!("{} keys ({} hashed)", known.entries, known.hashed);
    match known.cert_authorities {
        0 => {}
        1 => details.push_str("; 1 cert authority"),
        n => details.push_str(&format!("; {} cert authorities", n)),
    }
    if known.revoked > 0 {
        details.push_str(&format!("; {} revoked", known.revoked));
    }
    if known.invalid_lines.is_empty() {
        (CheckStatus::Info, details)
    } else {
        let lines: Vec<String> = known.invalid_lines.iter().map(|n| n.to_string()).collect();
        (
            CheckStatus::Warning,
            format!("{}; invalid lines: {}", details, lines.join(", ")),
        )
    }
}
