//! Hosts file probe.

use super::Checker;
use crate::parsers::HostsFile;
use crate::report::CheckStatus;

const CATEGORY: &str = "System";

impl Checker<'_> {
    pub(crate) fn check_system(&mut self) {
        let hosts_path = self.ctx.paths.hosts_file.display().to_string();
        let Some(path) = self.check_file_exists(&hosts_path, CATEGORY, &hosts_path) else {
            return;
        };
        let Some(content) = self.read_for_parse(&path, CATEGORY, "Hosts entries") else {
            return;
        };

        let hosts = HostsFile::parse(&content);
        if !hosts.invalid_lines.is_empty() {
            tracing::warn!(lines = ?hosts.invalid_lines, "hosts file lines without a name");
        }

        if hosts.has_localhost() {
            self.add(
                CATEGORY,
                "Hosts entries",
                CheckStatus::Ok,
                format!("{} entries", hosts.entries.len()),
            );
        } else {
            self.add(
                CATEGORY,
                "Hosts entries",
                CheckStatus::Warning,
                "No localhost entry",
            );
        }
    }
}
