//! Hosts file (`/etc/hosts`) parsing.

/// One `address name [aliases...]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub address: String,
    pub names: Vec<String>,
}

/// Parsed hosts file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsFile {
    pub entries: Vec<HostEntry>,
    /// 1-based line numbers with an address but no name.
    pub invalid_lines: Vec<usize>,
}

impl HostsFile {
    /// Parse hosts file content. Trailing `#` comments are stripped.
    pub fn parse(content: &str) -> Self {
        let mut hosts = Self::default();

        for (idx, line) in content.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(address) = fields.next() else {
                continue;
            };
            let names: Vec<String> = fields.map(str::to_string).collect();
            if names.is_empty() {
                hosts.invalid_lines.push(idx + 1);
                continue;
            }

            hosts.entries.push(HostEntry {
                address: address.to_string(),
                names,
            });
        }

        hosts
    }

    /// Whether any entry maps the name `localhost`.
    pub fn has_localhost(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.names.iter().any(|n| n.eq_ignore_ascii_case("localhost")))
    }
}
