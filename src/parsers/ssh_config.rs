//! SSH client config (`~/.ssh/config`) parsing.
//!
//! Only the parts the report needs are extracted: `Host` patterns and
//! `Include` directives. Keywords are case-insensitive and may be separated
//! from their arguments by whitespace or `=`.

/// Host patterns found in an SSH client config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshConfig {
    /// Concrete host aliases, in file order, deduplicated.
    pub hosts: Vec<String>,
    /// Patterns with wildcards or negation (`*`, `*.corp`, `!bastion`).
    pub patterns: Vec<String>,
    /// `Include` arguments, unexpanded.
    pub includes: Vec<String>,
}

impl SshConfig {
    /// Parse config content. Unknown keywords are ignored.
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((keyword, args)) = split_keyword(line) else {
                continue;
            };

            if keyword.eq_ignore_ascii_case("host") {
                for pattern in args.split_whitespace().map(unquote) {
                    if is_pattern(pattern) {
                        config.patterns.push(pattern.to_string());
                    } else if !config.hosts.iter().any(|h| h == pattern) {
                        config.hosts.push(pattern.to_string());
                    }
                }
            } else if keyword.eq_ignore_ascii_case("include") {
                config
                    .includes
                    .extend(args.split_whitespace().map(|s| unquote(s).to_string()));
            }
        }

        config
    }

    /// Whether no `Host` lines were found.
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty() && self.patterns.is_empty()
    }
}

fn split_keyword(line: &str) -> Option<(&str, &str)> {
    let end = line.find(|c: char| c.is_whitespace() || c == '=')?;
    let keyword = &line[..end];
    let rest = line[end..].trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest).trim();
    if rest.is_empty() {
        None
    } else {
        Some((keyword, rest))
    }
}

fn is_pattern(host: &str) -> bool {
    host.contains(['*', '?']) || host.starts_with('!')
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}
