//! `known_hosts` parsing.
//!
//! Each non-comment line is `[marker] hosts keytype base64-key [comment]`,
//! where `marker` is `@cert-authority` or `@revoked` and `hosts` may be a
//! hashed `|1|salt|hash` token.

/// Counts gathered from a known_hosts file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownHosts {
    /// Valid key lines, including marker lines.
    pub entries: usize,
    /// Entries whose host field is hashed.
    pub hashed: usize,
    /// `@cert-authority` lines.
    pub cert_authorities: usize,
    /// `@revoked` lines.
    pub revoked: usize,
    /// 1-based line numbers that could not be parsed.
    pub invalid_lines: Vec<usize>,
}

impl KnownHosts {
    pub fn parse(content: &str) -> Self {
        let mut known = Self::default();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace().peekable();
            let marker = fields.next_if(|f| f.starts_with('@'));
            let fields: Vec<&str> = fields.collect();

            let valid = fields.len() >= 3 && match marker {
                None => true,
                Some("@cert-authority") | Some("@revoked") => true,
                Some(_) => false,
            };
            if !valid {
                known.invalid_lines.push(idx + 1);
                continue;
            }

            known.entries += 1;
            if fields[0].starts_with("|1|") {
                known.hashed += 1;
            }
            match marker {
                Some("@cert-authority") => known.cert_authorities += 1,
                Some("@revoked") => known.revoked += 1,
                _ => {}
            }
        }

        known
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "AAAAC3NzaC1lZDI1NTE5AAAAIOMqqnkVzrm0SdG6UOoqKLsabgH5C9okWi0dh2l9GKJl";

    #[test]
    fn counts_plain_and_hashed_entries() {
        let content = format!(
            "github.com ssh-ed25519 {KEY}\n|1|F1E1KeoE/eEWhi10WpGv4OdiO6Y=|3988QV0VE8wmZL7suNrYQLITLCg= ssh-ed25519 {KEY}\n"
        );
        let known = KnownHosts::parse(&content);
        assert_eq!(known.entries, 2);
        assert_eq!(known.hashed, 1);
        assert!(known.invalid_lines.is_empty());
    }

    #[test]
    fn counts_markers() {
        let content = format!(
            "@cert-authority *.corp ssh-ed25519 {KEY}\n@revoked old.host ssh-rsa {KEY}\n"
        );
        let known = KnownHosts::parse(&content);
        assert_eq!(known.entries, 2);
        assert_eq!(known.cert_authorities, 1);
        assert_eq!(known.revoked, 1);
    }

    #[test]
    fn records_invalid_lines() {
        let content = format!("# comment\nbroken-line\nhost ssh-ed25519 {KEY}\n@bogus h t k\n");
        let known = KnownHosts::parse(&content);
        assert_eq!(known.entries, 1);
        assert_eq!(known.invalid_lines, [2, 4]);
    }

    #[test]
    fn empty_file_has_no_entries() {
        assert_eq!(KnownHosts::parse(""), KnownHosts::default());
    }
}
