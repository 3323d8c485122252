//! INI-style file parsing.
//!
//! Covers the dialect shared by `~/.aws/credentials`, `~/.aws/config` and
//! `ansible.cfg`.
//!
//! # Supported Formats
//!
//! - Sections: `[default]`, `[profile work]`
//! - Pairs: `key = value` or `key: value`
//! - Comments: lines starting with `#` or `;`
//! - Nested settings: indented lines under a key with an empty value (AWS
//!   `s3 =` blocks) are skipped
//!
//! # Example
//!
//! ```
//! use devcheck::parsers::IniFile;
//!
//! let ini = IniFile::parse("[default]\nregion = eu-west-1\n").unwrap();
//! assert_eq!(ini.get("default", "region"), Some("eu-west-1"));
//! ```

/// A `[section]` and its key/value pairs in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl IniSection {
    /// Look up a key, ignoring ASCII case. Last assignment wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present with a non-empty value.
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// A parsed INI file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: Vec<IniSection>,
}

impl IniFile {
    /// Parse file content.
    ///
    /// Keys before the first header land in a section named `""`. A line
    /// that is neither a header, a comment nor a pair is an error naming its
    /// line number.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut sections: Vec<IniSection> = Vec::new();
        let mut nested = false;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let indented = raw.starts_with([' ', '\t']);
            if indented && nested {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| format!("line {}: unterminated section header", idx + 1))?;
                sections.push(IniSection {
                    name: name.trim().to_string(),
                    entries: Vec::new(),
                });
                nested = false;
                continue;
            }

            let (key, value) = split_pair(line)
                .ok_or_else(|| format!("line {}: expected `key = value`", idx + 1))?;

            if sections.is_empty() {
                sections.push(IniSection::default());
            }
            if let Some(section) = sections.last_mut() {
                section.entries.push((key.to_string(), value.to_string()));
            }
            // `s3 =` opens a block of indented sub-settings.
            nested = value.is_empty() && !indented;
        }

        Ok(Self { sections })
    }

    /// All sections in file order.
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    /// First section with the given name.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }
}

/// Split on the first `=` or `:`, whichever comes first.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(['=', ':'])?;
    let key = line[..pos].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[pos + 1..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_pairs() {
        let content = r#"
[default]
aws_access_key_id = AKIAEXAMPLE
aws_secret_access_key = secret

[work]
aws_access_key_id=AKIAWORK
"#;
        let ini = IniFile::parse(content).unwrap();
        assert_eq!(ini.sections().len(), 2);
        assert_eq!(ini.get("default", "aws_access_key_id"), Some("AKIAEXAMPLE"));
        assert_eq!(ini.get("work", "aws_access_key_id"), Some("AKIAWORK"));
        assert_eq!(ini.get("work", "aws_secret_access_key"), None);
    }

    #[test]
    fn accepts_colon_separator() {
        let ini = IniFile::parse("[defaults]\ninventory: ~/ansible/inventory\n").unwrap();
        assert_eq!(ini.get("defaults", "inventory"), Some("~/ansible/inventory"));
    }

    #[test]
    fn skips_comments_of_both_styles() {
        let content = "# hash\n; semicolon\n[defaults]\nforks = 5\n";
        let ini = IniFile::parse(content).unwrap();
        assert_eq!(ini.get("defaults", "forks"), Some("5"));
    }

    #[test]
    fn skips_indented_nested_settings() {
        let content = r#"
[profile dev]
region = us-east-1
s3 =
    max_concurrent_requests = 20
output = json
"#;
        let ini = IniFile::parse(content).unwrap();
        let section = ini.section("profile dev").unwrap();
        assert_eq!(section.get("region"), Some("us-east-1"));
        assert_eq!(section.get("output"), Some("json"));
        assert_eq!(section.get("max_concurrent_requests"), None);
    }

    #[test]
    fn indented_keys_are_parsed_outside_nested_blocks() {
        let ini = IniFile::parse("[defaults]\n  inventory = hosts\n  forks = 10\n").unwrap();
        assert_eq!(ini.get("defaults", "inventory"), Some("hosts"));
        assert_eq!(ini.get("defaults", "forks"), Some("10"));
    }

    #[test]
    fn keys_before_header_go_to_unnamed_section() {
        let ini = IniFile::parse("orphan = 1\n[a]\nb = 2\n").unwrap();
        assert_eq!(ini.get("", "orphan"), Some("1"));
    }

    #[test]
    fn lookup_ignores_key_case() {
        let ini = IniFile::parse("[default]\nRegion = eu-central-1\n").unwrap();
        assert_eq!(ini.get("default", "region"), Some("eu-central-1"));
    }

    #[test]
    fn has_value_rejects_empty() {
        let ini = IniFile::parse("[default]\naws_access_key_id =\n").unwrap();
        let section = ini.section("default").unwrap();
        assert!(!section.has_value("aws_access_key_id"));
    }

    #[test]
    fn unterminated_header_is_error() {
        let err = IniFile::parse("[default\nkey = 1\n").unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn garbage_line_is_error() {
        let err = IniFile::parse("[default]\njust some words\n").unwrap_err();
        assert!(err.contains("line 2"));
    }
}
