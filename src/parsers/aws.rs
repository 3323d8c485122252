//! AWS credentials/config interpretation and `sts` output decoding.

use serde::Deserialize;

use super::ini::IniFile;

/// A named AWS profile summarized from an INI section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsProfile {
    pub name: String,
    pub has_access_key: bool,
    pub has_secret_key: bool,
    pub region: Option<String>,
}

impl AwsProfile {
    /// Both halves of a static key pair are present.
    pub fn has_key_pair(&self) -> bool {
        self.has_access_key && self.has_secret_key
    }
}

/// Profiles from `~/.aws/credentials`, where sections are bare profile names.
pub fn credential_profiles(ini: &IniFile) -> Vec<AwsProfile> {
    ini.sections()
        .iter()
        .filter(|s| !s.name.is_empty())
        .map(|s| AwsProfile {
            name: s.name.clone(),
            has_access_key: s.has_value("aws_access_key_id"),
            has_secret_key: s.has_value("aws_secret_access_key"),
            region: s.get("region").map(str::to_string),
        })
        .collect()
}

/// Profiles from `~/.aws/config`, where non-default sections are
/// `[profile name]`. `sso-session` and `services` sections are skipped.
pub fn config_profiles(ini: &IniFile) -> Vec<AwsProfile> {
    ini.sections()
        .iter()
        .filter_map(|s| {
            let name = if s.name == "default" {
                "default"
            } else {
                s.name.strip_prefix("profile ")?.trim()
            };
            Some(AwsProfile {
                name: name.to_string(),
                has_access_key: s.has_value("aws_access_key_id"),
                has_secret_key: s.has_value("aws_secret_access_key"),
                region: s.get("region").filter(|r| !r.is_empty()).map(str::to_string),
            })
        })
        .collect()
}

/// Output of `aws sts get-caller-identity`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallerIdentity {
    pub arn: Option<String>,
}

/// Decode `aws sts get-caller-identity` output.
pub fn parse_caller_identity(json: &str) -> serde_json::Result<CallerIdentity> {
    serde_json::from_str(json)
}
