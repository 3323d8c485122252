//! doctl config (`~/.config/doctl/config.yaml`) inspection.

use serde_yaml::Value;

use crate::error::Result;

/// Token shipped in the setup template.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_API_TOKEN";

/// State of the `access-token` setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenState {
    /// Key absent or empty.
    Missing,
    /// Still the template placeholder.
    Placeholder,
    /// Some real-looking token.
    Configured,
}

/// Summary of a doctl config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctlConfig {
    pub token: TokenState,
}

impl DoctlConfig {
    /// Parse config YAML. An empty document counts as an empty mapping.
    pub fn parse(content: &str) -> Result<Self> {
        let doc: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(content)?
        };

        let token = match doc.get("access-token").and_then(Value::as_str) {
            None => TokenState::Missing,
            Some(t) if t.trim().is_empty() => TokenState::Missing,
            Some(t) if t.trim() == PLACEHOLDER_TOKEN => TokenState::Placeholder,
            Some(_) => TokenState::Configured,
        };
        Ok(Self { token })
    }
}
