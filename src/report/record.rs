//! Check record and status types.
//!
//! Every probe produces one or more [`CheckRecord`]s. Records are plain
//! data: they are appended to a [`Report`](super::Report) and never changed.

use std::fmt;

use serde::Serialize;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// The file, tool or credential is present and working.
    Ok,
    /// The file or tool does not exist.
    Missing,
    /// The check ran but failed (non-zero exit, timeout, parse error).
    Error,
    /// Present but suspicious (placeholder token, no active account).
    Warning,
    /// Informational only; never counted as pass or fail.
    Info,
}

impl CheckStatus {
    /// Upper-case name as shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Missing => "MISSING",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }

    /// Whether this status counts toward the failed tally.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Error | Self::Missing)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRecord {
    /// Report group, e.g. "SSH" or "AWS".
    pub category: String,
    /// What was checked, e.g. "Known hosts".
    pub item: String,
    /// Outcome.
    pub status: CheckStatus,
    /// Free-text detail; may be empty.
    pub details: String,
}

impl CheckRecord {
    pub fn new(
        category: impl Into<String>,
        item: impl Into<String>,
        status: CheckStatus,
        details: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
            status,
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_upper_case() {
        assert_eq!(CheckStatus::Ok.label(), "OK");
        assert_eq!(CheckStatus::Missing.label(), "MISSING");
        assert_eq!(CheckStatus::Error.label(), "ERROR");
        assert_eq!(CheckStatus::Warning.label(), "WARNING");
        assert_eq!(CheckStatus::Info.label(), "INFO");
    }

    #[test]
    fn only_error_and_missing_are_failures() {
        assert!(CheckStatus::Error.is_failure());
        assert!(CheckStatus::Missing.is_failure());
        assert!(!CheckStatus::Ok.is_failure());
        assert!(!CheckStatus::Warning.is_failure());
        assert!(!CheckStatus::Info.is_failure());
    }

    #[test]
    fn status_serializes_upper_case() {
        let json = serde_json::to_string(&CheckStatus::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }

    #[test]
    fn record_new_accepts_str_and_string() {
        let record = CheckRecord::new("SSH", String::from("Known hosts"), CheckStatus::Ok, "");
        assert_eq!(record.category, "SSH");
        assert_eq!(record.item, "Known hosts");
        assert!(record.details.is_empty());
    }
}
