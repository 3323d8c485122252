//! Check result accumulation and summaries.
//!
//! A [`Report`] is the per-run accumulator: probes append
//! [`CheckRecord`]s in the order they run, and the renderer reads them once
//! at the end.
//!
//! # Example
//!
//! ```
//! use devcheck::report::{CheckStatus, Report};
//!
//! let mut report = Report::new();
//! report.add("SSH", "Known hosts", CheckStatus::Ok, "Size: 512 bytes");
//! report.add("AWS", "AWS CLI", CheckStatus::Missing, "Command not found");
//!
//! let summary = report.summary();
//! assert_eq!(summary.total, 2);
//! assert_eq!(summary.passed, 1);
//! assert_eq!(summary.failed, 1);
//! ```

pub mod record;
pub mod render;

pub use record::{CheckRecord, CheckStatus};
pub use render::{render_human, render_json, ITEM_WIDTH};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Pass/fail/warning tally over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

/// Insertion-ordered list of check records.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    generated_at: DateTime<Utc>,
    checks: Vec<CheckRecord>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    /// Create an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            checks: Vec::new(),
        }
    }

    /// Append a record.
    pub fn add(
        &mut self,
        category: impl Into<String>,
        item: impl Into<String>,
        status: CheckStatus,
        details: impl Into<String>,
    ) {
        let record = CheckRecord::new(category, item, status, details);
        tracing::debug!(
            category = %record.category,
            item = %record.item,
            status = %record.status,
            "check recorded"
        );
        self.checks.push(record);
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[CheckRecord] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Group records by category.
    ///
    /// Categories appear in the order of their first record; records keep
    /// their insertion order within a category.
    pub fn by_category(&self) -> Vec<(&str, Vec<&CheckRecord>)> {
        let mut groups: Vec<(&str, Vec<&CheckRecord>)> = Vec::new();
        for record in &self.checks {
            match groups
                .iter_mut()
                .find(|(category, _)| *category == record.category)
            {
                Some((_, items)) => items.push(record),
                None => groups.push((record.category.as_str(), vec![record])),
            }
        }
        groups
    }

    /// Tally the records.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.checks.len(),
            ..Default::default()
        };
        for record in &self.checks {
            match record.status {
                CheckStatus::Ok => summary.passed += 1,
                CheckStatus::Warning => summary.warnings += 1,
                status if status.is_failure() => summary.failed += 1,
                _ => {}
            }
        }
        summary
    }

    /// Find the first record for a category and item.
    pub fn find(&self, category: &str, item: &str) -> Option<&CheckRecord> {
        self.checks
            .iter()
            .find(|r| r.category == category && r.item == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new();
        report.add("System", "/etc/hosts", CheckStatus::Ok, "Size: 10 bytes");
        report.add("SSH", "SSH config", CheckStatus::Missing, "Path: /x");
        report.add("System", "Hosts entries", CheckStatus::Warning, "");
        report.add("SSH", "Host entries", CheckStatus::Info, "2 hosts");
        report.add("AWS", "API connectivity", CheckStatus::Error, "denied");
        report
    }

    #[test]
    fn new_report_is_empty() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.summary(), Summary::default());
    }

    #[test]
    fn records_keep_insertion_order() {
        let report = sample();
        let items: Vec<_> = report.records().iter().map(|r| r.item.as_str()).collect();
        assert_eq!(
            items,
            [
                "/etc/hosts",
                "SSH config",
                "Hosts entries",
                "Host entries",
                "API connectivity"
            ]
        );
    }

    #[test]
    fn by_category_orders_by_first_appearance() {
        let report = sample();
        let groups = report.by_category();
        let names: Vec<_> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["System", "SSH", "AWS"]);

        let system: Vec<_> = groups[0].1.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(system, ["/etc/hosts", "Hosts entries"]);
    }

    #[test]
    fn summary_counts_statuses() {
        let summary = sample().summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.warnings, 1);
    }

    #[test]
    fn info_only_counts_toward_total() {
        let mut report = Report::new();
        report.add("SSH", "Host entries", CheckStatus::Info, "");
        let summary = report.summary();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.passed + summary.failed + summary.warnings, 0);
    }

    #[test]
    fn find_returns_first_match() {
        let report = sample();
        let record = report.find("SSH", "SSH config").unwrap();
        assert_eq!(record.status, CheckStatus::Missing);
        assert!(report.find("SSH", "nope").is_none());
    }
}
