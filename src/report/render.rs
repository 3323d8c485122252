//! Report rendering.
//!
//! The human format groups records by category, pads item names to a fixed
//! column and appends the tally. The JSON format serializes the whole report
//! plus its summary.

use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::ui::icons::styled_label;
use crate::ui::theme::DevcheckTheme;

use super::{CheckRecord, Report, Summary};

/// Column width of the item name.
pub const ITEM_WIDTH: usize = 30;

/// Width of the rule under the results banner.
const RULE_WIDTH: usize = 80;

/// Render the report for a terminal.
pub fn render_human(report: &Report, theme: &DevcheckTheme) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", theme.format_header("Results Summary"));
    let _ = writeln!(out, "{}", theme.border.apply_to("=".repeat(RULE_WIDTH)));

    for (category, records) in report.by_category() {
        let _ = writeln!(out, "\n{}", theme.header.apply_to(category));
        let _ = writeln!(
            out,
            "{}",
            theme.border.apply_to("-".repeat(category.chars().count()))
        );
        for record in records {
            let _ = writeln!(out, "{}", render_line(record, theme));
        }
    }

    let summary = report.summary();
    let _ = writeln!(out, "\n{}", theme.header.apply_to("Summary:"));
    let _ = writeln!(out, "  Total checks: {}", summary.total);
    let _ = writeln!(
        out,
        "  {}",
        theme.success.apply_to(format!("✓ Passed: {}", summary.passed))
    );
    let _ = writeln!(
        out,
        "  {}",
        theme.error.apply_to(format!("✗ Failed: {}", summary.failed))
    );
    let _ = writeln!(
        out,
        "  {}",
        theme
            .warning
            .apply_to(format!("⚠ Warnings: {}", summary.warnings))
    );

    out
}

/// Render one record line: indent, padded item, status label, details.
fn render_line(record: &CheckRecord, theme: &DevcheckTheme) -> String {
    let details = if record.details.is_empty() {
        String::new()
    } else {
        format!(" ({})", record.details)
    };
    format!(
        "  {:<width$} {}{}",
        record.item,
        styled_label(record.status, theme),
        details,
        width = ITEM_WIDTH
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    summary: Summary,
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    let doc = JsonReport {
        report,
        summary: report.summary(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;

    fn sample() -> Report {
        let mut report = Report::new();
        report.add("System", "/etc/hosts", CheckStatus::Ok, "Size: 220 bytes");
        report.add("SSH", "SSH config", CheckStatus::Missing, "Path: /h/.ssh/config");
        report.add("SSH", "Known hosts", CheckStatus::Warning, "");
        report
    }

    #[test]
    fn human_output_groups_by_category() {
        let out = render_human(&sample(), &DevcheckTheme::plain());
        let system = out.find("\nSystem\n------\n").unwrap();
        let ssh = out.find("\nSSH\n---\n").unwrap();
        assert!(system < ssh);
    }

    #[test]
    fn human_output_pads_item_column() {
        let out = render_human(&sample(), &DevcheckTheme::plain());
        let expected = format!("  {:<30} ✓ OK (Size: 220 bytes)", "/etc/hosts");
        assert!(out.lines().any(|l| l == expected));
    }

    #[test]
    fn empty_details_have_no_parentheses() {
        let out = render_human(&sample(), &DevcheckTheme::plain());
        let line = out.lines().find(|l| l.contains("Known hosts")).unwrap();
        assert!(line.ends_with("⚠ WARNING"));
    }

    #[test]
    fn human_output_has_banner_and_tally() {
        let out = render_human(&sample(), &DevcheckTheme::plain());
        assert!(out.contains("Results Summary"));
        assert!(out.contains(&"=".repeat(80)));
        assert!(out.contains("Total checks: 3"));
        assert!(out.contains("✓ Passed: 1"));
        assert!(out.contains("✗ Failed: 1"));
        assert!(out.contains("⚠ Warnings: 1"));
    }

    #[test]
    fn json_output_contains_checks_and_summary() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["checks"].as_array().unwrap().len(), 3);
        assert_eq!(value["checks"][1]["status"], "MISSING");
        assert_eq!(value["summary"]["failed"], 1);
        assert!(value["generated_at"].is_string());
    }
}
