//! Status icons for report output.
//!
//! Every [`CheckStatus`] maps to exactly one icon, and the styled label
//! (icon plus upper-case status name) is what the report prints in the
//! status column.

use crate::report::CheckStatus;

use super::theme::DevcheckTheme;

/// Unicode icon for a status.
pub fn icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Ok => "✓",
        CheckStatus::Missing | CheckStatus::Error => "✗",
        CheckStatus::Warning => "⚠",
        CheckStatus::Info => "ℹ",
    }
}

/// Plain label: icon + status name.
pub fn label(status: CheckStatus) -> String {
    format!("{} {}", icon(status), status.label())
}

/// Styled label using the given theme.
pub fn styled_label(status: CheckStatus, theme: &DevcheckTheme) -> String {
    theme.status_style(status).apply_to(label(status)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_match_status() {
        assert_eq!(icon(CheckStatus::Ok), "✓");
        assert_eq!(icon(CheckStatus::Missing), "✗");
        assert_eq!(icon(CheckStatus::Error), "✗");
        assert_eq!(icon(CheckStatus::Warning), "⚠");
        assert_eq!(icon(CheckStatus::Info), "ℹ");
    }

    #[test]
    fn label_combines_icon_and_name() {
        assert_eq!(label(CheckStatus::Missing), "✗ MISSING");
        assert_eq!(label(CheckStatus::Info), "ℹ INFO");
    }

    #[test]
    fn plain_styled_label_equals_label() {
        let theme = DevcheckTheme::plain();
        assert_eq!(styled_label(CheckStatus::Ok, &theme), "✓ OK");
    }
}
