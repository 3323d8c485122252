//! Visual theme and styling.

use console::Style;

use crate::report::CheckStatus;

/// devcheck's visual theme.
#[derive(Debug, Clone)]
pub struct DevcheckTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for errors and missing items (red bold).
    pub error: Style,
    /// Style for informational records (magenta).
    pub info: Style,
    /// Style for headers and category names (bold).
    pub header: Style,
    /// Style for rules and underlines (dim).
    pub border: Style,
    /// Style for external commands echoed in verbose mode (dim italic).
    pub command: Style,
}

impl Default for DevcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DevcheckTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            header: Style::new().bold(),
            border: Style::new().dim(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
            border: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick a theme based on terminal capabilities.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for a check status.
    pub fn status_style(&self, status: CheckStatus) -> &Style {
        match status {
            CheckStatus::Ok => &self.success,
            CheckStatus::Missing | CheckStatus::Error => &self.error,
            CheckStatus::Warning => &self.warning,
            CheckStatus::Info => &self.info,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = DevcheckTheme::plain();
        let msg = theme.format_success("Setup complete!");
        assert_eq!(msg, "✓ Setup complete!");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = DevcheckTheme::plain();
        let msg = theme.format_warning("Replace YOUR_API_TOKEN");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("YOUR_API_TOKEN"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = DevcheckTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_header_is_unstyled() {
        let theme = DevcheckTheme::plain();
        assert_eq!(theme.format_header("Results"), "Results");
    }

    #[test]
    fn status_styles_exist_for_every_status() {
        let theme = DevcheckTheme::new();
        for status in [
            CheckStatus::Ok,
            CheckStatus::Missing,
            CheckStatus::Error,
            CheckStatus::Warning,
            CheckStatus::Info,
        ] {
            let _ = theme.status_style(status).apply_to(status.label());
        }
    }

    #[test]
    fn default_impl_matches_new() {
        let default = DevcheckTheme::default();
        let new = DevcheckTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
