//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Mode filtering matches
//! [`TerminalUI`](super::TerminalUI), so a quiet `MockUI` records no
//! progress messages.

use super::{DevcheckTheme, OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    theme: DevcheckTheme,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    headers: Vec<String>,
    emitted: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with Normal output mode and a plain theme.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: DevcheckTheme::plain(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            commands: Vec::new(),
            headers: Vec::new(),
            emitted: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Echoed command lines (verbose mode only).
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Everything passed to `emit`.
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Check whether any captured message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.warnings.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn command(&mut self, command_line: &str) {
        if self.mode.shows_commands() {
            self.commands.push(command_line.to_string());
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.headers.push(title.to_string());
        }
    }

    fn emit(&mut self, text: &str) {
        self.emitted.push(text.to_string());
    }

    fn theme(&self) -> &DevcheckTheme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_by_kind() {
        let mut ui = MockUI::new();
        ui.message("progress");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");
        ui.show_header("Title");

        assert_eq!(ui.messages(), ["progress"]);
        assert_eq!(ui.successes(), ["ok"]);
        assert_eq!(ui.warnings(), ["careful"]);
        assert_eq!(ui.errors(), ["bad"]);
        assert_eq!(ui.headers(), ["Title"]);
        assert!(ui.has_message("prog"));
    }

    #[test]
    fn quiet_mode_keeps_errors_and_emitted_output() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("progress");
        ui.show_header("Title");
        ui.error("bad");
        ui.emit("report");

        assert!(ui.messages().is_empty());
        assert!(ui.headers().is_empty());
        assert_eq!(ui.errors(), ["bad"]);
        assert_eq!(ui.emitted(), ["report"]);
    }

    #[test]
    fn commands_only_in_verbose_mode() {
        let mut ui = MockUI::new();
        ui.command("git --version");
        assert!(ui.commands().is_empty());

        ui.set_output_mode(OutputMode::Verbose);
        ui.command("git --version");
        assert_eq!(ui.commands(), ["git --version"]);
    }
}
