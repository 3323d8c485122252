//! Terminal UI writing to stdout.

use console::Term;
use std::io::Write;

use super::{DevcheckTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DevcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI. Colors are used only when `colors` is set and
    /// stdout supports them.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            DevcheckTheme::detect()
        } else {
            DevcheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, command_line: &str) {
        if self.mode.shows_commands() {
            writeln!(
                self.term,
                "  {}",
                self.theme.command.apply_to(format!("$ {}", command_line))
            )
            .ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn emit(&mut self, text: &str) {
        write!(self.term, "{}", text).ok();
        self.term.flush().ok();
    }

    fn theme(&self) -> &DevcheckTheme {
        &self.theme
    }
}
