//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to stdout
//! - [`MockUI`] capturing output for tests
//! - Theme, icons and output modes
//!
//! # Example
//!
//! ```
//! use devcheck::ui::{MockUI, OutputMode, UserInterface};
//!
//! let mut ui = MockUI::with_mode(OutputMode::Quiet);
//! ui.message("Checking system files...");
//! ui.emit("report body");
//!
//! assert!(ui.messages().is_empty());
//! assert_eq!(ui.emitted(), ["report body"]);
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DevcheckTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a progress or status line.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Echo an external command line (verbose mode only).
    fn command(&mut self, command_line: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Write pre-rendered output (the report). Shown in every mode.
    fn emit(&mut self, text: &str);

    /// Theme used to render reports for this UI.
    fn theme(&self) -> &DevcheckTheme;
}
