//! External command execution and search-path lookup.

pub mod command;
pub mod interrupt;
pub mod mock;
pub mod path;

pub use command::{display_command, execute, CommandResult, CommandRunner, SystemRunner};
pub use mock::{MockResponse, MockRunner};
pub use path::{expand_home, is_executable, parse_system_path, resolve_tool_path};
