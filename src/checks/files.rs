//! File existence probe.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::Checker;
use crate::parsers::IniFile;
use crate::report::CheckStatus;
use crate::shell::expand_home;

impl Checker<'_> {
    /// Record whether `path` exists, expanding a leading `~`.
    ///
    /// Returns the expanded path when the file exists so callers can go on to
    /// parse it.
    pub fn check_file_exists(
        &mut self,
        path: &str,
        category: &str,
        description: &str,
    ) -> Option<PathBuf> {
        let expanded = expand_home(path, &self.ctx.home);
        tracing::debug!(path = %expanded.display(), "checking file");

        match fs::metadata(&expanded) {
            Ok(meta) => {
                self.add(
                    category,
                    description,
                    CheckStatus::Ok,
                    format!("Size: {} bytes", meta.len()),
                );
                Some(expanded)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.add(
                    category,
                    description,
                    CheckStatus::Missing,
                    format!("Path: {}", expanded.display()),
                );
                None
            }
            Err(e) => {
                tracing::warn!(path = %expanded.display(), error = %e, "cannot stat file");
                self.add(category, description, CheckStatus::Error, e.to_string());
                None
            }
        }
    }

    /// Read a file that is about to be parsed. A read failure is recorded as
    /// an `ERROR` under `item`.
    pub(crate) fn read_for_parse(
        &mut self,
        path: &std::path::Path,
        category: &str,
        item: &str,
    ) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                self.add(
                    category,
                    item,
                    CheckStatus::Error,
                    format!("Cannot read {}: {}", path.display(), e),
                );
                None
            }
        }
    }

    /// Read and parse an INI file, recording failures under `item`.
    pub(crate) fn load_ini(
        &mut self,
        path: &std::path::Path,
        category: &str,
        item: &str,
    ) -> Option<IniFile> {
        let content = self.read_for_parse(path, category, item)?;
        match IniFile::parse(&content) {
            Ok(ini) => Some(ini),
            Err(message) => {
                tracing::warn!(path = %path.display(), %message, "unparseable INI file");
                self.add(category, item, CheckStatus::Error, message);
                None
            }
        }
    }
}
