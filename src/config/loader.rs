//! Configuration file discovery and loading.

use crate::config::schema::DevcheckConfig;
use crate::error::{DevcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/devcheck/config.yml";

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `DEVCHECK_CONFIG`; must exist.
    Explicit(PathBuf),
    /// `~/.config/devcheck/config.yml`; may be absent.
    Default(PathBuf),
}

impl ConfigSource {
    /// Pick the explicit path if given, otherwise the default under `home`.
    pub fn resolve(explicit: Option<&Path>, home: &Path) -> Self {
        match explicit {
            Some(path) => Self::Explicit(path.to_path_buf()),
            None => Self::Default(home.join(DEFAULT_CONFIG_PATH)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p) | Self::Default(p) => p,
        }
    }
}

/// Load configuration from `source`.
///
/// An absent default file yields the built-in defaults; an absent explicit
/// file is an error.
pub fn load_config(source: &ConfigSource) -> Result<DevcheckConfig> {
    let path = source.path();

    if !path.exists() {
        return match source {
            ConfigSource::Explicit(_) => Err(DevcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }),
            ConfigSource::Default(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(DevcheckConfig::default())
            }
        };
    }

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse config content. `path` is only used in error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<DevcheckConfig> {
    if content.trim().is_empty() {
        return Ok(DevcheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DevcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckGroup;
    use tempfile::TempDir;

    #[test]
    fn resolve_prefers_explicit() {
        let source = ConfigSource::resolve(Some(Path::new("/tmp/x.yml")), Path::new("/home/dev"));
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/tmp/x.yml")));
    }

    #[test]
    fn resolve_defaults_under_home() {
        let source = ConfigSource::resolve(None, Path::new("/home/dev"));
        assert_eq!(
            source.path(),
            Path::new("/home/dev/.config/devcheck/config.yml")
        );
    }

    #[test]
    fn missing_default_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource::resolve(None, temp.path());
        assert_eq!(load_config(&source).unwrap(), DevcheckConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        let source = ConfigSource::resolve(Some(&path), temp.path());
        let err = load_config(&source).unwrap_err();
        assert!(matches!(err, DevcheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn loads_default_file_when_present() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".config/devcheck");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "skip: [terraform]\n").unwrap();

        let config = load_config(&ConfigSource::resolve(None, temp.path())).unwrap();
        assert_eq!(config.skip, [CheckGroup::Terraform]);
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_config("timeouts: [", Path::new("/etc/devcheck.yml")).unwrap_err();
        assert!(matches!(err, DevcheckError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/etc/devcheck.yml"));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("\n", Path::new("c.yml")).unwrap();
        assert_eq!(config, DevcheckConfig::default());
    }
}
