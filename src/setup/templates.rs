//! Template files copied by `devcheck setup`.

use include_dir::{include_dir, Dir};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DevcheckError, Result};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Where template files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Embedded,
    /// A directory laid out like `templates/`.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Source for an optional `--from` directory.
    pub fn from_option(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Self::Directory(dir.to_path_buf()),
            None => Self::Embedded,
        }
    }

    /// Read a template such as `ansible/ansible.cfg`.
    ///
    /// Returns `None` when a directory source lacks the file. Embedded
    /// templates are always present, so a missing one is an error.
    pub fn load(&self, name: &str) -> Result<Option<Vec<u8>>> {
        match self {
            Self::Embedded => TEMPLATES_DIR
                .get_file(name)
                .map(|f| Some(f.contents().to_vec()))
                .ok_or_else(|| DevcheckError::TemplateNotFound {
                    name: name.to_string(),
                }),
            Self::Directory(dir) => {
                let path = dir.join(name);
                if !path.is_file() {
                    tracing::debug!(path = %path.display(), "template source absent");
                    return Ok(None);
                }
                Ok(Some(fs::read(&path)?))
            }
        }
    }

    /// How to show a template's origin to the user.
    pub fn describe(&self, name: &str) -> String {
        match self {
            Self::Embedded => format!("templates/{}", name),
            Self::Directory(dir) => dir.join(name).display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn embedded_templates_are_present() {
        for name in ["ansible/ansible.cfg", "ansible/inventory", "doctl/config.yaml"] {
            let content = TemplateSource::Embedded.load(name).unwrap();
            assert!(content.is_some_and(|c| !c.is_empty()), "{name}");
        }
    }

    #[test]
    fn embedded_doctl_template_has_placeholder() {
        let content = TemplateSource::Embedded
            .load("doctl/config.yaml")
            .unwrap()
            .unwrap();
        assert!(String::from_utf8(content).unwrap().contains("YOUR_API_TOKEN"));
    }

    #[test]
    fn unknown_embedded_template_is_error() {
        let err = TemplateSource::Embedded.load("nope/file").unwrap_err();
        assert!(matches!(err, DevcheckError::TemplateNotFound { .. }));
    }

    #[test]
    fn directory_source_skips_absent_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("ansible")).unwrap();
        fs::write(temp.path().join("ansible/ansible.cfg"), "[defaults]\n").unwrap();
        let source = TemplateSource::from_option(Some(temp.path()));

        assert_eq!(
            source.load("ansible/ansible.cfg").unwrap(),
            Some(b"[defaults]\n".to_vec())
        );
        assert_eq!(source.load("doctl/config.yaml").unwrap(), None);
    }

    #[test]
    fn describe_names_origin() {
        assert_eq!(
            TemplateSource::Embedded.describe("doctl/config.yaml"),
            "templates/doctl/config.yaml"
        );
        let source = TemplateSource::Directory(PathBuf::from("/srv/tpl"));
        assert_eq!(
            source.describe("ansible/inventory"),
            "/srv/tpl/ansible/inventory"
        );
    }
}
