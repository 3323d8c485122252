//! Installs example configuration files into the home directory.
//!
//! Existing files are copied to a `.backup` sibling before being replaced.
//!
//! # Example
//!
//! ```
//! use devcheck::setup::{run_setup, TemplateSource};
//! use devcheck::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let home = TempDir::new().unwrap();
//! let mut ui = MockUI::new();
//! let outcome = run_setup(&TemplateSource::Embedded, home.path(), &mut ui).unwrap();
//!
//! assert_eq!(outcome.copied().count(), 3);
//! assert!(home.path().join(".ansible.cfg").is_file());
//! assert!(home.path().join(".ansible/cp").is_dir());
//! ```

pub mod templates;

pub use templates::TemplateSource;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;
use crate::parsers::doctl::PLACEHOLDER_TOKEN;
use crate::ui::UserInterface;

/// One template and where it goes, relative to the home directory.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub template: &'static str,
    pub destination: &'static str,
    /// Backup file name, placed next to the destination.
    pub backup: &'static str,
    /// Word used in the backup message ("config", "inventory").
    pub kind: &'static str,
}

pub const ANSIBLE_CONFIG: Placement = Placement {
    template: "ansible/ansible.cfg",
    destination: ".ansible.cfg",
    backup: ".ansible.cfg.backup",
    kind: "config",
};

pub const ANSIBLE_INVENTORY: Placement = Placement {
    template: "ansible/inventory",
    destination: "ansible/inventory",
    backup: "inventory.backup",
    kind: "inventory",
};

pub const DOCTL_CONFIG: Placement = Placement {
    template: "doctl/config.yaml",
    destination: ".config/doctl/config.yaml",
    backup: "config.yaml.backup",
    kind: "config",
};

/// What happened to one placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupAction {
    Copied {
        destination: PathBuf,
        backup: Option<PathBuf>,
    },
    /// The template source had no such file.
    Skipped { template: &'static str },
}

/// Result of a setup run.
#[derive(Debug, Clone, Default)]
pub struct SetupOutcome {
    pub actions: Vec<SetupAction>,
}

impl SetupOutcome {
    /// Destinations that were written.
    pub fn copied(&self) -> impl Iterator<Item = &Path> {
        self.actions.iter().filter_map(|a| match a {
            SetupAction::Copied { destination, .. } => Some(destination.as_path()),
            SetupAction::Skipped { .. } => None,
        })
    }

    /// Backups that were made.
    pub fn backups(&self) -> impl Iterator<Item = &Path> {
        self.actions.iter().filter_map(|a| match a {
            SetupAction::Copied {
                backup: Some(backup),
                ..
            } => Some(backup.as_path()),
            _ => None,
        })
    }
}

/// Install the Ansible and doctl templates under `home`.
///
/// Any I/O failure aborts the run.
pub fn run_setup(
    source: &TemplateSource,
    home: &Path,
    ui: &mut dyn UserInterface,
) -> Result<SetupOutcome> {
    let mut outcome = SetupOutcome::default();

    ui.show_header("Setting up example configuration files...");

    ui.message("Setting up Ansible configuration...");
    create_dir(&home.join("ansible"))?;
    create_dir(&home.join(".ansible").join("cp"))?;
    outcome
        .actions
        .push(install(source, home, &ANSIBLE_CONFIG, ui)?);
    outcome
        .actions
        .push(install(source, home, &ANSIBLE_INVENTORY, ui)?);

    ui.message("");
    ui.message("Setting up DigitalOcean doctl configuration...");
    create_dir(&home.join(".config").join("doctl"))?;
    let doctl = install(source, home, &DOCTL_CONFIG, ui)?;
    if matches!(doctl, SetupAction::Copied { .. }) {
        ui.warning(&format!(
            "Remember to replace {} with your actual DigitalOcean API token!",
            PLACEHOLDER_TOKEN
        ));
    }
    outcome.actions.push(doctl);

    ui.message("");
    ui.success("Setup complete!");
    ui.message("");
    ui.message("Next steps:");
    ui.message("1. For DigitalOcean: Edit ~/.config/doctl/config.yaml and add your API token");
    ui.message("2. Run the environment checker: devcheck check");
    ui.message("3. Test Ansible: ansible localhost -m ping");

    Ok(outcome)
}

/// Copy one template into place, backing up whatever is already there.
pub fn install(
    source: &TemplateSource,
    home: &Path,
    placement: &Placement,
    ui: &mut dyn UserInterface,
) -> Result<SetupAction> {
    let Some(content) = source.load(placement.template)? else {
        ui.warning(&format!(
            "  Skipping {}: not found",
            source.describe(placement.template)
        ));
        return Ok(SetupAction::Skipped {
            template: placement.template,
        });
    };

    let destination = home.join(placement.destination);
    if let Some(parent) = destination.parent() {
        create_dir(parent)?;
    }

    let backup = if destination.exists() {
        let backup = destination.with_file_name(placement.backup);
        ui.message(&format!(
            "  Backing up existing {} to {}",
            placement.kind,
            backup.display()
        ));
        fs::copy(&destination, &backup).with_context(|| {
            format!(
                "Failed to back up {} to {}",
                destination.display(),
                backup.display()
            )
        })?;
        Some(backup)
    } else {
        None
    };

    fs::write(&destination, content)
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    tracing::debug!(destination = %destination.display(), "template installed");
    ui.success(&format!(
        "Copied {} -> {}",
        source.describe(placement.template),
        destination.display()
    ));

    Ok(SetupAction::Copied {
        destination,
        backup,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;
    Ok(())
}
