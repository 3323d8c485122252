//! Ctrl-C handling during a check run.
//!
//! Lives in its own test binary: the interrupt flag is process-wide and
//! never resets, so it must not leak into other tests.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use devcheck::checks::{CheckContext, Checker};
use devcheck::config::{CheckGroup, DevcheckConfig};
use devcheck::shell::{interrupt, SystemRunner};
use devcheck::ui::MockUI;
use devcheck::DevcheckError;
use tempfile::TempDir;

#[test]
fn sigint_during_last_command_fails_the_run() {
    interrupt::install_handler();

    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    // Answers `--version`, but signals its parent and dies on `version`,
    // the way a terminal Ctrl-C hits both processes.
    let tool = bin.path().join("terraform");
    fs::write(
        &tool,
        "#!/bin/sh\nif [ \"$1\" = \"version\" ]; then\n  kill -INT $PPID\n  exit 130\nfi\necho 'Terraform v1.6.0'\n",
    )
    .unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

    let ctx = CheckContext::new(home.path(), &DevcheckConfig::default())
        .with_path_entries(vec![bin.path().to_path_buf()])
        .skipping([
            CheckGroup::System,
            CheckGroup::Ssh,
            CheckGroup::Tools,
            CheckGroup::Aws,
            CheckGroup::Gcp,
            CheckGroup::Digitalocean,
            CheckGroup::Ansible,
        ]);
    let runner = SystemRunner;
    let mut ui = MockUI::new();

    let result = Checker::new(&runner, &ctx, &mut ui).run_all();

    assert!(interrupt::is_interrupted());
    assert!(matches!(result, Err(DevcheckError::Interrupted)));
}
