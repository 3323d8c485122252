//! Ansible configuration probe.

use std::path::PathBuf;

use super::Checker;
use crate::report::CheckStatus;

const CATEGORY: &str = "Ansible";

impl Checker<'_> {
    /// Record both config files, then the inventory they point at. The user
    /// config takes precedence over the global one.
    pub(crate) fn check_ansible_config(&mut self) {
        let user = self.check_file_exists("~/.ansible.cfg", CATEGORY, "Config file");
        let global_path = self.ctx.paths.ansible_global_config.display().to_string();
        let global = self.check_file_exists(&global_path, CATEGORY, "Global config");

        let candidates: Vec<(PathBuf, String)> = [
            user.map(|p| (p, "~/.ansible.cfg".to_string())),
            global.map(|p| (p, global_path)),
        ]
        .into_iter()
        .flatten()
        .collect();

        for (path, source) in candidates {
            let Some(ini) = self.load_ini(&path, CATEGORY, "Inventory") else {
                return;
            };
            if let Some(inventory) = ini.get("defaults", "inventory").filter(|v| !v.is_empty()) {
                let details = format!("{} (from {})", inventory, source);
                self.add(CATEGORY, "Inventory", CheckStatus::Info, details);
                return;
            }
        }
    }
}
