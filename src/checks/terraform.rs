//! Terraform CLI probe.

use super::Checker;
use crate::error::Result;

const CATEGORY: &str = "Terraform";

impl Checker<'_> {
    pub(crate) fn check_terraform_config(&mut self) -> Result<()> {
        let Some(terraform) = self.check_command_exists("terraform", CATEGORY, "Terraform CLI") else {
            return Ok(());
        };
        self.version_probe(&terraform, &["version"], CATEGORY, "Version check")
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Sandbox;
    use super::super::Checker;
    use crate::report::{CheckStatus, Report};
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    fn run(sandbox: &Sandbox, runner: &MockRunner) -> Report {
        let ctx = sandbox.context();
        let mut ui = MockUI::new();
        let mut checker = Checker::new(runner, &ctx, &mut ui);
        checker.check_terraform_config().unwrap();
        checker.into_report()
    }

    #[test]
    fn records_first_line_of_version() {
        let sandbox = Sandbox::new();
        sandbox.install_tool("terraform");
        let mut runner = MockRunner::new();
        runner.respond_ok(
            "terraform version",
            "Terraform v1.7.4\non linux_amd64\n\nYour version of Terraform is out of date!\n",
        );

        let report = run(&sandbox, &runner);
        let items: Vec<&str> = report.records().iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, ["Terraform CLI", "Version check"]);
        let version = report.find("Terraform", "Version check").unwrap();
        assert_eq!(version.status, CheckStatus::Ok);
        assert_eq!(version.details, "Terraform v1.7.4");
    }

    #[test]
    fn non_zero_exit_is_error() {
        let sandbox = Sandbox::new();
        sandbox.install_tool("terraform");
        let mut runner = MockRunner::new();
        runner.respond_fail("terraform version", 1, "plugin cache corrupted\n");

        let report = run(&sandbox, &runner);
        let version = report.find("Terraform", "Version check").unwrap();
        assert_eq!(version.status, CheckStatus::Error);
        assert_eq!(version.details, "plugin cache corrupted");
    }

    #[test]
    fn missing_cli_skips_version_check() {
        let sandbox = Sandbox::new();
        let runner = MockRunner::new();

        let report = run(&sandbox, &runner);
        assert_eq!(report.len(), 1);
        assert!(runner.calls().is_empty());
    }
}
