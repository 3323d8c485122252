//! Cloud provider probes: AWS, Google Cloud and DigitalOcean.

use std::path::Path;

use super::{Checker, RunOutcome};
use crate::error::Result;
use crate::parsers::aws::parse_caller_identity;
use crate::parsers::doctl::DoctlConfig;
use crate::parsers::gcp::active_account;
use crate::parsers::{config_profiles, credential_profiles, CredentialKind, GcpCredentials, TokenState};
use crate::report::CheckStatus;
use crate::shell::CommandResult;

const AWS: &str = "AWS";
const GCP: &str = "GCP";
const DIGITALOCEAN: &str = "DigitalOcean";

impl Checker<'_> {
    pub(crate) fn check_aws(&mut self) -> Result<()> {
        if let Some(path) = self.check_file_exists("~/.aws/credentials", AWS, "Credentials file") {
            if let Some(ini) = self.load_ini(&path, AWS, "Credential profiles") {
                let profiles = credential_profiles(&ini);
                let incomplete: Vec<&str> = profiles
                    .iter()
                    .filter(|p| !p.has_key_pair())
                    .map(|p| p.name.as_str())
                    .collect();
                let (status, details) = if profiles.is_empty() {
                    (CheckStatus::Warning, "No profiles defined".to_string())
                } else if !incomplete.is_empty() {
                    (
                        CheckStatus::Warning,
                        format!("Incomplete key pair: {}", incomplete.join(", ")),
                    )
                } else {
                    let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
                    (CheckStatus::Ok, names.join(", "))
                };
                self.add(AWS, "Credential profiles", status, details);
            }
        }

        if let Some(path) = self.check_file_exists("~/.aws/config", AWS, "Config file") {
            if let Some(ini) = self.load_ini(&path, AWS, "Config profiles") {
                let profiles: Vec<String> = config_profiles(&ini)
                    .into_iter()
                    .map(|p| match p.region {
                        Some(region) => format!("{} ({})", p.name, region),
                        None => p.name,
                    })
                    .collect();
                let details = if profiles.is_empty() {
                    "No profiles defined".to_string()
                } else {
                    profiles.join(", ")
                };
                self.add(AWS, "Config profiles", CheckStatus::Info, details);
            }
        }

        if let Some(aws) = self.check_command_exists("aws", AWS, "AWS CLI") {
            self.api_probe(
                &aws,
                &["sts", "get-caller-identity"],
                AWS,
                "API connectivity",
                |result| match parse_caller_identity(&result.stdout) {
                    Ok(identity) => (
                        CheckStatus::Ok,
                        identity.arn.unwrap_or_else(|| "Unknown user".to_string()),
                    ),
                    Err(e) => (CheckStatus::Error, format!("Invalid JSON: {}", e)),
                },
            )?;
        }

        Ok(())
    }

    pub(crate) fn check_gcp(&mut self) -> Result<()> {
        if let Some(path) = self.check_file_exists(
            "~/.config/gcloud/application_default_credentials.json",
            GCP,
            "Application credentials",
        ) {
            if let Some(content) = self.read_for_parse(&path, GCP, "Credentials type") {
                let (status, details) = match GcpCredentials::parse(&content) {
                    Ok(creds) => describe_gcp_credentials(creds.kind()),
                    Err(e) => (CheckStatus::Error, format!("Invalid JSON: {}", e)),
                };
                self.add(GCP, "Credentials type", status, details);
            }
        }

        if let Some(gcloud) = self.check_command_exists("gcloud", GCP, "gcloud CLI") {
            self.api_probe(
                &gcloud,
                &["auth", "list", "--format=json"],
                GCP,
                "Authentication",
                |result| match active_account(&result.stdout) {
                    Ok(Some(account)) => (CheckStatus::Ok, format!("Active: {}", account)),
                    Ok(None) => (CheckStatus::Warning, "No active accounts".to_string()),
                    Err(e) => (CheckStatus::Error, format!("Invalid JSON: {}", e)),
                },
            )?;
        }

        Ok(())
    }

    pub(crate) fn check_digitalocean(&mut self) -> Result<()> {
        if let Some(path) =
            self.check_file_exists("~/.config/doctl/config.yaml", DIGITALOCEAN, "Config file")
        {
            if let Some(content) = self.read_for_parse(&path, DIGITALOCEAN, "Access token") {
                let (status, details) = match DoctlConfig::parse(&content) {
                    Ok(config) => match config.token {
                        TokenState::Configured => (CheckStatus::Ok, "Token configured"),
                        TokenState::Placeholder => (
                            CheckStatus::Warning,
                            "Placeholder token; set a real API token",
                        ),
                        TokenState::Missing => (CheckStatus::Warning, "No access token"),
                    },
                    Err(e) => {
                        self.add(
                            DIGITALOCEAN,
                            "Access token",
                            CheckStatus::Error,
                            e.to_string(),
                        );
                        return self.check_doctl_cli();
                    }
                };
                self.add(DIGITALOCEAN, "Access token", status, details);
            }
        }

        self.check_doctl_cli()
    }

    fn check_doctl_cli(&mut self) -> Result<()> {
        if let Some(doctl) = self.check_command_exists("doctl", DIGITALOCEAN, "doctl CLI") {
            self.api_probe(
                &doctl,
                &["account", "get"],
                DIGITALOCEAN,
                "API connectivity",
                |_| (CheckStatus::Ok, "Account accessible".to_string()),
            )?;
        }
        Ok(())
    }

    /// Run a cloud CLI call with the API timeout. A zero exit is interpreted
    /// by `on_success`; everything else becomes an `ERROR`.
    fn api_probe<F>(
        &mut self,
        program: &Path,
        args: &[&str],
        category: &str,
        item: &str,
        on_success: F,
    ) -> Result<()>
    where
        F: FnOnce(&CommandResult) -> (CheckStatus, String),
    {
        let timeout = self.ctx.timeouts.api();
        let (status, details) = match self.run(program, args, timeout)? {
            RunOutcome::Completed(result) if result.success => on_success(&result),
            RunOutcome::Completed(result) => {
                (CheckStatus::Error, result.error_output().to_string())
            }
            RunOutcome::TimedOut => (CheckStatus::Error, "Request timeout".to_string()),
            RunOutcome::Failed(message) => (CheckStatus::Error, message),
        };
        self.add(category, item, status, details);
        Ok(())
    }
}

fn describe_gcp_credentials(kind: CredentialKind) -> (CheckStatus, String) {
    match kind {
        CredentialKind::ServiceAccount {
            client_email,
            project_id,
        } => (
            CheckStatus::Ok,
            format!("service_account: {} ({})", client_email, project_id),
        ),
        CredentialKind::AuthorizedUser => (CheckStatus::Ok, "authorized_user".to_string()),
        CredentialKind::IncompleteServiceAccount { missing } => (
            CheckStatus::Warning,
            format!("service_account missing {}", missing.join(", ")),
        ),
        CredentialKind::Other(kind) => (CheckStatus::Info, kind),
        CredentialKind::Untyped => (CheckStatus::Warning, "No credential type".to_string()),
    }
}
