//! Google Cloud credential files and `gcloud auth list` output.

use serde::Deserialize;

/// Fields of an application-default or service-account credential file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GcpCredentials {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub project_id: Option<String>,
    pub client_email: Option<String>,
}

/// What kind of credential a file holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialKind {
    /// A service-account key with its identity.
    ServiceAccount {
        client_email: String,
        project_id: String,
    },
    /// A service-account key lacking `client_email` or `project_id`.
    IncompleteServiceAccount { missing: Vec<&'static str> },
    /// User credentials from `gcloud auth application-default login`.
    AuthorizedUser,
    /// Any other `type` value (e.g. `external_account`).
    Other(String),
    /// No `type` field.
    Untyped,
}

impl GcpCredentials {
    /// Decode a credential file.
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Classify the credential.
    pub fn kind(&self) -> CredentialKind {
        match self.kind.as_deref() {
            Some("service_account") => {
                match (self.client_email.as_deref(), self.project_id.as_deref()) {
                    (Some(email), Some(project)) if !email.is_empty() && !project.is_empty() => {
                        CredentialKind::ServiceAccount {
                            client_email: email.to_string(),
                            project_id: project.to_string(),
                        }
                    }
                    _ => {
                        let mut missing = Vec::new();
                        if self.client_email.as_deref().map_or(true, str::is_empty) {
                            missing.push("client_email");
                        }
                        if self.project_id.as_deref().map_or(true, str::is_empty) {
                            missing.push("project_id");
                        }
                        CredentialKind::IncompleteServiceAccount { missing }
                    }
                }
            }
            Some("authorized_user") => CredentialKind::AuthorizedUser,
            Some(other) => CredentialKind::Other(other.to_string()),
            None => CredentialKind::Untyped,
        }
    }
}

/// One entry of `gcloud auth list --format=json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GcloudAccount {
    pub account: String,
    #[serde(default)]
    pub status: String,
}

/// Decode `gcloud auth list --format=json` and return the first active account.
pub fn active_account(json: &str) -> serde_json::Result<Option<String>> {
    let accounts: Vec<GcloudAccount> = serde_json::from_str(json)?;
    Ok(accounts
        .into_iter()
        .find(|a| a.status == "ACTIVE")
        .map(|a| a.account))
}
