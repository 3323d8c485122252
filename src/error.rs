//! Error types for devcheck operations.
//!
//! This module defines [`DevcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes never return errors to the report loop; they turn every failure
//!   into a record with an `ERROR` status and a readable detail message
//! - Config loading, setup file operations and interruption propagate to
//!   `main`, which prints them and exits with code 1
//! - Setup file operations attach path context with `anyhow::Context`;
//!   those errors surface as `DevcheckError::Other`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devcheck operations.
#[derive(Debug, Error)]
pub enum DevcheckError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// External command could not be started.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// External command did not finish in time and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimeout { command: String, seconds: u64 },

    /// The user interrupted the run (SIGINT).
    #[error("Interrupted by user")]
    Interrupted,

    /// Setup template is missing from the embedded set or source directory.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// JSON decode error.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML decode error.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O failure with context attached via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devcheck operations.
pub type Result<T> = std::result::Result<T, DevcheckError>;
