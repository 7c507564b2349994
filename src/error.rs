//! Error types for the EasiCamera tools
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Both binaries funnel every failure through [`LauncherError`]; the launcher
//! additionally maps error kinds to its documented process exit codes at its
//! top-level boundary.

use miette::Diagnostic;
use thiserror::Error;

use crate::validate::LaunchCheck;

/// Main error type for both the configuration editor and the launcher
#[derive(Error, Diagnostic, Debug)]
pub enum LauncherError {
    // Configuration store errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(easicam::config::missing),
        help("Run 'easicam-config select' to create a configuration")
    )]
    ConfigMissing { path: String },

    #[error("Configuration file is malformed: {path}: {reason}")]
    #[diagnostic(
        code(easicam::config::malformed),
        help("The file is not valid XML. Re-run 'easicam-config select' to rewrite it")
    )]
    ConfigMalformed { path: String, reason: String },

    #[error("Configuration is incomplete: {field} is missing or empty")]
    #[diagnostic(
        code(easicam::config::incomplete),
        help("Run 'easicam-config select' to pick an installed version")
    )]
    ConfigIncomplete { field: &'static str },

    #[error("Failed to write configuration file: {path}: {reason}")]
    #[diagnostic(code(easicam::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    // Executable path validation errors
    #[error("{check}: {path}")]
    #[diagnostic(
        code(easicam::path::invalid),
        help("Check that the configured version is still installed, then rescan")
    )]
    PathInvalid { check: LaunchCheck, path: String },

    // Process launch errors
    #[error("Failed to start process: {path}: {reason}")]
    #[diagnostic(code(easicam::launch::spawn_failed))]
    SpawnFailure { path: String, reason: String },

    // Scan errors (editor only)
    #[error("Install root does not exist: {path}")]
    #[diagnostic(
        code(easicam::scan::root_not_found),
        help("Pick the directory that contains the EasiCamera_<version> folders")
    )]
    ScanRootNotFound { path: String },

    #[error("Install root is not a directory: {path}")]
    #[diagnostic(
        code(easicam::scan::root_not_directory),
        help("Pick the directory that contains the EasiCamera_<version> folders")
    )]
    ScanRootNotDirectory { path: String },

    #[error("Install root is not readable: {path}")]
    #[diagnostic(code(easicam::scan::root_unreadable))]
    ScanRootUnreadable { path: String },

    // Version errors
    #[error("Invalid version string '{input}': {reason}")]
    #[diagnostic(
        code(easicam::version::parse_failed),
        help("Versions are four dot-separated numbers, e.g. 3.1.2.0")
    )]
    VersionParse { input: String, reason: String },

    #[error("Version {version} is not installed under {root}")]
    #[diagnostic(
        code(easicam::version::not_installed),
        help("Run 'easicam-config scan' to list the installed versions")
    )]
    VersionNotInstalled { version: String, root: String },

    // Interactive prompt errors (editor only)
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(easicam::prompt::failed))]
    PromptFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(easicam::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        LauncherError::IoError {
            message: err.to_string(),
        }
    }
}

// Cancellation is handled at the prompt call sites via `prompt_skippable`,
// so only genuine prompt failures reach this conversion.
impl From<inquire::InquireError> for LauncherError {
    fn from(err: inquire::InquireError) -> Self {
        LauncherError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias used throughout the crate
pub type Result<T> = miette::Result<T, LauncherError>;
