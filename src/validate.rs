//! Three-stage executable path validation
//!
//! A path is launchable iff, in order: it exists, it is a regular file, and
//! its name carries the `.exe` extension (case-insensitive). Validation stops
//! at the first failing check and the error records which check failed. Both
//! the editor (before saving a selection) and the launcher (before spawning)
//! run the same checks.

use std::fmt;
use std::path::Path;

use crate::error::{LauncherError, Result};

/// Extension the target binary must carry. The product is Windows-only, so
/// the expected extension does not vary by host platform.
pub const EXECUTABLE_EXTENSION: &str = "exe";

/// The individual stages of the launchable check, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchCheck {
    /// The path exists on the filesystem
    Exists,
    /// The path is a regular file, not a directory or special file
    RegularFile,
    /// The file name ends with the executable extension
    Extension,
}

impl fmt::Display for LaunchCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            LaunchCheck::Exists => "Path does not exist",
            LaunchCheck::RegularFile => "Target is not a regular file",
            LaunchCheck::Extension => "File lacks the executable extension",
        };
        f.write_str(message)
    }
}

/// Validate that `path` points at a launchable executable.
///
/// # Errors
///
/// Returns [`LauncherError::PathInvalid`] naming the first failing check and
/// the offending path.
pub fn validate_executable(path: &Path) -> Result<()> {
    let fail = |check: LaunchCheck| LauncherError::PathInvalid {
        check,
        path: path.display().to_string(),
    };

    if !path.exists() {
        return Err(fail(LaunchCheck::Exists));
    }
    if !path.is_file() {
        return Err(fail(LaunchCheck::RegularFile));
    }
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXECUTABLE_EXTENSION));
    if !has_extension {
        return Err(fail(LaunchCheck::Extension));
    }

    Ok(())
}
