//! Installed-version discovery
//!
//! Scans one directory level under the install root for directories named
//! `EasiCamera_<d>.<d>.<d>.<d>` whose expected binary
//! (`<dir>/Main/EasiCamera.exe`) exists. Entries are rebuilt on every scan
//! and returned newest first.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{LauncherError, Result};
use crate::version::VersionNumber;

/// Subdirectory of a version directory that holds the binary
pub const MAIN_SUBDIR: &str = "Main";

/// File name of the target binary
pub const EXECUTABLE_NAME: &str = "EasiCamera.exe";

/// Anchored pattern a version directory name must match
static VERSION_DIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    let pattern = Regex::new(r"^EasiCamera_(\d+\.\d+\.\d+\.\d+)$").expect("version pattern is valid");
    pattern
});

/// One validated install found under the root; transient, rebuilt per scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledVersion {
    /// Parsed version number from the directory name
    pub version: VersionNumber,
    /// The raw matched directory name
    pub directory_name: String,
    /// Absolute path to the expected binary inside the directory
    pub executable_path: PathBuf,
}

/// Expected binary path for a version directory
pub fn executable_path_for(version_dir: &Path) -> PathBuf {
    version_dir.join(MAIN_SUBDIR).join(EXECUTABLE_NAME)
}

/// Scan the immediate subdirectories of `root` for valid installs.
///
/// Only read-only filesystem access; no recursion beyond one level. The
/// result is sorted descending so the newest version comes first.
///
/// # Errors
///
/// [`LauncherError::ScanRootNotFound`] if `root` does not exist,
/// [`LauncherError::ScanRootNotDirectory`] if it is not a directory,
/// [`LauncherError::ScanRootUnreadable`] if it cannot be read.
pub fn scan_install_root(root: &Path) -> Result<Vec<InstalledVersion>> {
    if !root.exists() {
        return Err(LauncherError::ScanRootNotFound {
            path: root.display().to_string(),
        });
    }
    if !root.is_dir() {
        return Err(LauncherError::ScanRootNotDirectory {
            path: root.display().to_string(),
        });
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| scan_error(e, root))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let Some(captures) = VERSION_DIR_RE.captures(&name) else {
            continue;
        };
        let version: VersionNumber = captures[1].parse()?;
        let executable_path = executable_path_for(entry.path());
        if !executable_path.is_file() {
            continue;
        }
        found.push(InstalledVersion {
            version,
            directory_name: name.into_owned(),
            executable_path,
        });
    }

    found.sort_by(|a, b| b.version.cmp(&a.version));
    Ok(found)
}

fn scan_error(err: walkdir::Error, root: &Path) -> LauncherError {
    let unreadable = err
        .io_error()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::PermissionDenied);
    if unreadable {
        LauncherError::ScanRootUnreadable {
            path: root.display().to_string(),
        }
    } else {
        LauncherError::IoError {
            message: err.to_string(),
        }
    }
}
