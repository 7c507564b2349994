//! Set command implementation: non-interactive selection

use std::path::Path;

use crate::cli::SetArgs;
use crate::config::Configuration;
use crate::error::{LauncherError, Result};
use crate::scan::scan_install_root;
use crate::ui;
use crate::validate::validate_executable;
use crate::version::VersionNumber;

/// Run the set command: scan the root, pick the requested version, validate
/// its binary and persist the configuration in one step.
pub fn run(config_path: &Path, args: SetArgs) -> Result<()> {
    let existing = super::load_or_fresh(config_path)?;
    let root = super::resolve_root(args.root, &existing);

    // Parse first so a version typo fails before any filesystem work
    let requested: VersionNumber = args.version.parse()?;

    let versions = scan_install_root(&root)?;
    let entry = versions
        .iter()
        .find(|v| v.version == requested)
        .ok_or_else(|| LauncherError::VersionNotInstalled {
            version: requested.to_string(),
            root: root.display().to_string(),
        })?;

    validate_executable(&entry.executable_path)?;

    let config = Configuration::from_selection(&super::canonical_root(&root), entry);
    config.save(config_path)?;
    ui::print_saved(entry);

    Ok(())
}
