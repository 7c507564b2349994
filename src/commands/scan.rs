//! Scan command implementation

use std::path::Path;

use crate::cli::ScanArgs;
use crate::error::Result;
use crate::scan::scan_install_root;
use crate::ui;

/// Run the scan command: discover installed versions and print the table
pub fn run(config_path: &Path, args: ScanArgs) -> Result<()> {
    let existing = super::load_or_fresh(config_path)?;
    let root = super::resolve_root(args.root, &existing);

    let versions = scan_install_root(&root)?;
    ui::print_versions(&root, &versions);

    Ok(())
}
