//! Select command implementation: the interactive editor flow
//!
//! Enter or confirm the install root, scan it, pick a version from the list
//! (the currently configured version is pre-highlighted), then confirm and
//! save. The saved record is an explicit
//! snapshot of root + scanned entry, so the root and the selection cannot
//! drift apart between scan and save.

use std::path::{Path, PathBuf};

use console::Style;
use inquire::{Confirm, Select, Text};

use crate::cli::SelectArgs;
use crate::config::Configuration;
use crate::error::{LauncherError, Result};
use crate::scan::{InstalledVersion, scan_install_root};
use crate::ui;
use crate::validate::validate_executable;

/// Run the interactive select flow
pub fn run(config_path: &Path, args: SelectArgs) -> Result<()> {
    let existing = super::load_or_fresh(config_path)?;
    let initial_root = super::resolve_root(args.root, &existing);

    // Esc on any prompt cancels the whole flow without an error
    let Some(root_input) = Text::new("Install root directory:")
        .with_initial_value(&initial_root.display().to_string())
        .with_help_message("The directory containing the EasiCamera_<version> folders")
        .prompt_skippable()?
    else {
        println!("Cancelled, nothing saved");
        return Ok(());
    };
    let root = PathBuf::from(root_input.trim());

    let versions = scan_install_root(&root)?;
    if versions.is_empty() {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("No valid versions found under that root")
        );
        return Ok(());
    }

    let Some(entry) = pick_version(&versions, existing.selected_version.as_deref())? else {
        println!("Cancelled, nothing saved");
        return Ok(());
    };

    validate_executable(&entry.executable_path)?;

    let prompt = format!("Save version {} as the launch target?", entry.version);
    let confirmed = Confirm::new(&prompt)
        .with_default(true)
        .prompt_skippable()?;
    if confirmed != Some(true) {
        println!("Cancelled, nothing saved");
        return Ok(());
    }

    let config = Configuration::from_selection(&super::canonical_root(&root), entry);
    config.save(config_path)?;
    ui::print_saved(entry);

    Ok(())
}

/// Offer the scanned versions, pre-highlighting the configured one. Returns
/// `None` when the user cancels.
fn pick_version<'a>(
    versions: &'a [InstalledVersion],
    configured: Option<&str>,
) -> Result<Option<&'a InstalledVersion>> {
    let items: Vec<String> = versions.iter().map(display_item).collect();
    let starting_cursor = configured
        .and_then(|v| {
            versions
                .iter()
                .position(|entry| entry.version.to_string() == v)
        })
        .unwrap_or(0);

    let selection = Select::new("Select a version", items)
        .with_starting_cursor(starting_cursor)
        .with_help_message("↑↓ navigate  enter confirm  esc cancel")
        .prompt_skippable()?;

    let Some(chosen) = selection else {
        return Ok(None);
    };

    // Map the display string back to its entry (version is the first column)
    let version = chosen.split_whitespace().next().unwrap_or(&chosen);
    let entry = versions
        .iter()
        .find(|v| v.version.to_string() == version)
        .ok_or_else(|| LauncherError::PromptFailed {
            message: format!("selection '{chosen}' no longer matches a scanned version"),
        })?;
    Ok(Some(entry))
}

fn display_item(entry: &InstalledVersion) -> String {
    format!("{:<12} {}", entry.version, entry.executable_path.display())
}
