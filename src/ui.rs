//! Terminal output for the configuration editor

use console::Style;
use std::path::Path;

use crate::config::Configuration;
use crate::scan::InstalledVersion;

/// Print the scanned version table, newest first
pub fn print_versions(root: &Path, versions: &[InstalledVersion]) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Install root:"),
        root.display()
    );
    println!();

    if versions.is_empty() {
        println!(
            "{}",
            Style::new().yellow().apply_to("No valid versions found")
        );
        return;
    }

    println!(
        "  {:<12} {}",
        Style::new().bold().apply_to("Version"),
        Style::new().bold().apply_to("Executable")
    );
    for entry in versions {
        println!(
            "  {:<12} {}",
            Style::new().cyan().apply_to(entry.version.to_string()),
            entry.executable_path.display()
        );
    }
    println!();
    println!(
        "Found {} valid version{}",
        versions.len(),
        if versions.len() == 1 { "" } else { "s" }
    );
}

/// Print the current configuration, dimming unset fields
pub fn print_configuration(config: &Configuration) {
    let field = |label: &str, value: &Option<String>| {
        let label = format!("{label}:");
        match value {
            Some(v) => println!("{} {}", Style::new().bold().apply_to(label), v),
            None => println!(
                "{} {}",
                Style::new().bold().apply_to(label),
                Style::new().dim().apply_to("not set")
            ),
        }
    };

    field("Install root", &config.install_root);
    field("Version", &config.selected_version);
    field("Executable", &config.executable_path);
}

/// Confirmation printed after a successful save
pub fn print_saved(entry: &InstalledVersion) {
    println!(
        "{} The launcher will start version {} from:",
        Style::new().green().bold().apply_to("Saved."),
        Style::new().cyan().apply_to(entry.version.to_string())
    );
    println!("  {}", entry.executable_path.display());
}
