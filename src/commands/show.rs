//! Show command implementation

use std::path::Path;

use console::Style;

use crate::config::Configuration;
use crate::error::{LauncherError, Result};
use crate::ui;

/// Run the show command: print the persisted configuration. An absent file is
/// a normal first-run state, not an error.
pub fn run(config_path: &Path) -> Result<()> {
    match Configuration::load(config_path) {
        Ok(config) => {
            ui::print_configuration(&config);
            Ok(())
        }
        Err(LauncherError::ConfigMissing { .. }) => {
            println!(
                "{}",
                Style::new()
                    .dim()
                    .apply_to("Not configured yet. Run 'easicam-config select' to get started.")
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}
