//! Command implementations for the configuration editor

pub mod scan;
pub mod select;
pub mod set;
pub mod show;
pub mod version;

use std::path::{Path, PathBuf};

use console::Style;

use crate::config::Configuration;
use crate::error::{LauncherError, Result};

/// Stock install location of the EasiCamera product
pub const DEFAULT_INSTALL_ROOT: &str = "C:\\Program Files (x86)\\Seewo\\EasiCamera";

/// Load the existing configuration for editing, treating an absent file as a
/// normal first run. A malformed file is reported and replaced with a fresh
/// record so the editor can repair it by saving.
fn load_or_fresh(config_path: &Path) -> Result<Configuration> {
    match Configuration::load(config_path) {
        Ok(config) => Ok(config),
        Err(LauncherError::ConfigMissing { .. }) => Ok(Configuration::default()),
        Err(LauncherError::ConfigMalformed { .. }) => {
            println!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to("Existing configuration is malformed; starting fresh")
            );
            Ok(Configuration::default())
        }
        Err(err) => Err(err),
    }
}

/// Resolve the install root to operate on: explicit argument, then the
/// configured root, then the stock location.
fn resolve_root(arg: Option<PathBuf>, config: &Configuration) -> PathBuf {
    arg.unwrap_or_else(|| {
        config
            .install_root
            .as_ref()
            .map_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT), PathBuf::from)
    })
}

/// Canonical form of the root for persisting, without Windows `\\?\` noise.
/// Falls back to the path as given when canonicalization fails.
fn canonical_root(root: &Path) -> String {
    dunce::canonicalize(root)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root_prefers_argument() {
        let config = Configuration {
            install_root: Some("/configured".to_string()),
            ..Configuration::default()
        };
        let root = resolve_root(Some(PathBuf::from("/explicit")), &config);
        assert_eq!(root, PathBuf::from("/explicit"));
    }

    #[test]
    fn test_resolve_root_falls_back_to_configured() {
        let config = Configuration {
            install_root: Some("/configured".to_string()),
            ..Configuration::default()
        };
        assert_eq!(resolve_root(None, &config), PathBuf::from("/configured"));
    }

    #[test]
    fn test_resolve_root_defaults_to_stock_location() {
        let root = resolve_root(None, &Configuration::default());
        assert_eq!(root, PathBuf::from(DEFAULT_INSTALL_ROOT));
    }

    #[test]
    fn test_load_or_fresh_missing_file_is_first_run() {
        let temp = TempDir::new().unwrap();
        let config = load_or_fresh(&temp.path().join("config.xml")).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_load_or_fresh_malformed_file_starts_fresh() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.xml");
        std::fs::write(&path, "<Configuration><InstallPath></Oops></Configuration>").unwrap();
        let config = load_or_fresh(&path).unwrap();
        assert_eq!(config, Configuration::default());
    }
}
