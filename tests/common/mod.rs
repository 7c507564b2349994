//! Common test utilities for the integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a fake install tree plus the config/log files
/// the binaries create. Binaries run with this directory as their working
/// directory so the default `config.xml`/`launcher.log` names resolve here.
pub struct TestSetup {
    #[allow(dead_code)]
    temp: TempDir,
    /// Scratch root; working directory for the binaries under test
    pub path: PathBuf,
    /// Install root that holds the `EasiCamera_<version>` directories
    pub install_root: PathBuf,
}

impl TestSetup {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let install_root = path.join("installs");
        std::fs::create_dir_all(&install_root).expect("Failed to create install root");
        Self {
            temp,
            path,
            install_root,
        }
    }

    /// Create `EasiCamera_<version>/Main/EasiCamera.exe` under the install
    /// root and return the executable path.
    pub fn create_install(&self, version: &str) -> PathBuf {
        let main_dir = self
            .install_root
            .join(format!("EasiCamera_{version}"))
            .join("Main");
        std::fs::create_dir_all(&main_dir).expect("Failed to create version directory");
        let exe = main_dir.join("EasiCamera.exe");
        std::fs::write(&exe, b"").expect("Failed to write executable");
        exe
    }

    /// Replace the binary of an existing install with an executable shell
    /// script so launch tests can actually spawn it.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn make_runnable(&self, exe: &Path, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::write(exe, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        std::fs::set_permissions(exe, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
    }

    /// Write `config.xml` in the scratch root
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.path.join("config.xml"), content).expect("Failed to write config");
    }

    /// Read a file from the scratch root
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Check if a file exists in the scratch root
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }
}
