//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("easicam-config {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration editor for the EasiCamera launcher.");
    println!("Companion binary: easicam-launch");
    println!();
    println!("Build info:");
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
