//! easicam-launch - starts the configured EasiCamera executable
//!
//! Pipeline: init logging, load config, validate the resolved executable,
//! spawn with a bounded startup wait. Every stage is logged. Exit codes:
//! 0 success (including "still running in background" and a child that
//! exited non-zero within the window), 1 configuration read/validation
//! error, 2 malformed configuration file, 3 launch failure.

use std::path::{Path, PathBuf};

use clap::Parser;

use easicam::config::{Configuration, DEFAULT_CONFIG_FILE};
use easicam::error::{LauncherError, Result};
use easicam::launch::{LaunchOutcome, launch};
use easicam::logging::{self, DEFAULT_LOG_FILE};
use easicam::validate::validate_executable;

/// easicam-launch - start the configured EasiCamera version
#[derive(Parser, Debug)]
#[command(
    name = "easicam-launch",
    author,
    version,
    about = "Starts the EasiCamera executable selected with easicam-config"
)]
struct Args {
    /// Configuration file written by easicam-config
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log file, truncated on every run
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(&args.log) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }

    if let Err(e) = run(&args.config) {
        log::error!("launch failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

/// The single sequential launch pipeline
fn run(config_path: &Path) -> Result<()> {
    log::info!("loading configuration from {}", config_path.display());
    let config = Configuration::load(config_path)?;
    let executable = config.required_executable_path()?;
    log::info!("target path: {}", executable.display());

    validate_executable(&executable)?;
    log::info!("path validation passed");

    log::info!("starting process");
    match launch(&executable)? {
        LaunchOutcome::Exited {
            code: Some(0),
            ..
        } => {
            log::info!("process exited cleanly within the startup window");
        }
        LaunchOutcome::Exited {
            code,
            stdout,
            stderr,
        } => {
            // Soft failure: logged with the captured output, not fatal
            log::error!(
                "process exited abnormally (code {})\nstdout: {}\nstderr: {}",
                code.map_or_else(|| "killed by signal".to_string(), |c| c.to_string()),
                stdout.trim_end(),
                stderr.trim_end()
            );
        }
        LaunchOutcome::StillRunning => {
            log::info!("process is running in the background");
        }
    }
    log::info!("launch sequence complete");

    Ok(())
}

/// Map an error kind to the documented process exit code
fn exit_code(err: &LauncherError) -> i32 {
    match err {
        LauncherError::ConfigMalformed { .. } => 2,
        LauncherError::PathInvalid { .. } | LauncherError::SpawnFailure { .. } => 3,
        _ => 1,
    }
}
