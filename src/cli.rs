//! CLI definitions for the configuration editor, using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// easicam-config - configuration editor for the EasiCamera launcher
///
/// Scans an install root for installed versions, lets you pick one and writes
/// the launcher configuration.
#[derive(Parser, Debug)]
#[command(
    name = "easicam-config",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Configuration editor for the EasiCamera launcher",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  easicam-config scan\n    \
                  easicam-config scan \"D:\\Seewo\\EasiCamera\"\n    \
                  easicam-config select\n    \
                  easicam-config set --root \"C:\\Program Files (x86)\\Seewo\\EasiCamera\" --version 3.1.2.0\n    \
                  easicam-config show"
)]
pub struct Cli {
    /// Configuration file to read and write
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an install root and list the installed versions
    Scan(ScanArgs),

    /// Interactively pick a version and save the configuration
    Select(SelectArgs),

    /// Save a configuration without prompts
    Set(SetArgs),

    /// Show the current configuration
    Show,

    /// Show version information
    Version,
}

/// Arguments for the scan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scan the configured (or stock) install root:\n    easicam-config scan\n\n\
                  Scan an explicit root:\n    easicam-config scan \"D:\\Seewo\\EasiCamera\"")]
pub struct ScanArgs {
    /// Install root to scan. Defaults to the configured root, then the stock
    /// install location
    pub root: Option<PathBuf>,
}

/// Arguments for the select command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick from the configured root:\n    easicam-config select\n\n\
                  Start from a different root:\n    easicam-config select --root \"D:\\Seewo\\EasiCamera\"")]
pub struct SelectArgs {
    /// Install root to offer as the starting value for the prompt
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Arguments for the set command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Select version 3.1.2.0 under the stock root:\n    \
                  easicam-config set --version 3.1.2.0\n\n\
                  Select under an explicit root:\n    \
                  easicam-config set --root \"D:\\Seewo\\EasiCamera\" --version 2.0.0.0")]
pub struct SetArgs {
    /// Install root containing the version directories. Defaults to the
    /// configured root, then the stock install location
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Dotted version to select, e.g. 3.1.2.0
    #[arg(long)]
    pub version: String,
}
