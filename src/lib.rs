//! EasiCamera launcher tools
//!
//! Two small utilities around one XML configuration file: `easicam-config`
//! scans an install root for `EasiCamera_<version>` directories and persists
//! the chosen version, and `easicam-launch` reads that configuration,
//! validates the resolved executable and starts it with a bounded startup
//! wait. The binaries share no runtime state; the config file is the only
//! contract between them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod scan;
pub mod ui;
pub mod validate;
pub mod version;
