//! Launcher log setup
//!
//! Line-oriented, timestamped log written to a file that is truncated on
//! every run. On Windows the records are mirrored to stderr so a console
//! session sees the same pipeline trace the file captures. Level defaults to
//! `info` and can be overridden through `RUST_LOG`.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::{LauncherError, Result};

/// Default log file name, resolved against the working directory
pub const DEFAULT_LOG_FILE: &str = "launcher.log";

/// Writer that appends to the log file and, on Windows, echoes to stderr
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        #[cfg(windows)]
        {
            let _ = io::stderr().write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        #[cfg(windows)]
        io::stderr().flush()?;
        Ok(())
    }
}

/// Initialize the global logger writing to `log_path`.
///
/// # Errors
///
/// Fails if the log file cannot be created or a logger is already installed.
pub fn init(log_path: &Path) -> Result<()> {
    let file = File::create(log_path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {}: {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()
        .map_err(|err| LauncherError::IoError {
            message: err.to_string(),
        })
}
