//! Process launch with a bounded startup wait
//!
//! The launcher starts the target with its working directory set to the
//! binary's containing directory so the program can find sibling resources
//! by relative path. It then waits a short, platform-dependent window for the
//! child to either exit or keep running. A child that outlives the window is
//! the expected outcome; the handle is dropped and the process runs on
//! detached from the launcher.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{LauncherError, Result};

/// Startup wait before the child is considered "running in background".
/// Windows installs are slower to settle and get the longer window.
#[cfg(windows)]
pub const STARTUP_WAIT: Duration = Duration::from_secs(10);
#[cfg(not(windows))]
pub const STARTUP_WAIT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What happened within the startup wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The child exited within the window. A non-zero code is logged by the
    /// caller but is not a launch failure. `code` is `None` when the child
    /// was terminated by a signal.
    Exited {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// The window elapsed with the child still running; the expected success
    StillRunning,
}

/// Start `executable` and wait up to [`STARTUP_WAIT`] for it to settle.
///
/// # Errors
///
/// [`LauncherError::SpawnFailure`] if the OS cannot create the process.
pub fn launch(executable: &Path) -> Result<LaunchOutcome> {
    launch_with_timeout(executable, STARTUP_WAIT)
}

/// [`launch`] with an explicit startup window (tests use short windows).
///
/// Both pipes are drained on reader threads for the whole window, so a child
/// that writes more than the OS pipe buffer before exiting never wedges on a
/// full pipe and its exit is still observed within the window.
pub fn launch_with_timeout(executable: &Path, timeout: Duration) -> Result<LaunchOutcome> {
    let working_dir = executable.parent().unwrap_or_else(|| Path::new("."));

    let mut child = Command::new(executable)
        .current_dir(working_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| LauncherError::SpawnFailure {
            path: executable.display().to_string(),
            reason: err.to_string(),
        })?;

    let stdout_reader = spawn_drain(child.stdout.take());
    let stderr_reader = spawn_drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            // Child exited: both pipes are at EOF, the readers finish
            return Ok(LaunchOutcome::Exited {
                code: status.code(),
                stdout: stdout_reader.join().unwrap_or_default(),
                stderr: stderr_reader.join().unwrap_or_default(),
            });
        }
        if Instant::now() >= deadline {
            // Detach: the child is no longer our responsibility. The reader
            // threads are left running so the pipes stay open until this
            // process exits; the child is never SIGPIPE-killed by us.
            return Ok(LaunchOutcome::StillRunning);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// Drain one pipe to a buffer on a background thread
fn spawn_drain<R>(pipe: Option<R>) -> std::thread::JoinHandle<String>
where
    R: Read + Send + 'static,
{
    std::thread::spawn(move || {
        let mut buffer = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buffer);
        }
        buffer
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write an executable shell script named like the target binary. The
    /// `.exe` name keeps the fixture consistent with what validation accepts.
    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("EasiCamera.exe");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_quick_exit_zero_is_reported() {
        let temp = TempDir::new().unwrap();
        let script = write_script(temp.path(), "exit 0");
        let outcome = launch_with_timeout(&script, Duration::from_secs(5)).unwrap();
        assert!(matches!(outcome, LaunchOutcome::Exited { code: Some(0), .. }));
    }

    #[test]
    fn test_nonzero_exit_captures_output() {
        let temp = TempDir::new().unwrap();
        let script = write_script(temp.path(), "echo started; echo broken >&2; exit 7");
        let outcome = launch_with_timeout(&script, Duration::from_secs(5)).unwrap();
        match outcome {
            LaunchOutcome::Exited {
                code,
                stdout,
                stderr,
            } => {
                assert_eq!(code, Some(7));
                assert!(stdout.contains("started"));
                assert!(stderr.contains("broken"));
            }
            LaunchOutcome::StillRunning => panic!("child should have exited"),
        }
    }

    #[test]
    fn test_chatty_child_is_drained_and_reported_as_exited() {
        let temp = TempDir::new().unwrap();
        // Well past the OS pipe buffer (~64 KB): the child must not wedge on
        // a full pipe and its quick exit must be observed within the window.
        let script = write_script(temp.path(), "yes chatty | head -n 100000; exit 0");
        let outcome = launch_with_timeout(&script, Duration::from_secs(10)).unwrap();
        match outcome {
            LaunchOutcome::Exited { code, stdout, .. } => {
                assert_eq!(code, Some(0));
                assert!(stdout.len() > 64 * 1024, "stdout: {} bytes", stdout.len());
            }
            LaunchOutcome::StillRunning => panic!("child should have exited"),
        }
    }

    #[test]
    fn test_long_running_child_reports_still_running() {
        let temp = TempDir::new().unwrap();
        let script = write_script(temp.path(), "sleep 30");
        let outcome = launch_with_timeout(&script, Duration::from_millis(300)).unwrap();
        assert_eq!(outcome, LaunchOutcome::StillRunning);
    }

    #[test]
    fn test_missing_binary_is_spawn_failure() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("EasiCamera.exe");
        let result = launch_with_timeout(&missing, Duration::from_secs(1));
        assert!(matches!(result, Err(LauncherError::SpawnFailure { .. })));
    }

    #[test]
    fn test_child_runs_in_its_own_directory() {
        let temp = TempDir::new().unwrap();
        // pwd prints the working directory the launcher set
        let script = write_script(temp.path(), "pwd");
        let outcome = launch_with_timeout(&script, Duration::from_secs(5)).unwrap();
        match outcome {
            LaunchOutcome::Exited { stdout, .. } => {
                let reported = PathBuf::from(stdout.trim());
                assert_eq!(
                    reported.canonicalize().unwrap(),
                    temp.path().canonicalize().unwrap()
                );
            }
            LaunchOutcome::StillRunning => panic!("child should have exited"),
        }
    }
}
