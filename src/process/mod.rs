//! Process execution utilities.
//!
//! Used to open the "what's new" page in the system browser and to run the
//! user's reload command. Spawned processes are detached so they outlive
//! this short-lived CLI.

use crate::error::ProcessError;
use std::ffi::OsStr;
use std::process::{Command, Stdio};

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// Builder for creating detached processes.
///
/// On Unix a detached process runs in its own session (via `setsid()`).
/// All stdio is redirected to null.
///
/// # Example
/// ```ignore
/// use fluent_patch::process::DetachedProcess;
///
/// DetachedProcess::new("xdg-open")
///     .arg("file:///tmp/whats-new.html")
///     .spawn()?;
/// ```
pub struct DetachedProcess {
    command: Command,
    shell_command: Option<String>,
}

impl DetachedProcess {
    /// Create a new detached process builder for the given program.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            command: Command::new(program),
            shell_command: None,
        }
    }

    /// Create a detached process that runs a shell command.
    ///
    /// The command will be executed via `sh -c` (or `cmd /C` on Windows).
    pub fn shell<S: Into<String>>(command: S) -> Self {
        let program = if cfg!(windows) { "cmd" } else { "sh" };
        Self {
            command: Command::new(program),
            shell_command: Some(command.into()),
        }
    }

    /// Add an argument to the process.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.command.arg(arg);
        self
    }

    /// Spawn the detached process.
    pub fn spawn(mut self) -> Result<(), ProcessError> {
        if let Some(cmd) = &self.shell_command {
            let flag = if cfg!(windows) { "/C" } else { "-c" };
            self.command.args([flag, cmd.as_str()]);
        }

        self.command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        detach(&mut self.command);

        self.command.spawn().map_err(ProcessError::SpawnFailed)?;

        Ok(())
    }
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    // SAFETY: setsid() is async-signal-safe and creates a new session,
    // detaching the child from our process group.
    unsafe {
        command.pre_exec(|| {
            libc::setsid();
            Ok(())
        });
    }
}

#[cfg(not(unix))]
fn detach(_command: &mut Command) {}

/// Open a URL using the system default handler.
pub fn open_url(url: &str) -> Result<(), ProcessError> {
    if url.is_empty() {
        return Err(ProcessError::EmptyCommand);
    }

    if cfg!(target_os = "macos") {
        DetachedProcess::new("open").arg(url).spawn()
    } else if cfg!(windows) {
        // The empty argument is the window title expected by `start`
        DetachedProcess::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(url)
            .spawn()
    } else {
        DetachedProcess::new("xdg-open").arg(url).spawn()
    }
}

/// Execute a shell command in a detached process.
pub fn run_shell_command(command: &str) -> Result<(), ProcessError> {
    if command.trim().is_empty() {
        return Err(ProcessError::EmptyCommand);
    }
    DetachedProcess::shell(command).spawn()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_shell_command_empty() {
        let result = run_shell_command("");
        assert!(matches!(result, Err(ProcessError::EmptyCommand)));
    }

    #[test]
    fn test_run_shell_command_whitespace_only() {
        let result = run_shell_command("   ");
        assert!(matches!(result, Err(ProcessError::EmptyCommand)));
    }

    #[test]
    fn test_open_url_empty() {
        assert!(matches!(open_url(""), Err(ProcessError::EmptyCommand)));
    }
}
