//! Terminal implementation of [`HostUi`].

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::Context;

use super::{HostUi, NotificationKind, messages};
use crate::process::{open_url, run_shell_command};

/// Prints notifications to the terminal and asks about actions on stdin.
///
/// Everything meant for the user goes to stdout (errors to stderr).
/// Tracing only carries diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ConsoleHost {
    /// Accept every action without prompting.
    pub assume_yes: bool,
    /// Shell command run to reload the editor.
    pub reload_command: Option<String>,
}

impl ConsoleHost {
    pub fn new(assume_yes: bool, reload_command: Option<String>) -> Self {
        Self {
            assume_yes,
            reload_command,
        }
    }

    /// The configured reload command, if it isn't blank.
    fn reload_command(&self) -> Option<&str> {
        self.reload_command
            .as_deref()
            .map(str::trim)
            .filter(|cmd| !cmd.is_empty())
    }

    fn confirm(&self, action: &str) -> bool {
        if self.assume_yes {
            println!("{}", action);
            return true;
        }

        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return false;
        }

        print!("{}? [y/N] ", action);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match stdin.lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::debug!("Failed to read answer: {}", e);
                false
            }
        }
    }
}

impl HostUi for ConsoleHost {
    fn show_message(&self, kind: NotificationKind, message: &str, action: Option<&str>) -> bool {
        match kind {
            NotificationKind::Info => println!("{}", message),
            NotificationKind::Error => eprintln!("error: {}", message),
        }

        action.is_some_and(|action| self.confirm(action))
    }

    fn reload_window(&self) -> anyhow::Result<()> {
        let command = self.reload_command();
        println!("{}", reload_notice(command));
        if let Some(cmd) = command {
            run_shell_command(cmd).context("Failed to run reload command")?;
        }
        Ok(())
    }

    fn show_view(&self, title: &str, path: &Path) -> anyhow::Result<()> {
        let url = file_url(path);
        tracing::debug!("Opening {:?} as {}", path, url);
        open_url(&url).with_context(|| format!("Failed to open {}", url))?;
        println!("{}: {}", title, url);
        Ok(())
    }
}

/// What the user is told when the editor should reload.
fn reload_notice(command: Option<&str>) -> String {
    match command {
        Some(cmd) => format!("Running reload command: {}", cmd),
        None => messages::RELOAD_HINT.to_string(),
    }
}

/// Build a `file://` URL for an absolute path.
pub fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if cfg!(windows) {
        format!("file:///{}", raw.replace('\\', "/"))
    } else {
        format!("file://{}", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_file_url() {
        assert_eq!(
            file_url(Path::new("/tmp/whats-new.html")),
            "file:///tmp/whats-new.html"
        );
    }

    #[test]
    fn test_assume_yes_accepts_action() {
        let host = ConsoleHost::new(true, None);
        assert!(host.show_message(NotificationKind::Info, "hi", Some("Reload")));
    }

    #[test]
    fn test_no_action_is_not_accepted() {
        let host = ConsoleHost::new(true, None);
        assert!(!host.show_message(NotificationKind::Info, "hi", None));
    }

    #[test]
    fn test_blank_reload_command_falls_back_to_hint() {
        let host = ConsoleHost::new(false, Some("  ".to_string()));
        assert_eq!(host.reload_command(), None);
        assert_eq!(reload_notice(host.reload_command()), messages::RELOAD_HINT);
    }

    #[test]
    fn test_reload_command_is_announced() {
        let host = ConsoleHost::new(false, Some(" code --reuse-window ".to_string()));
        assert_eq!(host.reload_command(), Some("code --reuse-window"));
        assert_eq!(
            reload_notice(host.reload_command()),
            "Running reload command: code --reuse-window"
        );
    }

    #[test]
    fn test_reload_without_command_is_ok() {
        let host = ConsoleHost::new(false, Some("  ".to_string()));
        assert!(host.reload_window().is_ok());
    }
}
