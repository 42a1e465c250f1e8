//! User notifications.
//!
//! Everything the user sees goes through a [`HostUi`]. The binary uses the
//! console implementation; tests swap in a recording one.

mod console;
pub mod messages;

pub use console::ConsoleHost;

use std::path::Path;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// The UI services of the editor host.
pub trait HostUi {
    /// Show a message, optionally with a single action button.
    ///
    /// Returns true when the user accepted the action.
    fn show_message(&self, kind: NotificationKind, message: &str, action: Option<&str>) -> bool;

    /// Reload the editor window.
    fn reload_window(&self) -> anyhow::Result<()>;

    /// Present an HTML view stored at `path`.
    fn show_view(&self, title: &str, path: &Path) -> anyhow::Result<()>;
}

/// Thin gateway over a [`HostUi`] that wires the action button to a reload.
pub struct Notifier<H> {
    host: H,
}

impl<H: HostUi> Notifier<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Show `message`. Accepting the action reloads the editor window.
    pub fn notify(&self, kind: NotificationKind, message: &str, action: Option<&str>) {
        let accepted = self.host.show_message(kind, message, action);
        if action.is_some()
            && accepted
            && let Err(e) = self.host.reload_window()
        {
            tracing::warn!("Failed to reload editor window: {}", e);
        }
    }

    pub fn info(&self, message: &str) {
        self.notify(NotificationKind::Info, message, None);
    }

    pub fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message, None);
    }
}
