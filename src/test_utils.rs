//! Test utilities and mock factories.
//!
//! This module provides a recording UI host, fake VS Code installs and
//! ready-made contexts. Only compiled in test builds.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use crate::app::Context;
use crate::config::AppConfig;
use crate::install::InstallLayout;
use crate::notify::{HostUi, NotificationKind};
use crate::template::{RenderOptions, RenderedScript, StyleBundle, substitute};

/// A trimmed-down `workbench.html` as shipped by VS Code.
pub const SAMPLE_WORKBENCH: &str = "<!-- Copyright (C) Microsoft Corporation. All rights reserved. -->\n<!DOCTYPE html>\n<html>\n\t<head>\n\t\t<meta charset=\"utf-8\" />\n\t\t<link rel=\"stylesheet\" href=\"../../../../bootstrap-window.css\">\n\t</head>\n\n\t<body aria-label=\"\">\n\t</body>\n\n\t<!-- Startup (do not modify order of script tags!) -->\n\t<script src=\"workbench.js\" type=\"module\"></script>\n</html>\n";

/// A message captured by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    pub kind: NotificationKind,
    pub text: String,
    pub action: Option<String>,
}

/// [`HostUi`] that records everything instead of talking to a user.
#[derive(Debug, Default)]
pub struct RecordingHost {
    accept: bool,
    messages: RefCell<Vec<RecordedMessage>>,
    views: RefCell<Vec<(String, PathBuf)>>,
    reloads: Cell<usize>,
}

impl RecordingHost {
    /// A host whose user clicks every action button.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            ..Self::default()
        }
    }

    /// A host whose user ignores every action button.
    pub fn declining() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<RecordedMessage> {
        self.messages.borrow().clone()
    }

    pub fn views(&self) -> Vec<(String, PathBuf)> {
        self.views.borrow().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl HostUi for RecordingHost {
    fn show_message(&self, kind: NotificationKind, message: &str, action: Option<&str>) -> bool {
        self.messages.borrow_mut().push(RecordedMessage {
            kind,
            text: message.to_string(),
            action: action.map(str::to_string),
        });
        self.accept && action.is_some()
    }

    fn reload_window(&self) -> anyhow::Result<()> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }

    fn show_view(&self, title: &str, path: &Path) -> anyhow::Result<()> {
        self.views
            .borrow_mut()
            .push((title.to_string(), path.to_path_buf()));
        Ok(())
    }
}

/// Create a fake VS Code `out` directory under `root` holding `html`.
pub fn fake_install(root: &Path, html: &str) -> InstallLayout {
    let workbench = root
        .join("vs")
        .join("code")
        .join("electron-browser")
        .join("workbench");
    std::fs::create_dir_all(&workbench).unwrap();
    std::fs::write(workbench.join("workbench.html"), html).unwrap();
    InstallLayout::new(root)
}

/// A small rendered script that doesn't depend on the bundled assets.
pub fn sample_script() -> RenderedScript {
    let styles = StyleBundle {
        vars: ":root { --fluent-accent: #60cdff; }".to_string(),
        chrome: ".sidebar { opacity: 0.9; }".to_string(),
    };
    substitute(
        "const f = [DISABLE_FILTERS]; const c = [IS_COMPACT]; `[CHROME_STYLES]` `[VARS]`",
        &styles,
        RenderOptions::default(),
    )
}

/// A context whose install root is `<dir>/code` and whose state lives in
/// `<dir>/state`.
pub fn test_context<H: HostUi>(dir: &Path, host: H) -> Context<H> {
    let config = AppConfig {
        install_root: Some(dir.join("code")),
        ..AppConfig::default()
    };

    let mut ctx = Context::new(&config, host);
    ctx.state_path = dir.join("state").join("state.json");
    ctx.view_path = dir.join("state").join("whats-new.html");
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fake_install_layout() {
        let dir = tempdir().unwrap();
        let layout = fake_install(dir.path(), SAMPLE_WORKBENCH);
        assert_eq!(
            std::fs::read_to_string(layout.html_file()).unwrap(),
            SAMPLE_WORKBENCH
        );
        assert!(InstallLayout::resolve(Some(dir.path())).is_ok());
    }

    #[test]
    fn test_sample_script_is_rendered() {
        let script = sample_script();
        assert!(script.as_str().starts_with("const f = false; const c = false;"));
        assert!(!script.as_str().contains("[VARS]"));
    }

    #[test]
    fn test_recording_host_declines_by_default() {
        let host = RecordingHost::declining();
        assert!(!host.show_message(NotificationKind::Info, "x", Some("ok")));
        assert_eq!(host.messages().len(), 1);
    }
}
