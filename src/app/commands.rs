//! Command handlers.
//!
//! Each handler catches every failure and turns it into exactly one
//! notification. Nothing here panics or propagates an error upward.

use tracing::{error, info, warn};

use super::Context;
use crate::error::PatchError;
use crate::install::InstallLayout;
use crate::notify::{HostUi, NotificationKind, messages};
use crate::patch::{self, PatchEngine, UnpatchEngine};
use crate::state::{StateStore, VERSION_KEY};
use crate::template::TemplateRenderer;
use crate::version::VersionGate;
use crate::whats_new;

/// Whether a command ended in an error notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failed,
}

impl From<CommandStatus> for std::process::ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => std::process::ExitCode::SUCCESS,
            CommandStatus::Failed => std::process::ExitCode::FAILURE,
        }
    }
}

/// Activation-time check: show the "what's new" page when the version gate
/// says so. Failures are logged and never stop the calling command.
pub fn activate<H: HostUi>(ctx: &Context<H>) {
    let mut state = match StateStore::open(&ctx.state_path) {
        Ok(state) => state,
        Err(e) => {
            warn!("Skipping what's new check: {}", e);
            return;
        }
    };

    let gate = VersionGate::new(ctx.whats_new);
    let decision = match gate.evaluate(&ctx.version, state.get(VERSION_KEY)) {
        Ok(decision) => decision,
        Err(e) => {
            error!("Skipping what's new page: {}", e);
            return;
        }
    };

    if !decision.should_show {
        return;
    }

    if let Some(version) = &decision.version_to_persist
        && let Err(e) = state.update(VERSION_KEY, version.as_str())
    {
        warn!("Failed to record shown version: {}", e);
    }

    if let Err(e) = whats_new::show(ctx.notifier.host(), &ctx.assets, &ctx.version, &ctx.view_path)
    {
        warn!("Failed to show what's new page: {:#}", e);
    }
}

/// Show the "what's new" page unconditionally and record the version.
pub fn show_whats_new<H: HostUi>(ctx: &Context<H>) -> CommandStatus {
    match StateStore::open(&ctx.state_path) {
        Ok(mut state) => {
            if let Err(e) = state.update(VERSION_KEY, ctx.version.as_str()) {
                warn!("Failed to record shown version: {}", e);
            }
        }
        Err(e) => warn!("Failed to open state: {}", e),
    }

    match whats_new::show(ctx.notifier.host(), &ctx.assets, &ctx.version, &ctx.view_path) {
        Ok(()) => CommandStatus::Success,
        Err(e) => {
            error!("{:#}", e);
            ctx.notifier.error(&format!("Could not open the what's new page: {}", e));
            CommandStatus::Failed
        }
    }
}

fn resolve_layout<H: HostUi>(ctx: &Context<H>) -> Option<InstallLayout> {
    match InstallLayout::resolve(ctx.install_root.as_deref()) {
        Ok(layout) => {
            info!("Using workbench at {:?}", layout.workbench_dir());
            Some(layout)
        }
        Err(e) => {
            error!("{}", e);
            ctx.notifier.error(&e.to_string());
            None
        }
    }
}

/// Render the theme script and patch the workbench.
pub fn enable<H: HostUi>(ctx: &Context<H>) -> CommandStatus {
    let Some(layout) = resolve_layout(ctx) else {
        return CommandStatus::Failed;
    };

    let result = TemplateRenderer::new(&ctx.assets)
        .render(ctx.options)
        .map_err(PatchError::from)
        .and_then(|script| PatchEngine::new(&layout).apply(&script));

    match result {
        Ok(outcome) => {
            let (message, action) = messages::for_patch(outcome);
            ctx.notifier.notify(NotificationKind::Info, message, action);
            CommandStatus::Success
        }
        Err(e) => {
            error!("{}", e);
            ctx.notifier.error(messages::for_patch_error(&e));
            CommandStatus::Failed
        }
    }
}

/// Take the marker out of the workbench.
pub fn disable<H: HostUi>(ctx: &Context<H>) -> CommandStatus {
    let Some(layout) = resolve_layout(ctx) else {
        return CommandStatus::Failed;
    };

    match UnpatchEngine::new(&layout).remove() {
        Ok(outcome) => {
            let (message, action) = messages::for_unpatch(outcome);
            ctx.notifier.notify(NotificationKind::Info, message, action);
            CommandStatus::Success
        }
        Err(e) => {
            error!("{}", e);
            ctx.notifier.error(&e.to_string());
            CommandStatus::Failed
        }
    }
}

/// Report the workbench paths and whether the marker is present.
pub fn status<H: HostUi>(ctx: &Context<H>) -> CommandStatus {
    let Some(layout) = resolve_layout(ctx) else {
        return CommandStatus::Failed;
    };

    match patch::is_applied(&layout) {
        Ok(applied) => {
            let state = if applied { "enabled" } else { "disabled" };
            ctx.notifier.info(&format!(
                "Fluent UI is {}.\n  workbench: {}\n  script:    {}",
                state,
                layout.html_file().display(),
                layout.script_file().display()
            ));
            CommandStatus::Success
        }
        Err(e) => {
            error!("Failed to read {:?}: {}", layout.html_file(), e);
            ctx.notifier.error(&format!(
                "Could not read {}: {}",
                layout.html_file().display(),
                e
            ));
            CommandStatus::Failed
        }
    }
}
