//! User-facing texts for every command outcome.

use crate::error::PatchError;
use crate::patch::{PatchOutcome, UnpatchOutcome};

pub const ENABLED: &str = "Fluent UI is enabled. VS Code must reload for this change to take effect.";
pub const ALREADY_ENABLED: &str = "Fluent UI is already enabled. Reload to refresh JS settings.";
pub const DISABLED: &str = "Fluent UI is disabled. VS Code must reload for this change to take effect";
pub const NOT_RUNNING: &str = "Fluent UI isn't running.";
pub const NEEDS_ADMIN: &str =
    "You must run VS Code with admin privileges in order to enable Fluent UI.";
pub const ENABLE_FAILED: &str = "Something went wrong when starting Fluent UI";

pub const RESTART_TO_COMPLETE: &str = "Restart editor to complete";
pub const RESTART_TO_REFRESH: &str = "Restart editor to refresh settings";

pub const RELOAD_HINT: &str = "Run \"Developer: Reload Window\" in VS Code to apply the change.";

/// Message and action for a successful enable.
pub fn for_patch(outcome: PatchOutcome) -> (&'static str, Option<&'static str>) {
    match outcome {
        PatchOutcome::Applied => (ENABLED, Some(RESTART_TO_COMPLETE)),
        PatchOutcome::AlreadyApplied => (ALREADY_ENABLED, Some(RESTART_TO_REFRESH)),
    }
}

/// Message and action for a successful disable.
pub fn for_unpatch(outcome: UnpatchOutcome) -> (&'static str, Option<&'static str>) {
    match outcome {
        UnpatchOutcome::Removed => (DISABLED, Some(RESTART_TO_COMPLETE)),
        UnpatchOutcome::NotApplied => (NOT_RUNNING, None),
    }
}

/// Message for a failed enable.
pub fn for_patch_error(err: &PatchError) -> &'static str {
    match err {
        PatchError::InsufficientPrivileges { .. } => NEEDS_ADMIN,
        PatchError::Asset(_) | PatchError::UnexpectedIo { .. } => ENABLE_FAILED,
    }
}
