//! Patching VS Code's workbench.
//!
//! [`PatchEngine`] writes the rendered script next to `workbench.html` and
//! injects a script tag; [`UnpatchEngine`] takes the tag out again. Both are
//! safe to rerun: the marker check makes the markup edit idempotent and the
//! script is simply overwritten.

mod apply;
pub mod marker;
mod unpatch;

pub use apply::{PatchEngine, PatchOutcome};
pub use marker::MARKER;
pub use unpatch::{UnpatchEngine, UnpatchOutcome};

use std::io;

use crate::install::InstallLayout;

/// Check whether the patch is currently applied to `layout`.
pub fn is_applied(layout: &InstallLayout) -> io::Result<bool> {
    let html = std::fs::read_to_string(layout.html_file())?;
    Ok(marker::is_applied(&html))
}
