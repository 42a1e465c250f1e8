//! Removing the theme from a VS Code installation.

use std::fs;

use tracing::info;

use super::marker;
use crate::error::UnpatchError;
use crate::install::InstallLayout;

/// Result of a successful [`UnpatchEngine::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpatchOutcome {
    /// The marker was found and stripped.
    Removed,
    /// No marker was present; nothing was written.
    NotApplied,
}

/// Strips the marker from the workbench markup.
pub struct UnpatchEngine<'a> {
    layout: &'a InstallLayout,
}

impl<'a> UnpatchEngine<'a> {
    pub fn new(layout: &'a InstallLayout) -> Self {
        Self { layout }
    }

    /// Remove the patch. The rendered script file is left in place.
    pub fn remove(&self) -> Result<UnpatchOutcome, UnpatchError> {
        let html_path = self.layout.html_file();
        let html = fs::read_to_string(&html_path).map_err(|source| UnpatchError::Failed {
            path: html_path.clone(),
            source,
        })?;

        if !marker::is_applied(&html) {
            return Ok(UnpatchOutcome::NotApplied);
        }

        fs::write(&html_path, marker::remove(&html)).map_err(|source| UnpatchError::Failed {
            path: html_path.clone(),
            source,
        })?;
        info!("Removed marker from {:?}", html_path);

        Ok(UnpatchOutcome::Removed)
    }
}
