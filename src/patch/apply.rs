//! Applying the theme to a VS Code installation.

use std::fs;

use tracing::{debug, info};

use super::marker;
use crate::error::PatchError;
use crate::install::InstallLayout;
use crate::template::RenderedScript;

/// Result of a successful [`PatchEngine::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The marker was inserted into the workbench markup.
    Applied,
    /// The marker was already there; only the script was refreshed.
    AlreadyApplied,
}

/// Writes the rendered script and injects the marker into the workbench.
pub struct PatchEngine<'a> {
    layout: &'a InstallLayout,
}

impl<'a> PatchEngine<'a> {
    pub fn new(layout: &'a InstallLayout) -> Self {
        Self { layout }
    }

    /// Apply the patch.
    ///
    /// The script file is always overwritten. The markup is only rewritten
    /// when the marker is missing, so running this twice leaves the files
    /// exactly as the first run did.
    pub fn apply(&self, script: &RenderedScript) -> Result<PatchOutcome, PatchError> {
        let script_path = self.layout.script_file();
        fs::write(&script_path, script.as_str())
            .map_err(|e| PatchError::from_io(&script_path, e))?;
        debug!("Wrote theme script to {:?}", script_path);

        let html_path = self.layout.html_file();
        let html =
            fs::read_to_string(&html_path).map_err(|e| PatchError::from_io(&html_path, e))?;

        if marker::is_applied(&html) {
            info!("Marker already present in {:?}", html_path);
            return Ok(PatchOutcome::AlreadyApplied);
        }

        fs::write(&html_path, marker::insert(&html))
            .map_err(|e| PatchError::from_io(&html_path, e))?;
        info!("Injected marker into {:?}", html_path);

        Ok(PatchOutcome::Applied)
    }
}
