//! The "what's new" page.
//!
//! The bundled page carries a `</version>` placeholder. The rendered copy is
//! written to the data directory and opened from there.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::{Asset, AssetStore};
use crate::notify::HostUi;

pub const VIEW_TITLE: &str = "What's new for Fluent UI";

const VERSION_PLACEHOLDER: &str = "</version>";

/// Replace every version placeholder in `page`.
pub fn render(page: &str, version: &str) -> String {
    page.replace(VERSION_PLACEHOLDER, &format!("\t<span>{}</span>\n", version))
}

/// Where the rendered page is written.
pub fn default_view_path() -> Option<PathBuf> {
    crate::state::data_dir().map(|dir| dir.join("whats-new.html"))
}

/// Render the page for `version`, write it to `view_path` and show it.
pub fn show(
    host: &impl HostUi,
    assets: &AssetStore,
    version: &str,
    view_path: &Path,
) -> anyhow::Result<()> {
    let page = assets.load(Asset::WhatsNewPage)?;

    if let Some(parent) = view_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }
    std::fs::write(view_path, render(&page, version))
        .with_context(|| format!("Failed to write {:?}", view_path))?;

    host.show_view(VIEW_TITLE, view_path)
}
