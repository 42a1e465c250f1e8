//! Embedded assets for fluent-patch.
//!
//! The style bundle, the script template and the "what's new" page ship inside
//! the binary. A user directory can override individual files; anything not
//! found there falls back to the bundled copy.

use rust_embed::RustEmbed;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// Bundled assets shipped with fluent-patch.
#[derive(RustEmbed)]
#[folder = "assets"]
struct BundledAssets;

/// Names of the assets consumed by the patcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    LightVars,
    DarkVars,
    ChromeStyles,
    ScriptTemplate,
    WhatsNewPage,
}

impl Asset {
    /// Get the path of this asset relative to the asset root.
    pub fn path(self) -> &'static str {
        match self {
            Self::LightVars => "css/light_vars.css",
            Self::DarkVars => "css/dark_vars.css",
            Self::ChromeStyles => "css/editor_chrome.css",
            Self::ScriptTemplate => "js/theme_template.js",
            Self::WhatsNewPage => "whats-new/index.html",
        }
    }
}

/// Source of asset text.
#[derive(Debug, Clone)]
pub struct AssetStore {
    override_dir: Option<PathBuf>,
    use_bundled: bool,
}

impl AssetStore {
    /// Serve only the bundled assets.
    pub fn bundled() -> Self {
        Self {
            override_dir: None,
            use_bundled: true,
        }
    }

    /// Serve files from `dir` first, falling back to the bundled assets.
    pub fn layered(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
            use_bundled: true,
        }
    }

    /// Serve files from `dir` only.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
            use_bundled: false,
        }
    }

    /// Load an asset as UTF-8 text.
    pub fn load(&self, asset: Asset) -> Result<String, AssetError> {
        let name = asset.path();

        if let Some(dir) = &self.override_dir
            && let Some(content) = read_override(dir, name)?
        {
            tracing::debug!("Loaded asset '{}' from {:?}", name, dir);
            return Ok(content);
        }

        if self.use_bundled
            && let Some(file) = BundledAssets::get(name)
        {
            return String::from_utf8(file.data.into_owned()).map_err(|e| {
                AssetError::Unreadable {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
            });
        }

        Err(AssetError::NotFound(name.to_string()))
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Read `name` under `dir`, returning `None` when the file does not exist.
fn read_override(dir: &Path, name: &str) -> Result<Option<String>, AssetError> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AssetError::Unreadable {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bundled_assets_present() {
        let store = AssetStore::bundled();
        for asset in [
            Asset::LightVars,
            Asset::DarkVars,
            Asset::ChromeStyles,
            Asset::ScriptTemplate,
            Asset::WhatsNewPage,
        ] {
            let content = store.load(asset).unwrap();
            assert!(!content.is_empty(), "{} is empty", asset.path());
        }
    }

    #[test]
    fn test_bundled_template_has_placeholders() {
        let template = AssetStore::bundled().load(Asset::ScriptTemplate).unwrap();
        for token in ["[DISABLE_FILTERS]", "[IS_COMPACT]", "[CHROME_STYLES]", "[VARS]"] {
            assert!(template.contains(token), "missing {}", token);
        }
    }

    #[test]
    fn test_override_wins_over_bundled() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/dark_vars.css"), ":root { --x: 1; }").unwrap();

        let store = AssetStore::layered(dir.path());
        assert_eq!(store.load(Asset::DarkVars).unwrap(), ":root { --x: 1; }");
        // Not overridden, comes from the bundle
        assert!(store.load(Asset::LightVars).unwrap().contains("--fluent-"));
    }

    #[test]
    fn test_directory_only_reports_missing() {
        let dir = tempdir().unwrap();
        let store = AssetStore::directory(dir.path());
        let err = store.load(Asset::ChromeStyles).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(name) if name == "css/editor_chrome.css"));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/light_vars.css"), [0xff, 0xfe, 0x00]).unwrap();

        let err = AssetStore::directory(dir.path())
            .load(Asset::LightVars)
            .unwrap_err();
        assert!(matches!(err, AssetError::Unreadable { .. }));
    }
}
