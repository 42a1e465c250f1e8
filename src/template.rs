//! Rendering of the injected theme script.
//!
//! The script template carries four placeholders. Two take JS boolean
//! literals, the other two take the chrome styles and the theme variables.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::assets::{Asset, AssetStore};
use crate::config::ThemeMode;
use crate::error::AssetError;

pub const DISABLE_FILTERS: &str = "[DISABLE_FILTERS]";
pub const IS_COMPACT: &str = "[IS_COMPACT]";
pub const CHROME_STYLES: &str = "[CHROME_STYLES]";
pub const VARS: &str = "[VARS]";

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\[(DISABLE_FILTERS|IS_COMPACT|CHROME_STYLES|VARS)\]")
            .expect("placeholder pattern is valid")
    })
}

/// Options that change the rendered script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub disable_filters: bool,
    pub compact: bool,
    pub theme: ThemeMode,
}

/// The three style assets feeding one render.
#[derive(Debug, Clone)]
pub struct StyleBundle {
    pub vars: String,
    pub chrome: String,
}

impl StyleBundle {
    /// Load the variable set for `theme` and the chrome styles.
    pub fn load(assets: &AssetStore, theme: ThemeMode) -> Result<Self, AssetError> {
        let vars = match theme {
            ThemeMode::Dark => assets.load(Asset::DarkVars)?,
            ThemeMode::Light => assets.load(Asset::LightVars)?,
        };
        let chrome = assets.load(Asset::ChromeStyles)?;
        Ok(Self { vars, chrome })
    }
}

/// A fully substituted script, ready to be written next to the workbench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScript(String);

impl RenderedScript {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders the theme script from the asset store.
pub struct TemplateRenderer<'a> {
    assets: &'a AssetStore,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(assets: &'a AssetStore) -> Self {
        Self { assets }
    }

    /// Load every source asset and produce the final script.
    ///
    /// Fails before producing anything if one of the assets is missing, so no
    /// file is touched on an incomplete install.
    pub fn render(&self, options: RenderOptions) -> Result<RenderedScript, AssetError> {
        let styles = StyleBundle::load(self.assets, options.theme)?;
        let template = self.assets.load(Asset::ScriptTemplate)?;
        Ok(substitute(&template, &styles, options))
    }
}

/// Replace every placeholder in `template` in a single pass.
///
/// Inserted text is never rescanned, so a stylesheet that happens to contain
/// a placeholder name cannot be substituted a second time.
pub fn substitute(template: &str, styles: &StyleBundle, options: RenderOptions) -> RenderedScript {
    for token in [DISABLE_FILTERS, IS_COMPACT, CHROME_STYLES, VARS] {
        if !template.contains(token) {
            tracing::warn!("Script template has no {} placeholder", token);
        }
    }

    let rendered = placeholder_regex().replace_all(template, |caps: &Captures| {
        match &caps[1] {
            "DISABLE_FILTERS" => options.disable_filters.to_string(),
            "IS_COMPACT" => options.compact.to_string(),
            "CHROME_STYLES" => styles.chrome.clone(),
            _ => styles.vars.clone(),
        }
    });

    RenderedScript(rendered.into_owned())
}
