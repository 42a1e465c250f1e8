//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Turn off the backdrop blur filters in the injected styles.
    pub disable_filters: bool,
    /// Use the compact layout.
    pub compact: bool,
    /// Which variable set to inject.
    pub theme: ThemeMode,
    /// When to show the "what's new" page after an update.
    pub whats_new: WhatsNewPolicy,
    /// VS Code `resources/app/out` directory. Detected when unset.
    pub install_root: Option<PathBuf>,
    /// Directory whose files override the bundled assets.
    pub assets_dir: Option<PathBuf>,
    /// Shell command run when the user accepts a reload.
    pub reload_command: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            disable_filters: false,
            compact: false,
            theme: ThemeMode::Dark,
            whats_new: WhatsNewPolicy::Always,
            install_root: None,
            assets_dir: None,
            reload_command: None,
        }
    }
}

/// Color scheme of the injected variables.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Which version bumps bring up the "what's new" page again.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WhatsNewPolicy {
    /// Every activation.
    #[default]
    Always,
    /// Major or minor bumps.
    Minor,
    /// Major bumps only.
    Major,
    /// Only on first run.
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.disable_filters);
        assert!(!config.compact);
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            disable_filters = true
            compact = true
            theme = "light"
            whats_new = "minor"
            install_root = "/opt/code/resources/app/out"
            reload_command = "code --reuse-window"
            "#,
        )
        .unwrap();

        assert!(config.disable_filters);
        assert!(config.compact);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.whats_new, WhatsNewPolicy::Minor);
        assert_eq!(
            config.install_root,
            Some(PathBuf::from("/opt/code/resources/app/out"))
        );
        assert_eq!(config.reload_command.as_deref(), Some("code --reuse-window"));
        assert_eq!(config.assets_dir, None);
    }

    #[test]
    fn test_reject_non_bool_flag() {
        let result = toml::from_str::<AppConfig>("compact = \"yes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_unknown_theme() {
        let result = toml::from_str::<AppConfig>("theme = \"sepia\"");
        assert!(result.is_err());
    }
}
