use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{AppConfig, ThemeMode};

#[derive(Parser)]
#[command(name = "fluent-patch", version)]
#[command(about = "Apply the Fluent UI theme to a VS Code installation")]
pub struct Cli {
    /// VS Code `resources/app/out` directory
    #[arg(long, global = true, value_name = "PATH")]
    pub install_root: Option<PathBuf>,

    /// Variable set to inject
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Use the compact layout
    #[arg(long, global = true)]
    pub compact: bool,

    /// Turn off backdrop blur filters
    #[arg(long, global = true)]
    pub disable_filters: bool,

    /// Read this config file instead of the default one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reload the editor without asking
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Don't check whether to show the what's new page
    #[arg(long, global = true)]
    pub skip_whats_new: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Inject the theme into VS Code
    Enable,
    /// Remove the theme from VS Code
    Disable,
    /// Show whether the theme is currently injected
    Status,
    /// Open the what's new page
    WhatsNew,
}

impl Cli {
    /// Apply command-line options on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(root) = &self.install_root {
            config.install_root = Some(root.clone());
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.compact {
            config.compact = true;
        }
        if self.disable_filters {
            config.disable_filters = true;
        }
    }
}
