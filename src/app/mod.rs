//! Command dispatch.
//!
//! Everything a command needs travels in an explicit [`Context`] built once
//! from the configuration and the command line.

mod commands;
mod init;

pub use commands::{CommandStatus, activate, disable, enable, show_whats_new, status};
pub use init::init_logging;

use std::path::PathBuf;

use crate::assets::AssetStore;
use crate::cli::Commands;
use crate::config::{AppConfig, WhatsNewPolicy};
use crate::notify::{ConsoleHost, HostUi, Notifier};
use crate::state::StateStore;
use crate::template::RenderOptions;
use crate::whats_new;

/// Inputs shared by all commands.
pub struct Context<H> {
    pub options: RenderOptions,
    pub install_root: Option<PathBuf>,
    pub assets: AssetStore,
    pub whats_new: WhatsNewPolicy,
    /// Version of the running binary.
    pub version: String,
    pub state_path: PathBuf,
    pub view_path: PathBuf,
    pub notifier: Notifier<H>,
}

impl<H: HostUi> Context<H> {
    /// Build a context from `config` around the given UI host.
    pub fn new(config: &AppConfig, host: H) -> Self {
        let fallback_dir = std::env::temp_dir().join("fluent-patch");

        let assets = match &config.assets_dir {
            Some(dir) => AssetStore::layered(dir),
            None => AssetStore::bundled(),
        };

        Self {
            options: RenderOptions {
                disable_filters: config.disable_filters,
                compact: config.compact,
                theme: config.theme,
            },
            install_root: config.install_root.clone(),
            assets,
            whats_new: config.whats_new,
            version: env!("CARGO_PKG_VERSION").to_string(),
            state_path: StateStore::default_path()
                .unwrap_or_else(|| fallback_dir.join("state.json")),
            view_path: whats_new::default_view_path()
                .unwrap_or_else(|| fallback_dir.join("whats-new.html")),
            notifier: Notifier::new(host),
        }
    }
}

impl Context<ConsoleHost> {
    /// Context for the terminal.
    pub fn console(config: &AppConfig, assume_yes: bool) -> Self {
        let host = ConsoleHost::new(assume_yes, config.reload_command.clone());
        Self::new(config, host)
    }
}

/// Run one command, with activation first unless skipped.
pub fn run<H: HostUi>(ctx: &Context<H>, command: &Commands, skip_whats_new: bool) -> CommandStatus {
    if !skip_whats_new && !matches!(command, Commands::WhatsNew) {
        activate(ctx);
    }

    match command {
        Commands::Enable => enable(ctx),
        Commands::Disable => disable(ctx),
        Commands::Status => status(ctx),
        Commands::WhatsNew => show_whats_new(ctx),
    }
}
