use std::process::ExitCode;

use clap::Parser;
use fluent_patch::app::{self, Context};
use fluent_patch::cli::Cli;
use fluent_patch::config::load_config;

fn main() -> ExitCode {
    app::init_logging();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref());
    cli.apply_overrides(&mut config);
    tracing::debug!(?config, "Effective configuration");

    let ctx = Context::console(&config, cli.yes);
    app::run(&ctx, &cli.command, cli.skip_whats_new).into()
}
