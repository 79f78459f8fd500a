//! scpayroll library root.
//! Exposes the CLI parser, the period workflow engine, persistence and export.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Staff { .. } => c::staff::handle(&cli.command, cfg),
        Commands::Entry { .. } => c::entry::handle(&cli.command, cfg),
        Commands::Show { .. } => c::show::handle(&cli.command, cfg),
        Commands::Submit { .. }
        | Commands::Approve { .. }
        | Commands::Return { .. }
        | Commands::Revoke { .. } => c::workflow::handle(&cli.command, cfg),
        Commands::Review { .. } => c::review::handle(&cli.command, cfg),
        Commands::Holidays { .. } => c::holidays::handle(&cli.command),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
        Commands::Link { .. } => c::link::handle(&cli.command, cfg),
        Commands::Snapshot { .. } => c::snapshot::handle(&cli.command, cfg),
    }
}

/// Install the diagnostic subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(cfg: &Config) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level.as_str()));

    // a second install (tests, embedding) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    init_tracing(&cfg);
    tracing::debug!(database = %cfg.database, "configuration loaded");

    dispatch(&cli, &cfg)
}
