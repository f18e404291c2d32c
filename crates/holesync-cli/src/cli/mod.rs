//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use holesync_engine::config::{Config, Logging};
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    init_tracing(&config.logging);
    config.validate()?;

    match cli.command {
        Commands::Sync => commands::sync::execute(config).await,
        Commands::Status => commands::status::execute(&config),
        Commands::Check => commands::check::execute(&config, &cli.config),
        Commands::Run { interval } => commands::run::execute(config, interval).await,
    }
}

/// Initialize tracing from the config's logging section.
/// `RUST_LOG` wins when set.
fn init_tracing(logging: &Logging) {
    let level = if logging.debug {
        "debug"
    } else {
        match logging.level.to_uppercase().as_str() {
            "DEBUG" => "debug",
            "WARN" | "WARNING" => "warn",
            "ERROR" => "error",
            _ => "info",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
