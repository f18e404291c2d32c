//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replicate Pi-hole configuration from a master instance to its
/// slaves
#[derive(Parser)]
#[command(name = "holesync", version, about)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml", env = "HOLESYNC_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one sync cycle and print the result as JSON
    Sync,

    /// Show whether a cycle may run now and when the last one finished
    Status,

    /// Validate the configuration file
    Check,

    /// Keep syncing on a fixed interval until interrupted
    Run {
        /// Seconds between scheduled cycles
        #[arg(long, default_value_t = 300)]
        interval: u64,
    },
}
