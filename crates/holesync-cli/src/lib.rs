//! # holesync-cli
//!
//! Command-line interface around the holesync engine:
//!
//! - **sync**: run one cycle and print the structured result
//! - **status**: pre-flight rate-limit check
//! - **check**: validate the YAML configuration
//! - **run**: interval scheduler with Slack error notification

pub mod cli;

pub use cli::run;
