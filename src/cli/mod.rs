//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for clinedit using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// clinedit - clinical report editing core
#[derive(Parser, Debug)]
#[command(name = "clinedit")]
#[command(version, about, long_about = None)]
#[command(author = "ClinEdit Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "clinedit.toml", env = "CLINEDIT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINEDIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the treatment preview from a report snapshot
    Preview(commands::preview::PreviewArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
