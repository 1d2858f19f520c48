//! CLI command definitions.

pub mod items;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the itemstore API.
#[derive(Debug, Parser)]
#[command(name = "itemstore-client")]
#[command(about = "CLI client for the itemstore API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ITEMSTORE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Item management.
    Items(items::ItemsCommand),
    /// Check server liveness.
    Health,
    /// Show the service banner and active store.
    Info,
    /// Run an end-to-end check against a live server.
    Smoke,
}
