//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use rifa_core::error::AppError;

/// Rifa — raffle ticket sales backend
#[derive(Debug, Parser)]
#[command(name = "rifa", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Rifa server
    Serve(serve::ServeArgs),
    /// Run pending database migrations
    Migrate(migrate::MigrateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<rifa_core::config::AppConfig, AppError> {
    rifa_core::config::AppConfig::load(config_path)
}
