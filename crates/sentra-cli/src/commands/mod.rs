//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod serve;

/// Sentra - sentiment and toxicity analysis API
#[derive(Parser)]
#[command(name = "sentra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "SENTRA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Score the sentiment of a text
    Sentiment(analyze::AnalyzeArgs),

    /// Classify a text as toxic or non-toxic
    Toxicity(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = sentra_core::SentraConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Sentiment(args) => analyze::sentiment(args, &config),
            Commands::Toxicity(args) => analyze::toxicity(args, &config),
        }
    }
}
