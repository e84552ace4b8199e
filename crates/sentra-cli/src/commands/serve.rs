//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sentra_core::SentraConfig;
use sentra_web::state::AppState;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SENTRA_PORT")]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "SENTRA_HOST")]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to sentra.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut SentraConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

pub async fn execute(args: ServeArgs, mut config: SentraConfig) -> Result<()> {
    args.apply(&mut config);

    // Artifacts must load before the socket is bound.
    let state = AppState::load(&config.models).context("Failed to load analysis models")?;

    let addr = config.bind_addr();
    println!();
    println!("  {} {}", "Sentra".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}/sentimentanalysis?text=", "Sentiment".green(), addr);
    println!("  {}   http://{}/toxicity?text=", "Toxicity".green(), addr);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    info!(addr = %addr, "Starting server");
    sentra_web::run_server(state, &addr).await?;

    Ok(())
}
