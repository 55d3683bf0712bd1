//! Laser Games - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use laser_games::{AppConfig, Cli, Command, run_script, tui};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config, seed } => {
            let config = AppConfig::load(config.as_deref(), seed)?;
            init_file_logging(config.log_file())?;
            tui::run_tui(config).await
        }
        Command::Play {
            moves,
            config,
            seed,
        } => {
            init_stderr_logging();
            let config = AppConfig::load(config.as_deref(), seed)?;
            let status = run_script(&config, &moves, &mut std::io::stdout().lock())?;
            info!(%status, "Done");
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file so the TUI screen stays clean.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
