//! Command-line front end for Zoom cloud recordings.
//!
//! Usage:
//! ```bash
//! zoom-recordings list --from 2024-01-01 --to 2024-01-31   # List a page of recordings
//! zoom-recordings download 85746065432 -o recordings/      # Save a meeting's files
//! zoom-recordings delete 85746065432 [--permanent]         # Trash or delete recordings
//! ```
//!
//! The access token comes from `ZOOM_ACCESS_TOKEN` or `zoom-recordings.toml`
//! (see [`config`]). Set `RUST_LOG=debug` to trace every request.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use zoom_recordings::Client;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "zoom-recordings", author, version, about)]
struct Cli {
    /// Path to a config file, bypassing the normal lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Zoom API base URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List a page of cloud recordings
    List(commands::list::ListArgs),

    /// Download a meeting's recording files
    Download(commands::download::DownloadArgs),

    /// Move a meeting's recordings to the trash, or delete them
    Delete(commands::delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    match &cli.command {
        Command::List(args) => commands::list::run(&client, args).await,
        Command::Download(args) => commands::download::run(&client, args).await,
        Command::Delete(args) => commands::delete::run(&client, args).await,
    }
}

/// `RUST_LOG` directives when given, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn build_client(cli: &Cli) -> Result<Client> {
    let config = match config::Config::resolve(cli.config.as_deref())
        .context("failed to load configuration")?
    {
        Some((path, config)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            config
        }
        None => config::Config::default(),
    };

    let credentials = config
        .into_credentials(
            std::env::var(config::ACCESS_TOKEN_ENV).ok(),
            cli.endpoint.clone(),
        )
        .context("failed to resolve credentials")?;

    Client::from_credentials(credentials).context("failed to build Zoom client")
}
