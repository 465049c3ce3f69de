use clap::Parser;
use tracing_subscriber::EnvFilter;

use wifi_relay::cli::{Cli, Commands};
use wifi_relay::dirs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dirs::ensure_dirs()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            wifi_relay::cli::serve::execute(&host, port).await?;
        }
        Commands::Check => {
            wifi_relay::cli::check::execute().await?;
        }
    }

    Ok(())
}
