pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};

/// WiFi relay - guest WiFi activation via the router's management interface
#[derive(Debug, Parser)]
#[command(name = "wifi-relay", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP relay server
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },

    /// Attempt one login against the configured router and report
    Check,
}
