//! opcheck CLI
//!
//! Command-line entry point for running the operation service suite.

mod commands;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use opcheck_client::PollConfig;
use opcheck_suite::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "opcheck")]
#[command(about = "End-to-end checks for the operation service", long_about = None)]
struct Cli {
    /// Operation service URL
    #[arg(long, env = "OPCHECK_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "OPCHECK_TIMEOUT", default_value_t = 100)]
    timeout: u64,

    /// Bearer token sent with every request
    #[arg(long, env = "OPCHECK_AUTH_TOKEN")]
    auth_token: Option<String>,

    /// Status fetches per poll before giving up
    #[arg(long, env = "OPCHECK_MAX_RETRIES", default_value_t = 10)]
    max_retries: u32,

    /// Seconds to wait between status fetches
    #[arg(long, env = "OPCHECK_RETRY_DELAY", default_value_t = 3)]
    retry_delay: u64,

    /// Seed for fake payloads, for reproducible runs
    #[arg(long, env = "OPCHECK_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opcheck_suite=info,opcheck_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
        auth_token: cli.auth_token,
        poll: PollConfig::new(cli.max_retries, Duration::from_secs(cli.retry_delay)),
        seed: cli.seed,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
