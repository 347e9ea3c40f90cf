//! wifi-tracker CLI Entry Point
//!
//! This is the main entry point for the wifi-tracker command-line tool.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wifi_tracker_cli::{details, keys, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Key(key_cmd) => keys::execute(key_cmd)?,
        Commands::Classify { key } => details::execute_classify(&key)?,
        Commands::Details(args) => details::execute_details(args, cli.config.load()?)?,
        #[cfg(target_os = "linux")]
        Commands::Watch(args) => details::execute_watch(args, cli.config.load()?).await?,
        Commands::Version => {
            println!("wifi-tracker {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
