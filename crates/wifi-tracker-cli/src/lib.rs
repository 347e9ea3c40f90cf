//! wifi-tracker CLI
//!
//! Command-line interface for building entry keys and inspecting the
//! details a tracker derives for them.
//!
//! # Usage
//!
//! ```bash
//! # Build a key for a WPA2 network
//! wifi-tracker key standard --ssid home --security psk
//!
//! # Tell which tracker a key selects
//! wifi-tracker classify 'StandardWifiEntry:{...}'
//!
//! # Replay captured `iw` output through a tracker
//! wifi-tracker details 'StandardWifiEntry:{...}' --scan-file scan.txt --link-file link.txt
//!
//! # Follow an entry live (Linux)
//! wifi-tracker watch 'StandardWifiEntry:{...}' --interface wlp2s0
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use wifi_tracker::TrackerConfig;

pub mod details;
pub mod keys;

/// wifi-tracker Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "wifi-tracker")]
#[command(author, version, about = "Wi-Fi network entry keys and details tracking")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build entry keys
    #[command(subcommand)]
    Key(keys::KeyCommand),

    /// Print which tracker variant a key selects
    Classify {
        /// Entry key
        key: String,
    },

    /// Replay captured `iw` output through a tracker and print the entry
    Details(details::DetailsArgs),

    /// Track an entry live using `iw`
    #[cfg(target_os = "linux")]
    Watch(details::WatchArgs),

    /// Display version information
    Version,
}

/// Tracker timing options shared by all commands.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON file with tracker configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the maximum scan result age in milliseconds
    #[arg(long, global = true)]
    pub max_scan_age_ms: Option<u64>,

    /// Override the scan interval in milliseconds
    #[arg(long, global = true)]
    pub scan_interval_ms: Option<u64>,
}

impl ConfigArgs {
    /// Load the configuration file if given, then apply overrides.
    pub fn load(&self) -> Result<TrackerConfig> {
        let mut config = match &self.config {
            Some(path) => TrackerConfig::from_json(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => TrackerConfig::default(),
        };
        if let Some(ms) = self.max_scan_age_ms {
            config.max_scan_age_ms = ms;
        }
        if let Some(ms) = self.scan_interval_ms {
            config.scan_interval_ms = ms;
        }
        config.validate().context("invalid tracker configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.json");
        std::fs::write(&path, r#"{"max_scan_age_ms": 30000, "scan_interval_ms": 5000}"#).unwrap();

        let args = ConfigArgs {
            config: Some(path),
            max_scan_age_ms: None,
            scan_interval_ms: Some(2_000),
        };
        let config = args.load().unwrap();
        assert_eq!(config.max_scan_age_ms, 30_000);
        assert_eq!(config.scan_interval_ms, 2_000);
    }

    #[test]
    fn zero_override_is_rejected() {
        let args = ConfigArgs {
            max_scan_age_ms: Some(0),
            ..ConfigArgs::default()
        };
        assert!(args.load().is_err());
    }

    #[test]
    fn cli_parses_classify() {
        let cli = Cli::try_parse_from(["wifi-tracker", "classify", "Invalid Key"]).unwrap();
        assert!(matches!(cli.command, Commands::Classify { key } if key == "Invalid Key"));
    }
}
