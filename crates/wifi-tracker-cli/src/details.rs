//! `classify`, `details` and `watch` commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::{ColoredString, Colorize};
use tabled::{settings::Style, Table, Tabled};

use wifi_tracker::{
    create_network_details_tracker, parse_iw_link_output, parse_iw_scan_output, Clock,
    ConnectedState, EntryDetails, EntryKey, SnapshotPort, SystemClock, TrackerConfig, TrackerDeps,
};

#[cfg(target_os = "linux")]
use wifi_tracker::NetworkDetailsTracker;

/// Arguments for the details command
#[derive(Args, Debug)]
pub struct DetailsArgs {
    /// Entry key
    pub key: String,

    /// Captured output of `iw dev <iface> scan`
    #[arg(short, long)]
    pub scan_file: PathBuf,

    /// Captured output of `iw dev <iface> link`
    #[arg(short, long)]
    pub link_file: Option<PathBuf>,

    /// Print details as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the watch command
#[cfg(target_os = "linux")]
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Entry key
    pub key: String,

    /// Wireless interface
    #[arg(short, long, default_value = "wlan0")]
    pub interface: String,

    /// Read cached results with `scan dump` instead of triggering scans
    #[arg(long)]
    pub dump: bool,
}

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Execute the classify command
pub fn execute_classify(key: &str) -> Result<()> {
    let parsed = EntryKey::parse(key).context("classifying key")?;
    println!("{}", parsed.kind());
    Ok(())
}

/// Execute the details command
pub fn execute_details(args: DetailsArgs, config: TrackerConfig) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let port = Arc::new(load_snapshot(
        &args.scan_file,
        args.link_file.as_deref(),
        clock.millis(),
    )?);

    let deps = TrackerDeps::new(port, clock, config);
    let mut tracker = create_network_details_tracker(deps, &args.key).context("creating tracker")?;
    tracker.on_start();
    let details = tracker.details();
    tracker.on_stop();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        print_details(&details);
    }
    Ok(())
}

/// Build a port holding the results parsed from captured `iw` output.
fn load_snapshot(scan_file: &Path, link_file: Option<&Path>, now_millis: u64) -> Result<SnapshotPort> {
    let port = SnapshotPort::new();

    let scan_text = std::fs::read_to_string(scan_file)
        .with_context(|| format!("reading {}", scan_file.display()))?;
    let results = parse_iw_scan_output(&scan_text, now_millis)
        .with_context(|| format!("parsing {}", scan_file.display()))?;
    tracing::debug!(count = results.len(), "loaded scan results");
    port.set_scan_results(results);

    if let Some(path) = link_file {
        let link_text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let connection = parse_iw_link_output(&link_text)
            .with_context(|| format!("parsing {}", path.display()))?;
        port.set_connection(connection);
    }

    Ok(port)
}

fn detail_rows(details: &EntryDetails) -> Vec<DetailRow> {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_owned());
    let security = details
        .security
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        DetailRow { field: "Kind", value: details.kind.to_string() },
        DetailRow { field: "Summary", value: details.summary.clone() },
        DetailRow { field: "Level", value: details.level.to_string() },
        DetailRow { field: "Security", value: security },
        DetailRow { field: "BSSID", value: or_dash(details.bssid.map(|b| b.to_string())) },
        DetailRow {
            field: "Frequency",
            value: or_dash(details.frequency_mhz.map(|f| format!("{f} MHz"))),
        },
        DetailRow { field: "Band", value: or_dash(details.band.map(|b| b.to_string())) },
        DetailRow { field: "Channel", value: or_dash(details.channel.map(|c| c.to_string())) },
        DetailRow {
            field: "Link speed",
            value: or_dash(details.link_speed_mbps.map(|s| format!("{s} Mbps"))),
        },
    ]
}

fn print_details(details: &EntryDetails) {
    let title = if details.title.is_empty() {
        "(unnamed)"
    } else {
        details.title.as_str()
    };
    println!(
        "{} [{}]",
        title.bold().cyan(),
        state_label(details.connected_state)
    );

    let table = Table::new(detail_rows(details)).with(Style::rounded()).to_string();
    println!("{}", table);
}

fn state_label(state: ConnectedState) -> ColoredString {
    match state {
        ConnectedState::Connected => "connected".green(),
        ConnectedState::Connecting => "connecting".yellow(),
        ConnectedState::Disconnected => "disconnected".dimmed(),
    }
}

#[cfg(target_os = "linux")]
fn log_details(tracker: &NetworkDetailsTracker) {
    let details = tracker.details();
    tracing::info!(
        title = %details.title,
        summary = %details.summary,
        level = details.level,
        state = ?details.connected_state,
        "entry updated"
    );
}

/// Execute the watch command
///
/// Rescans whenever the tracker's scan interval elapses and logs the entry
/// each time its details change. Stops on Ctrl-C.
#[cfg(target_os = "linux")]
pub async fn execute_watch(args: WatchArgs, config: TrackerConfig) -> Result<()> {
    use std::time::Duration;

    use wifi_tracker::{LinuxIwScanner, TrackerEvent, WifiPort};

    let mut scanner = LinuxIwScanner::with_interface(args.interface.clone());
    if args.dump {
        scanner = scanner.use_cached();
    }
    let scanner = Arc::new(scanner);
    let port = Arc::new(SnapshotPort::new());

    let deps = TrackerDeps::new(port.clone(), Arc::new(SystemClock), config);
    let mut tracker = create_network_details_tracker(deps, &args.key).context("creating tracker")?;

    println!(
        "{} Watching {} on {} (rescan every {} ms)",
        "[wifi-tracker]".bright_cyan().bold(),
        tracker.kind(),
        args.interface,
        config.scan_interval_ms
    );

    tracker.on_start();
    let mut last = tracker.details();
    log_details(&tracker);

    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("stopping");
                break;
            }
            _ = ticker.tick() => {}
        }

        if !tracker.take_scan_due() {
            continue;
        }

        // `iw` blocks for several seconds while scanning.
        let worker = scanner.clone();
        let (scan, state, link) = tokio::task::spawn_blocking(move || {
            (worker.scan_results(), worker.wifi_state(), worker.connection_info())
        })
        .await
        .context("scan task panicked")?;

        match state {
            Ok(state) => port.set_wifi_state(state),
            Err(error) => tracing::warn!(%error, "failed to read wifi state"),
        }
        match link {
            Ok(connection) => port.set_connection(connection),
            Err(error) => tracing::warn!(%error, "failed to read link"),
        }
        let succeeded = match scan {
            Ok(results) => {
                port.set_scan_results(results);
                true
            }
            Err(error) => {
                tracing::warn!(%error, "scan failed");
                false
            }
        };

        tracker.handle_event(TrackerEvent::WifiStateChanged);
        tracker.handle_event(TrackerEvent::ConnectionChanged);
        tracker.handle_event(TrackerEvent::ScanResultsAvailable { succeeded });

        let details = tracker.details();
        if details != last {
            log_details(&tracker);
            last = details;
        }
    }

    tracker.on_stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCAN: &str = "\
BSS 00:11:22:33:44:55(on wlan0)
\tfreq: 5180
\tsignal: -52.00 dBm
\tlast seen: 0 ms ago
\tSSID: home
\tcapability: ESS Privacy (0x0011)
\tRSN:\t * Version: 1
\t\t * Authentication suites: PSK
";

    const LINK: &str = "\
Connected to 00:11:22:33:44:55 (on wlan0)
\tSSID: home
\tfreq: 5180
\tsignal: -52 dBm
\ttx bitrate: 866.7 MBit/s
";

    const KEY: &str = r#"StandardWifiEntry:{"SCAN_RESULT_KEY":{"SSID":"home","SECURITY_TYPES":[2]}}"#;

    #[test]
    fn replayed_capture_drives_tracker() {
        let dir = tempfile::tempdir().unwrap();
        let scan_path = dir.path().join("scan.txt");
        let link_path = dir.path().join("link.txt");
        std::fs::write(&scan_path, SCAN).unwrap();
        std::fs::write(&link_path, LINK).unwrap();

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let port = load_snapshot(&scan_path, Some(&link_path), clock.millis()).unwrap();
        let deps = TrackerDeps::new(Arc::new(port), clock, TrackerConfig::default());
        let mut tracker = create_network_details_tracker(deps, KEY).unwrap();
        tracker.on_start();

        let details = tracker.details();
        assert_eq!(details.title, "home");
        assert_eq!(details.connected_state, ConnectedState::Connected);
        assert_eq!(details.level, 4);
        assert_eq!(details.frequency_mhz, Some(5180));

        let rows = detail_rows(&details);
        assert!(rows.iter().any(|r| r.field == "Band" && r.value == "5 GHz"));
        assert!(rows.iter().any(|r| r.field == "Channel" && r.value == "36"));
    }

    #[test]
    fn every_connection_state_has_a_label() {
        assert_eq!(&*state_label(ConnectedState::Connected), "connected");
        assert_eq!(&*state_label(ConnectedState::Connecting), "connecting");
        assert_eq!(&*state_label(ConnectedState::Disconnected), "disconnected");
    }

    #[test]
    fn missing_scan_file_is_an_error() {
        let err = load_snapshot(Path::new("/nonexistent/scan.txt"), None, 0).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }

    #[test]
    fn classify_rejects_invalid_key() {
        assert!(execute_classify("Invalid Key").is_err());
    }
}
