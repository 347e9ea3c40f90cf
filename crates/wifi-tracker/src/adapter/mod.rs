//! Adapter implementations for the [`WifiPort`](crate::port::WifiPort) port.
//!
//! - [`LinuxIwScanner`]: runs `iw dev <iface> scan|link|info` (Linux).
//! - [`SnapshotPort`]: in-memory state for tests and replays.
//! - [`parse_iw_scan_output`] / [`parse_iw_link_output`]: portable parsers
//!   for captured `iw` output.

pub mod iw_parser;
pub mod snapshot;

#[cfg(target_os = "linux")]
pub mod linux_scanner;

pub use iw_parser::{parse_iw_link_output, parse_iw_scan_output};
pub use snapshot::SnapshotPort;

#[cfg(target_os = "linux")]
pub use linux_scanner::LinuxIwScanner;
