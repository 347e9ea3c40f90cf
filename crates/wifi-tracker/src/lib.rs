//! # wifi-tracker
//!
//! Network details tracking for Wi-Fi entries.
//!
//! An entry is named by an opaque key string in one of two grammars, a
//! standard network (`StandardWifiEntry:{...}`) or a hotspot offered by a
//! nearby device (`HotspotNetworkEntry:{...}`). This crate provides:
//!
//! - **Domain types**: [`BssidId`], [`ScanResult`], [`SecurityType`],
//!   [`ConnectionInfo`], [`HotspotNetwork`]
//! - **Keys**: [`EntryKey`] -- classification and round-tripping of key strings
//! - **Entries**: [`StandardWifiEntry`], [`HotspotNetworkEntry`]
//! - **Trackers**: [`create_network_details_tracker`] -- builds the tracker
//!   variant matching a key
//! - **Port**: [`WifiPort`] -- trait abstracting the platform Wi-Fi backend
//! - **Adapters**: [`SnapshotPort`] and, on Linux, `LinuxIwScanner` which
//!   parses `iw` output

pub mod adapter;
pub mod clock;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod key;
pub mod port;
pub mod scan_cache;
pub mod tracker;

// Re-export key types at the crate root for convenience.
pub use adapter::{parse_iw_link_output, parse_iw_scan_output, SnapshotPort};
#[cfg(target_os = "linux")]
pub use adapter::LinuxIwScanner;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TrackerConfig;
pub use domain::{
    BandType, BssidId, ConnectionInfo, HostNetworkType, HotspotNetwork, NetworkProviderInfo,
    ScanResult, SecurityType, WifiState,
};
pub use entry::{ConnectedState, EntryDetails, HotspotNetworkEntry, StandardWifiEntry};
pub use error::{ConfigError, ScanError, TrackerError, TrackerResult};
pub use key::{EntryKey, EntryKind, HotspotEntryKey, ScanResultKey, StandardEntryKey};
pub use port::WifiPort;
pub use scan_cache::ScanResultCache;
pub use tracker::{
    create_network_details_tracker, NetworkDetailsTracker, TrackerDeps, TrackerEvent,
};
