//! Network details trackers.
//!
//! A tracker owns one network entry and keeps it current while started:
//! it pulls scan results, connection info and hotspot data through a
//! [`WifiPort`], ages results through a [`Clock`], and exposes the entry's
//! [`EntryDetails`].
//!
//! Trackers are created from an opaque entry key with
//! [`create_network_details_tracker`]. The key's grammar picks the variant:
//!
//! ```rust
//! use std::sync::Arc;
//! use wifi_tracker::adapter::SnapshotPort;
//! use wifi_tracker::clock::SystemClock;
//! use wifi_tracker::config::TrackerConfig;
//! use wifi_tracker::key::EntryKind;
//! use wifi_tracker::tracker::{create_network_details_tracker, TrackerDeps};
//!
//! let deps = TrackerDeps::new(
//!     Arc::new(SnapshotPort::new()),
//!     Arc::new(SystemClock),
//!     TrackerConfig::default(),
//! );
//! let key = r#"StandardWifiEntry:{"SCAN_RESULT_KEY":{"SSID":"home","SECURITY_TYPES":[2]}}"#;
//! let tracker = create_network_details_tracker(deps, key).unwrap();
//! assert_eq!(tracker.kind(), EntryKind::Standard);
//! ```
//!
//! Events delivered while a tracker is stopped are dropped.

mod base;
mod hotspot;
mod scheduler;
mod standard;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::clock::Clock;
use crate::config::TrackerConfig;
use crate::domain::connection::WifiState;
use crate::entry::EntryDetails;
use crate::error::TrackerError;
use crate::key::{EntryKey, EntryKind};
use crate::port::WifiPort;

pub use hotspot::HotspotNetworkDetailsTracker;
pub use scheduler::ScanScheduler;
pub use standard::StandardNetworkDetailsTracker;

// ---------------------------------------------------------------------------
// Dependencies and events
// ---------------------------------------------------------------------------

/// Handles every tracker needs.
#[derive(Clone)]
pub struct TrackerDeps {
    pub port: Arc<dyn WifiPort>,
    pub clock: Arc<dyn Clock>,
    pub config: TrackerConfig,
}

impl TrackerDeps {
    pub fn new(port: Arc<dyn WifiPort>, clock: Arc<dyn Clock>, config: TrackerConfig) -> Self {
        Self {
            port,
            clock,
            config,
        }
    }
}

impl fmt::Debug for TrackerDeps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerDeps")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Platform notifications a tracker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    /// A scan round finished. `succeeded` is false when the platform
    /// reported that the scan failed and only stale results exist.
    ScanResultsAvailable { succeeded: bool },
    WifiStateChanged,
    ConnectionChanged,
    HotspotNetworksUpdated,
}

// ---------------------------------------------------------------------------
// NetworkDetailsTracker
// ---------------------------------------------------------------------------

/// A details tracker of either variant.
pub enum NetworkDetailsTracker {
    Standard(StandardNetworkDetailsTracker),
    Hotspot(HotspotNetworkDetailsTracker),
}

impl NetworkDetailsTracker {
    /// Classify `key` and build the matching tracker.
    ///
    /// Nothing is read from the port until [`on_start`](Self::on_start).
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidKey`] if `key` matches neither key grammar.
    pub fn create(deps: TrackerDeps, key: &str) -> Result<Self, TrackerError> {
        let tracker = match EntryKey::parse(key)? {
            EntryKey::Standard(key) => {
                Self::Standard(StandardNetworkDetailsTracker::new(deps, key))
            }
            EntryKey::Hotspot(key) => Self::Hotspot(HotspotNetworkDetailsTracker::new(deps, key)),
        };
        debug!(kind = %tracker.kind(), "created network details tracker");
        Ok(tracker)
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Standard(_) => EntryKind::Standard,
            Self::Hotspot(_) => EntryKind::Hotspot,
        }
    }

    pub fn key(&self) -> EntryKey {
        match self {
            Self::Standard(t) => EntryKey::Standard(t.entry().key().clone()),
            Self::Hotspot(t) => EntryKey::Hotspot(t.entry().key().clone()),
        }
    }

    pub fn on_start(&mut self) {
        match self {
            Self::Standard(t) => t.on_start(),
            Self::Hotspot(t) => t.on_start(),
        }
    }

    pub fn on_stop(&mut self) {
        match self {
            Self::Standard(t) => t.on_stop(),
            Self::Hotspot(t) => t.on_stop(),
        }
    }

    pub fn handle_event(&mut self, event: TrackerEvent) {
        match self {
            Self::Standard(t) => t.handle_event(event),
            Self::Hotspot(t) => t.handle_event(event),
        }
    }

    pub fn is_started(&self) -> bool {
        self.base().is_started()
    }

    /// Last Wi-Fi state read from the port.
    pub fn wifi_state(&self) -> WifiState {
        self.base().wifi_state()
    }

    /// True when started and a scan interval has elapsed since the last
    /// request.
    pub fn scan_due(&self) -> bool {
        self.base().scan_due()
    }

    /// Like [`scan_due`](Self::scan_due), but also records the request so
    /// the next one is a full interval away.
    pub fn take_scan_due(&mut self) -> bool {
        self.base_mut().take_scan_due()
    }

    pub fn details(&self) -> EntryDetails {
        match self {
            Self::Standard(t) => t.details(),
            Self::Hotspot(t) => t.details(),
        }
    }

    fn base(&self) -> &base::TrackerBase {
        match self {
            Self::Standard(t) => t.base(),
            Self::Hotspot(t) => t.base(),
        }
    }

    fn base_mut(&mut self) -> &mut base::TrackerBase {
        match self {
            Self::Standard(t) => t.base_mut(),
            Self::Hotspot(t) => t.base_mut(),
        }
    }
}

/// Build a details tracker for the entry identified by `key`.
///
/// Each call returns a new, independent tracker.
pub fn create_network_details_tracker(
    deps: TrackerDeps,
    key: &str,
) -> Result<NetworkDetailsTracker, TrackerError> {
    NetworkDetailsTracker::create(deps, key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::adapter::SnapshotPort;
    use crate::clock::ManualClock;
    use crate::domain::hotspot::{
        DeviceType, HostNetworkType, HotspotNetwork, NetworkProviderInfo,
    };
    use crate::domain::security::SecurityType;
    use crate::key::{HotspotEntryKey, ScanResultKey, StandardEntryKey};

    const START_MILLIS: u64 = 123_456_789;

    fn deps() -> TrackerDeps {
        TrackerDeps::new(
            Arc::new(SnapshotPort::new()),
            Arc::new(ManualClock::new(START_MILLIS)),
            TrackerConfig::default(),
        )
    }

    fn standard_key() -> String {
        StandardEntryKey::new(ScanResultKey::new(
            "ssid",
            BTreeSet::from([SecurityType::Psk]),
        ))
        .unwrap()
        .to_string()
    }

    fn hotspot_key() -> String {
        let network = HotspotNetwork::builder()
            .device_id(1)
            .network_provider_info(
                NetworkProviderInfo::builder("My Phone", "Pixel 7")
                    .device_type(DeviceType::Phone)
                    .battery_percentage(100)
                    .connection_strength(3)
                    .build(),
            )
            .host_network_type(HostNetworkType::Cellular)
            .network_name("Google Fi")
            .hotspot_ssid("Instant Hotspot abcde")
            .hotspot_bssid("0a:0b:0c:0d:0e:0f")
            .add_hotspot_security_type(SecurityType::Psk)
            .build()
            .unwrap();
        HotspotEntryKey::from_network(&network).to_string()
    }

    #[test]
    fn invalid_key_is_rejected() {
        let err = create_network_details_tracker(deps(), "Invalid Key").err().unwrap();
        assert!(err.is_invalid_key());
    }

    #[test]
    fn standard_key_creates_standard_tracker() {
        let tracker = create_network_details_tracker(deps(), &standard_key()).unwrap();
        assert_eq!(tracker.kind(), EntryKind::Standard);
        assert!(matches!(tracker, NetworkDetailsTracker::Standard(_)));
        assert_eq!(tracker.key().to_string(), standard_key());
    }

    #[test]
    fn hotspot_key_creates_hotspot_tracker() {
        let tracker = create_network_details_tracker(deps(), &hotspot_key()).unwrap();
        assert_eq!(tracker.kind(), EntryKind::Hotspot);
        assert!(matches!(tracker, NetworkDetailsTracker::Hotspot(_)));
    }

    #[test]
    fn each_call_builds_an_independent_tracker() {
        let deps = deps();
        let mut first = create_network_details_tracker(deps.clone(), &standard_key()).unwrap();
        let second = create_network_details_tracker(deps, &standard_key()).unwrap();
        first.on_start();
        assert!(first.is_started());
        assert!(!second.is_started());
    }

    #[test]
    fn construction_does_not_read_the_port() {
        let tracker = create_network_details_tracker(deps(), &standard_key()).unwrap();
        assert_eq!(tracker.wifi_state(), WifiState::Unknown);
        assert!(!tracker.scan_due());
    }

    #[test]
    fn scan_is_due_once_per_interval() {
        let clock = Arc::new(ManualClock::new(START_MILLIS));
        let deps = TrackerDeps::new(
            Arc::new(SnapshotPort::new()),
            clock.clone(),
            TrackerConfig::default(),
        );
        let mut tracker = create_network_details_tracker(deps, &standard_key()).unwrap();
        tracker.on_start();
        assert!(tracker.take_scan_due());
        assert!(!tracker.take_scan_due());
        clock.advance(TrackerConfig::DEFAULT_SCAN_INTERVAL_MS);
        assert!(tracker.scan_due());
        tracker.on_stop();
        assert!(!tracker.scan_due());
    }
}
