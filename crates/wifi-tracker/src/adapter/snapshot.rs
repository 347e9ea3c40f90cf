//! In-memory [`WifiPort`] holding whatever state it was last given.
//!
//! Tests drive trackers through it, and the CLI uses it to replay captured
//! `iw` output or to bridge results produced on a background task.

use parking_lot::RwLock;

use crate::domain::connection::{ConnectionInfo, WifiState};
use crate::domain::hotspot::HotspotNetwork;
use crate::domain::scan_result::ScanResult;
use crate::error::ScanError;
use crate::port::WifiPort;

#[derive(Debug, Clone)]
struct Snapshot {
    scan_results: Vec<ScanResult>,
    wifi_state: WifiState,
    connection: Option<ConnectionInfo>,
    hotspot_networks: Vec<HotspotNetwork>,
    /// Error to return from the next `scan_results` call.
    next_scan_error: Option<ScanError>,
}

/// Port backed by a mutable snapshot.
///
/// Starts enabled, with no scan results and no connection.
#[derive(Debug)]
pub struct SnapshotPort {
    inner: RwLock<Snapshot>,
}

impl SnapshotPort {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Snapshot {
                scan_results: Vec::new(),
                wifi_state: WifiState::Enabled,
                connection: None,
                hotspot_networks: Vec::new(),
                next_scan_error: None,
            }),
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut Snapshot) -> R) -> R {
        f(&mut self.inner.write())
    }

    fn read<R>(&self, f: impl FnOnce(&Snapshot) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn set_scan_results(&self, results: Vec<ScanResult>) {
        self.write(|s| s.scan_results = results);
    }

    pub fn set_wifi_state(&self, state: WifiState) {
        self.write(|s| s.wifi_state = state);
    }

    pub fn set_connection(&self, connection: Option<ConnectionInfo>) {
        self.write(|s| s.connection = connection);
    }

    pub fn set_hotspot_networks(&self, networks: Vec<HotspotNetwork>) {
        self.write(|s| s.hotspot_networks = networks);
    }

    /// Make the next `scan_results` call fail with `error`.
    pub fn fail_next_scan(&self, error: ScanError) {
        self.write(|s| s.next_scan_error = Some(error));
    }
}

impl Default for SnapshotPort {
    fn default() -> Self {
        Self::new()
    }
}

impl WifiPort for SnapshotPort {
    fn scan_results(&self) -> Result<Vec<ScanResult>, ScanError> {
        self.write(|s| match s.next_scan_error.take() {
            Some(err) => Err(err),
            None => Ok(s.scan_results.clone()),
        })
    }

    fn wifi_state(&self) -> Result<WifiState, ScanError> {
        Ok(self.read(|s| s.wifi_state))
    }

    fn connection_info(&self) -> Result<Option<ConnectionInfo>, ScanError> {
        Ok(self.read(|s| s.connection.clone()))
    }

    fn hotspot_networks(&self) -> Result<Vec<HotspotNetwork>, ScanError> {
        Ok(self.read(|s| s.hotspot_networks.clone()))
    }
}
