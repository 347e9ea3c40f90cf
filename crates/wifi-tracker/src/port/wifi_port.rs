//! The primary port (driving side) for Wi-Fi state.

use crate::domain::connection::{ConnectionInfo, WifiState};
use crate::domain::hotspot::HotspotNetwork;
use crate::domain::scan_result::ScanResult;
use crate::error::ScanError;

/// Port that abstracts the platform Wi-Fi backend.
///
/// Implementations include:
/// - [`crate::adapter::LinuxIwScanner`] -- subprocess-based, Linux only.
/// - [`crate::adapter::SnapshotPort`] -- in-memory, for tests and replays.
pub trait WifiPort: Send + Sync {
    /// Return the scan results the backend currently holds.
    fn scan_results(&self) -> Result<Vec<ScanResult>, ScanError>;

    /// Return the radio power state.
    fn wifi_state(&self) -> Result<WifiState, ScanError>;

    /// Return the network the station is associated with, if any.
    fn connection_info(&self) -> Result<Option<ConnectionInfo>, ScanError>;

    /// Return hotspots offered by nearby devices.
    ///
    /// Backends without a device-sharing channel report none.
    fn hotspot_networks(&self) -> Result<Vec<HotspotNetwork>, ScanError> {
        Ok(Vec::new())
    }
}
