//! Details tracker for a hotspot offered by a nearby device.

use tracing::debug;

use super::base::TrackerBase;
use super::{TrackerDeps, TrackerEvent};
use crate::domain::connection::WifiState;
use crate::entry::{EntryDetails, HotspotNetworkEntry};
use crate::key::HotspotEntryKey;

/// Keeps a [`HotspotNetworkEntry`] current from provider updates, scans and
/// connection changes.
pub struct HotspotNetworkDetailsTracker {
    base: TrackerBase,
    entry: HotspotNetworkEntry,
}

impl HotspotNetworkDetailsTracker {
    pub fn new(deps: TrackerDeps, key: HotspotEntryKey) -> Self {
        Self {
            base: TrackerBase::new(deps),
            entry: HotspotNetworkEntry::new(key),
        }
    }

    pub fn entry(&self) -> &HotspotNetworkEntry {
        &self.entry
    }

    pub fn on_start(&mut self) {
        debug!(device_id = self.entry.key().device_id(), "starting hotspot tracker");
        self.base.start();
        self.refresh_hotspot_network();
        self.refresh_connection();
        self.refresh_scan_results(true);
    }

    pub fn on_stop(&mut self) {
        debug!(device_id = self.entry.key().device_id(), "stopping hotspot tracker");
        self.base.stop();
    }

    pub fn handle_event(&mut self, event: TrackerEvent) {
        if !self.base.is_started() {
            debug!(?event, "tracker stopped, ignoring event");
            return;
        }
        match event {
            TrackerEvent::ScanResultsAvailable { succeeded } => self.refresh_scan_results(succeeded),
            TrackerEvent::WifiStateChanged => {
                if self.base.refresh_wifi_state() == WifiState::Disabled {
                    self.refresh_scan_results(false);
                }
            }
            TrackerEvent::ConnectionChanged => self.refresh_connection(),
            TrackerEvent::HotspotNetworksUpdated => self.refresh_hotspot_network(),
        }
    }

    fn refresh_hotspot_network(&mut self) {
        let device_id = self.entry.key().device_id();
        let networks = self.base.read_hotspot_networks();
        match networks.iter().find(|n| n.device_id == device_id) {
            Some(network) => self.entry.update_hotspot_network_data(network),
            None => debug!(device_id, "no hotspot data for device"),
        }
    }

    fn refresh_scan_results(&mut self, succeeded: bool) {
        let results = self.base.conditionally_update_scan_results(succeeded);
        self.entry.update_scan_result_info(&results);
    }

    fn refresh_connection(&mut self) {
        let connection = self.base.read_connection();
        self.entry.update_connection_info(connection.as_ref());
    }

    pub(crate) fn base(&self) -> &TrackerBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut TrackerBase {
        &mut self.base
    }

    pub fn details(&self) -> EntryDetails {
        self.entry.details()
    }
}
