//! Details tracker for an ordinary saved or scanned network.

use tracing::debug;

use super::base::TrackerBase;
use super::{TrackerDeps, TrackerEvent};
use crate::domain::connection::WifiState;
use crate::entry::{EntryDetails, StandardWifiEntry};
use crate::key::StandardEntryKey;

/// Keeps a [`StandardWifiEntry`] current from scans and connection changes.
pub struct StandardNetworkDetailsTracker {
    base: TrackerBase,
    entry: StandardWifiEntry,
}

impl StandardNetworkDetailsTracker {
    pub fn new(deps: TrackerDeps, key: StandardEntryKey) -> Self {
        Self {
            base: TrackerBase::new(deps),
            entry: StandardWifiEntry::new(key),
        }
    }

    pub fn entry(&self) -> &StandardWifiEntry {
        &self.entry
    }

    pub fn on_start(&mut self) {
        debug!(ssid = %self.entry.ssid(), "starting standard tracker");
        self.base.start();
        self.refresh_connection();
        self.refresh_scan_results(true);
    }

    pub fn on_stop(&mut self) {
        debug!(ssid = %self.entry.ssid(), "stopping standard tracker");
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
            TrackerEvent::HotspotNetworksUpdated => {}
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
