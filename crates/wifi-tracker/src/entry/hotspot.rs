//! Entry for a hotspot offered by a nearby device.

use super::{channel_of, ConnectedState, EntryDetails, WIFI_LEVEL_UNREACHABLE};
use crate::domain::bssid::BandType;
use crate::domain::connection::ConnectionInfo;
use crate::domain::hotspot::HotspotNetwork;
use crate::domain::scan_result::ScanResult;
use crate::key::{EntryKind, HotspotEntryKey};

/// Live state of a hotspot identified by a [`HotspotEntryKey`].
///
/// The level comes from the provider's reported upstream strength rather
/// than from RSSI, since that is what limits a tethered connection.
#[derive(Debug, Clone)]
pub struct HotspotNetworkEntry {
    key: HotspotEntryKey,
    network: Option<HotspotNetwork>,
    best_scan_result: Option<ScanResult>,
    connection: Option<ConnectionInfo>,
}

impl HotspotNetworkEntry {
    pub fn new(key: HotspotEntryKey) -> Self {
        Self {
            key,
            network: None,
            best_scan_result: None,
            connection: None,
        }
    }

    pub fn key(&self) -> &HotspotEntryKey {
        &self.key
    }

    pub fn hotspot_network(&self) -> Option<&HotspotNetwork> {
        self.network.as_ref()
    }

    /// Store the latest descriptor for this entry's device.
    ///
    /// Descriptors for other devices are ignored.
    pub fn update_hotspot_network_data(&mut self, network: &HotspotNetwork) {
        if network.device_id == self.key.device_id() {
            self.network = Some(network.clone());
        }
    }

    /// Record whether the hotspot SSID is currently in scan range.
    ///
    /// Virtual entries have no SSID and never match.
    pub fn update_scan_result_info(&mut self, results: &[ScanResult]) {
        self.best_scan_result = self.key.scan_result_key().and_then(|srk| {
            results
                .iter()
                .filter(|r| srk.matches(r))
                .max_by_key(|r| r.rssi_dbm)
                .cloned()
        });
    }

    pub fn update_connection_info(&mut self, info: Option<&ConnectionInfo>) {
        self.connection = match (self.hotspot_ssid(), info) {
            (Some(ssid), Some(conn)) if conn.ssid == ssid => Some(conn.clone()),
            _ => None,
        };
    }

    fn hotspot_ssid(&self) -> Option<&str> {
        self.key
            .scan_result_key()
            .map(|srk| srk.ssid())
            .or_else(|| self.network.as_ref().and_then(|n| n.hotspot_ssid.as_deref()))
    }

    pub fn best_scan_result(&self) -> Option<&ScanResult> {
        self.best_scan_result.as_ref()
    }

    pub fn is_in_range(&self) -> bool {
        self.best_scan_result.is_some()
    }

    pub fn level(&self) -> i32 {
        self.network.as_ref().map_or(WIFI_LEVEL_UNREACHABLE, |n| {
            i32::from(n.provider.connection_strength.min(4))
        })
    }

    pub fn title(&self) -> String {
        match &self.network {
            Some(n) if !n.network_name.is_empty() => n.network_name.clone(),
            Some(n) => n.provider.model_name.clone(),
            None => String::new(),
        }
    }

    pub fn summary(&self) -> String {
        let Some(network) = &self.network else {
            return String::new();
        };
        match self.connected_state() {
            ConnectedState::Connected => {
                return format!("Connected via {}", network.provider.model_name)
            }
            ConnectedState::Connecting => {
                return format!("Connecting to {}", network.provider.model_name)
            }
            ConnectedState::Disconnected => {}
        }
        format!(
            "{} · {}% battery · {}",
            network.provider.model_name,
            network.provider.battery_percentage,
            network.host_network_type.label()
        )
    }

    pub fn connected_state(&self) -> ConnectedState {
        ConnectedState::of(self.connection.as_ref())
    }

    pub fn details(&self) -> EntryDetails {
        let security = match (&self.network, self.key.scan_result_key()) {
            (Some(n), _) => n.hotspot_security_types.iter().copied().collect(),
            (None, Some(srk)) => srk.security_types().iter().copied().collect(),
            (None, None) => Vec::new(),
        };
        let frequency_mhz = self
            .connection
            .as_ref()
            .map(|c| c.frequency_mhz)
            .filter(|f| *f != 0)
            .or_else(|| self.best_scan_result.as_ref().map(|r| r.frequency_mhz));

        EntryDetails {
            key: self.key.to_string(),
            kind: EntryKind::Hotspot,
            title: self.title(),
            summary: self.summary(),
            level: self.level(),
            connected_state: self.connected_state(),
            security,
            bssid: self
                .connection
                .as_ref()
                .and_then(|c| c.bssid)
                .or_else(|| self.best_scan_result.as_ref().map(|r| r.bssid)),
            frequency_mhz,
            channel: channel_of(frequency_mhz),
            band: frequency_mhz.and_then(BandType::from_frequency),
            link_speed_mbps: self.connection.as_ref().and_then(|c| c.link_speed_mbps),
        }
    }
}
