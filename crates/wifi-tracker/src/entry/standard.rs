//! Entry for an ordinary access-point network.

use tracing::trace;

use super::{channel_of, ConnectedState, EntryDetails, WIFI_LEVEL_UNREACHABLE};
use crate::domain::bssid::BandType;
use crate::domain::connection::ConnectionInfo;
use crate::domain::scan_result::{calculate_signal_level, ScanResult};
use crate::key::{EntryKind, StandardEntryKey};

/// Live state of a network identified by a [`StandardEntryKey`].
#[derive(Debug, Clone)]
pub struct StandardWifiEntry {
    key: StandardEntryKey,
    /// Scan results matching the key, strongest first.
    matching_results: Vec<ScanResult>,
    /// Present only while connected to this network.
    connection: Option<ConnectionInfo>,
}

impl StandardWifiEntry {
    pub fn new(key: StandardEntryKey) -> Self {
        Self {
            key,
            matching_results: Vec::new(),
            connection: None,
        }
    }

    pub fn key(&self) -> &StandardEntryKey {
        &self.key
    }

    pub fn ssid(&self) -> &str {
        self.key.scan_result_key().ssid()
    }

    /// Replace the scan information with the results matching this entry.
    ///
    /// Results for other networks are ignored, so callers may pass a full
    /// scan.
    pub fn update_scan_result_info(&mut self, results: &[ScanResult]) {
        let srk = self.key.scan_result_key();
        let mut matching: Vec<ScanResult> =
            results.iter().filter(|r| srk.matches(r)).cloned().collect();
        matching.sort_by(|a, b| b.rssi_dbm.cmp(&a.rssi_dbm));
        trace!(ssid = self.ssid(), matching = matching.len(), "scan info updated");
        self.matching_results = matching;
    }

    /// Update the association state from the station's current connection.
    pub fn update_connection_info(&mut self, info: Option<&ConnectionInfo>) {
        self.connection = info.filter(|c| self.connection_matches(c)).cloned();
    }

    fn connection_matches(&self, info: &ConnectionInfo) -> bool {
        let srk = self.key.scan_result_key();
        info.ssid == srk.ssid()
            && info
                .security_type
                .map_or(true, |t| srk.security_types().contains(&t))
    }

    /// Strongest matching scan result.
    pub fn best_scan_result(&self) -> Option<&ScanResult> {
        self.matching_results.first()
    }

    pub fn scan_results(&self) -> &[ScanResult] {
        &self.matching_results
    }

    pub fn connection_info(&self) -> Option<&ConnectionInfo> {
        self.connection.as_ref()
    }

    /// Signal level; follows the connection RSSI while connected.
    pub fn level(&self) -> i32 {
        if let Some(conn) = &self.connection {
            return calculate_signal_level(conn.rssi_dbm);
        }
        self.best_scan_result()
            .map_or(WIFI_LEVEL_UNREACHABLE, ScanResult::level)
    }

    pub fn connected_state(&self) -> ConnectedState {
        ConnectedState::of(self.connection.as_ref())
    }

    pub fn is_in_range(&self) -> bool {
        self.connection.is_some() || !self.matching_results.is_empty()
    }

    pub fn summary(&self) -> String {
        match self.connected_state() {
            ConnectedState::Connected => "Connected",
            ConnectedState::Connecting => "Connecting",
            ConnectedState::Disconnected if self.is_in_range() => "Available",
            ConnectedState::Disconnected => "Not in range",
        }
        .to_owned()
    }

    pub fn details(&self) -> EntryDetails {
        let best = self.best_scan_result();
        let conn = self.connection.as_ref();
        let frequency_mhz = conn
            .map(|c| c.frequency_mhz)
            .filter(|f| *f != 0)
            .or_else(|| best.map(|r| r.frequency_mhz));

        EntryDetails {
            key: self.key.to_string(),
            kind: EntryKind::Standard,
            title: self.ssid().to_owned(),
            summary: self.summary(),
            level: self.level(),
            connected_state: self.connected_state(),
            security: self.key.scan_result_key().security_types().iter().copied().collect(),
            bssid: conn.and_then(|c| c.bssid).or_else(|| best.map(|r| r.bssid)),
            frequency_mhz,
            channel: channel_of(frequency_mhz),
            band: frequency_mhz.and_then(BandType::from_frequency),
            link_speed_mbps: conn.and_then(|c| c.link_speed_mbps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bssid::BssidId;
    use crate::domain::security::SecurityType;
    use crate::key::ScanResultKey;

    fn entry() -> StandardWifiEntry {
        StandardWifiEntry::new(StandardEntryKey::new(ScanResultKey::new(
            "home",
            [SecurityType::Psk],
        ))
        .unwrap())
    }

    fn scan(mac: u8, ssid: &str, rssi: i32) -> ScanResult {
        ScanResult {
            bssid: BssidId([mac; 6]),
            ssid: ssid.into(),
            security_types: [SecurityType::Psk].into_iter().collect(),
            rssi_dbm: rssi,
            frequency_mhz: 5180,
            timestamp_millis: 0,
        }
    }

    #[test]
    fn unreachable_without_results() {
        let e = entry();
        assert_eq!(e.level(), WIFI_LEVEL_UNREACHABLE);
        assert_eq!(e.summary(), "Not in range");
        assert_eq!(e.connected_state(), ConnectedState::Disconnected);
    }

    #[test]
    fn picks_strongest_matching_result() {
        let mut e = entry();
        e.update_scan_result_info(&[
            scan(1, "home", -80),
            scan(2, "home", -50),
            scan(3, "other", -30),
        ]);
        assert_eq!(e.scan_results().len(), 2);
        assert_eq!(e.best_scan_result().unwrap().bssid, BssidId([2; 6]));
        assert_eq!(e.level(), 4);
        assert_eq!(e.summary(), "Available");

        let details = e.details();
        assert_eq!(details.bssid, Some(BssidId([2; 6])));
        assert_eq!(details.band, Some(BandType::Band5GHz));
        assert_eq!(details.channel, Some(36));
    }

    #[test]
    fn connection_overrides_level() {
        let mut e = entry();
        e.update_scan_result_info(&[scan(1, "home", -50)]);
        let mut conn = ConnectionInfo::new("home", -85);
        conn.link_speed_mbps = Some(144);
        conn.security_type = Some(SecurityType::Psk);
        e.update_connection_info(Some(&conn));

        assert_eq!(e.connected_state(), ConnectedState::Connected);
        assert_eq!(e.level(), 1);
        assert_eq!(e.details().link_speed_mbps, Some(144));
        assert_eq!(e.summary(), "Connected");
    }

    #[test]
    fn connecting_before_connected() {
        let mut e = entry();
        let mut conn = ConnectionInfo::new("home", -60);
        conn.connecting = true;
        e.update_connection_info(Some(&conn));
        assert_eq!(e.connected_state(), ConnectedState::Connecting);
        assert_eq!(e.summary(), "Connecting");

        conn.connecting = false;
        e.update_connection_info(Some(&conn));
        assert_eq!(e.connected_state(), ConnectedState::Connected);
    }

    #[test]
    fn connection_to_other_network_is_ignored() {
        let mut e = entry();
        e.update_connection_info(Some(&ConnectionInfo::new("elsewhere", -40)));
        assert_eq!(e.connected_state(), ConnectedState::Disconnected);

        let mut conn = ConnectionInfo::new("home", -40);
        conn.security_type = Some(SecurityType::Open);
        e.update_connection_info(Some(&conn));
        assert_eq!(e.connected_state(), ConnectedState::Disconnected);
    }
}
