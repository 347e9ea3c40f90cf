//! A single access point sighting from a Wi-Fi scan.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::bssid::{BandType, BssidId};
use crate::domain::security::SecurityType;

/// RSSI thresholds (dBm) separating signal levels 0..=4.
const LEVEL_THRESHOLDS_DBM: [i32; 4] = [-88, -77, -66, -55];

/// Highest signal level returned by [`calculate_signal_level`].
pub const MAX_SIGNAL_LEVEL: i32 = 4;

/// Map an RSSI value to a signal level in `0..=MAX_SIGNAL_LEVEL`.
pub fn calculate_signal_level(rssi_dbm: i32) -> i32 {
    LEVEL_THRESHOLDS_DBM
        .iter()
        .position(|&threshold| rssi_dbm < threshold)
        .map_or(MAX_SIGNAL_LEVEL, |idx| idx as i32)
}

/// One access point observed in one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// MAC address of the access point.
    pub bssid: BssidId,
    /// Network name. Empty for hidden networks.
    pub ssid: String,
    /// Security types the access point advertises.
    pub security_types: BTreeSet<SecurityType>,
    /// Received signal strength in dBm.
    pub rssi_dbm: i32,
    /// Centre frequency in MHz.
    pub frequency_mhz: u32,
    /// When the access point was last seen, in [`Clock`](crate::clock::Clock) millis.
    pub timestamp_millis: u64,
}

impl ScanResult {
    /// Signal level derived from the RSSI.
    pub fn level(&self) -> i32 {
        calculate_signal_level(self.rssi_dbm)
    }

    /// The band the access point operates on, if the frequency is known.
    pub fn band(&self) -> Option<BandType> {
        BandType::from_frequency(self.frequency_mhz)
    }

    /// Age of this result relative to `now_millis`.
    ///
    /// Results stamped in the future count as age zero.
    pub fn age_millis(&self, now_millis: u64) -> u64 {
        now_millis.saturating_sub(self.timestamp_millis)
    }
}
