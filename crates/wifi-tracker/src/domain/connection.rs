//! Radio state and current association.

use serde::Serialize;

use crate::domain::bssid::BssidId;
use crate::domain::security::SecurityType;

/// Power state of the Wi-Fi radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WifiState {
    /// Being turned off.
    Disabling,
    /// Off.
    Disabled,
    /// Being turned on.
    Enabling,
    /// On.
    Enabled,
    /// The backend could not tell.
    Unknown,
}

impl WifiState {
    /// The integer code used by platform APIs.
    pub fn code(self) -> u8 {
        match self {
            Self::Disabling => 0,
            Self::Disabled => 1,
            Self::Enabling => 2,
            Self::Enabled => 3,
            Self::Unknown => 4,
        }
    }

    /// Look up a state by code, mapping anything unrecognised to `Unknown`.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Disabling,
            1 => Self::Disabled,
            2 => Self::Enabling,
            3 => Self::Enabled,
            _ => Self::Unknown,
        }
    }
}

/// The network the station is currently associated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionInfo {
    /// Network name.
    pub ssid: String,
    /// Access point MAC, when the backend reports it.
    pub bssid: Option<BssidId>,
    /// Received signal strength in dBm.
    pub rssi_dbm: i32,
    /// Centre frequency in MHz.
    pub frequency_mhz: u32,
    /// Negotiated transmit rate.
    pub link_speed_mbps: Option<u32>,
    /// Security in use, when the backend reports it.
    pub security_type: Option<SecurityType>,
    /// Association or address acquisition is still in progress.
    pub connecting: bool,
}

impl ConnectionInfo {
    /// A connection with only the SSID and signal known.
    pub fn new(ssid: impl Into<String>, rssi_dbm: i32) -> Self {
        Self {
            ssid: ssid.into(),
            bssid: None,
            rssi_dbm,
            frequency_mhz: 0,
            link_speed_mbps: None,
            security_type: None,
            connecting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wifi_state_codes_roundtrip() {
        for state in [
            WifiState::Disabling,
            WifiState::Disabled,
            WifiState::Enabling,
            WifiState::Enabled,
            WifiState::Unknown,
        ] {
            assert_eq!(WifiState::from_code(state.code()), state);
        }
        assert_eq!(WifiState::from_code(42), WifiState::Unknown);
    }
}
