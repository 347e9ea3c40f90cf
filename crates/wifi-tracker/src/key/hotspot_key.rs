//! Key grammar for hotspots offered by nearby devices.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::parse_json_body;
use super::scan_result_key::ScanResultKey;
use crate::domain::hotspot::HotspotNetwork;
use crate::error::TrackerError;

/// Prefix that marks a hotspot entry key.
pub const HOTSPOT_KEY_PREFIX: &str = "HotspotNetworkEntry:";

/// Key of a hotspot, identified by the providing device.
///
/// A *virtual* key refers to a device whose hotspot has no SSID yet; it
/// carries no scan-result key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HotspotEntryKey {
    #[serde(rename = "IS_VIRTUAL_ENTRY_KEY")]
    is_virtual_entry: bool,
    #[serde(rename = "DEVICE_ID_KEY")]
    device_id: i64,
    #[serde(
        rename = "SCAN_RESULT_KEY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    scan_result_key: Option<ScanResultKey>,
}

impl HotspotEntryKey {
    /// Derive the key for a hotspot descriptor.
    pub fn from_network(network: &HotspotNetwork) -> Self {
        match network.hotspot_ssid.as_deref().filter(|s| !s.is_empty()) {
            Some(ssid) => Self {
                is_virtual_entry: false,
                device_id: network.device_id,
                scan_result_key: Some(ScanResultKey::new(
                    ssid,
                    network.hotspot_security_types.iter().copied(),
                )),
            },
            None => Self::virtual_entry(network.device_id),
        }
    }

    /// Key for a device whose hotspot SSID is not known.
    pub fn virtual_entry(device_id: i64) -> Self {
        Self {
            is_virtual_entry: true,
            device_id,
            scan_result_key: None,
        }
    }

    /// Parse the body that follows [`HOTSPOT_KEY_PREFIX`].
    pub(crate) fn parse_body(body: &str) -> Result<Self, TrackerError> {
        let key: Self = parse_json_body(body, "hotspot")?;
        match (key.is_virtual_entry, &key.scan_result_key) {
            (false, None) => Err(TrackerError::invalid_key(
                "non-virtual hotspot key has no SCAN_RESULT_KEY",
            )),
            (true, Some(_)) => Err(TrackerError::invalid_key(
                "virtual hotspot key must not carry a SCAN_RESULT_KEY",
            )),
            (false, Some(srk)) if srk.ssid().is_empty() => Err(TrackerError::invalid_key(
                "hotspot key has an empty SSID",
            )),
            _ => Ok(key),
        }
    }

    pub fn device_id(&self) -> i64 {
        self.device_id
    }

    pub fn is_virtual_entry(&self) -> bool {
        self.is_virtual_entry
    }

    pub fn scan_result_key(&self) -> Option<&ScanResultKey> {
        self.scan_result_key.as_ref()
    }
}

impl fmt::Display for HotspotEntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{HOTSPOT_KEY_PREFIX}{json}")
    }
}
