//! Entry keys and their classification.
//!
//! An entry key is an opaque string naming the network entry a tracker
//! should follow. Two grammars exist, both of the form `PREFIX + JSON`:
//!
//! | Kind | Prefix | Body |
//! |------|--------|------|
//! | [`EntryKind::Standard`] | `StandardWifiEntry:` | [`StandardEntryKey`] |
//! | [`EntryKind::Hotspot`] | `HotspotNetworkEntry:` | [`HotspotEntryKey`] |
//!
//! The prefixes are disjoint, so a key matches at most one grammar.
//! [`EntryKey::parse`] rejects everything else with
//! [`TrackerError::InvalidKey`].

mod hotspot_key;
mod scan_result_key;
mod standard_key;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TrackerError;

pub use hotspot_key::{HotspotEntryKey, HOTSPOT_KEY_PREFIX};
pub use scan_result_key::ScanResultKey;
pub use standard_key::{StandardEntryKey, STANDARD_KEY_PREFIX};

/// Which grammar a key follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Standard,
    Hotspot,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Hotspot => f.write_str("hotspot"),
        }
    }
}

/// A parsed entry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Standard(StandardEntryKey),
    Hotspot(HotspotEntryKey),
}

impl EntryKey {
    /// Classify and parse a key string.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidKey`] when the string carries neither prefix,
    /// or when its body is not a valid object of the prefixed grammar.
    pub fn parse(key: &str) -> Result<Self, TrackerError> {
        if let Some(body) = key.strip_prefix(STANDARD_KEY_PREFIX) {
            StandardEntryKey::parse_body(body).map(Self::Standard)
        } else if let Some(body) = key.strip_prefix(HOTSPOT_KEY_PREFIX) {
            HotspotEntryKey::parse_body(body).map(Self::Hotspot)
        } else {
            Err(TrackerError::invalid_key(
                "key does not contain a valid key prefix",
            ))
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Standard(_) => EntryKind::Standard,
            Self::Hotspot(_) => EntryKind::Hotspot,
        }
    }
}

impl FromStr for EntryKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(key) => key.fmt(f),
            Self::Hotspot(key) => key.fmt(f),
        }
    }
}

impl From<StandardEntryKey> for EntryKey {
    fn from(key: StandardEntryKey) -> Self {
        Self::Standard(key)
    }
}

impl From<HotspotEntryKey> for EntryKey {
    fn from(key: HotspotEntryKey) -> Self {
        Self::Hotspot(key)
    }
}

/// Deserialize a key body, insisting on a JSON object.
fn parse_json_body<T: DeserializeOwned>(body: &str, grammar: &str) -> Result<T, TrackerError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| TrackerError::invalid_key(format!("{grammar} key body is not JSON: {e}")))?;
    if !value.is_object() {
        return Err(TrackerError::invalid_key(format!(
            "{grammar} key body is not a JSON object"
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| TrackerError::invalid_key(format!("malformed {grammar} key: {e}")))
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hotspot::{DeviceType, HostNetworkType, HotspotNetwork, NetworkProviderInfo};
    use crate::domain::security::SecurityType;

    fn standard_key_string() -> String {
        StandardEntryKey::new(ScanResultKey::new("ssid", [SecurityType::Open]))
            .unwrap()
            .to_string()
    }

    fn hotspot_key_string() -> String {
        let network = HotspotNetwork::builder()
            .device_id(1)
            .network_provider_info(
                NetworkProviderInfo::builder("Phone", "Pixel")
                    .device_type(DeviceType::Phone)
                    .battery_percentage(100)
                    .connection_strength(3)
                    .build(),
            )
            .host_network_type(HostNetworkType::Cellular)
            .network_name("Google Fi")
            .hotspot_ssid("SSID")
            .hotspot_bssid("BSSID")
            .add_hotspot_security_type(SecurityType::Wep)
            .build()
            .unwrap();
        HotspotEntryKey::from_network(&network).to_string()
    }

    #[test]
    fn plain_text_is_invalid() {
        let err = EntryKey::parse("Invalid Key").unwrap_err();
        assert!(err.is_invalid_key());
    }

    #[test]
    fn classifies_standard_key() {
        let key = EntryKey::parse(&standard_key_string()).unwrap();
        assert_eq!(key.kind(), EntryKind::Standard);
    }

    #[test]
    fn classifies_hotspot_key() {
        let key = EntryKey::parse(&hotspot_key_string()).unwrap();
        assert_eq!(key.kind(), EntryKind::Hotspot);
        match key {
            EntryKey::Hotspot(k) => assert_eq!(k.device_id(), 1),
            other => panic!("unexpected key {other:?}"),
        }
    }

    #[test]
    fn printed_key_parses_back_to_equal_key() {
        for s in [standard_key_string(), hotspot_key_string()] {
            let key: EntryKey = s.parse().unwrap();
            assert_eq!(key.to_string(), s);
        }
    }

    #[test]
    fn prefix_with_bad_body_is_invalid() {
        for bad in [
            "StandardWifiEntry:",
            "StandardWifiEntry:not json",
            "StandardWifiEntry:[1,2]",
            "HotspotNetworkEntry:{}",
            "HotspotNetworkEntry:{\"DEVICE_ID_KEY\":\"one\"}",
            "standardwifientry:{}",
            "",
        ] {
            assert!(
                EntryKey::parse(bad).unwrap_err().is_invalid_key(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn grammars_do_not_overlap() {
        let standard = standard_key_string();
        let hotspot = hotspot_key_string();
        let swapped = format!(
            "{HOTSPOT_KEY_PREFIX}{}",
            standard.strip_prefix(STANDARD_KEY_PREFIX).unwrap()
        );
        assert!(EntryKey::parse(&swapped).is_err());
        let swapped = format!(
            "{STANDARD_KEY_PREFIX}{}",
            hotspot.strip_prefix(HOTSPOT_KEY_PREFIX).unwrap()
        );
        assert!(EntryKey::parse(&swapped).is_err());
    }
}
