//! Identity of a network as seen in scan results.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::scan_result::ScanResult;
use crate::domain::security::SecurityType;

/// SSID plus the set of security types a network advertises.
///
/// Two scan results belong to the same network entry exactly when their
/// `ScanResultKey`s are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanResultKey {
    #[serde(rename = "SSID")]
    ssid: String,
    #[serde(rename = "SECURITY_TYPES")]
    security_types: BTreeSet<SecurityType>,
}

impl ScanResultKey {
    pub fn new(
        ssid: impl Into<String>,
        security_types: impl IntoIterator<Item = SecurityType>,
    ) -> Self {
        Self {
            ssid: ssid.into(),
            security_types: security_types.into_iter().collect(),
        }
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn security_types(&self) -> &BTreeSet<SecurityType> {
        &self.security_types
    }

    /// Whether `result` belongs to the network this key identifies.
    pub fn matches(&self, result: &ScanResult) -> bool {
        self.ssid == result.ssid && self.security_types == result.security_types
    }
}

impl From<&ScanResult> for ScanResultKey {
    fn from(result: &ScanResult) -> Self {
        Self {
            ssid: result.ssid.clone(),
            security_types: result.security_types.clone(),
        }
    }
}

impl fmt::Display for ScanResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bssid::BssidId;

    fn scan(ssid: &str, security: &[SecurityType]) -> ScanResult {
        ScanResult {
            bssid: BssidId([0x10; 6]),
            ssid: ssid.into(),
            security_types: security.iter().copied().collect(),
            rssi_dbm: -60,
            frequency_mhz: 5180,
            timestamp_millis: 0,
        }
    }

    #[test]
    fn matches_requires_same_ssid_and_security_set() {
        let key = ScanResultKey::new("home", [SecurityType::Psk, SecurityType::Sae]);
        assert!(key.matches(&scan("home", &[SecurityType::Sae, SecurityType::Psk])));
        assert!(!key.matches(&scan("home", &[SecurityType::Psk])));
        assert!(!key.matches(&scan("work", &[SecurityType::Psk, SecurityType::Sae])));
    }

    #[test]
    fn display_is_json_with_sorted_codes() {
        let key = ScanResultKey::new("ssid", [SecurityType::Sae, SecurityType::Psk]);
        assert_eq!(key.to_string(), r#"{"SSID":"ssid","SECURITY_TYPES":[2,4]}"#);
    }
}
