//! Key grammar for ordinary access-point networks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scan_result_key::ScanResultKey;
use super::{is_false, parse_json_body};
use crate::error::TrackerError;

/// Prefix that marks a standard entry key.
pub const STANDARD_KEY_PREFIX: &str = "StandardWifiEntry:";

/// Key of a network identified by SSID and security types.
///
/// Printed form: `StandardWifiEntry:{"SCAN_RESULT_KEY":{...}, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandardEntryKey {
    #[serde(rename = "SCAN_RESULT_KEY")]
    scan_result_key: ScanResultKey,
    #[serde(
        rename = "SUGGESTION_PROFILE_KEY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    suggestion_profile_key: Option<String>,
    #[serde(rename = "IS_NETWORK_REQUEST", default, skip_serializing_if = "is_false")]
    is_network_request: bool,
    #[serde(
        rename = "IS_TARGETING_NEW_NETWORKS",
        default,
        skip_serializing_if = "is_false"
    )]
    is_targeting_new_networks: bool,
}

impl StandardEntryKey {
    /// Key for the network named by `scan_result_key`.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidKey`] if the SSID is empty, since such a key
    /// would not parse back from its printed form.
    pub fn new(scan_result_key: ScanResultKey) -> Result<Self, TrackerError> {
        let key = Self {
            scan_result_key,
            suggestion_profile_key: None,
            is_network_request: false,
            is_targeting_new_networks: false,
        };
        key.check_ssid()?;
        Ok(key)
    }

    fn check_ssid(&self) -> Result<(), TrackerError> {
        if self.scan_result_key.ssid().is_empty() {
            return Err(TrackerError::invalid_key("standard key has an empty SSID"));
        }
        Ok(())
    }

    /// Mark the key as belonging to an app-suggested network profile.
    pub fn with_suggestion_profile(mut self, profile_key: impl Into<String>) -> Self {
        self.suggestion_profile_key = Some(profile_key.into());
        self
    }

    /// Mark the key as belonging to an app network request.
    pub fn with_network_request(mut self, is_network_request: bool) -> Self {
        self.is_network_request = is_network_request;
        self
    }

    pub fn with_targeting_new_networks(mut self, targeting: bool) -> Self {
        self.is_targeting_new_networks = targeting;
        self
    }

    /// Parse the body that follows [`STANDARD_KEY_PREFIX`].
    pub(crate) fn parse_body(body: &str) -> Result<Self, TrackerError> {
        let key: Self = parse_json_body(body, "standard")?;
        key.check_ssid()?;
        Ok(key)
    }

    pub fn scan_result_key(&self) -> &ScanResultKey {
        &self.scan_result_key
    }

    pub fn suggestion_profile_key(&self) -> Option<&str> {
        self.suggestion_profile_key.as_deref()
    }

    pub fn is_network_request(&self) -> bool {
        self.is_network_request
    }

    pub fn is_targeting_new_networks(&self) -> bool {
        self.is_targeting_new_networks
    }
}

impl fmt::Display for StandardEntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{STANDARD_KEY_PREFIX}{json}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::security::SecurityType;

    #[test]
    fn printed_form_omits_default_flags() {
        let key = StandardEntryKey::new(ScanResultKey::new("ssid", [SecurityType::Open])).unwrap();
        assert_eq!(
            key.to_string(),
            r#"StandardWifiEntry:{"SCAN_RESULT_KEY":{"SSID":"ssid","SECURITY_TYPES":[0]}}"#
        );
    }

    #[test]
    fn optional_fields_survive_parsing() {
        let key = StandardEntryKey::new(ScanResultKey::new("corp", [SecurityType::Eap]))
            .unwrap()
            .with_suggestion_profile("com.example.app:corp")
            .with_network_request(true);
        let printed = key.to_string();
        let body = printed.strip_prefix(STANDARD_KEY_PREFIX).unwrap();
        let parsed = StandardEntryKey::parse_body(body).unwrap();
        assert_eq!(parsed, key);
        assert_eq!(parsed.suggestion_profile_key(), Some("com.example.app:corp"));
        assert!(parsed.is_network_request());
        assert!(!parsed.is_targeting_new_networks());
    }

    #[test]
    fn rejects_missing_scan_result_key_and_empty_ssid() {
        assert!(StandardEntryKey::parse_body("{}").is_err());
        assert!(StandardEntryKey::parse_body(
            r#"{"SCAN_RESULT_KEY":{"SSID":"","SECURITY_TYPES":[0]}}"#
        )
        .is_err());
        assert!(StandardEntryKey::parse_body(
            r#"{"SCAN_RESULT_KEY":{"SSID":"x","SECURITY_TYPES":[77]}}"#
        )
        .is_err());
    }

    #[test]
    fn empty_ssid_key_cannot_be_built() {
        let err = StandardEntryKey::new(ScanResultKey::new("", [SecurityType::Open])).unwrap_err();
        assert!(err.is_invalid_key());
    }

    #[test]
    fn built_keys_parse_back_from_printed_form() {
        let key = StandardEntryKey::new(ScanResultKey::new("cafe", [SecurityType::Owe]))
            .unwrap()
            .with_targeting_new_networks(true);
        let printed = key.to_string();
        let body = printed.strip_prefix(STANDARD_KEY_PREFIX).unwrap();
        assert_eq!(StandardEntryKey::parse_body(body).unwrap(), key);
    }
}
