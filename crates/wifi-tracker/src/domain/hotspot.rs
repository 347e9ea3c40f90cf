//! Descriptors for hotspots offered by nearby devices.
//!
//! A [`HotspotNetwork`] describes a device (usually a phone) that can share
//! its upstream connection over a Wi-Fi hotspot. Descriptors arrive from the
//! [`WifiPort`](crate::port::WifiPort) and are matched to a tracked entry by
//! device id.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::domain::security::SecurityType;
use crate::error::TrackerError;

// ---------------------------------------------------------------------------
// DeviceType / HostNetworkType
// ---------------------------------------------------------------------------

/// Kind of device providing the hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum DeviceType {
    #[default]
    Unknown,
    Phone,
    Tablet,
    Laptop,
    Watch,
    Auto,
}

impl DeviceType {
    /// The integer code used by platform APIs.
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Phone => 1,
            Self::Tablet => 2,
            Self::Laptop => 3,
            Self::Watch => 4,
            Self::Auto => 5,
        }
    }
}

/// Upstream network the hotspot device shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HostNetworkType {
    #[default]
    Unknown,
    Cellular,
    Wifi,
    Ethernet,
}

impl HostNetworkType {
    /// The integer code used by platform APIs.
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Cellular => 1,
            Self::Wifi => 2,
            Self::Ethernet => 3,
        }
    }

    /// Label shown in an entry summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown network",
            Self::Cellular => "mobile data",
            Self::Wifi => "Wi-Fi",
            Self::Ethernet => "Ethernet",
        }
    }
}

impl fmt::Display for HostNetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// NetworkProviderInfo
// ---------------------------------------------------------------------------

/// The device that provides a hotspot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkProviderInfo {
    pub device_type: DeviceType,
    /// User-visible device name, e.g. `"Phone"`.
    pub device_name: String,
    /// Model name, e.g. `"Pixel"`.
    pub model_name: String,
    /// Battery charge, 0-100.
    pub battery_percentage: u8,
    /// Upstream connection strength, 0-4.
    pub connection_strength: u8,
}

impl NetworkProviderInfo {
    /// Start building provider info for the given names.
    pub fn builder(
        device_name: impl Into<String>,
        model_name: impl Into<String>,
    ) -> NetworkProviderInfoBuilder {
        NetworkProviderInfoBuilder {
            info: NetworkProviderInfo {
                device_type: DeviceType::Unknown,
                device_name: device_name.into(),
                model_name: model_name.into(),
                battery_percentage: 0,
                connection_strength: 0,
            },
        }
    }
}

/// Builder for [`NetworkProviderInfo`].
#[derive(Debug, Clone)]
pub struct NetworkProviderInfoBuilder {
    info: NetworkProviderInfo,
}

impl NetworkProviderInfoBuilder {
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.info.device_type = device_type;
        self
    }

    /// Values above 100 are clamped.
    pub fn battery_percentage(mut self, pct: u8) -> Self {
        self.info.battery_percentage = pct.min(100);
        self
    }

    /// Values above 4 are clamped.
    pub fn connection_strength(mut self, strength: u8) -> Self {
        self.info.connection_strength = strength.min(4);
        self
    }

    pub fn build(self) -> NetworkProviderInfo {
        self.info
    }
}

// ---------------------------------------------------------------------------
// HotspotNetwork
// ---------------------------------------------------------------------------

/// A hotspot offered by a nearby device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotspotNetwork {
    /// Identifier of the providing device, stable across updates.
    pub device_id: i64,
    pub provider: NetworkProviderInfo,
    pub host_network_type: HostNetworkType,
    /// Name of the upstream network (e.g. carrier name).
    pub network_name: String,
    /// SSID of the hotspot, once the device has brought it up.
    pub hotspot_ssid: Option<String>,
    /// BSSID of the hotspot as reported by the device.
    pub hotspot_bssid: Option<String>,
    pub hotspot_security_types: BTreeSet<SecurityType>,
}

impl HotspotNetwork {
    /// Start building a hotspot descriptor.
    pub fn builder() -> HotspotNetworkBuilder {
        HotspotNetworkBuilder::default()
    }
}

/// Builder for [`HotspotNetwork`].
///
/// Device id and provider info are mandatory.
#[derive(Debug, Clone, Default)]
pub struct HotspotNetworkBuilder {
    device_id: Option<i64>,
    provider: Option<NetworkProviderInfo>,
    host_network_type: HostNetworkType,
    network_name: String,
    hotspot_ssid: Option<String>,
    hotspot_bssid: Option<String>,
    hotspot_security_types: BTreeSet<SecurityType>,
}

impl HotspotNetworkBuilder {
    pub fn device_id(mut self, device_id: i64) -> Self {
        self.device_id = Some(device_id);
        self
    }

    pub fn network_provider_info(mut self, provider: NetworkProviderInfo) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn host_network_type(mut self, network_type: HostNetworkType) -> Self {
        self.host_network_type = network_type;
        self
    }

    pub fn network_name(mut self, name: impl Into<String>) -> Self {
        self.network_name = name.into();
        self
    }

    pub fn hotspot_ssid(mut self, ssid: impl Into<String>) -> Self {
        self.hotspot_ssid = Some(ssid.into());
        self
    }

    pub fn hotspot_bssid(mut self, bssid: impl Into<String>) -> Self {
        self.hotspot_bssid = Some(bssid.into());
        self
    }

    pub fn add_hotspot_security_type(mut self, security: SecurityType) -> Self {
        self.hotspot_security_types.insert(security);
        self
    }

    /// Finish the descriptor.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidHotspot`] when the device id or provider info
    /// was never set.
    pub fn build(self) -> Result<HotspotNetwork, TrackerError> {
        let device_id = self.device_id.ok_or_else(|| TrackerError::InvalidHotspot {
            reason: "device id is required".into(),
        })?;
        let provider = self.provider.ok_or_else(|| TrackerError::InvalidHotspot {
            reason: "network provider info is required".into(),
        })?;

        Ok(HotspotNetwork {
            device_id,
            provider,
            host_network_type: self.host_network_type,
            network_name: self.network_name,
            hotspot_ssid: self.hotspot_ssid,
            hotspot_bssid: self.hotspot_bssid,
            hotspot_security_types: self.hotspot_security_types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_device_id_and_provider() {
        let err = HotspotNetwork::builder().build().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidHotspot { .. }));

        let err = HotspotNetwork::builder().device_id(7).build().unwrap_err();
        assert!(err.to_string().contains("provider"));
    }

    #[test]
    fn provider_builder_clamps_values() {
        let info = NetworkProviderInfo::builder("Phone", "Pixel")
            .device_type(DeviceType::Phone)
            .battery_percentage(250)
            .connection_strength(9)
            .build();
        assert_eq!(info.battery_percentage, 100);
        assert_eq!(info.connection_strength, 4);
        assert_eq!(info.device_type.code(), 1);
    }

    #[test]
    fn full_descriptor() {
        let network = HotspotNetwork::builder()
            .device_id(1)
            .network_provider_info(NetworkProviderInfo::builder("Phone", "Pixel").build())
            .host_network_type(HostNetworkType::Cellular)
            .network_name("Google Fi")
            .hotspot_ssid("SSID")
            .hotspot_bssid("BSSID")
            .add_hotspot_security_type(SecurityType::Wep)
            .build()
            .unwrap();
        assert_eq!(network.device_id, 1);
        assert_eq!(network.hotspot_ssid.as_deref(), Some("SSID"));
        assert!(network.hotspot_security_types.contains(&SecurityType::Wep));
        assert_eq!(network.host_network_type.label(), "mobile data");
    }
}
