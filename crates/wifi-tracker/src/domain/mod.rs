//! Domain value objects shared by keys, entries and trackers.

pub mod bssid;
pub mod connection;
pub mod hotspot;
pub mod scan_result;
pub mod security;

pub use bssid::{freq_to_channel, BandType, BssidId};
pub use connection::{ConnectionInfo, WifiState};
pub use hotspot::{
    DeviceType, HostNetworkType, HotspotNetwork, HotspotNetworkBuilder, NetworkProviderInfo,
    NetworkProviderInfoBuilder,
};
pub use scan_result::{calculate_signal_level, ScanResult, MAX_SIGNAL_LEVEL};
pub use security::SecurityType;
