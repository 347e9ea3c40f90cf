//! Network entries: the live state a details tracker exposes.
//!
//! An entry is created from a parsed key and then fed scan results,
//! connection info and, for hotspots, device descriptors. Its
//! [`EntryDetails`] snapshot is what callers render.

mod hotspot;
mod standard;

use serde::Serialize;

use crate::domain::bssid::{freq_to_channel, BandType, BssidId};
use crate::domain::connection::ConnectionInfo;
use crate::domain::security::SecurityType;
use crate::key::EntryKind;

pub use hotspot::HotspotNetworkEntry;
pub use standard::StandardWifiEntry;

/// Level reported while no scan result or connection backs the entry.
pub const WIFI_LEVEL_UNREACHABLE: i32 = -1;

/// Association state of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectedState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Channel for a frequency, or `None` outside the known channel plans.
pub(crate) fn channel_of(frequency_mhz: Option<u32>) -> Option<u8> {
    frequency_mhz.map(freq_to_channel).filter(|&ch| ch != 0)
}

impl ConnectedState {
    /// State implied by the connection an entry has accepted as its own.
    pub(crate) fn of(connection: Option<&ConnectionInfo>) -> Self {
        match connection {
            None => Self::Disconnected,
            Some(c) if c.connecting => Self::Connecting,
            Some(_) => Self::Connected,
        }
    }
}

/// Snapshot of an entry for display or serialisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDetails {
    /// Printed entry key.
    pub key: String,
    pub kind: EntryKind,
    pub title: String,
    pub summary: String,
    /// Signal level 0-4, or [`WIFI_LEVEL_UNREACHABLE`].
    pub level: i32,
    pub connected_state: ConnectedState,
    pub security: Vec<SecurityType>,
    pub bssid: Option<BssidId>,
    pub frequency_mhz: Option<u32>,
    /// 802.11 channel for `frequency_mhz`, when it maps to one.
    pub channel: Option<u8>,
    pub band: Option<BandType>,
    pub link_speed_mbps: Option<u32>,
}
