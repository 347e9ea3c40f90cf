//! Access point identity and radio band value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ScanError;

// ---------------------------------------------------------------------------
// BssidId -- Value Object
// ---------------------------------------------------------------------------

/// A unique BSSID identifier wrapping a 6-byte IEEE 802.11 MAC address.
///
/// Scan results are cached per `BssidId`: two results with the same MAC
/// describe the same access point radio.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BssidId(pub [u8; 6]);

impl BssidId {
    /// Parse a `BssidId` from a colon-separated hex string such as
    /// `"aa:bb:cc:dd:ee:ff"`.
    pub fn parse(s: &str) -> Result<Self, ScanError> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 {
            return Err(ScanError::MacParseFailed {
                input: s.to_owned(),
            });
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            if part.len() != 2 {
                return Err(ScanError::MacParseFailed {
                    input: s.to_owned(),
                });
            }
            bytes[i] = u8::from_str_radix(part, 16).map_err(|_| ScanError::MacParseFailed {
                input: s.to_owned(),
            })?;
        }
        Ok(Self(bytes))
    }

    /// Return the raw 6-byte MAC address.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl FromStr for BssidId {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BssidId({self})")
    }
}

impl fmt::Display for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for BssidId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// BandType -- Value Object
// ---------------------------------------------------------------------------

/// The WiFi frequency band on which a BSSID operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BandType {
    /// 2.4 GHz (channels 1-14)
    #[serde(rename = "2.4GHz")]
    Band2_4GHz,
    /// 5 GHz (channels 36-177)
    #[serde(rename = "5GHz")]
    Band5GHz,
    /// 6 GHz (Wi-Fi 6E / 7)
    #[serde(rename = "6GHz")]
    Band6GHz,
}

impl BandType {
    /// Infer the band from a centre frequency in MHz.
    ///
    /// Returns `None` for frequencies outside the three Wi-Fi bands.
    pub fn from_frequency(freq_mhz: u32) -> Option<Self> {
        match freq_mhz {
            2400..=2500 => Some(Self::Band2_4GHz),
            4900..=5900 => Some(Self::Band5GHz),
            5925..=7125 => Some(Self::Band6GHz),
            _ => None,
        }
    }
}

impl fmt::Display for BandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Band2_4GHz => write!(f, "2.4 GHz"),
            Self::Band5GHz => write!(f, "5 GHz"),
            Self::Band6GHz => write!(f, "6 GHz"),
        }
    }
}

/// Convert a frequency in MHz to an 802.11 channel number.
///
/// Returns 0 for frequencies that do not map to a known channel.
pub fn freq_to_channel(freq_mhz: u32) -> u8 {
    match freq_mhz {
        2412..=2472 => ((freq_mhz - 2407) / 5) as u8,
        2484 => 14,
        5170..=5885 => ((freq_mhz - 5000) / 5) as u8,
        5955..=7115 => ((freq_mhz - 5950) / 5) as u8,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bssid_id_roundtrip() {
        let mac = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
        let id = BssidId(mac);
        assert_eq!(id.to_string(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(BssidId::parse("AA:BB:CC:DD:EE:FF").unwrap(), id);
    }

    #[test]
    fn bssid_id_parse_errors() {
        assert!(BssidId::parse("aa:bb:cc").is_err());
        assert!(BssidId::parse("zz:bb:cc:dd:ee:ff").is_err());
        assert!(BssidId::parse("aaa:b:cc:dd:ee:ff").is_err());
        assert!(BssidId::parse("").is_err());
    }

    #[test]
    fn band_from_frequency() {
        assert_eq!(BandType::from_frequency(2437), Some(BandType::Band2_4GHz));
        assert_eq!(BandType::from_frequency(5180), Some(BandType::Band5GHz));
        assert_eq!(BandType::from_frequency(5975), Some(BandType::Band6GHz));
        assert_eq!(BandType::from_frequency(900), None);
    }

    #[test]
    fn freq_to_channel_conversion() {
        assert_eq!(freq_to_channel(2412), 1);
        assert_eq!(freq_to_channel(2437), 6);
        assert_eq!(freq_to_channel(2484), 14);
        assert_eq!(freq_to_channel(5180), 36);
        assert_eq!(freq_to_channel(5745), 149);
        assert_eq!(freq_to_channel(5955), 1);
        assert_eq!(freq_to_channel(9999), 0);
    }
}
