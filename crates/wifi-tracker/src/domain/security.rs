//! Wi-Fi security types and their stable integer codes.
//!
//! Codes are what entry keys carry in their `SECURITY_TYPES` arrays, so they
//! must never be renumbered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Security type of a network or hotspot.
///
/// Ordering follows the integer code so that sets of security types
/// serialise deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SecurityType {
    /// No authentication.
    Open,
    /// Legacy WEP.
    Wep,
    /// WPA/WPA2 personal.
    Psk,
    /// WPA/WPA2 enterprise (802.1X).
    Eap,
    /// WPA3 personal.
    Sae,
    /// WPA3 enterprise 192-bit (Suite B).
    EapWpa3Enterprise192Bit,
    /// Enhanced open.
    Owe,
    /// WAPI pre-shared key.
    WapiPsk,
    /// WAPI certificate.
    WapiCert,
    /// WPA3 enterprise.
    EapWpa3Enterprise,
    /// OSU server-only authenticated layer 2 encryption.
    Osen,
    /// Passpoint release 1 and 2.
    PasspointR1R2,
    /// Passpoint release 3.
    PasspointR3,
    /// Device provisioning protocol.
    Dpp,
}

impl SecurityType {
    /// Every security type, in code order.
    pub const ALL: [SecurityType; 14] = [
        Self::Open,
        Self::Wep,
        Self::Psk,
        Self::Eap,
        Self::Sae,
        Self::EapWpa3Enterprise192Bit,
        Self::Owe,
        Self::WapiPsk,
        Self::WapiCert,
        Self::EapWpa3Enterprise,
        Self::Osen,
        Self::PasspointR1R2,
        Self::PasspointR3,
        Self::Dpp,
    ];

    /// The stable integer code.
    pub fn code(self) -> u32 {
        match self {
            Self::Open => 0,
            Self::Wep => 1,
            Self::Psk => 2,
            Self::Eap => 3,
            Self::Sae => 4,
            Self::EapWpa3Enterprise192Bit => 5,
            Self::Owe => 6,
            Self::WapiPsk => 7,
            Self::WapiCert => 8,
            Self::EapWpa3Enterprise => 9,
            Self::Osen => 10,
            Self::PasspointR1R2 => 11,
            Self::PasspointR3 => 12,
            Self::Dpp => 13,
        }
    }

    /// Look up a security type by code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Wep => "wep",
            Self::Psk => "psk",
            Self::Eap => "eap",
            Self::Sae => "sae",
            Self::EapWpa3Enterprise192Bit => "eap-suite-b",
            Self::Owe => "owe",
            Self::WapiPsk => "wapi-psk",
            Self::WapiCert => "wapi-cert",
            Self::EapWpa3Enterprise => "eap-wpa3-enterprise",
            Self::Osen => "osen",
            Self::PasspointR1R2 => "passpoint-r1-r2",
            Self::PasspointR3 => "passpoint-r3",
            Self::Dpp => "dpp",
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecurityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "none" {
            return Ok(Self::Open);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .ok_or_else(|| format!("unknown security type '{s}'"))
    }
}

impl TryFrom<u32> for SecurityType {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown security type code {code}"))
    }
}

impl From<SecurityType> for u32 {
    fn from(value: SecurityType) -> Self {
        value.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dense_and_stable() {
        for (i, t) in SecurityType::ALL.iter().enumerate() {
            assert_eq!(t.code() as usize, i);
            assert_eq!(SecurityType::from_code(t.code()), Some(*t));
        }
        assert_eq!(SecurityType::Wep.code(), 1);
        assert_eq!(SecurityType::from_code(14), None);
    }

    #[test]
    fn parse_names_and_none_alias() {
        assert_eq!("none".parse::<SecurityType>(), Ok(SecurityType::Open));
        assert_eq!("WEP".parse::<SecurityType>(), Ok(SecurityType::Wep));
        assert_eq!(
            "eap-suite-b".parse::<SecurityType>(),
            Ok(SecurityType::EapWpa3Enterprise192Bit)
        );
        assert!("wpa9".parse::<SecurityType>().is_err());
    }

    #[test]
    fn serde_uses_integer_codes() {
        let json = serde_json::to_string(&vec![SecurityType::Psk, SecurityType::Sae]).unwrap();
        assert_eq!(json, "[2,4]");
        let back: Vec<SecurityType> = serde_json::from_str("[0,1]").unwrap();
        assert_eq!(back, vec![SecurityType::Open, SecurityType::Wep]);
        assert!(serde_json::from_str::<SecurityType>("99").is_err());
    }
}
