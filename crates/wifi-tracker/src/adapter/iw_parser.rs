//! Parsers for the text output of the Linux `iw` tool.
//!
//! These are platform-independent so that captured output can be replayed
//! anywhere; only [`LinuxIwScanner`](super::LinuxIwScanner) actually runs
//! `iw`.

use std::collections::BTreeSet;

use tracing::trace;

use crate::domain::bssid::BssidId;
use crate::domain::connection::ConnectionInfo;
use crate::domain::scan_result::ScanResult;
use crate::domain::security::SecurityType;
use crate::error::ScanError;

/// RSSI assumed when a stanza has no `signal:` line.
const DEFAULT_SIGNAL_DBM: i32 = -90;

// ---------------------------------------------------------------------------
// Scan output
// ---------------------------------------------------------------------------

/// Intermediate accumulator for fields within a single BSS stanza.
#[derive(Default)]
struct BssStanza {
    bssid: Option<String>,
    ssid: Option<String>,
    signal_dbm: Option<f64>,
    freq_mhz: Option<u32>,
    last_seen_ms: Option<u64>,
    privacy: bool,
    /// Saw an `RSN:` or `WPA:` information element.
    has_rsn_or_wpa: bool,
    security: BTreeSet<SecurityType>,
}

impl BssStanza {
    /// Flush this stanza into a [`ScanResult`], if we have enough data.
    fn flush(self, now_millis: u64) -> Option<ScanResult> {
        let bssid = BssidId::parse(self.bssid.as_deref()?).ok()?;
        let rssi_dbm = self
            .signal_dbm
            .map_or(DEFAULT_SIGNAL_DBM, |s| s.round() as i32);

        let mut security_types = self.security;
        if security_types.is_empty() {
            if self.has_rsn_or_wpa {
                // RSN/WPA present but every suite was unknown.
                trace!(%bssid, "no recognised auth suite, assuming psk");
                security_types.insert(SecurityType::Psk);
            } else if self.privacy {
                security_types.insert(SecurityType::Wep);
            } else {
                security_types.insert(SecurityType::Open);
            }
        }

        Some(ScanResult {
            bssid,
            ssid: self.ssid.unwrap_or_default(),
            security_types,
            rssi_dbm,
            frequency_mhz: self.freq_mhz.unwrap_or(0),
            timestamp_millis: now_millis.saturating_sub(self.last_seen_ms.unwrap_or(0)),
        })
    }
}

/// Parse the text output of `iw dev <iface> scan [dump]`.
///
/// The output consists of BSS stanzas, each starting with:
/// ```text
/// BSS aa:bb:cc:dd:ee:ff(on wlan0)
/// ```
/// followed by indented key-value lines. Each result is timestamped at
/// `now_millis` minus its `last seen` age.
pub fn parse_iw_scan_output(output: &str, now_millis: u64) -> Result<Vec<ScanResult>, ScanError> {
    let mut results = Vec::new();
    let mut current: Option<BssStanza> = None;

    for line in output.lines() {
        // New BSS stanza starts with "BSS " at column 0.
        if let Some(rest) = line.strip_prefix("BSS ") {
            if let Some(result) = current.take().and_then(|s| s.flush(now_millis)) {
                results.push(result);
            }

            // "BSS aa:bb:cc:dd:ee:ff(on wlan0)" or "... -- associated".
            let mac_end = rest
                .find(|c: char| !c.is_ascii_hexdigit() && c != ':')
                .unwrap_or(rest.len());
            let mac = &rest[..mac_end];

            if mac.len() == 17 {
                current = Some(BssStanza {
                    bssid: Some(mac.to_lowercase()),
                    ..Default::default()
                });
            }
            continue;
        }

        let trimmed = line.trim();
        let Some(stanza) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = trimmed.strip_prefix("SSID:") {
            stanza.ssid = Some(rest.trim().to_owned());
        } else if let Some(rest) = trimmed.strip_prefix("signal:") {
            stanza.signal_dbm = parse_signal_dbm(rest);
        } else if let Some(rest) = trimmed.strip_prefix("freq:") {
            // Newer iw prints fractional MHz ("5180.0").
            stanza.freq_mhz = rest
                .trim()
                .split('.')
                .next()
                .and_then(|v| v.parse().ok());
        } else if let Some(rest) = trimmed.strip_prefix("last seen:") {
            stanza.last_seen_ms = rest.split_whitespace().next().and_then(|v| v.parse().ok());
        } else if let Some(rest) = trimmed.strip_prefix("capability:") {
            stanza.privacy = rest.split_whitespace().any(|flag| flag == "Privacy");
        } else if trimmed.starts_with("RSN:") || trimmed.starts_with("WPA:") {
            stanza.has_rsn_or_wpa = true;
        } else if let Some(rest) = trimmed.strip_prefix("* Authentication suites:") {
            stanza.security.extend(parse_auth_suites(rest));
        }
    }

    if let Some(result) = current.take().and_then(|s| s.flush(now_millis)) {
        results.push(result);
    }

    Ok(results)
}

/// Map an `Authentication suites:` list to security types.
///
/// Unknown suites are skipped. FILS suites authenticate through 802.1X and
/// map to EAP.
fn parse_auth_suites(suites: &str) -> Vec<SecurityType> {
    // "IEEE 802.1X" contains a space; glue it so tokens split cleanly.
    suites
        .replace("IEEE 802.1X", "IEEE_802.1X")
        .split_whitespace()
        .filter_map(|suite| {
            if suite.contains("SUITE-B-192") {
                Some(SecurityType::EapWpa3Enterprise192Bit)
            } else if suite.contains("IEEE_802.1X") || suite.starts_with("FILS-") {
                Some(SecurityType::Eap)
            } else {
                match suite {
                    "PSK" | "FT/PSK" | "PSK/SHA-256" => Some(SecurityType::Psk),
                    "SAE" | "FT/SAE" => Some(SecurityType::Sae),
                    "OWE" => Some(SecurityType::Owe),
                    _ => None,
                }
            }
        })
        .collect()
}

/// Parse a signal strength string like "-52.00 dBm" into dBm.
fn parse_signal_dbm(s: &str) -> Option<f64> {
    s.split_whitespace().next()?.parse().ok()
}

// ---------------------------------------------------------------------------
// Link output
// ---------------------------------------------------------------------------

/// Parse the text output of `iw dev <iface> link`.
///
/// Returns `Ok(None)` for `Not connected.`.
pub fn parse_iw_link_output(output: &str) -> Result<Option<ConnectionInfo>, ScanError> {
    let mut lines = output.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(header) = lines.next() else {
        return Ok(None);
    };
    if header.starts_with("Not connected") {
        return Ok(None);
    }
    let Some(rest) = header.strip_prefix("Connected to ") else {
        return Err(ScanError::ParseError(format!(
            "unexpected iw link header: {header}"
        )));
    };
    let mac = rest.split_whitespace().next().unwrap_or_default();
    let bssid = BssidId::parse(mac)?;

    let mut info = ConnectionInfo::new(String::new(), DEFAULT_SIGNAL_DBM);
    info.bssid = Some(bssid);

    for line in lines {
        if let Some(v) = line.strip_prefix("SSID:") {
            info.ssid = v.trim().to_owned();
        } else if let Some(v) = line.strip_prefix("freq:") {
            info.frequency_mhz = v
                .trim()
                .split('.')
                .next()
                .and_then(|f| f.parse().ok())
                .unwrap_or(0);
        } else if let Some(v) = line.strip_prefix("signal:") {
            if let Some(dbm) = parse_signal_dbm(v) {
                info.rssi_dbm = dbm.round() as i32;
            }
        } else if let Some(v) = line.strip_prefix("tx bitrate:") {
            info.link_speed_mbps = v
                .split_whitespace()
                .next()
                .and_then(|rate| rate.parse::<f64>().ok())
                .map(|rate| rate as u32);
        }
    }

    Ok(Some(info))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
