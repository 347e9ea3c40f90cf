//! Adapter that reads Wi-Fi state on Linux by invoking `iw`.
//!
//! # Design
//!
//! The adapter shells out to `iw dev <interface> scan` (or `iw dev <interface>
//! scan dump` to read cached results without triggering a new scan, which
//! requires root), `iw dev <interface> link` for the current association,
//! and `iw dev <interface> info` to tell whether the radio is up. Output is
//! parsed by the platform-independent functions in [`super::iw_parser`].
//!
//! # Permissions
//!
//! - `iw dev <iface> scan` requires `CAP_NET_ADMIN` (typically root).
//! - `iw dev <iface> scan dump` reads cached results and may work without root
//!   on some distributions.

use std::process::Command;
use std::sync::Arc;

use super::iw_parser::{parse_iw_link_output, parse_iw_scan_output};
use crate::clock::{Clock, SystemClock};
use crate::domain::connection::{ConnectionInfo, WifiState};
use crate::domain::scan_result::ScanResult;
use crate::error::ScanError;
use crate::port::WifiPort;

// ---------------------------------------------------------------------------
// LinuxIwScanner
// ---------------------------------------------------------------------------

/// Synchronous Wi-Fi backend that shells out to `iw`.
///
/// Every port call spawns one subprocess.
pub struct LinuxIwScanner {
    /// Wireless interface name (e.g. `"wlan0"`, `"wlp2s0"`).
    interface: String,
    /// If true, use `scan dump` (cached results) instead of triggering a new
    /// scan. This avoids the root requirement but may return stale data.
    use_dump: bool,
    /// Stamps results with `now - last seen`.
    clock: Arc<dyn Clock>,
}

impl LinuxIwScanner {
    /// Create a scanner for the default interface `wlan0`.
    pub fn new() -> Self {
        Self::with_interface("wlan0")
    }

    /// Create a scanner for a specific wireless interface.
    pub fn with_interface(iface: impl Into<String>) -> Self {
        Self {
            interface: iface.into(),
            use_dump: false,
            clock: Arc::new(SystemClock),
        }
    }

    /// Use `scan dump` instead of `scan` to read cached results without root.
    pub fn use_cached(mut self) -> Self {
        self.use_dump = true;
        self
    }

    /// Timestamp results with a different clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Run `iw dev <iface> scan` and parse the output synchronously.
    pub fn scan_sync(&self) -> Result<Vec<ScanResult>, ScanError> {
        let mut args = vec!["dev", self.interface.as_str(), "scan"];
        if self.use_dump {
            args.push("dump");
        }
        let stdout = self.run_iw(&args)?;
        parse_iw_scan_output(&stdout, self.clock.millis())
    }

    /// Run `iw dev <iface> link` and parse the current association.
    pub fn link_sync(&self) -> Result<Option<ConnectionInfo>, ScanError> {
        let stdout = self.run_iw(&["dev", self.interface.as_str(), "link"])?;
        parse_iw_link_output(&stdout)
    }

    fn run_iw(&self, args: &[&str]) -> Result<String, ScanError> {
        let output = Command::new("iw").args(args).output().map_err(|e| {
            ScanError::ProcessError(format!("failed to run `iw {}`: {e}", args.join(" ")))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::ScanFailed {
                reason: format!("iw exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for LinuxIwScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WifiPort for LinuxIwScanner {
    fn scan_results(&self) -> Result<Vec<ScanResult>, ScanError> {
        self.scan_sync()
    }

    fn wifi_state(&self) -> Result<WifiState, ScanError> {
        match self.run_iw(&["dev", self.interface.as_str(), "info"]) {
            Ok(_) => Ok(WifiState::Enabled),
            Err(ScanError::ScanFailed { reason }) => {
                tracing::debug!(interface = %self.interface, %reason, "interface not available");
                Ok(WifiState::Disabled)
            }
            Err(e) => Err(e),
        }
    }

    fn connection_info(&self) -> Result<Option<ConnectionInfo>, ScanError> {
        self.link_sync()
    }
}
