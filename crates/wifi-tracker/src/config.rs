//! Tracker configuration.
//!
//! [`TrackerConfig`] holds the two timing windows every details tracker
//! needs: how old a scan result may be before it no longer counts, and how
//! often a scan is requested while tracking. It is serializable via
//! [`serde`] so it can be loaded from a JSON file.
//!
//! # Example
//!
//! ```rust
//! use wifi_tracker::config::TrackerConfig;
//!
//! let cfg = TrackerConfig::default();
//! cfg.validate().expect("default config is valid");
//! assert_eq!(cfg.max_scan_age_ms, 15_000);
//! assert_eq!(cfg.scan_interval_ms, 10_000);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Timing configuration shared by all details trackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Scan results older than this are not shown, in milliseconds.
    ///
    /// When the latest scan failed the window is widened by
    /// `scan_interval_ms` so that one missed scan does not blank the entry.
    pub max_scan_age_ms: u64,

    /// Interval between scan requests while a tracker is started, in
    /// milliseconds.
    pub scan_interval_ms: u64,
}

impl TrackerConfig {
    pub const DEFAULT_MAX_SCAN_AGE_MS: u64 = 15_000;
    pub const DEFAULT_SCAN_INTERVAL_MS: u64 = 10_000;

    pub fn new(max_scan_age_ms: u64, scan_interval_ms: u64) -> Self {
        Self {
            max_scan_age_ms,
            scan_interval_ms,
        }
    }

    /// Load a [`TrackerConfig`] from a JSON file at `path`.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file cannot be opened and
    /// [`ConfigError::InvalidValue`] if the JSON is malformed or a value is
    /// out of range.
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: TrackerConfig = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::invalid_value("(file)", e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn to_json(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::invalid_value("(serialization)", e.to_string()))?;
        std::fs::write(path, json).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Both windows must be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_scan_age_ms == 0 {
            return Err(ConfigError::invalid_value("max_scan_age_ms", "must be > 0"));
        }
        if self.scan_interval_ms == 0 {
            return Err(ConfigError::invalid_value("scan_interval_ms", "must be > 0"));
        }
        Ok(())
    }

    /// Age window applied after a failed scan.
    pub fn extended_scan_age_ms(&self) -> u64 {
        self.max_scan_age_ms.saturating_add(self.scan_interval_ms)
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_scan_age_ms: Self::DEFAULT_MAX_SCAN_AGE_MS,
            scan_interval_ms: Self::DEFAULT_SCAN_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_windows_are_rejected() {
        assert!(TrackerConfig::new(0, 10).validate().is_err());
        assert!(TrackerConfig::new(10, 0).validate().is_err());
        assert!(TrackerConfig::new(10, 10).validate().is_ok());
    }

    #[test]
    fn json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.json");
        let cfg = TrackerConfig::new(20_000, 5_000);
        cfg.to_json(&path).unwrap();
        assert_eq!(TrackerConfig::from_json(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"scan_interval_ms": 2000}"#).unwrap();
        let cfg = TrackerConfig::from_json(&path).unwrap();
        assert_eq!(cfg.max_scan_age_ms, TrackerConfig::DEFAULT_MAX_SCAN_AGE_MS);
        assert_eq!(cfg.scan_interval_ms, 2_000);
        assert_eq!(cfg.extended_scan_age_ms(), 17_000);
    }

    #[test]
    fn missing_file_is_file_read_error() {
        let err = TrackerConfig::from_json(Path::new("/nonexistent/tracker.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
