//! Error types for the wifi-tracker crate.
//!
//! - [`TrackerError`]: top-level error returned by key parsing and the
//!   tracker factory
//! - [`ScanError`]: failures of a [`WifiPort`](crate::port::WifiPort) backend
//! - [`ConfigError`]: configuration loading and validation

use std::path::PathBuf;

use thiserror::Error;

/// Convenient `Result` alias for tracker-level operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

// ---------------------------------------------------------------------------
// TrackerError
// ---------------------------------------------------------------------------

/// Top-level error for key classification and tracker construction.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The entry key matches neither known key grammar.
    #[error("invalid entry key: {reason}")]
    InvalidKey {
        /// What was wrong with the key.
        reason: String,
    },

    /// A hotspot network descriptor is missing a mandatory field.
    #[error("invalid hotspot network: {reason}")]
    InvalidHotspot {
        /// Which field was missing or malformed.
        reason: String,
    },

    /// The scan backend failed.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TrackerError {
    /// Construct an [`TrackerError::InvalidKey`].
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }

    /// Whether this error is an invalid-key rejection.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }
}

// ---------------------------------------------------------------------------
// ScanError
// ---------------------------------------------------------------------------

/// Errors raised by scan backends and output parsers.
#[derive(Debug, Clone, Error)]
pub enum ScanError {
    /// Failed to parse a MAC address string (expected `aa:bb:cc:dd:ee:ff`).
    #[error("failed to parse MAC address from '{input}': expected aa:bb:cc:dd:ee:ff")]
    MacParseFailed {
        /// The input string that could not be parsed.
        input: String,
    },

    /// The scan backend returned an error.
    #[error("WiFi scan failed: {reason}")]
    ScanFailed {
        /// Human-readable description of what went wrong.
        reason: String,
    },

    /// Failed to execute the scan subprocess.
    #[error("scan process error: {0}")]
    ProcessError(String),

    /// Failed to parse scan output.
    #[error("scan output parse error: {0}")]
    ParseError(String),
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`TrackerConfig`](crate::config::TrackerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read or written.
    #[error("cannot access config file {path}: {source}")]
    FileRead {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A field holds a value outside its allowed range.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Construct a [`ConfigError::InvalidValue`].
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_display() {
        let err = TrackerError::invalid_key("no prefix");
        assert_eq!(err.to_string(), "invalid entry key: no prefix");
        assert!(err.is_invalid_key());
    }

    #[test]
    fn scan_error_converts_into_tracker_error() {
        let err: TrackerError = ScanError::ProcessError("iw missing".into()).into();
        assert!(matches!(err, TrackerError::Scan(ScanError::ProcessError(_))));
        assert!(!err.is_invalid_key());
    }
}
