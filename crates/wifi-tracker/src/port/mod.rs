//! Port definitions for the network details trackers.
//!
//! Hexagonal-architecture ports that abstract the platform Wi-Fi backend,
//! so that the `iw` adapter, the in-memory snapshot adapter and test
//! doubles can be swapped transparently.

mod wifi_port;

pub use wifi_port::WifiPort;
