//! State shared by both tracker variants: port handles, the scan cache, the
//! scheduler and the last known Wi-Fi state.

use tracing::{debug, warn};

use super::scheduler::ScanScheduler;
use super::TrackerDeps;
use crate::domain::connection::{ConnectionInfo, WifiState};
use crate::domain::hotspot::HotspotNetwork;
use crate::domain::scan_result::ScanResult;
use crate::scan_cache::ScanResultCache;

pub(crate) struct TrackerBase {
    pub(crate) deps: TrackerDeps,
    cache: ScanResultCache,
    scheduler: ScanScheduler,
    wifi_state: WifiState,
}

impl TrackerBase {
    /// Build without touching the port or the clock.
    pub(crate) fn new(deps: TrackerDeps) -> Self {
        let cache = ScanResultCache::new(deps.config.extended_scan_age_ms());
        let scheduler = ScanScheduler::new(deps.config.scan_interval_ms);
        Self {
            deps,
            cache,
            scheduler,
            wifi_state: WifiState::Unknown,
        }
    }

    pub(crate) fn start(&mut self) {
        self.scheduler.start();
    }

    pub(crate) fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// A tracker is started exactly while its scheduler runs.
    pub(crate) fn is_started(&self) -> bool {
        self.scheduler.is_running()
    }

    pub(crate) fn wifi_state(&self) -> WifiState {
        self.wifi_state
    }

    /// Re-read the Wi-Fi state. On error the previous state is kept.
    pub(crate) fn refresh_wifi_state(&mut self) -> WifiState {
        match self.deps.port.wifi_state() {
            Ok(state) => {
                if state != self.wifi_state {
                    debug!(from = ?self.wifi_state, to = ?state, "wifi state changed");
                }
                self.wifi_state = state;
            }
            Err(error) => warn!(%error, "failed to read wifi state"),
        }
        self.wifi_state
    }

    pub(crate) fn read_connection(&self) -> Option<ConnectionInfo> {
        self.deps.port.connection_info().unwrap_or_else(|error| {
            warn!(%error, "failed to read connection info");
            None
        })
    }

    pub(crate) fn read_hotspot_networks(&self) -> Vec<HotspotNetwork> {
        self.deps.port.hotspot_networks().unwrap_or_else(|error| {
            warn!(%error, "failed to read hotspot networks");
            Vec::new()
        })
    }

    /// Results an entry should see after a scan round.
    ///
    /// With Wi-Fi disabled the cache is emptied and nothing is returned.
    /// After a successful scan the cache is refreshed from the port and
    /// the normal age window applies. After a failed scan the cache is
    /// left alone and the window is widened by one scan interval.
    pub(crate) fn conditionally_update_scan_results(&mut self, scan_succeeded: bool) -> Vec<ScanResult> {
        if self.refresh_wifi_state() == WifiState::Disabled {
            self.cache.clear();
            return Vec::new();
        }

        let now = self.deps.clock.millis();
        let mut refreshed = false;
        if scan_succeeded {
            match self.deps.port.scan_results() {
                Ok(results) => {
                    self.cache.update(&results, now);
                    refreshed = true;
                }
                Err(error) => warn!(%error, "failed to fetch scan results"),
            }
        }

        let window = if refreshed {
            self.deps.config.max_scan_age_ms
        } else {
            self.deps.config.extended_scan_age_ms()
        };
        let results = self.cache.scan_results(window, now);
        debug!(
            scan_succeeded,
            refreshed,
            window_ms = window,
            visible = results.len(),
            "scan results updated"
        );
        results
    }

    /// If a scan is due, record the request and return true.
    pub(crate) fn take_scan_due(&mut self) -> bool {
        let now = self.deps.clock.millis();
        if self.scheduler.due(now) {
            self.scheduler.record(now);
            true
        } else {
            false
        }
    }

    pub(crate) fn scan_due(&self) -> bool {
        self.scheduler.due(self.deps.clock.millis())
    }
}
