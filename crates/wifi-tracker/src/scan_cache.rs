//! Per-BSSID cache of recent scan results.
//!
//! Scans are noisy: an access point seen a few seconds ago may be missing
//! from the latest scan. The cache keeps the newest result per BSSID and
//! lets callers ask for everything seen within an age window, which is how
//! trackers smooth over missed sightings.

use std::collections::HashMap;

use crate::domain::bssid::BssidId;
use crate::domain::scan_result::ScanResult;

/// Newest scan result per BSSID, with age-based expiry.
#[derive(Debug, Clone)]
pub struct ScanResultCache {
    entries: HashMap<BssidId, ScanResult>,
    /// Results older than this are dropped on every update.
    max_age_millis: u64,
}

impl ScanResultCache {
    pub fn new(max_age_millis: u64) -> Self {
        Self {
            entries: HashMap::new(),
            max_age_millis,
        }
    }

    /// Merge a batch of results, then expire stale entries.
    ///
    /// A result replaces the cached one for the same BSSID only when it is
    /// at least as new.
    pub fn update(&mut self, results: &[ScanResult], now_millis: u64) {
        for result in results {
            match self.entries.get(&result.bssid) {
                Some(cached) if cached.timestamp_millis > result.timestamp_millis => {}
                _ => {
                    self.entries.insert(result.bssid, result.clone());
                }
            }
        }
        self.expire(now_millis);
    }

    /// Remove results older than the cache's maximum age.
    fn expire(&mut self, now_millis: u64) {
        let max_age = self.max_age_millis;
        self.entries
            .retain(|_, result| result.age_millis(now_millis) <= max_age);
    }

    /// All cached results no older than `max_age_millis`.
    ///
    /// The window may exceed the cache's own maximum age; results already
    /// expired by [`update`](Self::update) are not resurrected.
    pub fn scan_results(&self, max_age_millis: u64, now_millis: u64) -> Vec<ScanResult> {
        self.entries
            .values()
            .filter(|result| result.age_millis(now_millis) <= max_age_millis)
            .cloned()
            .collect()
    }

    pub fn get(&self, bssid: &BssidId) -> Option<&ScanResult> {
        self.entries.get(bssid)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_age_millis(&self) -> u64 {
        self.max_age_millis
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::security::SecurityType;

    fn result(mac: u8, rssi: i32, timestamp_millis: u64) -> ScanResult {
        ScanResult {
            bssid: BssidId([mac; 6]),
            ssid: "TestNetwork".to_string(),
            security_types: [SecurityType::Psk].into_iter().collect(),
            rssi_dbm: rssi,
            frequency_mhz: 2437,
            timestamp_millis,
        }
    }

    #[test]
    fn keeps_newest_result_per_bssid() {
        let mut cache = ScanResultCache::new(30_000);
        cache.update(&[result(1, -60, 1_000)], 1_000);
        cache.update(&[result(1, -70, 2_000)], 2_000);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&BssidId([1; 6])).unwrap().rssi_dbm, -70);

        // An older sighting arriving late does not overwrite.
        cache.update(&[result(1, -40, 1_500)], 2_000);
        assert_eq!(cache.get(&BssidId([1; 6])).unwrap().rssi_dbm, -70);
    }

    #[test]
    fn expires_results_beyond_max_age() {
        let mut cache = ScanResultCache::new(10_000);
        cache.update(&[result(1, -60, 0), result(2, -60, 5_000)], 5_000);
        assert_eq!(cache.len(), 2);

        cache.update(&[], 12_000);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&BssidId([1; 6])).is_none());
    }

    #[test]
    fn scan_results_filters_by_window() {
        let mut cache = ScanResultCache::new(60_000);
        cache.update(
            &[result(1, -60, 0), result(2, -60, 10_000), result(3, -60, 20_000)],
            20_000,
        );
        assert_eq!(cache.scan_results(15_000, 20_000).len(), 2);
        assert_eq!(cache.scan_results(25_000, 20_000).len(), 3);
        assert_eq!(cache.scan_results(0, 20_000).len(), 1);
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = ScanResultCache::new(1_000);
        cache.update(&[result(1, -60, 0)], 0);
        cache.clear();
        assert!(cache.is_empty());
    }
}
