//! Time source for scan ageing.
//!
//! Trackers never read the system time directly; they go through a
//! [`Clock`] so that scan-age windows can be exercised deterministically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond wall clock.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds.
    fn millis(&self) -> u64;
}

/// Clock backed by [`SystemTime`], in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: AtomicU64::new(start_millis),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::Relaxed);
    }

    pub fn advance(&self, delta_millis: u64) {
        self.now.fetch_add(delta_millis, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(123_456_789);
        assert_eq!(clock.millis(), 123_456_789);
        clock.advance(1_000);
        assert_eq!(clock.millis(), 123_457_789);
        clock.set(5);
        assert_eq!(clock.millis(), 5);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.millis() > 1_577_836_800_000);
    }
}
