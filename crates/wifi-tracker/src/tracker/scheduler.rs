//! Periodic scan request timing.

/// Decides when a started tracker should request another scan.
///
/// The scheduler only keeps time; the caller performs the scan and then
/// calls [`record`](Self::record).
#[derive(Debug, Clone)]
pub struct ScanScheduler {
    interval_millis: u64,
    last_request_millis: Option<u64>,
    running: bool,
}

impl ScanScheduler {
    pub fn new(interval_millis: u64) -> Self {
        Self {
            interval_millis,
            last_request_millis: None,
            running: false,
        }
    }

    /// Start scheduling. The first scan is due immediately.
    pub fn start(&mut self) {
        self.running = true;
        self.last_request_millis = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True when running and at least one interval has passed since the
    /// last recorded request.
    pub fn due(&self, now_millis: u64) -> bool {
        self.running
            && self
                .last_request_millis
                .map_or(true, |last| now_millis.saturating_sub(last) >= self.interval_millis)
    }

    pub fn record(&mut self, now_millis: u64) {
        self.last_request_millis = Some(now_millis);
    }
}
