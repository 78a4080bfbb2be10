use std::time::{Duration, Instant};

/// Event-loop poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 100;

/// Get the event poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// Cancellable repeating timer.
///
/// Armed at some instant, it fires once per `period` after that. Callers
/// poll it with the current instant and receive how many periods have
/// elapsed since the last poll. A cancelled ticker never fires.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// One-second ticker for the focus countdown
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start firing one period after `now`. No-op if already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of periods elapsed up to `now`; advances the schedule
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        fired
    }
}
