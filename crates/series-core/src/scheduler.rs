// File: crates/series-core/src/scheduler.rs
// Summary: Monotonic periodic tick scheduler that drops missed ticks instead of queueing them.

use std::time::{Duration, Instant};

/// Fixed-period deadline tracker driven by the host loop.
///
/// When a poll arrives late (the previous tick overran, or the loop was
/// blocked), every missed period is counted as dropped and exactly one tick
/// fires; the next deadline is re-aligned to the original phase.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    period: Duration,
    next: Instant,
    fired: u64,
    dropped: u64,
}

impl TickScheduler {
    pub fn new(period: Duration, start: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self { period, next: start + period, fired: 0, dropped: 0 }
    }

    pub fn period(&self) -> Duration { self.period }
    pub fn next_deadline(&self) -> Instant { self.next }
    pub fn fired(&self) -> u64 { self.fired }
    pub fn dropped(&self) -> u64 { self.dropped }

    /// Returns true when a tick is due at `now`. At most one tick per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        let late = now.duration_since(self.next).as_nanos();
        let missed = late / self.period.as_nanos();
        let advance = self.period.as_nanos() * (missed + 1);
        self.next += Duration::from_nanos(advance as u64);
        self.dropped += missed as u64;
        self.fired += 1;
        true
    }
}
