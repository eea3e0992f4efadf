use std::time::{Duration, Instant};

/// Paces the tick loop on absolute deadlines.
///
/// Each deadline is the previous one plus the interval, so time spent inside
/// a tick does not push later ticks back. A loop that falls more than one
/// interval behind resyncs to `now` instead of bursting to catch up.
#[derive(Debug, Clone, Default)]
pub struct TickPacer {
    deadline: Option<Instant>,
}

impl TickPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Advance to the next deadline and return how long to wait for it.
    pub fn schedule(&mut self, now: Instant, interval: Duration) -> Duration {
        let next = match self.deadline {
            Some(prev) => {
                let next = prev + interval;
                if next + interval <= now {
                    now + interval
                } else {
                    next
                }
            }
            None => now + interval,
        };
        self.deadline = Some(next);
        next.saturating_duration_since(now)
    }

    /// Sleep until the next deadline.
    pub fn wait(&mut self, interval: Duration) {
        let delay = self.schedule(Instant::now(), interval);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
