use std::time::{Duration, Instant};

/// Measures wall time between frames for the per-frame tick.
///
/// A single frame never reports more than `max_delta`, so a stalled
/// terminal (suspend, debugger) resumes smoothly instead of jumping.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_delta: Duration,
}

impl FrameClock {
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last: Instant::now(),
            max_delta,
        }
    }

    /// Restart timing, e.g. after a section is mounted.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn elapsed(&mut self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.min(self.max_delta)
    }
}
