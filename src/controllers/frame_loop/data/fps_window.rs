use std::time::{Duration, Instant};

/// Counts frames over a fixed interval and reports the rate once it elapses.
#[derive(Debug, Clone, Copy)]
pub struct FpsWindow {
    interval: Duration,
    start: Instant,
    frames: u32,
}

impl FpsWindow {
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            start,
            frames: 0,
        }
    }

    /// Records one frame finished at `now`. Returns the rate and starts a new
    /// window when the interval has passed.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.start);
        if elapsed < self.interval {
            return None;
        }

        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.start = now;
        self.frames = 0;

        Some(fps)
    }
}
