//! Frame clock driven by host timestamps.
//!
//! The host's animation callback hands in its timestamp (milliseconds, as
//! `requestAnimationFrame` does); the clock turns consecutive stamps into
//! frame deltas.

/// A clock for measuring elapsed time and delta time between frames.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Whether the clock has seen its first timestamp.
    running: bool,
    /// Timestamp of the first frame in milliseconds.
    start_time: f64,
    /// Timestamp of the last frame in milliseconds.
    old_time: f64,
    /// Total elapsed time while running.
    elapsed_time: f64,
}

impl Clock {
    /// Create a new clock (not started).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        self.start_time = now_ms;
        self.old_time = now_ms;
        self.elapsed_time = 0.0;
        self.running = true;
    }

    /// Advance to `now_ms` and return the time since the previous call.
    ///
    /// The first call starts the clock and returns 0. Timestamps that go
    /// backwards yield a zero delta.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !self.running {
            self.start(now_ms);
            return 0.0;
        }

        let diff = (now_ms - self.old_time).max(0.0);
        self.old_time = now_ms.max(self.old_time);
        self.elapsed_time += diff;

        diff
    }

    /// Total elapsed time since the first tick (in milliseconds).
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed_time
    }

    /// Check if the clock is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the clock; the next tick restarts it.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
