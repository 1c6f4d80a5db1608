//! Fixed-period timer fed from frame deltas.

/// Upper bound on periods reported by a single [`Interval::advance`] call.
pub const MAX_CATCH_UP: u32 = 4;

/// Accumulates frame time and reports how many whole periods have elapsed.
///
/// Stands in for `setInterval` so timed behavior runs inside the frame
/// callback. After a long stall (hidden tab) at most [`MAX_CATCH_UP`]
/// periods fire and the remaining backlog is dropped.
#[derive(Debug, Clone)]
pub struct Interval {
    period_ms: f64,
    accumulator: f64,
}

impl Interval {
    /// Create a timer with the given period. Non-positive periods are raised to 1 ms.
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms: period_ms.max(1.0),
            accumulator: 0.0,
        }
    }

    /// Timer period in milliseconds.
    #[inline]
    pub fn period(&self) -> f64 {
        self.period_ms
    }

    /// Add `dt_ms` and return the number of periods that elapsed.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0;
        }

        self.accumulator += dt_ms;
        let due = (self.accumulator / self.period_ms).floor();
        if due < 1.0 {
            return 0;
        }

        if due > MAX_CATCH_UP as f64 {
            self.accumulator = 0.0;
            MAX_CATCH_UP
        } else {
            self.accumulator -= due * self.period_ms;
            due as u32
        }
    }

    /// Drop any accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut interval = Interval::new(100.0);
        assert_eq!(interval.advance(60.0), 0);
        assert_eq!(interval.advance(60.0), 1);
        assert_eq!(interval.advance(80.0), 1);
        assert_eq!(interval.advance(10.0), 0);
    }

    #[test]
    fn test_catch_up_is_bounded() {
        let mut interval = Interval::new(50.0);
        assert_eq!(interval.advance(10_000.0), MAX_CATCH_UP);
        assert_eq!(interval.advance(10.0), 0);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut interval = Interval::new(50.0);
        assert_eq!(interval.advance(-5.0), 0);
        assert_eq!(interval.advance(f64::NAN), 0);
        assert_eq!(interval.advance(50.0), 1);
    }
}
