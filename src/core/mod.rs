//! # Core Module
//!
//! Timing utilities shared by every effect: the frame clock and the
//! fixed-period timers derived from it.

mod clock;
mod interval;

pub use clock::Clock;
pub use interval::{Interval, MAX_CATCH_UP};
