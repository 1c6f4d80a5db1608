//! Page micro-effects with state or math behind them: cursor trail,
//! statistic count-up, typewriter reveal, card tilt and scroll parallax.

mod counter;
mod parallax;
mod tilt;
mod trail;
mod typewriter;

pub use counter::{CountUp, StatFormat, STAT_MARKERS};
pub use parallax::{parallax_offset, parallax_transform};
pub use tilt::Tilt;
pub use trail::CursorTrail;
pub use typewriter::Typewriter;
