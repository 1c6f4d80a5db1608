//! Glyph rain background.
//!
//! Columns of characters fall down a canvas that is only partially cleared
//! each step, leaving fading trails behind every drop.

mod glyph_rain;

pub use glyph_rain::GlyphRain;
