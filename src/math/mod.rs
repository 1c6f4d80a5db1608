//! # Math Module
//!
//! Small 2D math layer for viewport-space effects: vectors, colors and
//! client rectangles.

mod color;
mod rect;
mod vector2;

pub use color::Color;
pub use rect::Rect;
pub use vector2::Vector2;

/// Common math constants.
pub mod consts {
    /// Pi constant.
    pub const PI: f32 = std::f32::consts::PI;
    /// Two times Pi.
    pub const TWO_PI: f32 = PI * 2.0;
}
