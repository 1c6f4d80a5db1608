//! Scroll parallax for the particle canvas.

/// Vertical offset for the canvas at `scroll_y`, or `None` once the first
/// viewport has been scrolled past (the last offset then stays in place).
pub fn parallax_offset(scroll_y: f32, viewport_height: f32, factor: f32) -> Option<f32> {
    if scroll_y.is_finite() && scroll_y < viewport_height {
        Some(scroll_y * factor)
    } else {
        None
    }
}

/// CSS transform for a parallax offset.
pub fn parallax_transform(offset: f32) -> String {
    format!("translateY({}px)", offset)
}
