//! Last known pointer position.

use crate::math::Vector2;

/// Pointer position in surface-local coordinates.
///
/// Written by pointer-move handlers and read by the frame update and glow,
/// always from the same single-threaded host loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    position: Vector2,
}

impl PointerState {
    /// Pointer at an explicit position.
    pub const fn new(position: Vector2) -> Self {
        Self { position }
    }

    /// Pointer resting at the center of a `width` x `height` viewport.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(Vector2::new(width * 0.5, height * 0.5))
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Record a pointer move. Non-finite coordinates are ignored.
    pub fn move_to(&mut self, position: Vector2) {
        if position.is_finite() {
            self.position = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let pointer = PointerState::centered(800.0, 600.0);
        assert_eq!(pointer.position(), Vector2::new(400.0, 300.0));
    }

    #[test]
    fn test_ignores_nan() {
        let mut pointer = PointerState::new(Vector2::new(1.0, 1.0));
        pointer.move_to(Vector2::new(f32::NAN, 3.0));
        assert_eq!(pointer.position(), Vector2::new(1.0, 1.0));
        pointer.move_to(Vector2::new(-4.0, 3.0));
        assert_eq!(pointer.position(), Vector2::new(-4.0, 3.0));
    }
}
