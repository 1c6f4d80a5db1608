//! Card tilt following the pointer.

use crate::config::EffectsConfig;
use crate::math::{Rect, Vector2};

/// Card rotation (degrees) and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation about the horizontal axis.
    pub rotate_x: f32,
    /// Rotation about the vertical axis.
    pub rotate_y: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Tilt {
    /// Untilted, unscaled card.
    pub const REST: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// Tilt for a pointer over `card`. Each axis swings by
    /// `±config.tilt_degrees` between the card edges.
    pub fn from_pointer(pointer: Vector2, card: Rect, config: &EffectsConfig) -> Self {
        if card.is_empty() || !pointer.is_finite() {
            return Self::REST;
        }
        let local = card.to_local(pointer);
        let swing = config.tilt_degrees * 2.0;
        Self {
            rotate_x: (local.y / card.height - 0.5) * swing,
            rotate_y: (local.x / card.width - 0.5) * swing,
            scale: config.tilt_scale,
        }
    }

    /// CSS transform value.
    pub fn to_css(&self, perspective: f32) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            perspective, self.rotate_x, self.rotate_y, self.scale
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let card = Rect::new(100.0, 50.0, 200.0, 100.0);
        let tilt = Tilt::from_pointer(card.center(), card, &EffectsConfig::default());
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(tilt.scale, 1.02);
    }

    #[test]
    fn test_corner_swing() {
        let card = Rect::new(0.0, 0.0, 200.0, 100.0);
        let tilt = Tilt::from_pointer(Vector2::new(200.0, 0.0), card, &EffectsConfig::default());
        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 5.0);
        assert_eq!(
            tilt.to_css(1000.0),
            "perspective(1000px) rotateX(-5deg) rotateY(5deg) scale(1.02)"
        );
    }

    #[test]
    fn test_degenerate_card() {
        let card = Rect::new(0.0, 0.0, 0.0, 100.0);
        let tilt = Tilt::from_pointer(Vector2::ZERO, card, &EffectsConfig::default());
        assert_eq!(tilt, Tilt::REST);
        assert_eq!(
            Tilt::REST.to_css(1000.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)"
        );
    }
}
