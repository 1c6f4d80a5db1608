//! Axis-aligned rectangle in client coordinates.

use super::Vector2;
use serde::{Deserialize, Serialize};

/// A client-space rectangle, shaped like a DOM bounding rect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a new rect.
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rect from its center and size.
    pub fn from_center_size(center: Vector2, size: Vector2) -> Self {
        Self {
            left: center.x - size.x * 0.5,
            top: center.y - size.y * 0.5,
            width: size.x,
            height: size.y,
        }
    }

    /// Get the center of the rect.
    #[inline]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Check if the rect has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Point relative to the top-left corner.
    #[inline]
    pub fn to_local(&self, point: Vector2) -> Vector2 {
        Vector2::new(point.x - self.left, point.y - self.top)
    }

    /// Check if a point is inside the rect.
    #[inline]
    pub fn contains_point(&self, point: &Vector2) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_size() {
        let r = Rect::from_center_size(Vector2::new(50.0, 20.0), Vector2::new(100.0, 40.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(r.center().approx_eq(&Vector2::new(50.0, 20.0), 1e-6));
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(r.contains_point(&Vector2::new(15.0, 15.0)));
        assert!(!r.contains_point(&Vector2::new(25.0, 15.0)));
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
    }
}
