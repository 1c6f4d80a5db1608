//! Bounded history of recent pointer positions.

use std::collections::VecDeque;

use crate::math::Vector2;

/// The most recent pointer positions, oldest first.
#[derive(Debug, Clone)]
pub struct CursorTrail {
    points: VecDeque<Vector2>,
    capacity: usize,
}

impl CursorTrail {
    /// Create a trail holding at most `capacity` points (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, dropping the oldest when full.
    pub fn push(&mut self, point: Vector2) {
        if !point.is_finite() {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &Vector2> {
        self.points.iter()
    }

    /// Most recent point.
    pub fn latest(&self) -> Option<Vector2> {
        self.points.back().copied()
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interleaved `x, y` coordinates, oldest first.
    pub fn to_flat(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Forget all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_bounded() {
        let mut trail = CursorTrail::new(30);
        for i in 0..100 {
            trail.push(Vector2::new(i as f32, 0.0));
            assert!(trail.len() <= 30);
        }
        assert_eq!(trail.len(), 30);
        assert_eq!(trail.points().next(), Some(&Vector2::new(70.0, 0.0)));
        assert_eq!(trail.latest(), Some(Vector2::new(99.0, 0.0)));
    }

    #[test]
    fn test_flat_layout() {
        let mut trail = CursorTrail::new(0);
        trail.push(Vector2::new(1.0, 2.0));
        trail.push(Vector2::new(3.0, 4.0));
        trail.push(Vector2::new(f32::NAN, 4.0));
        assert_eq!(trail.to_flat(), vec![3.0, 4.0]);
    }
}
