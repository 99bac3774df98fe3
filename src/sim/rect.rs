//! Axis-aligned rectangles for bricks, paddle and ball bounds
//!
//! Screen coordinates: origin at the top-left corner, +Y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Overlap test with closed edges, so touching rectangles intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// True if `y` lies strictly between the top and bottom edges.
    ///
    /// Used to classify a hit as coming from the side: the ball's center is
    /// level with the body it struck.
    pub fn spans_y(&self, y: f32) -> bool {
        self.min_y() < y && y < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap_and_touch() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Shared edge counts as contact
        assert!(a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.5, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, -11.0, 10.0, 10.0)));
    }

    #[test]
    fn test_around_circle() {
        let r = Rect::around_circle(Vec2::new(50.0, 40.0), 10.0);
        assert_eq!(r, Rect::new(40.0, 30.0, 20.0, 20.0));
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_spans_y_is_strict() {
        let r = Rect::new(0.0, 100.0, 50.0, 20.0);
        assert!(r.spans_y(110.0));
        assert!(!r.spans_y(100.0));
        assert!(!r.spans_y(120.0));
        assert!(!r.spans_y(90.0));
    }
}
