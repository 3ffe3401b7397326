//! Axis-aligned bounding boxes
//!
//! Screen-space convention: origin at the top-left of the play field, +y
//! points down. `pos` is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on the x axis (touching edges do not count)
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_horizontally(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_edges() {
        let a = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.left(), 10.0);
        assert_eq!(a.right(), 40.0);
        assert_eq!(a.top(), 20.0);
        assert_eq!(a.bottom(), 60.0);
        assert_eq!(a.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_identical_boxes_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(10.0, 0.0, 10.0, 10.0);
        let below = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_horizontal_only() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let far_below = rect(5.0, 100.0, 10.0, 10.0);
        assert!(a.overlaps_horizontally(&far_below));
        assert!(!a.overlaps(&far_below));
    }
}
