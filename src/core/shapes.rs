//! Obstacle boundary shapes: axis-aligned rectangles and circles.

use super::{Point, Segment};
use serde::{Deserialize, Serialize};

/// One of the four boundary edges of an [`AxisAlignedRect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RectEdge {
    /// `(x, y) -> (x + w, y)`
    Top,
    /// `(x + w, y) -> (x + w, y + h)`
    Right,
    /// `(x, y + h) -> (x + w, y + h)`
    Bottom,
    /// `(x, y) -> (x, y + h)`
    Left,
}

/// Axis-aligned rectangle given by its top-left corner and size.
///
/// Y grows downward, so the bottom edge sits at `y + height`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedRect {
    /// Top-left corner
    pub origin: Point,
    /// Width (non-negative)
    pub width: f64,
    /// Height (non-negative)
    pub height: f64,
}

impl AxisAlignedRect {
    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Left x coordinate
    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    /// Top y coordinate
    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    /// Right x coordinate
    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.x + self.width
    }

    /// Bottom y coordinate
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.height
    }

    /// No positive area (zero or negative width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width.is_nan() || self.height.is_nan() || self.width <= 0.0 || self.height <= 0.0
    }

    /// Derive one boundary edge as a segment.
    ///
    /// Edges run left-to-right or top-to-bottom.
    pub fn edge(&self, edge: RectEdge) -> Segment {
        let (l, t, r, b) = (self.left(), self.top(), self.right(), self.bottom());
        match edge {
            RectEdge::Top => Segment::from_coords(l, t, r, t),
            RectEdge::Right => Segment::from_coords(r, t, r, b),
            RectEdge::Bottom => Segment::from_coords(l, b, r, b),
            RectEdge::Left => Segment::from_coords(l, t, l, b),
        }
    }
}

/// Circle given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center `(h, k)`
    pub center: Point,
    /// Radius (non-negative)
    pub radius: f64,
}

impl Circle {
    /// Create a circle from its center coordinates and radius.
    #[inline]
    pub const fn new(h: f64, k: f64, radius: f64) -> Self {
        Self {
            center: Point::new(h, k),
            radius,
        }
    }

    /// No positive radius.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius.is_nan() || self.radius <= 0.0
    }

    /// Signed residual of the circle equation at `p`:
    /// `(x - h)^2 + (y - k)^2 - r^2`.
    ///
    /// Zero on the boundary, negative inside.
    #[inline]
    pub fn residual(&self, p: Point) -> f64 {
        p.distance_squared(&self.center) - self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = AxisAlignedRect::new(40.0, 40.0, 20.0, 20.0);
        assert_eq!(
            r.edge(RectEdge::Bottom),
            Segment::from_coords(40.0, 60.0, 60.0, 60.0)
        );
        assert_eq!(
            r.edge(RectEdge::Right),
            Segment::from_coords(60.0, 40.0, 60.0, 60.0)
        );
        assert_eq!(
            r.edge(RectEdge::Left),
            Segment::from_coords(40.0, 40.0, 40.0, 60.0)
        );
        assert_eq!(
            r.edge(RectEdge::Top),
            Segment::from_coords(40.0, 40.0, 60.0, 40.0)
        );
    }

    #[test]
    fn test_rect_empty() {
        assert!(AxisAlignedRect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(AxisAlignedRect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(!AxisAlignedRect::new(0.0, 0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn test_nan_or_negative_size_is_empty() {
        assert!(AxisAlignedRect::new(0.0, 0.0, f64::NAN, 10.0).is_empty());
        assert!(AxisAlignedRect::new(0.0, 0.0, 10.0, f64::NAN).is_empty());
        assert!(AxisAlignedRect::new(0.0, 0.0, -5.0, 10.0).is_empty());

        assert!(Circle::new(0.0, 0.0, f64::NAN).is_empty());
        assert!(Circle::new(0.0, 0.0, -1.0).is_empty());
        assert!(Circle::new(0.0, 0.0, 0.0).is_empty());
        assert!(!Circle::new(0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_circle_residual() {
        let c = Circle::new(50.0, 50.0, 10.0);
        assert_eq!(c.residual(Point::new(60.0, 50.0)), 0.0);
        assert!(c.residual(Point::new(50.0, 50.0)) < 0.0);
        assert!(c.residual(Point::new(70.0, 50.0)) > 0.0);
    }
}
