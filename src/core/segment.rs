//! Finite directed line segment.

use super::Point;
use serde::{Deserialize, Serialize};

/// A 2D line segment defined by its endpoints.
///
/// The lidar ray is a `Segment` from the sender position to the robot, and
/// rectangle edges are `Segment`s derived on demand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
}

impl Segment {
    /// Create a new segment from two points.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from raw coordinates.
    #[inline]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    /// Zero-length segment (`start == end`).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Point at parameter `t` along the segment.
    ///
    /// `t = 0` is start, `t = 1` is end. Values outside `[0, 1]` extrapolate
    /// along the infinite line.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        )
    }

    /// Same segment with start and end swapped.
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}
