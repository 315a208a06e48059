//! First-hit intersection engine.
//!
//! Pure, stateless tests of a ray (a finite [`Segment`]) against obstacles.
//! Every test has the same result shape, [`IntersectionResult`], so callers can
//! treat segments, rectangles and circles uniformly through [`Intersect`].
//!
//! | Test | Result coordinates | Segment bounds |
//! |------|--------------------|----------------|
//! | [`segment_segment`] | floored | both clamped to `[0, 1]` |
//! | [`segment_rect`] | floored | clamped, edge priority bottom/right/left/top |
//! | [`segment_circle`] | exact | ray treated as infinite line |
//!
//! Degenerate input (zero-length ray, parallel lines, zero-size obstacle)
//! yields `None`; nothing here panics or produces NaN.
//!
//! The `line_*_intersection` helpers take flat coordinates for callers that
//! keep geometry as plain numbers.

mod circle;
mod rect;
mod segment;

pub use circle::{CircleRootPolicy, segment_circle, segment_circle_with};
pub use rect::{EDGE_PRIORITY, segment_rect, segment_rect_edge};
pub use segment::segment_segment;

use crate::core::{AxisAlignedRect, Circle, Point, Segment};
use serde::{Deserialize, Serialize};

/// Hit point, or `None` when the ray is unobstructed.
pub type IntersectionResult = Option<Point>;

/// Anything a ray can strike.
pub trait Intersect {
    /// Where `ray` strikes `self`, if it does.
    fn intersect(&self, ray: &Segment) -> IntersectionResult;
}

impl Intersect for Segment {
    /// The ray is the first segment, so the hit is computed along the ray.
    fn intersect(&self, ray: &Segment) -> IntersectionResult {
        segment_segment(ray, self)
    }
}

impl Intersect for AxisAlignedRect {
    fn intersect(&self, ray: &Segment) -> IntersectionResult {
        segment_rect(ray, self)
    }
}

impl Intersect for Circle {
    fn intersect(&self, ray: &Segment) -> IntersectionResult {
        segment_circle(ray, self)
    }
}

/// Obstacle boundary in a scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Obstacle {
    /// Axis-aligned rectangle (pillar or wall)
    Rect(AxisAlignedRect),
    /// Circle
    Circle(Circle),
}

impl Obstacle {
    /// Intersect with an explicit circle root policy.
    ///
    /// Rectangles ignore the policy.
    pub fn intersect_with(&self, ray: &Segment, policy: CircleRootPolicy) -> IntersectionResult {
        match self {
            Obstacle::Rect(rect) => segment_rect(ray, rect),
            Obstacle::Circle(circle) => segment_circle_with(ray, circle, policy),
        }
    }

    /// Shape name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Obstacle::Rect(_) => "rect",
            Obstacle::Circle(_) => "circle",
        }
    }
}

impl Intersect for Obstacle {
    fn intersect(&self, ray: &Segment) -> IntersectionResult {
        self.intersect_with(ray, CircleRootPolicy::Parity)
    }
}

impl From<AxisAlignedRect> for Obstacle {
    fn from(rect: AxisAlignedRect) -> Self {
        Obstacle::Rect(rect)
    }
}

impl From<Circle> for Obstacle {
    fn from(circle: Circle) -> Self {
        Obstacle::Circle(circle)
    }
}

/// Segment `(x1, y1)-(x2, y2)` against segment `(x3, y3)-(x4, y4)`.
///
/// See [`segment_segment`].
#[allow(clippy::too_many_arguments)]
pub fn line_line_intersection(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> IntersectionResult {
    segment_segment(
        &Segment::from_coords(x1, y1, x2, y2),
        &Segment::from_coords(x3, y3, x4, y4),
    )
}

/// Segment `(x1, y1)-(x2, y2)` against the box with top-left `(xb, yb)` and
/// size `wb` x `hb`.
///
/// See [`segment_rect`].
#[allow(clippy::too_many_arguments)]
pub fn line_box_intersection(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    xb: f64,
    yb: f64,
    wb: f64,
    hb: f64,
) -> IntersectionResult {
    segment_rect(
        &Segment::from_coords(x1, y1, x2, y2),
        &AxisAlignedRect::new(xb, yb, wb, hb),
    )
}

/// Segment `(x1, y1)-(x2, y2)` against the circle centred at `(h, k)` with
/// radius `r`.
///
/// See [`segment_circle`].
pub fn line_circle_intersection(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    h: f64,
    k: f64,
    r: f64,
) -> IntersectionResult {
    segment_circle(&Segment::from_coords(x1, y1, x2, y2), &Circle::new(h, k, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacles_are_polymorphic() {
        let ray = Segment::from_coords(50.0, 0.0, 50.0, 128.0);
        let targets: Vec<Box<dyn Intersect>> = vec![
            Box::new(Segment::from_coords(0.0, 30.0, 100.0, 30.0)),
            Box::new(AxisAlignedRect::new(40.0, 40.0, 20.0, 20.0)),
            Box::new(Circle::new(50.0, 80.0, 16.0)),
        ];

        let hits: Vec<_> = targets.iter().map(|t| t.intersect(&ray)).collect();
        assert_eq!(
            hits,
            vec![
                Some(Point::new(50.0, 30.0)),
                Some(Point::new(50.0, 60.0)),
                Some(Point::new(50.0, 96.0)),
            ]
        );
    }

    #[test]
    fn test_obstacle_enum_delegates() {
        let ray = Segment::from_coords(0.0, 50.0, 80.0, 50.0);
        let circle = Obstacle::from(Circle::new(50.0, 50.0, 10.0));
        assert_eq!(circle.intersect(&ray), Some(Point::new(60.0, 50.0)));
        assert_eq!(
            circle.intersect_with(&ray, CircleRootPolicy::NearestOnSegment),
            Some(Point::new(40.0, 50.0))
        );

        let rect = Obstacle::from(AxisAlignedRect::new(40.0, 40.0, 20.0, 20.0));
        assert_eq!(rect.kind(), "rect");
        assert_eq!(
            rect.intersect_with(&ray, CircleRootPolicy::NearestOnSegment),
            rect.intersect(&ray)
        );
    }

    #[test]
    fn test_flat_helpers() {
        assert_eq!(
            line_line_intersection(0.0, 0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0),
            Some(Point::new(5.0, 5.0))
        );
        assert_eq!(
            line_box_intersection(0.0, 0.0, 100.0, 100.0, 40.0, 40.0, 20.0, 20.0),
            Some(Point::new(60.0, 60.0))
        );
        assert_eq!(
            line_circle_intersection(0.0, 0.0, 0.0, 100.0, 50.0, 50.0, 10.0),
            None
        );
    }
}
