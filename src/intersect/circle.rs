//! Segment-circle intersection.
//!
//! The ray `P(t) = start + t * (end - start)` is substituted into
//! `(x - h)^2 + (y - k)^2 = r^2`, giving `A t^2 + B t + C = 0` with:
//!
//! ```text
//! A = |end - start|^2
//! B = 2 * (end - start) · (start - center)
//! C = |start - center|^2 - r^2
//! D = B^2 - 4AC
//! ```
//!
//! # Root selection
//!
//! [`CircleRootPolicy::Parity`] always takes `t = (-B + sqrt(D)) / 2A`, the
//! larger root, and does not clamp `t` to `[0, 1]`. The ray is effectively an
//! infinite line here, unlike the rectangle test. For the lidar sweep the ray
//! runs from the sender toward the robot, so the larger root is the crossing
//! nearest the robot.
//!
//! [`CircleRootPolicy::NearestOnSegment`] takes the smallest root that lies
//! within the segment, which is the first crossing seen travelling from
//! `start` to `end`.

use crate::core::{Circle, Point, Segment};
use serde::{Deserialize, Serialize};

/// Which root of the ray/circle quadratic is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleRootPolicy {
    /// Larger root, no clamping to the segment.
    #[default]
    Parity,
    /// Smallest root within `[0, 1]`.
    NearestOnSegment,
}

/// Find where `ray` meets `circle` using [`CircleRootPolicy::Parity`].
///
/// The returned point is not floored. Tangential contact (`D == 0`) is a hit.
/// Returns `None` for a miss, a zero-length ray, a zero-radius circle, or
/// coordinates so large the quadratic overflows.
///
/// # Example
/// ```
/// use rekha::core::{Circle, Point, Segment};
/// use rekha::intersect::segment_circle;
///
/// let ray = Segment::from_coords(0.0, 50.0, 80.0, 50.0);
/// let circle = Circle::new(50.0, 50.0, 10.0);
/// assert_eq!(segment_circle(&ray, &circle), Some(Point::new(60.0, 50.0)));
/// ```
pub fn segment_circle(ray: &Segment, circle: &Circle) -> Option<Point> {
    segment_circle_with(ray, circle, CircleRootPolicy::Parity)
}

/// Find where `ray` meets `circle` using the given root policy.
pub fn segment_circle_with(
    ray: &Segment,
    circle: &Circle,
    policy: CircleRootPolicy,
) -> Option<Point> {
    if circle.is_empty() {
        return None;
    }

    let d = ray.direction();
    let a = d.length_squared();
    if a == 0.0 {
        return None;
    }

    let f = ray.start - circle.center;
    let b = 2.0 * d.dot(&f);
    let c = f.length_squared() - circle.radius * circle.radius;

    // NaN when the coefficients overflow; that is not a hit either
    let discriminant = b * b - 4.0 * a * c;
    if discriminant.is_nan() || discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = match policy {
        CircleRootPolicy::Parity => (-b + sqrt_d) / (2.0 * a),
        CircleRootPolicy::NearestOnSegment => {
            let near = (-b - sqrt_d) / (2.0 * a);
            let far = (-b + sqrt_d) / (2.0 * a);
            [near, far]
                .into_iter()
                .find(|t| (0.0..=1.0).contains(t))?
        }
    };

    let hit = ray.point_at(t);
    hit.is_finite().then_some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn target() -> Circle {
        Circle::new(50.0, 50.0, 10.0)
    }

    fn assert_point(p: Option<Point>, x: f64, y: f64) {
        let p = p.expect("expected a hit");
        assert_relative_eq!(p.x, x, epsilon = 1e-9);
        assert_relative_eq!(p.y, y, epsilon = 1e-9);
    }

    #[test]
    fn test_through_center_takes_larger_root() {
        let ray = Segment::from_coords(0.0, 50.0, 80.0, 50.0);
        assert_point(segment_circle(&ray, &target()), 60.0, 50.0);

        // Reversing the ray reverses which crossing is the larger root
        assert_point(segment_circle(&ray.reversed(), &target()), 40.0, 50.0);
    }

    #[test]
    fn test_nearest_on_segment() {
        let ray = Segment::from_coords(0.0, 50.0, 80.0, 50.0);
        assert_point(
            segment_circle_with(&ray, &target(), CircleRootPolicy::NearestOnSegment),
            40.0,
            50.0,
        );

        // Starting inside: only the exit crossing is on the segment
        let inside = Segment::from_coords(50.0, 50.0, 100.0, 50.0);
        assert_point(
            segment_circle_with(&inside, &target(), CircleRootPolicy::NearestOnSegment),
            60.0,
            50.0,
        );
    }

    #[test]
    fn test_parity_does_not_clamp() {
        // Ray stops well short of the circle, but its line passes through it
        let short = Segment::from_coords(0.0, 50.0, 10.0, 50.0);
        assert_point(segment_circle(&short, &target()), 60.0, 50.0);
        assert_eq!(
            segment_circle_with(&short, &target(), CircleRootPolicy::NearestOnSegment),
            None
        );
    }

    #[test]
    fn test_tangent_is_hit() {
        let ray = Segment::from_coords(0.0, 40.0, 100.0, 40.0);
        assert_point(segment_circle(&ray, &target()), 50.0, 40.0);
    }

    #[test]
    fn test_miss() {
        let ray = Segment::from_coords(0.0, 0.0, 0.0, 100.0);
        assert_eq!(segment_circle(&ray, &target()), None);

        let ray = Segment::from_coords(0.0, 39.0, 100.0, 39.0);
        assert_eq!(segment_circle(&ray, &target()), None);
    }

    #[test]
    fn test_degenerate_inputs() {
        let point = Segment::from_coords(50.0, 50.0, 50.0, 50.0);
        assert_eq!(segment_circle(&point, &target()), None);

        let dot = Circle::new(50.0, 50.0, 0.0);
        let ray = Segment::from_coords(0.0, 50.0, 100.0, 50.0);
        assert_eq!(segment_circle(&ray, &dot), None);
    }

    #[test]
    fn test_overflowing_coefficients_never_yield_nan() {
        // |d|^2 overflows to infinity, so the discriminant is inf - inf
        let ray = Segment::from_coords(0.0, 0.0, 1e160, 1e160);
        let circle = Circle::new(5e159, 5e159, 1e159);

        for policy in [CircleRootPolicy::Parity, CircleRootPolicy::NearestOnSegment] {
            if let Some(p) = segment_circle_with(&ray, &circle, policy) {
                assert!(p.is_finite(), "{:?} produced {:?}", policy, p);
            }
        }
        assert_eq!(segment_circle(&ray, &circle), None);
    }

    #[test]
    fn test_diagonal_hit_lies_on_circle() {
        let ray = Segment::from_coords(0.0, 0.0, 100.0, 100.0);
        let hit = segment_circle(&ray, &target()).unwrap();
        assert_relative_eq!(target().residual(hit), 0.0, epsilon = 1e-9);
        assert!(hit.x > 50.0 && hit.y > 50.0);
    }
}
