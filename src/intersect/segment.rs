//! Segment-segment intersection.
//!
//! Both segments are parametrized and the 2x2 system is solved with Cramer's
//! rule:
//!
//! ```text
//! A(u) = A.start + u * (A.end - A.start)
//! B(v) = B.start + v * (B.end - B.start)
//!
//! denominator = dB.y * dA.x - dB.x * dA.y
//! u = (dB.x * (A.start.y - B.start.y) - dB.y * (A.start.x - B.start.x)) / denominator
//! v = (dA.x * (A.start.y - B.start.y) - dA.y * (A.start.x - B.start.x)) / denominator
//! ```
//!
//! A crossing requires `u` and `v` in the closed interval `[0, 1]`.

use crate::core::{Point, Segment};

/// Find where segment `a` crosses segment `b`.
///
/// Returns the crossing point computed from `a`'s parametrization and floored
/// onto the pixel grid, or `None` when:
/// - either segment has zero length
/// - the segments are parallel, including collinear overlap
/// - the infinite lines cross outside either segment
///
/// Touching at an endpoint counts as a crossing.
///
/// # Example
/// ```
/// use rekha::core::{Point, Segment};
/// use rekha::intersect::segment_segment;
///
/// let a = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
/// let b = Segment::from_coords(0.0, 10.0, 10.0, 0.0);
/// assert_eq!(segment_segment(&a, &b), Some(Point::new(5.0, 5.0)));
/// ```
pub fn segment_segment(a: &Segment, b: &Segment) -> Option<Point> {
    if a.is_degenerate() || b.is_degenerate() {
        return None;
    }

    let da = a.direction();
    let db = b.direction();

    let denominator = db.y * da.x - db.x * da.y;
    if denominator == 0.0 {
        return None;
    }

    let offset = a.start - b.start;
    let u = (db.x * offset.y - db.y * offset.x) / denominator;
    let v = (da.x * offset.y - da.y * offset.x) / denominator;

    // NaN fails both range checks
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }

    Some(a.point_at(u).floor())
}
