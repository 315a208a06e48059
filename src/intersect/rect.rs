//! Segment-rectangle intersection.
//!
//! The rectangle is decomposed into its four edges, which are tested against
//! the ray in a fixed order. The first edge that reports a crossing wins; the
//! rest are not evaluated.
//!
//! ```text
//!            top (4)
//!        ┌────────────┐
//!        │            │
//! left(3)│            │right (2)
//!        │            │
//!        └────────────┘
//!           bottom (1)
//!                ▲
//!                │  ray approaches from the robot below
//! ```
//!
//! This is first-by-priority, not nearest-of-four.

use super::segment::segment_segment;
use crate::core::{AxisAlignedRect, Point, RectEdge, Segment};

/// Edge evaluation order for [`segment_rect`].
pub const EDGE_PRIORITY: [RectEdge; 4] = [
    RectEdge::Bottom,
    RectEdge::Right,
    RectEdge::Left,
    RectEdge::Top,
];

/// Find where `ray` first strikes `rect`, by edge priority.
///
/// Returns the floored crossing point with the highest-priority edge in
/// [`EDGE_PRIORITY`], or `None` when the ray crosses no edge (including a
/// ray lying entirely inside the rectangle) or the rectangle has no area.
///
/// # Example
/// ```
/// use rekha::core::{AxisAlignedRect, Point, Segment};
/// use rekha::intersect::segment_rect;
///
/// let ray = Segment::from_coords(0.0, 0.0, 100.0, 100.0);
/// let rect = AxisAlignedRect::new(40.0, 40.0, 20.0, 20.0);
/// assert_eq!(segment_rect(&ray, &rect), Some(Point::new(60.0, 60.0)));
/// ```
pub fn segment_rect(ray: &Segment, rect: &AxisAlignedRect) -> Option<Point> {
    segment_rect_edge(ray, rect).map(|(_, point)| point)
}

/// Like [`segment_rect`] but also reports which edge was struck.
pub fn segment_rect_edge(ray: &Segment, rect: &AxisAlignedRect) -> Option<(RectEdge, Point)> {
    if rect.is_empty() {
        return None;
    }

    EDGE_PRIORITY
        .iter()
        .find_map(|&edge| segment_segment(ray, &rect.edge(edge)).map(|p| (edge, p)))
}
