//! Core value types for the intersection engine.
//!
//! - [`Point`]: floor-plan coordinate (f64, y down)
//! - [`Segment`]: finite directed segment (the lidar ray, rectangle edges)
//! - [`AxisAlignedRect`] and [`Circle`]: obstacle boundaries
//!
//! All types are `Copy` values with no identity beyond the call that builds them.

mod point;
mod segment;
mod shapes;

pub use point::Point;
pub use segment::Segment;
pub use shapes::{AxisAlignedRect, Circle, RectEdge};
