//! # Rekha: Lidar Sweep Intersection Engine
//!
//! First-hit geometry for a simulated 2D lidar. A ray runs from a sender on
//! the top edge of the floor down to a receiver on the robot; the engine
//! reports where it first strikes a segment, an axis-aligned rectangle or a
//! circle.
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha::core::{AxisAlignedRect, Point, Segment};
//! use rekha::intersect::Intersect;
//!
//! let ray = Segment::from_coords(0.0, 0.0, 100.0, 100.0);
//! let pillar = AxisAlignedRect::new(40.0, 40.0, 20.0, 20.0);
//! assert_eq!(pillar.intersect(&ray), Some(Point::new(60.0, 60.0)));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Points, segments, rectangles and circles
//! - [`intersect`]: Stateless ray tests and the [`Intersect`](intersect::Intersect) trait
//! - [`config`]: Scene and sweep configuration (TOML)
//! - [`sim`]: The [`LidarSweep`] tick loop, state machine and point cloud
//! - [`error`]: Error types
//!
//! ## Coordinate Frame
//!
//! Screen coordinates: origin at the top-left of the floor, x to the right,
//! y down. Rectangles are given by their top-left corner.

pub mod config;
pub mod core;
pub mod error;
pub mod intersect;
pub mod sim;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use intersect::{CircleRootPolicy, Intersect, IntersectionResult, Obstacle};
pub use sim::{LidarSweep, PointCloud, SimulationState};
