//! Lidar sweep simulation.
//!
//! Drives the intersection engine across a scene one tick at a time:
//!
//! ```text
//!   sender (signal_x, sender_y) ──▶ ─ ─ ─ ▶ receiver (robot mid, robot y)
//!                 │
//!                 ▼
//!     circles → pillars → walls   (first hit wins)
//!                 │
//!                 ▼
//!     PointCloud.push(hit point | sender position)
//! ```
//!
//! Time is external: callers invoke [`LidarSweep::tick`] at whatever cadence
//! they like. The `rekha` binary optionally sleeps `tick_interval_ms` between
//! ticks.

mod point_cloud;
mod state;
mod sweep;

pub use point_cloud::{CloudSample, PointCloud};
pub use state::SimulationState;
pub use sweep::{Hit, LidarSweep, NamedObstacle, SweepSnapshot, TickOutcome};
