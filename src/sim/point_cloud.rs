//! Accumulated sweep samples.

use crate::core::Point;
use serde::Serialize;

/// One sample dropped by a tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CloudSample {
    /// Hit point, or the sender position when nothing was struck
    pub point: Point,
    /// Whether the ray struck an obstacle
    pub hit: bool,
}

/// Samples collected since the last wrap or reset
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PointCloud {
    samples: Vec<CloudSample>,
}

impl PointCloud {
    /// Create an empty point cloud
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample
    pub fn push(&mut self, sample: CloudSample) {
        self.samples.push(sample);
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in tick order
    pub fn samples(&self) -> &[CloudSample] {
        &self.samples
    }

    /// Iterate over hit points only
    pub fn hits(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().filter(|s| s.hit).map(|s| s.point)
    }

    /// Number of hit samples
    pub fn hit_count(&self) -> usize {
        self.samples.iter().filter(|s| s.hit).count()
    }
}
