//! Sweep timing and detection settings.

use crate::intersect::CircleRootPolicy;
use serde::{Deserialize, Serialize};

/// Lidar sweep configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SweepConfig {
    /// Sender advance per tick along x
    #[serde(default = "default_step")]
    pub step: f64,

    /// Sender y coordinate (top of the floor)
    #[serde(default)]
    pub sender_y: f64,

    /// Wall-clock interval between ticks when running in real time
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Test walls as well as pillars and circles
    #[serde(default)]
    pub detect_walls: bool,

    /// Root selection for circle hits
    #[serde(default)]
    pub circle_policy: CircleRootPolicy,
}

fn default_step() -> f64 {
    5.0
}
fn default_tick_interval_ms() -> u64 {
    100
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            sender_y: 0.0,
            tick_interval_ms: default_tick_interval_ms(),
            detect_walls: false,
            circle_policy: CircleRootPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let sweep: SweepConfig = toml::from_str("step = 2.5").unwrap();
        assert_eq!(sweep.step, 2.5);
        assert_eq!(sweep.tick_interval_ms, 100);
        assert!(!sweep.detect_walls);
        assert_eq!(sweep.circle_policy, CircleRootPolicy::Parity);
    }

    #[test]
    fn test_policy_names() {
        let sweep: SweepConfig = toml::from_str(r#"circle_policy = "nearest_on_segment""#).unwrap();
        assert_eq!(sweep.circle_policy, CircleRootPolicy::NearestOnSegment);
    }
}
