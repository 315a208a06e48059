//! Scene and sweep configuration.
//!
//! Loads a single TOML file. Every field has a default, and the defaults
//! describe the reference floor plan, so an empty file is a valid scene.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! SimConfig
//! ├── FloorConfig        # width, height
//! ├── RobotConfig        # body rect, sender/receiver gap
//! ├── SweepConfig        # step, sender_y, tick interval, circle policy
//! ├── pillars: [RectSpec]
//! ├── walls:   [RectSpec]   (only tested when sweep.detect_walls)
//! └── circles: [CircleSpec]
//! ```
//!
//! # Example TOML
//!
//! ```toml
//! [floor]
//! width = 600.0
//! height = 500.0
//!
//! [sweep]
//! step = 5.0
//! circle_policy = "parity"   # or "nearest_on_segment"
//!
//! [[pillars]]
//! name = "pillar1"
//! x = 150.0
//! y = 120.0
//! width = 40.0
//! height = 40.0
//!
//! [[circles]]
//! name = "circle1"
//! x = 300.0
//! y = 180.0
//! radius = 20.0
//! ```

mod scene;
mod sweep;

pub use scene::{CircleSpec, FloorConfig, RectSpec, RobotConfig};
pub use sweep::SweepConfig;

use crate::error::{Error, Result};
use scene::{default_circles, default_pillars, default_walls};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level simulation configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimConfig {
    /// Floor dimensions
    #[serde(default)]
    pub floor: FloorConfig,

    /// Robot geometry
    #[serde(default)]
    pub robot: RobotConfig,

    /// Sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Pillars, tested in declaration order after circles
    #[serde(default = "default_pillars")]
    pub pillars: Vec<RectSpec>,

    /// Boundary walls
    #[serde(default = "default_walls")]
    pub walls: Vec<RectSpec>,

    /// Circles, tested first
    #[serde(default = "default_circles")]
    pub circles: Vec<CircleSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floor: FloorConfig::default(),
            robot: RobotConfig::default(),
            sweep: SweepConfig::default(),
            pillars: default_pillars(),
            walls: default_walls(),
            circles: default_circles(),
        }
    }
}

impl SimConfig {
    /// Load and validate configuration from a TOML file
    ///
    /// # Example
    /// ```no_run
    /// use rekha::config::SimConfig;
    ///
    /// let config = SimConfig::load("configs/scene.toml")?;
    /// # Ok::<(), rekha::Error>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check the scene for values the sweep cannot work with.
    ///
    /// Zero-size obstacles are accepted; they are never struck.
    pub fn validate(&self) -> Result<()> {
        let finite = |what: &str, values: &[f64]| -> Result<()> {
            if values.iter().all(|v| v.is_finite()) {
                Ok(())
            } else {
                Err(Error::InvalidScene(format!("{} has non-finite values", what)))
            }
        };

        finite("floor", &[self.floor.width, self.floor.height])?;
        if self.floor.width <= 0.0 || self.floor.height <= 0.0 {
            return Err(Error::InvalidScene(format!(
                "floor must have positive size, got {}x{}",
                self.floor.width, self.floor.height
            )));
        }

        let robot = &self.robot;
        finite(
            "robot",
            &[
                robot.x,
                robot.y,
                robot.width,
                robot.height,
                robot.sender_receiver_gap,
            ],
        )?;
        if robot.width < 0.0 || robot.height < 0.0 || robot.sender_receiver_gap < 0.0 {
            return Err(Error::InvalidScene(
                "robot size and sender/receiver gap must be non-negative".to_string(),
            ));
        }
        let receiver = robot.receiver();
        if receiver.x < 0.0
            || receiver.x > self.floor.width
            || receiver.y < 0.0
            || receiver.y > self.floor.height
        {
            return Err(Error::InvalidScene(format!(
                "robot receiver ({}, {}) is outside the floor",
                receiver.x, receiver.y
            )));
        }

        finite("sweep", &[self.sweep.step, self.sweep.sender_y])?;
        if self.sweep.step <= 0.0 {
            return Err(Error::InvalidScene(format!(
                "sweep step must be positive, got {}",
                self.sweep.step
            )));
        }

        for spec in self.pillars.iter().chain(&self.walls) {
            finite(&spec.name, &[spec.x, spec.y, spec.width, spec.height])?;
            if spec.width < 0.0 || spec.height < 0.0 {
                return Err(Error::InvalidScene(format!(
                    "{} has negative size {}x{}",
                    spec.name, spec.width, spec.height
                )));
            }
        }

        for spec in &self.circles {
            finite(&spec.name, &[spec.x, spec.y, spec.radius])?;
            if spec.radius < 0.0 {
                return Err(Error::InvalidScene(format!(
                    "{} has negative radius {}",
                    spec.name, spec.radius
                )));
            }
        }

        Ok(())
    }
}
