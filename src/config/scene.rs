//! Static scene description: floor, robot, and obstacles.

use crate::core::{AxisAlignedRect, Circle, Point};
use serde::{Deserialize, Serialize};

/// Floor dimensions
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FloorConfig {
    /// Floor width; the sweep wraps once the sender reaches it
    #[serde(default = "default_floor_width")]
    pub width: f64,

    /// Floor height
    #[serde(default = "default_floor_height")]
    pub height: f64,
}

fn default_floor_width() -> f64 {
    600.0
}
fn default_floor_height() -> f64 {
    500.0
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            width: default_floor_width(),
            height: default_floor_height(),
        }
    }
}

/// Robot body carrying the lidar receiver
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RobotConfig {
    /// Top-left x of the robot body
    #[serde(default = "default_robot_x")]
    pub x: f64,

    /// Top-left y of the robot body; the ray ends on this line
    #[serde(default = "default_robot_y")]
    pub y: f64,

    /// Body width
    #[serde(default = "default_robot_size")]
    pub width: f64,

    /// Body height
    #[serde(default = "default_robot_size")]
    pub height: f64,

    /// Horizontal offset of each drawn beam from the body midpoint
    #[serde(default = "default_sender_receiver_gap")]
    pub sender_receiver_gap: f64,
}

fn default_robot_x() -> f64 {
    210.0
}
fn default_robot_y() -> f64 {
    300.0
}
fn default_robot_size() -> f64 {
    70.0
}
fn default_sender_receiver_gap() -> f64 {
    5.0
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            x: default_robot_x(),
            y: default_robot_y(),
            width: default_robot_size(),
            height: default_robot_size(),
            sender_receiver_gap: default_sender_receiver_gap(),
        }
    }
}

impl RobotConfig {
    /// Point on the robot's top edge where the ray terminates
    pub fn receiver(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }
}

/// Named rectangular obstacle (pillar or wall)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RectSpec {
    /// Identifier reported with hits
    pub name: String,
    /// Top-left x
    pub x: f64,
    /// Top-left y
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl RectSpec {
    /// Create a named rectangle
    pub fn new(name: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            width,
            height,
        }
    }

    /// Geometry of this obstacle
    pub fn rect(&self) -> AxisAlignedRect {
        AxisAlignedRect::new(self.x, self.y, self.width, self.height)
    }
}

/// Named circular obstacle
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CircleSpec {
    /// Identifier reported with hits
    pub name: String,
    /// Center x
    pub x: f64,
    /// Center y
    pub y: f64,
    /// Radius
    pub radius: f64,
}

impl CircleSpec {
    /// Create a named circle
    pub fn new(name: &str, x: f64, y: f64, radius: f64) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            radius,
        }
    }

    /// Geometry of this obstacle
    pub fn circle(&self) -> Circle {
        Circle::new(self.x, self.y, self.radius)
    }
}

pub(crate) fn default_pillars() -> Vec<RectSpec> {
    vec![
        RectSpec::new("pillar1", 150.0, 120.0, 40.0, 40.0),
        RectSpec::new("pillar2", 240.0, 40.0, 40.0, 40.0),
        RectSpec::new("pillar3", 370.0, 80.0, 40.0, 40.0),
    ]
}

pub(crate) fn default_walls() -> Vec<RectSpec> {
    vec![
        RectSpec::new("wall1", 0.0, 450.0, 150.0, 50.0),
        RectSpec::new("wall2", 450.0, 450.0, 150.0, 50.0),
    ]
}

pub(crate) fn default_circles() -> Vec<CircleSpec> {
    vec![CircleSpec::new("circle1", 300.0, 180.0, 20.0)]
}
