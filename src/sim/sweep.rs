//! Lidar sweep simulator.
//!
//! The sender slides along the top of the floor; each tick casts one ray from
//! the sender to the receiver on the robot, finds the first obstacle struck,
//! and drops a sample into the point cloud.

use super::point_cloud::{CloudSample, PointCloud};
use super::state::SimulationState;
use crate::config::SimConfig;
use crate::core::{Point, Segment};
use crate::error::Result;
use crate::intersect::Obstacle;
use serde::Serialize;

/// Obstacle with the name reported on hits
#[derive(Clone, Debug, PartialEq)]
pub struct NamedObstacle {
    /// Identifier from the scene
    pub name: String,
    /// Geometry
    pub obstacle: Obstacle,
}

/// Obstacle struck by a ray
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hit {
    /// Name of the obstacle
    pub obstacle: String,
    /// Shape of the obstacle ("rect" or "circle")
    pub kind: &'static str,
    /// Where the ray terminates
    pub point: Point,
}

/// Result of one running tick
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickOutcome {
    /// 1-based tick counter since construction or reset
    pub tick: u64,
    /// Ray tested this tick (sender to receiver)
    pub ray: Segment,
    /// Drawn beams, each from the sample point to the receiver offset by the
    /// sender/receiver gap (left, right)
    pub beams: [Segment; 2],
    /// First obstacle struck
    pub hit: Option<Hit>,
    /// Sample appended to the point cloud
    pub sample: CloudSample,
    /// The sender reached the floor edge; cloud cleared and sweep restarted
    pub wrapped: bool,
}

/// Serializable view of the sweep
#[derive(Clone, Debug, Serialize)]
pub struct SweepSnapshot {
    /// Current state
    pub state: SimulationState,
    /// Ticks since construction or reset
    pub ticks: u64,
    /// Current sender x
    pub signal_x: f64,
    /// Accumulated samples
    pub point_cloud: PointCloud,
}

/// Lidar sweep simulator
pub struct LidarSweep {
    config: SimConfig,
    obstacles: Vec<NamedObstacle>,
    state: SimulationState,
    signal_x: f64,
    cloud: PointCloud,
    ticks: u64,
}

impl LidarSweep {
    /// Create a sweep over a validated scene
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let obstacles = build_obstacles(&config);

        log::info!(
            "Sweep ready: {} obstacles, floor {}x{}, step {}",
            obstacles.len(),
            config.floor.width,
            config.floor.height,
            config.sweep.step
        );

        Ok(Self {
            config,
            obstacles,
            state: SimulationState::Idle,
            signal_x: 0.0,
            cloud: PointCloud::new(),
            ticks: 0,
        })
    }

    /// Begin or resume the sweep
    pub fn start(&mut self) -> Result<()> {
        self.state = self.state.start()?;
        log::info!("Sweep started at x={}", self.signal_x);
        Ok(())
    }

    /// Freeze the sweep, keeping position and cloud
    pub fn pause(&mut self) -> Result<()> {
        self.state = self.state.pause()?;
        log::info!("Sweep paused at x={}", self.signal_x);
        Ok(())
    }

    /// Stop, rewind to x = 0 and clear the cloud
    pub fn reset(&mut self) {
        self.state = self.state.reset();
        self.signal_x = 0.0;
        self.ticks = 0;
        self.cloud.clear();
        log::info!("Sweep reset");
    }

    /// Advance one step.
    ///
    /// Returns `None` and changes nothing unless the sweep is running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.state.is_running() {
            return None;
        }

        let ray = self.ray();
        let hit = self.first_hit(&ray);

        let sample = CloudSample {
            point: hit.as_ref().map_or(ray.start, |h| h.point),
            hit: hit.is_some(),
        };
        let beams = self.beams(sample.point);
        self.cloud.push(sample);

        if let Some(h) = &hit {
            log::debug!(
                "Ray from x={} struck {} {} at ({:.2}, {:.2})",
                self.signal_x,
                h.kind,
                h.obstacle,
                h.point.x,
                h.point.y
            );
        }

        let wrapped = self.advance();
        self.ticks += 1;

        Some(TickOutcome {
            tick: self.ticks,
            ray,
            beams,
            hit,
            sample,
            wrapped,
        })
    }

    /// Ray for the current sender position
    pub fn ray(&self) -> Segment {
        Segment::new(
            Point::new(self.signal_x, self.config.sweep.sender_y),
            self.config.robot.receiver(),
        )
    }

    /// First obstacle struck by `ray`, in scene precedence order
    pub fn first_hit(&self, ray: &Segment) -> Option<Hit> {
        let policy = self.config.sweep.circle_policy;
        self.obstacles.iter().find_map(|named| {
            named
                .obstacle
                .intersect_with(ray, policy)
                .map(|point| Hit {
                    obstacle: named.name.clone(),
                    kind: named.obstacle.kind(),
                    point,
                })
        })
    }

    fn beams(&self, from: Point) -> [Segment; 2] {
        let receiver = self.config.robot.receiver();
        let gap = self.config.robot.sender_receiver_gap;
        [
            Segment::new(from, Point::new(receiver.x - gap, receiver.y)),
            Segment::new(from, Point::new(receiver.x + gap, receiver.y)),
        ]
    }

    /// Move the sender; wrap and clear once past the floor edge.
    fn advance(&mut self) -> bool {
        if self.signal_x >= self.config.floor.width {
            log::info!(
                "Sweep wrapped after {} samples ({} hits)",
                self.cloud.len(),
                self.cloud.hit_count()
            );
            self.cloud.clear();
            self.signal_x = 0.0;
            true
        } else {
            self.signal_x += self.config.sweep.step;
            false
        }
    }

    /// Current state
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Current sender x
    pub fn signal_x(&self) -> f64 {
        self.signal_x
    }

    /// Samples collected so far
    pub fn point_cloud(&self) -> &PointCloud {
        &self.cloud
    }

    /// Obstacles in the order they are tested
    pub fn obstacles(&self) -> &[NamedObstacle] {
        &self.obstacles
    }

    /// Scene configuration
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Ticks since construction or reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Serializable copy of the current sweep
    pub fn snapshot(&self) -> SweepSnapshot {
        SweepSnapshot {
            state: self.state,
            ticks: self.ticks,
            signal_x: self.signal_x,
            point_cloud: self.cloud.clone(),
        }
    }
}

/// Obstacles in test order: circles, pillars, then walls if enabled.
fn build_obstacles(config: &SimConfig) -> Vec<NamedObstacle> {
    let circles = config.circles.iter().map(|c| NamedObstacle {
        name: c.name.clone(),
        obstacle: Obstacle::Circle(c.circle()),
    });
    let pillars = config.pillars.iter().map(|p| NamedObstacle {
        name: p.name.clone(),
        obstacle: Obstacle::Rect(p.rect()),
    });
    let walls = config
        .walls
        .iter()
        .filter(|_| config.sweep.detect_walls)
        .map(|w| NamedObstacle {
            name: w.name.clone(),
            obstacle: Obstacle::Rect(w.rect()),
        });

    circles.chain(pillars).chain(walls).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CircleSpec, RectSpec};

    /// 100x100 floor, receiver at (50, 80), sweep step 10, no obstacles.
    fn open_floor() -> SimConfig {
        let mut config = SimConfig::default();
        config.floor.width = 100.0;
        config.floor.height = 100.0;
        config.robot.x = 40.0;
        config.robot.y = 80.0;
        config.robot.width = 20.0;
        config.robot.height = 10.0;
        config.sweep.step = 10.0;
        config.pillars.clear();
        config.walls.clear();
        config.circles.clear();
        config
    }

    #[test]
    fn test_tick_requires_running() {
        let mut sweep = LidarSweep::new(open_floor()).unwrap();
        assert!(sweep.tick().is_none());
        assert_eq!(sweep.signal_x(), 0.0);

        sweep.start().unwrap();
        assert!(sweep.tick().is_some());
        sweep.pause().unwrap();
        assert!(sweep.tick().is_none());
        assert_eq!(sweep.signal_x(), 10.0);
        assert_eq!(sweep.point_cloud().len(), 1);
    }

    #[test]
    fn test_miss_samples_sender_position() {
        let mut sweep = LidarSweep::new(open_floor()).unwrap();
        sweep.start().unwrap();

        let out = sweep.tick().unwrap();
        assert_eq!(out.tick, 1);
        assert!(out.hit.is_none());
        assert_eq!(out.sample.point, Point::new(0.0, 0.0));
        assert!(!out.sample.hit);
        assert_eq!(out.ray, Segment::from_coords(0.0, 0.0, 50.0, 80.0));
        assert_eq!(
            out.beams,
            [
                Segment::from_coords(0.0, 0.0, 45.0, 80.0),
                Segment::from_coords(0.0, 0.0, 55.0, 80.0),
            ]
        );
    }

    #[test]
    fn test_hit_moves_beams_to_hit_point() {
        let mut config = open_floor();
        // Wide slab across the whole ray path
        config
            .pillars
            .push(RectSpec::new("slab", 0.0, 30.0, 100.0, 10.0));
        let mut sweep = LidarSweep::new(config).unwrap();
        sweep.start().unwrap();

        // Ray (0,0)-(50,80) crosses the slab bottom y = 40 at x = 25
        let out = sweep.tick().unwrap();
        let hit = out.hit.unwrap();
        assert_eq!(hit.obstacle, "slab");
        assert_eq!(hit.kind, "rect");
        assert_eq!(hit.point, Point::new(25.0, 40.0));
        assert!(out.sample.hit);
        assert_eq!(out.beams[0].start, hit.point);
        assert_eq!(out.beams[1].start, hit.point);
    }

    #[test]
    fn test_circles_take_precedence_over_pillars() {
        let mut config = open_floor();
        config
            .pillars
            .push(RectSpec::new("slab", 0.0, 30.0, 100.0, 10.0));
        config.circles.push(CircleSpec::new("ball", 5.0, 8.0, 2.0));
        let mut sweep = LidarSweep::new(config).unwrap();
        sweep.start().unwrap();

        let hit = sweep.tick().unwrap().hit.unwrap();
        assert_eq!(hit.obstacle, "ball");
        assert_eq!(hit.kind, "circle");
    }

    #[test]
    fn test_walls_only_when_enabled() {
        let mut config = open_floor();
        config
            .walls
            .push(RectSpec::new("wall", 0.0, 30.0, 100.0, 10.0));

        let mut sweep = LidarSweep::new(config.clone()).unwrap();
        assert!(sweep.obstacles().is_empty());
        sweep.start().unwrap();
        assert!(sweep.tick().unwrap().hit.is_none());

        config.sweep.detect_walls = true;
        let mut sweep = LidarSweep::new(config).unwrap();
        assert_eq!(sweep.obstacles().len(), 1);
        sweep.start().unwrap();
        assert_eq!(sweep.tick().unwrap().hit.unwrap().obstacle, "wall");
    }

    #[test]
    fn test_wrap_clears_cloud_after_edge_sample() {
        let mut sweep = LidarSweep::new(open_floor()).unwrap();
        sweep.start().unwrap();

        // x = 0, 10, ..., 90: ten ticks without wrapping
        for _ in 0..10 {
            assert!(!sweep.tick().unwrap().wrapped);
        }
        assert_eq!(sweep.signal_x(), 100.0);
        assert_eq!(sweep.point_cloud().len(), 10);

        // x = 100 samples, then wraps
        let out = sweep.tick().unwrap();
        assert!(out.wrapped);
        assert_eq!(out.sample.point, Point::new(100.0, 0.0));
        assert!(sweep.point_cloud().is_empty());
        assert_eq!(sweep.signal_x(), 0.0);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut sweep = LidarSweep::new(open_floor()).unwrap();
        sweep.start().unwrap();
        sweep.tick();
        sweep.tick();
        sweep.pause().unwrap();

        sweep.reset();
        assert_eq!(sweep.state(), SimulationState::Idle);
        assert_eq!(sweep.signal_x(), 0.0);
        assert_eq!(sweep.ticks(), 0);
        assert!(sweep.point_cloud().is_empty());

        sweep.start().unwrap();
        assert_eq!(sweep.tick().unwrap().tick, 1);
    }

    #[test]
    fn test_rejects_invalid_scene() {
        let mut config = open_floor();
        config.sweep.step = -1.0;
        assert!(LidarSweep::new(config).is_err());
    }
}
