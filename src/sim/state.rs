//! Simulation state machine.
//!
//! ```text
//!          start            pause
//!   Idle ────────▶ Running ───────▶ Paused
//!    ▲                ▲               │
//!    │                └───── start ───┘
//!    │                                │
//!    └──────────── reset (any) ───────┘
//! ```

use crate::error::{Error, Result};
use serde::Serialize;

/// Simulation state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SimulationState {
    /// Not started, or reset. Sweep at x = 0 with an empty cloud.
    #[default]
    Idle,
    /// Ticks advance the sweep
    Running,
    /// Ticks are ignored; sweep position and cloud are kept
    Paused,
}

impl SimulationState {
    /// Transition for a start request
    pub fn start(self) -> Result<Self> {
        match self {
            SimulationState::Idle | SimulationState::Paused => Ok(SimulationState::Running),
            SimulationState::Running => Err(self.reject("start")),
        }
    }

    /// Transition for a pause request
    pub fn pause(self) -> Result<Self> {
        match self {
            SimulationState::Running => Ok(SimulationState::Paused),
            SimulationState::Idle | SimulationState::Paused => Err(self.reject("pause")),
        }
    }

    /// Transition for a reset request; always allowed
    pub fn reset(self) -> Self {
        SimulationState::Idle
    }

    /// Whether ticks should advance the sweep
    pub fn is_running(&self) -> bool {
        matches!(self, SimulationState::Running)
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SimulationState::Idle => "Idle",
            SimulationState::Running => "Running",
            SimulationState::Paused => "Paused",
        }
    }

    fn reject(self, action: &'static str) -> Error {
        Error::InvalidTransition {
            from: self.name(),
            action,
        }
    }
}
