//! Core scene types and constants.

use bevy::prelude::*;

use crate::kinematics::OrbitParams;

/// System set ordering the per-frame work.
///
/// Sets run in declaration order: the clock advances first, bodies move, the
/// camera speed is damped against the new positions, and only then is camera
/// input applied.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Advance the simulation clock.
    Clock,
    /// Spin the planet and move satellites.
    Kinematics,
    /// Damp camera movement speed near surfaces.
    Proximity,
    /// Apply fly camera input.
    Controls,
}

/// Planet radius in scene units (kilometers).
pub const EARTH_RADIUS: f64 = 6371.0;

/// Axial tilt of the planet and its cloud shell (radians, about Z).
pub const AXIAL_TILT: f32 = 0.41;

/// Planet spin rate (rad/s).
pub const PLANET_SPIN_RATE: f64 = 0.1;

/// Cloud shell spin relative to the planet.
pub const CLOUD_SPIN_MULTIPLIER: f64 = 1.5;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// The planet at the scene origin. It only spins in place.
#[derive(Component, Clone, Debug)]
pub struct CentralBody {
    /// Surface radius in scene units.
    pub radius: f64,
    /// Spin rate in rad/s.
    pub spin_rate: f64,
    /// Tilt about the Z axis in radians.
    pub tilt: f32,
    /// Accumulated spin angle in radians.
    pub angle: f64,
}

impl Default for CentralBody {
    fn default() -> Self {
        Self {
            radius: EARTH_RADIUS,
            spin_rate: PLANET_SPIN_RATE,
            tilt: AXIAL_TILT,
            angle: 0.0,
        }
    }
}

/// A shell (e.g. clouds) spinning at a fixed multiple of the planet's rate.
#[derive(Component, Clone, Debug)]
pub struct RotatingLayer {
    pub rate_multiplier: f64,
    pub tilt: f32,
    pub angle: f64,
}

impl Default for RotatingLayer {
    fn default() -> Self {
        Self {
            rate_multiplier: CLOUD_SPIN_MULTIPLIER,
            tilt: AXIAL_TILT,
            angle: 0.0,
        }
    }
}

/// A satellite whose position is recomputed every frame.
#[derive(Component, Clone, Debug)]
pub struct OrbitingBody {
    pub params: OrbitParams,
    /// Accumulated yaw in radians.
    pub spin: f64,
    /// Size used when computing the camera's clearance.
    pub reference_radius: f64,
}

impl OrbitingBody {
    pub fn new(params: OrbitParams, reference_radius: f64) -> Self {
        Self {
            params,
            spin: 0.0,
            reference_radius,
        }
    }
}

/// Load state of a body's renderable model.
///
/// Bodies take part in kinematics and proximity checks only once `Ready`.
/// A slot settles exactly once; a failed load stays failed.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelSlot {
    #[default]
    Pending,
    Ready,
    Failed,
}

impl ModelSlot {
    pub fn is_ready(self) -> bool {
        self == ModelSlot::Ready
    }

    /// Settle a pending slot. Returns false if the slot had already settled.
    pub fn settle(&mut self, loaded: bool) -> bool {
        if *self != ModelSlot::Pending {
            return false;
        }
        *self = if loaded {
            ModelSlot::Ready
        } else {
            ModelSlot::Failed
        };
        true
    }
}

/// Monotonic simulation clock driving every frame.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Seconds of simulation time since startup. Never reset.
    pub elapsed: f64,
    /// Simulation seconds covered by the current frame.
    pub delta: f64,
    /// Simulation seconds per real second.
    pub scale: f64,
    /// Whether the simulation is paused.
    pub paused: bool,
    /// Frames advanced while running.
    pub frame: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            scale: 1.0,
            paused: false,
            frame: 0,
        }
    }
}

impl SimulationClock {
    /// Advance by `real_delta` real seconds.
    pub fn tick(&mut self, real_delta: f64) {
        if self.paused {
            self.delta = 0.0;
            return;
        }
        self.delta = real_delta * self.scale;
        self.elapsed += self.delta;
        self.frame += 1;
    }

    pub fn is_running(&self) -> bool {
        !self.paused
    }
}
