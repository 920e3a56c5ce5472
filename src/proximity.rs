//! Camera speed damping near body surfaces.
//!
//! The fly camera slows down as it approaches the nearest body so the user can
//! get close to the planet or a satellite without overshooting into it.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Default gain applied to the clearance to obtain a movement speed.
pub const DEFAULT_SPEED_GAIN: f64 = 0.33;

/// Default margin applied to a body's reference radius.
pub const DEFAULT_SIZE_FACTOR: f64 = 1.01;

/// Kind of body a probe describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// The planet at the scene origin.
    Central,
    /// A satellite whose model has finished loading.
    Orbiting,
}

/// A body the camera can approach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyProbe {
    pub kind: BodyKind,
    pub position: DVec3,
    pub reference_radius: f64,
}

impl BodyProbe {
    pub fn central(radius: f64) -> Self {
        Self {
            kind: BodyKind::Central,
            position: DVec3::ZERO,
            reference_radius: radius,
        }
    }

    pub fn orbiting(position: DVec3, reference_radius: f64) -> Self {
        Self {
            kind: BodyKind::Orbiting,
            position,
            reference_radius,
        }
    }
}

/// Nearest body and the camera's clearance from its surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clearance {
    pub kind: BodyKind,
    /// Distance from the camera to the body's center.
    pub distance: f64,
    /// Distance minus the scaled reference radius. Negative inside the margin.
    pub clearance: f64,
}

/// Tuning for the proximity damper.
#[derive(Resource, Clone, Debug)]
pub struct ProximityDamper {
    /// Movement speed per unit of clearance.
    pub speed_gain: f64,
    /// Margin applied to the planet radius.
    pub central_size_factor: f64,
    /// Margin applied to a satellite's reference radius.
    pub orbiting_size_factor: f64,
    /// Never report a negative speed when the camera is inside the margin.
    pub clamp_non_negative: bool,
}

impl Default for ProximityDamper {
    fn default() -> Self {
        Self {
            speed_gain: DEFAULT_SPEED_GAIN,
            central_size_factor: DEFAULT_SIZE_FACTOR,
            orbiting_size_factor: DEFAULT_SIZE_FACTOR,
            clamp_non_negative: true,
        }
    }
}

impl ProximityDamper {
    fn size_factor(&self, kind: BodyKind) -> f64 {
        match kind {
            BodyKind::Central => self.central_size_factor,
            BodyKind::Orbiting => self.orbiting_size_factor,
        }
    }

    /// Find the nearest body and the camera's clearance from it.
    ///
    /// The closest orbiting body wins only when it is strictly nearer than the
    /// central body.
    pub fn nearest(
        &self,
        camera: DVec3,
        central: &BodyProbe,
        orbiting: impl IntoIterator<Item = BodyProbe>,
    ) -> Clearance {
        let central_distance = camera.distance(central.position);

        let closest_orbiting = orbiting
            .into_iter()
            .map(|probe| (camera.distance(probe.position), probe))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let (distance, probe) = match closest_orbiting {
            Some((d, probe)) if d < central_distance => (d, probe),
            _ => (central_distance, *central),
        };

        Clearance {
            kind: probe.kind,
            distance,
            clearance: distance - probe.reference_radius * self.size_factor(probe.kind),
        }
    }

    /// Convert a clearance into a camera movement speed.
    pub fn movement_speed(&self, clearance: f64) -> f64 {
        let speed = self.speed_gain * clearance;
        if self.clamp_non_negative {
            speed.max(0.0)
        } else {
            speed
        }
    }
}
