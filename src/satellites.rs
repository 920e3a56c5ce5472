//! Satellite catalogue.
//!
//! Two Landsat 8 and two Aqua models on sun-synchronous-like orbits, spaced
//! around the planet by their phase offsets.

use std::f64::consts::PI;

use crate::kinematics::{OrbitError, OrbitParams};
use crate::types::DEG_TO_RAD;

/// Landsat 8 altitude above the surface (km).
pub const LANDSAT_ALTITUDE_KM: f64 = 917.0;

/// Landsat 8 orbital period: 99 minutes.
pub const LANDSAT_PERIOD_SECS: f64 = 99.0 * 60.0;

/// Landsat 8 orbital inclination (degrees).
pub const LANDSAT_INCLINATION_DEG: f64 = 98.2;

/// Aqua altitude above the surface (km).
pub const AQUA_ALTITUDE_KM: f64 = 786.0;

/// Aqua orbital period: 92 minutes.
pub const AQUA_PERIOD_SECS: f64 = 92.0 * 60.0;

/// Aqua orbital inclination (degrees).
pub const AQUA_INCLINATION_DEG: f64 = 98.62;

/// Static description of one satellite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatelliteSpec {
    /// Display name.
    pub name: &'static str,
    /// glTF model path under `assets/`.
    pub model: &'static str,
    /// Altitude above the planet surface in scene units.
    pub altitude: f64,
    /// Orbital period in seconds.
    pub period_secs: f64,
    /// Orbit inclination in degrees.
    pub inclination_deg: f64,
    /// Phase offset in radians.
    pub phase_offset: f64,
    /// Model scale as a fraction of the planet radius.
    pub scale_fraction: f64,
}

impl SatelliteSpec {
    /// Orbit parameters around a planet of the given radius.
    pub fn orbit(&self, planet_radius: f64) -> Result<OrbitParams, OrbitError> {
        OrbitParams::new(
            planet_radius + self.altitude,
            self.period_secs,
            self.inclination_deg * DEG_TO_RAD,
            self.phase_offset,
        )
    }

    /// Model scale in scene units, also used as the body's reference radius.
    pub fn model_scale(&self, planet_radius: f64) -> f64 {
        planet_radius * self.scale_fraction
    }
}

/// All satellites spawned into the scene.
pub const SATELLITES: &[SatelliteSpec] = &[
    SatelliteSpec {
        name: "Landsat 8 A",
        model: "models/landsat_8.glb",
        altitude: LANDSAT_ALTITUDE_KM,
        period_secs: LANDSAT_PERIOD_SECS,
        inclination_deg: LANDSAT_INCLINATION_DEG,
        phase_offset: 0.0,
        scale_fraction: 0.1,
    },
    SatelliteSpec {
        name: "Landsat 8 B",
        model: "models/landsat_8.glb",
        altitude: LANDSAT_ALTITUDE_KM,
        period_secs: LANDSAT_PERIOD_SECS,
        inclination_deg: LANDSAT_INCLINATION_DEG,
        phase_offset: PI,
        scale_fraction: 0.1,
    },
    SatelliteSpec {
        name: "Aqua A",
        model: "models/aqua_satellite.glb",
        altitude: AQUA_ALTITUDE_KM,
        period_secs: AQUA_PERIOD_SECS,
        inclination_deg: AQUA_INCLINATION_DEG,
        phase_offset: PI * 0.5,
        scale_fraction: 0.01,
    },
    SatelliteSpec {
        name: "Aqua B",
        model: "models/aqua_satellite.glb",
        altitude: AQUA_ALTITUDE_KM,
        period_secs: LANDSAT_PERIOD_SECS,
        inclination_deg: AQUA_INCLINATION_DEG,
        phase_offset: PI * 1.5,
        scale_fraction: 0.01,
    },
];
