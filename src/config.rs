//! Scene configuration.
//!
//! Everything set once at startup: planet, camera, fog, starfield and the
//! satellite catalogue. Per-frame tuning lives in `ProximityDamper` and
//! `OrbitSettings`.

use bevy::prelude::*;

use crate::satellites::{SatelliteSpec, SATELLITES};
use crate::types::{AXIAL_TILT, CLOUD_SPIN_MULTIPLIER, EARTH_RADIUS, PLANET_SPIN_RATE};

/// Errors in a scene configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("planet radius must be positive, got {0}")]
    PlanetRadius(f64),
    #[error("camera clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("camera field of view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("starfield layer range {start}..{end} is empty")]
    StarLayers { start: u32, end: u32 },
}

/// Camera placement and fly-control defaults.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub initial_speed: f32,
    pub roll_speed: f32,
    pub look_sensitivity: f32,
    pub drag_to_look: bool,
    pub auto_forward: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let r = EARTH_RADIUS as f32;
        Self {
            fov_degrees: 30.0,
            near: 50.0,
            far: 1e7,
            position: Vec3::new(r * -0.3, 0.0, r * 5.0),
            initial_speed: 1000.0,
            roll_speed: std::f32::consts::PI / 24.0,
            look_sensitivity: 0.002,
            drag_to_look: true,
            auto_forward: false,
        }
    }
}

/// Point-cloud starfield layout.
///
/// Two point clouds (sparse and dense) are instanced once per layer, each
/// layer with a random orientation and a scale of `layer * 10`.
#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    pub sparse_count: usize,
    pub dense_count: usize,
    pub layers: std::ops::Range<u32>,
    /// Fixed seed for a reproducible sky. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            sparse_count: 250,
            dense_count: 1500,
            layers: 10..30,
            seed: None,
        }
    }
}

/// Scene-wide configuration resource.
#[derive(Resource, Clone, Debug)]
pub struct SceneConfig {
    pub planet_radius: f64,
    pub axial_tilt: f32,
    pub spin_rate: f64,
    pub cloud_spin_multiplier: f64,
    /// Cloud shell radius relative to the planet.
    pub cloud_scale: f32,
    pub cloud_texture: String,
    pub planet_model: String,
    /// Planet model scale relative to the planet radius.
    pub planet_model_scale: f32,
    pub planet_model_offset: Vec3,
    /// Duration every planet animation clip is stretched to (seconds).
    pub planet_animation_secs: f32,
    /// Directional light illuminance (lux).
    pub light_illuminance: f32,
    /// Exponential-squared fog density.
    pub fog_density: f32,
    pub camera: CameraConfig,
    pub starfield: StarfieldConfig,
    pub satellites: Vec<SatelliteSpec>,
    /// Log frame time diagnostics to the console.
    pub log_frame_stats: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            planet_radius: EARTH_RADIUS,
            axial_tilt: AXIAL_TILT,
            spin_rate: PLANET_SPIN_RATE,
            cloud_spin_multiplier: CLOUD_SPIN_MULTIPLIER,
            cloud_scale: 1.01,
            cloud_texture: "textures/planets/earth_clouds_1024.png".to_string(),
            planet_model: "models/earth_breathing.glb".to_string(),
            planet_model_scale: 0.8,
            planet_model_offset: Vec3::new(1.0, 1.0, 10.0),
            planet_animation_secs: 5.0,
            light_illuminance: 10_000.0,
            fog_density: 2.5e-7,
            camera: CameraConfig::default(),
            starfield: StarfieldConfig::default(),
            satellites: SATELLITES.to_vec(),
            log_frame_stats: false,
        }
    }
}

impl SceneConfig {
    /// Check the settings that would otherwise produce a broken scene.
    ///
    /// Satellite orbits are validated individually when they are spawned so a
    /// single bad entry does not take the whole scene down.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.planet_radius > 0.0) {
            return Err(ConfigError::PlanetRadius(self.planet_radius));
        }

        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(ConfigError::ClipPlanes {
                near: camera.near,
                far: camera.far,
            });
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(camera.fov_degrees));
        }

        let layers = &self.starfield.layers;
        if layers.is_empty() {
            return Err(ConfigError::StarLayers {
                start: layers.start,
                end: layers.end,
            });
        }

        Ok(())
    }
}
