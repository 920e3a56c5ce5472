//! Common test utilities for integration tests.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use earthwatch::camera::FlyCamera;
use earthwatch::frame::FramePlugin;
use earthwatch::kinematics::OrbitParams;
use earthwatch::types::{CentralBody, ModelSlot, OrbitingBody};

/// Frame length used by headless apps.
pub const FRAME_SECS: f64 = 0.1;

/// Headless app running the frame update with fixed-length frames.
pub fn create_frame_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, FramePlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(FRAME_SECS),
        ));
    app
}

/// Spawn the planet at the origin.
pub fn spawn_planet(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((Transform::default(), CentralBody::default()))
        .id()
}

/// Spawn a satellite with the given model state.
pub fn spawn_satellite(app: &mut App, params: OrbitParams, reference_radius: f64, slot: ModelSlot) -> Entity {
    app.world_mut()
        .spawn((
            Transform::default(),
            OrbitingBody::new(params, reference_radius),
            slot,
        ))
        .id()
}

/// Spawn a fly camera at `position`.
pub fn spawn_camera(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((Transform::from_translation(position), FlyCamera::default()))
        .id()
}

/// Build valid orbit parameters.
pub fn orbit(radius: f64, period: f64, inclination: f64, phase_offset: f64) -> OrbitParams {
    OrbitParams::new(radius, period, inclination, phase_offset).unwrap()
}
