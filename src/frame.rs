//! Per-frame update of the scene.
//!
//! Spins the planet and its cloud shell, moves every loaded satellite along
//! its orbit, and damps the fly camera's speed against the nearest surface.
//! Nothing here touches rendering directly: the systems only write transforms
//! and the camera's movement speed, which Bevy then presents.

use bevy::prelude::*;

use crate::camera::FlyCamera;
use crate::kinematics::OrbitSettings;
use crate::proximity::{BodyProbe, ProximityDamper};
use crate::time::TimePlugin;
use crate::types::{CentralBody, FrameSet, ModelSlot, OrbitingBody, RotatingLayer, SimulationClock};

/// Plugin wiring the per-frame update.
///
/// Runs headless: it needs only Bevy's `Time`, so tests drive it with
/// `MinimalPlugins`.
pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TimePlugin)
            .init_resource::<OrbitSettings>()
            .init_resource::<ProximityDamper>()
            .configure_sets(
                Update,
                (
                    FrameSet::Clock,
                    FrameSet::Kinematics,
                    FrameSet::Proximity,
                    FrameSet::Controls,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (spin_central_body, spin_layers).chain(),
                    advance_orbits,
                )
                    .in_set(FrameSet::Kinematics),
            )
            .add_systems(Update, damp_camera_speed.in_set(FrameSet::Proximity));
    }
}

/// Advance the planet's spin by `spin_rate * delta`.
pub fn spin_central_body(
    clock: Res<SimulationClock>,
    mut planets: Query<(&mut Transform, &mut CentralBody)>,
) {
    if !clock.is_running() {
        return;
    }

    for (mut transform, mut body) in planets.iter_mut() {
        body.angle += body.spin_rate * clock.delta;
        transform.rotation = tilted_spin(body.angle, body.tilt);
    }
}

/// Advance shells at a fixed multiple of the planet's spin rate.
pub fn spin_layers(
    clock: Res<SimulationClock>,
    planets: Query<&CentralBody>,
    mut layers: Query<(&mut Transform, &mut RotatingLayer), Without<CentralBody>>,
) {
    if !clock.is_running() {
        return;
    }
    let Some(planet) = planets.iter().next() else {
        return;
    };

    for (mut transform, mut layer) in layers.iter_mut() {
        layer.angle += layer.rate_multiplier * planet.spin_rate * clock.delta;
        transform.rotation = tilted_spin(layer.angle, layer.tilt);
    }
}

/// Move every loaded satellite to its orbital position and advance its spin.
///
/// Bodies whose model is still loading, or failed to load, are left alone.
pub fn advance_orbits(
    clock: Res<SimulationClock>,
    settings: Res<OrbitSettings>,
    mut bodies: Query<(&mut Transform, &mut OrbitingBody, &ModelSlot)>,
) {
    if !clock.is_running() {
        return;
    }

    for (mut transform, mut body, slot) in bodies.iter_mut() {
        if !slot.is_ready() {
            continue;
        }

        let pos = body.params.position_at(clock.elapsed, settings.timing);
        body.spin += body.params.spin_step(clock.delta, settings.timing);

        transform.translation = pos.as_vec3();
        transform.rotation = Quat::from_rotation_y(body.spin as f32);
    }
}

/// Slow the fly camera down as it approaches the nearest surface.
pub fn damp_camera_speed(
    damper: Res<ProximityDamper>,
    planets: Query<&CentralBody>,
    bodies: Query<(&Transform, &OrbitingBody, &ModelSlot), Without<FlyCamera>>,
    mut cameras: Query<(&Transform, &mut FlyCamera)>,
) {
    let Some(planet) = planets.iter().next() else {
        return;
    };
    let central = BodyProbe::central(planet.radius);

    for (camera_transform, mut fly) in cameras.iter_mut() {
        let probes = bodies
            .iter()
            .filter(|(_, _, slot)| slot.is_ready())
            .map(|(transform, body, _)| {
                BodyProbe::orbiting(transform.translation.as_dvec3(), body.reference_radius)
            });

        let nearest = damper.nearest(camera_transform.translation.as_dvec3(), &central, probes);
        fly.movement_speed = damper.movement_speed(nearest.clearance) as f32;
    }
}

/// Spin about Y under a fixed tilt about Z (intrinsic XYZ order).
fn tilted_spin(angle: f64, tilt: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, 0.0, angle as f32, tilt)
}
