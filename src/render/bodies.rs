//! Planet, cloud shell and satellite spawning.

use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::render::loading::{PendingPlanet, PendingScene};
use crate::types::{CentralBody, ModelSlot, OrbitingBody, RotatingLayer};

/// Plugin providing body spawning.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (check_config, spawn_planet, spawn_satellites).chain());
    }
}

/// Log configuration problems before anything is spawned.
fn check_config(config: Res<SceneConfig>) {
    if let Err(err) = config.validate() {
        error!("Invalid scene configuration: {err}");
    }
}

/// Spawn the planet model and its cloud shell.
fn spawn_planet(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let radius = config.planet_radius as f32;

    let planet = CentralBody {
        radius: config.planet_radius,
        spin_rate: config.spin_rate,
        tilt: config.axial_tilt,
        angle: 0.0,
    };

    commands.spawn((
        Name::new("Planet"),
        Transform::from_translation(config.planet_model_offset)
            .with_rotation(Quat::from_rotation_z(config.axial_tilt))
            .with_scale(Vec3::splat(radius * config.planet_model_scale)),
        Visibility::default(),
        planet,
        PendingPlanet(asset_server.load(config.planet_model.clone())),
    ));

    let cloud_material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(config.cloud_texture.clone())),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Name::new("Clouds"),
        Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(100, 50))),
        MeshMaterial3d(cloud_material),
        Transform::from_rotation(Quat::from_rotation_z(config.axial_tilt))
            .with_scale(Vec3::splat(config.cloud_scale)),
        RotatingLayer {
            rate_multiplier: config.cloud_spin_multiplier,
            tilt: config.axial_tilt,
            angle: 0.0,
        },
    ));

    info!("Spawned planet with radius {}", config.planet_radius);
}

/// Spawn one entity per configured satellite and start loading its model.
///
/// Satellites with invalid orbits are reported and left out of the scene.
fn spawn_satellites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let mut spawned = 0;

    for spec in &config.satellites {
        let params = match spec.orbit(config.planet_radius) {
            Ok(params) => params,
            Err(err) => {
                error!("Skipping satellite {}: {err}", spec.name);
                continue;
            }
        };
        let scale = spec.model_scale(config.planet_radius);

        commands.spawn((
            Name::new(spec.name),
            Transform::from_scale(Vec3::splat(scale as f32)),
            Visibility::default(),
            OrbitingBody::new(params, scale),
            ModelSlot::Pending,
            PendingScene(asset_server.load(GltfAssetLabel::Scene(0).from_asset(spec.model))),
        ));
        spawned += 1;
    }

    info!("Spawned {spawned} satellites, waiting for models");
}
