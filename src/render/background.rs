//! Starfield and lighting.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SceneConfig;

/// Grey levels of the three star materials.
const STAR_SHADES: [f32; 3] = [0.61, 0.51, 0.35];

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Random points inside the cube `[-extent, extent]³`.
pub fn star_positions(rng: &mut impl Rng, count: usize, extent: f32) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
            ]
        })
        .collect()
}

fn point_cloud(positions: Vec<[f32; 3]>) -> Mesh {
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

/// Spawn layered point clouds of stars around the planet.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let stars = &config.starfield;
    let mut rng = match stars.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let extent = config.planet_radius as f32;

    let clouds = [
        meshes.add(point_cloud(star_positions(&mut rng, stars.sparse_count, extent))),
        meshes.add(point_cloud(star_positions(&mut rng, stars.dense_count, extent))),
    ];
    let shades = STAR_SHADES.map(|shade| {
        materials.add(StandardMaterial {
            base_color: Color::srgb(shade, shade, shade),
            unlit: true,
            ..default()
        })
    });

    for layer in stars.layers.clone() {
        let i = layer as usize;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rng.random_range(0.0..6.0),
            rng.random_range(0.0..6.0),
            rng.random_range(0.0..6.0),
        );

        commands.spawn((
            Mesh3d(clouds[i % 2].clone()),
            MeshMaterial3d(shades[i % 3].clone()),
            Transform::from_rotation(rotation).with_scale(Vec3::splat(layer as f32 * 10.0)),
        ));
    }

    info!(
        "Spawned {} starfield layers",
        stars.layers.end.saturating_sub(stars.layers.start)
    );
}

/// Spawn the sun light.
fn spawn_lighting(mut commands: Commands, config: Res<SceneConfig>) {
    commands.spawn((
        DirectionalLight {
            illuminance: config.light_illuminance,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-1.0, 0.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}
