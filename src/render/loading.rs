//! Asynchronous model loading.
//!
//! Models are requested at startup and polled every frame. When a load
//! settles, the entity's `ModelSlot` is updated once: a ready model gets its
//! scene attached, a failed one is logged and stays out of the frame update.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::types::ModelSlot;

/// A satellite scene still being loaded.
#[derive(Component)]
pub struct PendingScene(pub Handle<Scene>);

/// The planet glTF still being loaded.
#[derive(Component)]
pub struct PendingPlanet(pub Handle<Gltf>);

/// Animation graph built from the planet's clips.
#[derive(Resource)]
pub struct PlanetAnimation {
    pub graph: Handle<AnimationGraph>,
    pub clips: Vec<PingPongClip>,
}

/// One clip played back and forth at a fixed speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PingPongClip {
    pub node: AnimationNodeIndex,
    /// Clip length in seconds at speed 1.
    pub duration: f32,
    /// Playback speed stretching the clip to the configured duration.
    pub speed: f32,
}

/// Completion counts already handled, per clip.
#[derive(Component, Default)]
pub struct PingPongState {
    seen: Vec<u32>,
}

/// Plugin polling model loads and driving the planet animation.
pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                poll_satellite_models,
                poll_planet_model,
                start_planet_animation,
                ping_pong_planet_animation,
            )
                .chain(),
        );
    }
}

/// Settle satellite model slots whose load has finished.
fn poll_satellite_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut pending: Query<(Entity, &Name, &PendingScene, &mut ModelSlot)>,
) {
    for (entity, name, scene, mut slot) in pending.iter_mut() {
        match asset_server.load_state(scene.0.id()) {
            LoadState::Loaded => {
                slot.settle(true);
                commands
                    .entity(entity)
                    .insert(SceneRoot(scene.0.clone()))
                    .remove::<PendingScene>();
                info!("Model for {name} loaded");
            }
            LoadState::Failed(err) => {
                slot.settle(false);
                commands.entity(entity).remove::<PendingScene>();
                error!("Model for {name} failed to load: {err}");
            }
            _ => {}
        }
    }
}

/// Attach the planet scene and build its animation graph once loaded.
fn poll_planet_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    clips: Res<Assets<AnimationClip>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    config: Res<SceneConfig>,
    pending: Query<(Entity, &PendingPlanet)>,
) {
    for (entity, planet) in pending.iter() {
        match asset_server.load_state(planet.0.id()) {
            LoadState::Loaded => {}
            LoadState::Failed(err) => {
                commands.entity(entity).remove::<PendingPlanet>();
                error!("Planet model failed to load: {err}");
                continue;
            }
            _ => continue,
        }

        let Some(gltf) = gltfs.get(&planet.0) else {
            continue;
        };
        let Some(scene) = gltf
            .default_scene
            .clone()
            .or_else(|| gltf.scenes.first().cloned())
        else {
            warn!("Planet model has no scene");
            commands.entity(entity).remove::<PendingPlanet>();
            continue;
        };

        let (graph, nodes) = AnimationGraph::from_clips(gltf.animations.iter().cloned());
        let ping_pong = gltf
            .animations
            .iter()
            .zip(nodes)
            .map(|(handle, node)| {
                let duration = clips.get(handle).map_or(0.0, |clip| clip.duration());
                PingPongClip {
                    node,
                    duration,
                    speed: clip_speed(duration, config.planet_animation_secs),
                }
            })
            .collect::<Vec<_>>();

        info!("Planet model loaded with {} animation clips", ping_pong.len());

        commands.insert_resource(PlanetAnimation {
            graph: graphs.add(graph),
            clips: ping_pong,
        });
        commands
            .entity(entity)
            .insert(SceneRoot(scene))
            .remove::<PendingPlanet>();
    }
}

/// Start every planet clip on the animation player spawned with its scene.
fn start_planet_animation(
    mut commands: Commands,
    animation: Option<Res<PlanetAnimation>>,
    mut players: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
) {
    let Some(animation) = animation else {
        return;
    };

    for (entity, mut player) in players.iter_mut() {
        for clip in &animation.clips {
            player.play(clip.node).repeat().set_speed(clip.speed);
        }
        commands.entity(entity).insert((
            AnimationGraphHandle(animation.graph.clone()),
            PingPongState {
                seen: vec![0; animation.clips.len()],
            },
        ));
    }
}

/// Reverse each clip whenever it reaches either end.
fn ping_pong_planet_animation(
    animation: Option<Res<PlanetAnimation>>,
    mut players: Query<(&mut AnimationPlayer, &mut PingPongState)>,
) {
    let Some(animation) = animation else {
        return;
    };

    for (mut player, mut state) in players.iter_mut() {
        for (clip, seen) in animation.clips.iter().zip(state.seen.iter_mut()) {
            let Some(active) = player.animation_mut(clip.node) else {
                continue;
            };
            if let Some((speed, seek)) = bounce(
                *seen,
                active.completions(),
                active.seek_time(),
                clip.duration,
                active.speed(),
            ) {
                active.set_speed(speed).seek_to(seek);
            }
            *seen = active.completions();
        }
    }
}

/// Playback speed that makes a clip last `target_secs`.
pub fn clip_speed(duration: f32, target_secs: f32) -> f32 {
    if duration > 0.0 && target_secs > 0.0 {
        duration / target_secs
    } else {
        1.0
    }
}

/// Reflect a looping clip that has just wrapped around.
///
/// A repeating clip wraps to the opposite end when it completes. Mirroring the
/// seek time and flipping the speed turns that wrap into a bounce. Returns the
/// new `(speed, seek_time)` or `None` if no wrap happened.
pub fn bounce(
    seen: u32,
    completions: u32,
    seek_time: f32,
    duration: f32,
    speed: f32,
) -> Option<(f32, f32)> {
    if completions == seen || duration <= 0.0 {
        return None;
    }
    Some((-speed, (duration - seek_time).clamp(0.0, duration)))
}
