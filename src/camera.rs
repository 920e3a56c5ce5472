//! Free-flying camera.
//!
//! Keyboard moves and rolls the camera, dragging with the left mouse button
//! looks around. The movement speed is not set here: the proximity damper
//! rewrites it every frame before these controls run.

use bevy::{
    input::mouse::AccumulatedMouseMotion,
    prelude::*,
};

use crate::config::SceneConfig;
use crate::types::FrameSet;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Fly controls attached to a camera.
#[derive(Component, Clone, Debug)]
pub struct FlyCamera {
    /// Translation speed in scene units per second.
    pub movement_speed: f32,
    /// Keyboard rotation speed in rad/s.
    pub roll_speed: f32,
    /// Mouse look speed in radians per pixel.
    pub look_sensitivity: f32,
    /// Only look around while the left mouse button is held.
    pub drag_to_look: bool,
    /// Keep moving forward without input.
    pub auto_forward: bool,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            movement_speed: 1000.0,
            roll_speed: std::f32::consts::PI / 24.0,
            look_sensitivity: 0.002,
            drag_to_look: true,
            auto_forward: false,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FlyCameraPlugin)
            .add_systems(Startup, setup_camera);
    }
}

/// Fly controls only, without spawning a camera.
pub struct FlyCameraPlugin;

impl Plugin for FlyCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, fly_camera.in_set(FrameSet::Controls));
    }
}

/// Spawn the main camera with a perspective projection and distance fog.
fn setup_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let camera = &config.camera;

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(camera.position),
        DistanceFog {
            color: Color::BLACK,
            falloff: FogFalloff::ExponentialSquared {
                density: config.fog_density,
            },
            ..default()
        },
        FlyCamera {
            movement_speed: camera.initial_speed,
            roll_speed: camera.roll_speed,
            look_sensitivity: camera.look_sensitivity,
            drag_to_look: camera.drag_to_look,
            auto_forward: camera.auto_forward,
        },
        MainCamera,
        Name::new("Main Camera"),
    ));
}

/// Local-space translation direction from the keyboard.
///
/// W/S forward and back, A/D left and right, R/F up and down.
pub fn move_direction(keys: &ButtonInput<KeyCode>, auto_forward: bool) -> Vec3 {
    let axis = |pos: KeyCode, neg: KeyCode| {
        (keys.pressed(pos) as i32 - keys.pressed(neg) as i32) as f32
    };

    let mut forward = axis(KeyCode::KeyW, KeyCode::KeyS);
    if auto_forward && !keys.pressed(KeyCode::KeyS) {
        forward = 1.0;
    }

    Vec3::new(
        axis(KeyCode::KeyD, KeyCode::KeyA),
        axis(KeyCode::KeyR, KeyCode::KeyF),
        -forward,
    )
}

/// Pitch, yaw and roll rates from the keyboard, in units of `roll_speed`.
///
/// Arrow keys pitch and yaw, Q/E roll.
pub fn rotation_input(keys: &ButtonInput<KeyCode>) -> Vec3 {
    let axis = |pos: KeyCode, neg: KeyCode| {
        (keys.pressed(pos) as i32 - keys.pressed(neg) as i32) as f32
    };

    Vec3::new(
        axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
        axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
        axis(KeyCode::KeyQ, KeyCode::KeyE),
    )
}

/// Apply keyboard and mouse input to every fly camera.
fn fly_camera(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut cameras: Query<(&mut Transform, &FlyCamera)>,
) {
    let dt = time.delta_secs();

    for (mut transform, fly) in cameras.iter_mut() {
        let rates = rotation_input(&keys) * fly.roll_speed * dt;
        let mut pitch = rates.x;
        let mut yaw = rates.y;

        let looking = !fly.drag_to_look || mouse_buttons.pressed(MouseButton::Left);
        if looking && mouse_motion.delta != Vec2::ZERO {
            yaw -= mouse_motion.delta.x * fly.look_sensitivity;
            pitch -= mouse_motion.delta.y * fly.look_sensitivity;
        }

        if pitch != 0.0 || yaw != 0.0 || rates.z != 0.0 {
            transform.rotate_local(Quat::from_euler(EulerRot::XYZ, pitch, yaw, rates.z));
        }

        let direction = move_direction(&keys, fly.auto_forward);
        if direction != Vec3::ZERO {
            let step = transform.rotation * direction * fly.movement_speed * dt;
            transform.translation += step;
        }
    }
}
