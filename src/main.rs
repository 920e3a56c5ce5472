//! Earthwatch - rotating planet with orbiting satellites
//!
//! A desktop application rendering the Earth with a handful of
//! observation satellites, explored through a free-flying camera.

use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

use earthwatch::camera::CameraPlugin;
use earthwatch::config::SceneConfig;
use earthwatch::frame::FramePlugin;
use earthwatch::input::InputPlugin;
use earthwatch::render::RenderPlugin;

fn main() {
    let config = SceneConfig::default();
    let log_frame_stats = config.log_frame_stats;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Earthwatch".to_string(),
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    // Insert resources before plugins that depend on them
    .insert_resource(config)
    .add_plugins((FramePlugin, CameraPlugin, InputPlugin, RenderPlugin));

    if log_frame_stats {
        app.add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ));
    }

    app.run();
}
