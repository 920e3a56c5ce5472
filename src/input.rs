//! Keyboard shortcuts for simulation time.
//!
//! Space pauses, `[` and `]` halve or double the time scale, and the digit
//! keys jump to fixed scales.

use bevy::prelude::*;

use crate::types::SimulationClock;

/// Slowest selectable time scale.
pub const MIN_TIME_SCALE: f64 = 0.125;

/// Fastest selectable time scale.
pub const MAX_TIME_SCALE: f64 = 128.0;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Halve the time scale, never going below [`MIN_TIME_SCALE`].
pub fn slower(scale: f64) -> f64 {
    (scale * 0.5).max(MIN_TIME_SCALE)
}

/// Double the time scale, never going above [`MAX_TIME_SCALE`].
pub fn faster(scale: f64) -> f64 {
    (scale * 2.0).min(MAX_TIME_SCALE)
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<SimulationClock>) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.scale = slower(clock.scale);
        info!("Time scale: {}x", clock.scale);
    }

    if keys.just_pressed(KeyCode::BracketRight) {
        clock.scale = faster(clock.scale);
        info!("Time scale: {}x", clock.scale);
    }

    // Quick time scale selection with number keys
    for (key, scale) in [
        (KeyCode::Digit1, 1.0),
        (KeyCode::Digit2, 10.0),
        (KeyCode::Digit3, 100.0),
        (KeyCode::Digit4, 1000.0),
    ] {
        if keys.just_pressed(key) {
            clock.scale = scale;
            info!("Time scale: {}x", scale);
        }
    }
}
