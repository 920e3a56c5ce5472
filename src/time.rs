//! Simulation clock advancement.
//!
//! Handles progression of simulation time based on scale and pause state.

use bevy::prelude::*;

use crate::types::{FrameSet, SimulationClock};

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Clock));
    }
}

/// Advance the simulation clock by the real-world frame delta.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta_secs_f64());
}
