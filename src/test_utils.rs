//! Test utilities for the scene simulation.
//!
//! Provides fixtures for orbits and a headless app running the frame update.

use bevy::prelude::*;

/// Fixtures for creating test orbits.
pub mod fixtures {
    use crate::kinematics::OrbitParams;

    /// Build orbit parameters, panicking on invalid input.
    pub fn orbit(radius: f64, period: f64, inclination: f64, phase_offset: f64) -> OrbitParams {
        OrbitParams::new(radius, period, inclination, phase_offset)
            .expect("test orbit parameters must be valid")
    }
}

/// Headless app with the frame update plugin and a fixed frame length.
pub fn frame_app(frame_secs: f64) -> App {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use crate::frame::FramePlugin;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, FramePlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            frame_secs,
        )));
    app
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::types::SimulationClock;

    #[test]
    fn test_frame_app_advances_clock() {
        let mut app = frame_app(0.1);
        for _ in 0..5 {
            app.update();
        }

        let clock = app.world().resource::<SimulationClock>();
        assert_eq!(clock.frame, 5);
        // Bevy reports no delta on the very first frame
        assert!(clock.elapsed > 0.35 && clock.elapsed < 0.55, "elapsed {}", clock.elapsed);
        assert_relative_eq!(clock.delta, 0.1, epsilon = 1e-6);
    }
}
