//! Circular orbit kinematics for satellite models.
//!
//! Satellites follow a simple circular parametrization around the planet at
//! the scene origin. There is no gravity here: position is a closed-form
//! function of elapsed time, and each body also spins about its own Y axis.

#[cfg(test)]
mod proptest_kinematics;

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

/// Errors raised when orbit parameters are out of range.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("orbit radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("orbital period must be positive, got {0}")]
    NonPositivePeriod(f64),
    #[error("orbit parameter `{name}` is not finite")]
    NonFiniteParameter { name: &'static str },
}

/// How elapsed time maps to the orbital angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrbitTiming {
    /// `t + phase_offset` is used directly as the angle in radians, so every
    /// orbit closes after 2π seconds whatever its period. The period only
    /// drives the spin, which advances by `2π / period` once per frame.
    #[default]
    ElapsedAsAngle,
    /// The angle is `(2π / period) * t + phase_offset` and the spin advances
    /// by `(2π / period) * delta`.
    PeriodScaled,
}

/// Settings shared by every orbiting body.
#[derive(Resource, Clone, Debug, Default)]
pub struct OrbitSettings {
    pub timing: OrbitTiming,
}

/// Static parameters of a circular orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    /// Distance from the planet center in scene units.
    pub orbit_radius: f64,
    /// Orbital period in seconds.
    pub period: f64,
    /// Tilt of the orbital plane in radians.
    pub inclination: f64,
    /// Radians added to elapsed time before evaluating the orbit.
    pub phase_offset: f64,
}

impl OrbitParams {
    /// Validate and build orbit parameters.
    pub fn new(
        orbit_radius: f64,
        period: f64,
        inclination: f64,
        phase_offset: f64,
    ) -> Result<Self, OrbitError> {
        for (name, value) in [
            ("orbit_radius", orbit_radius),
            ("period", period),
            ("inclination", inclination),
            ("phase_offset", phase_offset),
        ] {
            if !value.is_finite() {
                return Err(OrbitError::NonFiniteParameter { name });
            }
        }
        if orbit_radius <= 0.0 {
            return Err(OrbitError::NonPositiveRadius(orbit_radius));
        }
        if period <= 0.0 {
            return Err(OrbitError::NonPositivePeriod(period));
        }

        Ok(Self {
            orbit_radius,
            period,
            inclination,
            phase_offset,
        })
    }

    /// Angular speed derived from the period (rad/s).
    pub fn angular_speed(&self) -> f64 {
        TAU / self.period
    }

    /// Orbital angle at elapsed time `t`.
    pub fn angle_at(&self, t: f64, timing: OrbitTiming) -> f64 {
        match timing {
            OrbitTiming::ElapsedAsAngle => t + self.phase_offset,
            OrbitTiming::PeriodScaled => self.angular_speed() * t + self.phase_offset,
        }
    }

    /// Scene position at elapsed time `t`.
    pub fn position_at(&self, t: f64, timing: OrbitTiming) -> DVec3 {
        position_for_angle(self.orbit_radius, self.inclination, self.angle_at(t, timing))
    }

    /// Spin increment applied for one frame lasting `delta` seconds.
    pub fn spin_step(&self, delta: f64, timing: OrbitTiming) -> f64 {
        match timing {
            OrbitTiming::ElapsedAsAngle => self.angular_speed(),
            OrbitTiming::PeriodScaled => self.angular_speed() * delta,
        }
    }
}

/// Circular parametrization shared by both timing modes.
///
/// The inclination skews the X axis by `sin(angle) * sin(inclination)`, and
/// X is negated to match the scene's handedness.
pub fn position_for_angle(radius: f64, inclination: f64, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    let tilt = radius * sin * inclination.sin();
    DVec3::new(-tilt, radius * cos, radius * sin)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_rejects_non_positive_radius() {
        assert_eq!(
            OrbitParams::new(0.0, 5940.0, 0.0, 0.0),
            Err(OrbitError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            OrbitParams::new(-1.0, 5940.0, 0.0, 0.0),
            Err(OrbitError::NonPositiveRadius(-1.0))
        );
    }

    #[test]
    fn test_rejects_non_positive_period() {
        assert_eq!(
            OrbitParams::new(7000.0, 0.0, 0.0, 0.0),
            Err(OrbitError::NonPositivePeriod(0.0))
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert_eq!(
            OrbitParams::new(7000.0, f64::INFINITY, 0.0, 0.0),
            Err(OrbitError::NonFiniteParameter { name: "period" })
        );
        assert_eq!(
            OrbitParams::new(7000.0, 5940.0, f64::NAN, 0.0),
            Err(OrbitError::NonFiniteParameter { name: "inclination" })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = OrbitParams::new(7000.0, -3.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "orbital period must be positive, got -3");
    }

    #[test]
    fn test_position_at_time_zero() {
        // At angle 0 the body sits on +Y regardless of inclination
        let orbit = fixtures::orbit(7000.0, 5940.0, 1.7, 0.0);
        let pos = orbit.position_at(0.0, OrbitTiming::ElapsedAsAngle);

        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(pos.y, 7000.0, epsilon = 1e-9);
        assert_relative_eq!(pos.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_elapsed_time_is_the_angle() {
        let orbit = fixtures::orbit(7000.0, 5940.0, 0.0, 0.0);
        let pos = orbit.position_at(FRAC_PI_2, OrbitTiming::ElapsedAsAngle);

        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(pos.z, 7000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inclination_skews_negated_x() {
        let orbit = fixtures::orbit(1000.0, 5940.0, FRAC_PI_2, 0.0);
        let pos = orbit.position_at(FRAC_PI_2, OrbitTiming::ElapsedAsAngle);

        // sin(angle) = 1 and sin(inclination) = 1, applied with a minus sign
        assert_relative_eq!(pos.x, -1000.0, epsilon = 1e-9);
        assert_relative_eq!(pos.z, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_period_with_period_scaling() {
        let orbit = fixtures::orbit(7000.0, 5940.0, 0.0, 0.0);
        let pos = orbit.position_at(1485.0, OrbitTiming::PeriodScaled);

        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(pos.z, 7000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quarter_period_uses_raw_radians_by_default() {
        let orbit = fixtures::orbit(7000.0, 5940.0, 0.0, 0.0);
        let pos = orbit.position_at(1485.0, OrbitTiming::ElapsedAsAngle);

        assert_relative_eq!(pos.y, 7000.0 * 1485.0_f64.cos(), epsilon = 1e-6);
        assert_relative_eq!(pos.z, 7000.0 * 1485.0_f64.sin(), epsilon = 1e-6);
    }

    #[test]
    fn test_opposite_phases_are_antipodal() {
        let a = fixtures::orbit(7288.0, 5940.0, 1.714, 0.0);
        let b = fixtures::orbit(7288.0, 5940.0, 1.714, PI);

        for t in [0.0, 1.3, 42.0, 1000.0] {
            let pa = a.position_at(t, OrbitTiming::ElapsedAsAngle);
            let pb = b.position_at(t, OrbitTiming::ElapsedAsAngle);
            assert_relative_eq!((pa + pb).length(), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_spin_step_per_frame() {
        let orbit = fixtures::orbit(7000.0, 5940.0, 0.0, 0.0);
        let expected = TAU / 5940.0;

        // Frame length does not matter when elapsed time is the angle
        assert_relative_eq!(orbit.spin_step(0.016, OrbitTiming::ElapsedAsAngle), expected);
        assert_relative_eq!(orbit.spin_step(1.0, OrbitTiming::ElapsedAsAngle), expected);

        assert_relative_eq!(
            orbit.spin_step(0.5, OrbitTiming::PeriodScaled),
            expected * 0.5
        );
    }

    #[test]
    fn test_period_scaled_closes_after_one_period() {
        let orbit = fixtures::orbit(7157.0, 5520.0, 1.72, 0.3);
        let start = orbit.position_at(12.0, OrbitTiming::PeriodScaled);
        let end = orbit.position_at(12.0 + 5520.0, OrbitTiming::PeriodScaled);

        assert_relative_eq!(start.distance(end), 0.0, epsilon = 1e-6);
    }
}
