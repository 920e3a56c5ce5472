//! Property-based tests for orbit kinematics using proptest.

use std::f64::consts::TAU;

use proptest::prelude::*;

use super::OrbitTiming;
use crate::test_utils::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// With no inclination and no phase the orbit is a circle in the YZ plane.
    #[test]
    fn prop_flat_orbit_stays_on_circle(
        radius in 1.0f64..50_000.0,
        period in 1.0f64..10_000.0,
        t in 0.0f64..100_000.0,
    ) {
        let orbit = fixtures::orbit(radius, period, 0.0, 0.0);
        let pos = orbit.position_at(t, OrbitTiming::ElapsedAsAngle);

        prop_assert!(pos.x.abs() < 1e-9 * radius);
        let r2 = pos.y * pos.y + pos.z * pos.z;
        prop_assert!(
            ((r2 - radius * radius) / (radius * radius)).abs() < 1e-9,
            "y² + z² = {} but r² = {}", r2, radius * radius
        );
    }

    /// Shifting the phase by Δ is the same as evaluating Δ seconds later.
    #[test]
    fn prop_phase_shift_equivalence(
        radius in 1.0f64..50_000.0,
        inclination in 0.0f64..3.2,
        delta in -10.0f64..10.0,
        t in 0.0f64..10_000.0,
    ) {
        let base = fixtures::orbit(radius, 5940.0, inclination, 0.0);
        let shifted = fixtures::orbit(radius, 5940.0, inclination, delta);

        let a = shifted.position_at(t, OrbitTiming::ElapsedAsAngle);
        let b = base.position_at(t + delta, OrbitTiming::ElapsedAsAngle);

        prop_assert!(a.distance(b) < 1e-6 * radius, "{:?} != {:?}", a, b);
    }

    /// The parametrization repeats every 2π of elapsed time.
    #[test]
    fn prop_periodic_in_two_pi(
        radius in 1.0f64..50_000.0,
        inclination in 0.0f64..3.2,
        phase in 0.0f64..TAU,
        t in 0.0f64..10_000.0,
    ) {
        let orbit = fixtures::orbit(radius, 5520.0, inclination, phase);

        let a = orbit.position_at(t, OrbitTiming::ElapsedAsAngle);
        let b = orbit.position_at(t + TAU, OrbitTiming::ElapsedAsAngle);

        prop_assert!(a.distance(b) < 1e-6 * radius, "{:?} != {:?}", a, b);
    }

    /// The body never strays further than the orbit radius times √2.
    #[test]
    fn prop_position_bounded(
        radius in 1.0f64..50_000.0,
        inclination in -3.2f64..3.2,
        t in 0.0f64..10_000.0,
    ) {
        let orbit = fixtures::orbit(radius, 5940.0, inclination, 0.0);
        let pos = orbit.position_at(t, OrbitTiming::PeriodScaled);

        prop_assert!(pos.length() <= radius * 2.0_f64.sqrt() * (1.0 + 1e-12));
        prop_assert!(pos.length() >= radius * (1.0 - 1e-12));
    }
}
