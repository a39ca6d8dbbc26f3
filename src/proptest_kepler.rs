//! Property-based tests for the Kepler solver and snapshot propagator.

use proptest::prelude::*;
use std::f64::consts::TAU;

use crate::elements::OrbitalElements;
use crate::kepler::{KEPLER_TOLERANCE, propagate, sample_orbit_path, solve_eccentric_anomaly};
use crate::types::{DEG_TO_RAD, MU_AU_DAY};

fn arbitrary_elements() -> impl Strategy<Value = OrbitalElements> {
    (
        0.3f64..5.0,    // semi-major axis, AU
        0.0f64..0.95,   // eccentricity
        0.0f64..180.0,  // inclination, degrees
        0.0f64..360.0,  // ascending node, degrees
        0.0f64..360.0,  // perihelion argument, degrees
        0.0f64..360.0,  // mean anomaly, degrees
    )
        .prop_map(|(a, e, i, node, peri, m)| OrbitalElements {
            semi_major_axis: a,
            eccentricity: e,
            inclination: i,
            ascending_node_longitude: node,
            perihelion_argument: peri,
            mean_anomaly: m,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The converged eccentric anomaly satisfies Kepler's equation.
    #[test]
    fn prop_kepler_solver_residual(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let solution = solve_eccentric_anomaly(mean_anomaly, eccentricity);

        prop_assert!(solution.converged, "no convergence for e={eccentricity}, M={mean_anomaly}");

        let residual = solution.eccentric_anomaly
            - eccentricity * solution.eccentric_anomaly.sin()
            - mean_anomaly;
        prop_assert!(
            residual.abs() < KEPLER_TOLERANCE * 10.0,
            "residual {residual} for e={eccentricity}, M={mean_anomaly}"
        );
    }

    /// Propagated positions are finite and bounded by the apsides.
    #[test]
    fn prop_position_bounded_by_apsides(elements in arbitrary_elements()) {
        let propagation = propagate(&elements, MU_AU_DAY).unwrap();
        let r = propagation.position.length();

        let periapsis = elements.semi_major_axis * (1.0 - elements.eccentricity);
        let apoapsis = elements.semi_major_axis * (1.0 + elements.eccentricity);

        prop_assert!(r.is_finite());
        prop_assert!(
            r >= periapsis - 1e-6 && r <= apoapsis + 1e-6,
            "r={r} outside [{periapsis}, {apoapsis}]"
        );
    }

    /// Circular orbits sit at constant distance `a` for any mean anomaly.
    #[test]
    fn prop_circular_orbit_constant_radius(
        a in 0.3f64..5.0,
        node in 0.0f64..360.0,
        peri in 0.0f64..360.0,
        m in 0.0f64..360.0,
    ) {
        let elements = OrbitalElements {
            semi_major_axis: a,
            eccentricity: 0.0,
            inclination: 15.0,
            ascending_node_longitude: node,
            perihelion_argument: peri,
            mean_anomaly: m,
        };
        let propagation = propagate(&elements, MU_AU_DAY).unwrap();
        prop_assert!((propagation.position.length() - a).abs() < 1e-9);
    }

    /// Planar elements keep the orbit in the reference plane.
    #[test]
    fn prop_planar_orbit_has_zero_z(
        a in 0.3f64..5.0,
        e in 0.0f64..0.95,
        m in 0.0f64..360.0,
    ) {
        let elements = OrbitalElements {
            semi_major_axis: a,
            eccentricity: e,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            perihelion_argument: 0.0,
            mean_anomaly: m,
        };
        let propagation = propagate(&elements, MU_AU_DAY).unwrap();
        prop_assert!(propagation.position.z.abs() < 1e-9);
    }

    /// Sampled paths close exactly and pass through the propagated position
    /// for the matching mean anomaly sample.
    #[test]
    fn prop_orbit_path_closes_and_matches_propagation(
        elements in arbitrary_elements(),
        segments in 8usize..256,
    ) {
        let path = sample_orbit_path(&elements, MU_AU_DAY, segments).unwrap();
        prop_assert_eq!(path.len(), segments + 1);
        prop_assert_eq!(path[0], path[segments]);

        // The k-th sample is the propagation at M = 360k/segments.
        let k = segments / 2;
        let sampled = OrbitalElements {
            mean_anomaly: 360.0 * k as f64 / segments as f64,
            ..elements
        };
        let expected = propagate(&sampled, MU_AU_DAY).unwrap().position;
        prop_assert_eq!(path[k], expected);
    }

    /// The inclination rotation tilts the orbital plane by exactly `i`:
    /// the z-extent of any sampled point never exceeds `r·sin(i)`.
    #[test]
    fn prop_z_extent_bounded_by_inclination(elements in arbitrary_elements()) {
        let propagation = propagate(&elements, MU_AU_DAY).unwrap();
        let r = propagation.position.length();
        let sin_i = (elements.inclination * DEG_TO_RAD).sin().abs();

        prop_assert!(
            propagation.position.z.abs() <= r * sin_i + 1e-9,
            "z={} exceeds r·sin(i)={}",
            propagation.position.z,
            r * sin_i
        );
    }
}
