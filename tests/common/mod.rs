//! Common test utilities for integration tests.

use neoview::elements::OrbitalElements;

/// Orbital elements of 433 Eros, a convenient well-behaved near-Earth object.
pub fn eros_elements() -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: 1.458,
        eccentricity: 0.2227,
        inclination: 10.83,
        ascending_node_longitude: 304.3,
        perihelion_argument: 178.9,
        mean_anomaly: 246.7,
    }
}

/// A circular orbit of the given radius, tilted out of the reference plane.
pub fn circular_elements(radius_au: f64) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: radius_au,
        eccentricity: 0.0,
        inclination: 20.0,
        ascending_node_longitude: 45.0,
        perihelion_argument: 90.0,
        mean_anomaly: 0.0,
    }
}

/// An orbit confined to the reference plane with all angles zeroed.
pub fn planar_elements(semi_major_axis: f64, eccentricity: f64, mean_anomaly: f64) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis,
        eccentricity,
        inclination: 0.0,
        ascending_node_longitude: 0.0,
        perihelion_argument: 0.0,
        mean_anomaly,
    }
}
