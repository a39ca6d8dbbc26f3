//! Keplerian snapshot propagation: orbital elements to Cartesian positions.
//!
//! Positions are derived directly from the stored mean anomaly; the
//! visualizer never advances `M` over time (objects sit at one snapshot
//! position while their full orbit path is drawn). The Kepler equation is
//! solved with Newton's method.

use bevy::math::DVec3;

use crate::elements::{ElementsError, OrbitalElements};
use crate::types::DEG_TO_RAD;

/// Convergence tolerance for the Newton iteration, in radians.
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Iteration cap for the Kepler solve.
///
/// Newton's method converges in a handful of iterations for realistic
/// eccentricities; the cap keeps near-parabolic or otherwise hostile inputs
/// from stalling the frame. On hitting the cap the solve returns its last
/// estimate with `converged = false` rather than looping.
pub const MAX_KEPLER_ITERATIONS: usize = 50;

/// Default number of segments when sampling a closed orbit path.
pub const DEFAULT_ORBIT_SEGMENTS: usize = 360;

/// Outcome of a Kepler solve: best-estimate eccentric anomaly plus whether
/// the iteration converged within [`MAX_KEPLER_ITERATIONS`].
#[derive(Clone, Copy, Debug)]
pub struct KeplerSolution {
    /// Eccentric anomaly `E` in radians.
    pub eccentric_anomaly: f64,
    /// False when the iteration cap was hit before the tolerance.
    pub converged: bool,
    /// Newton iterations performed.
    pub iterations: usize,
}

/// A propagated snapshot position.
#[derive(Clone, Copy, Debug)]
pub struct Propagation {
    /// Heliocentric-frame position in AU.
    pub position: DVec3,
    /// False when the underlying Kepler solve did not converge; the position
    /// is then a best-effort estimate.
    pub converged: bool,
}

/// Solve Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly.
///
/// # Arguments
/// * `mean_anomaly` - Mean anomaly M in radians
/// * `eccentricity` - Orbital eccentricity, 0 ≤ e < 1
///
/// Seeded at `E₀ = M`, iterating
/// `E_{n+1} = E_n - (E_n - e·sin(E_n) - M) / (1 - e·cos(E_n))`
/// until successive estimates differ by less than [`KEPLER_TOLERANCE`].
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let m = mean_anomaly;
    let mut e_anomaly = m;

    for i in 0..MAX_KEPLER_ITERATIONS {
        let f = e_anomaly - eccentricity * e_anomaly.sin() - m;
        let f_prime = 1.0 - eccentricity * e_anomaly.cos();
        let next = e_anomaly - f / f_prime;
        let delta = (next - e_anomaly).abs();
        e_anomaly = next;

        if delta < KEPLER_TOLERANCE {
            return KeplerSolution {
                eccentric_anomaly: e_anomaly,
                converged: true,
                iterations: i + 1,
            };
        }
    }

    KeplerSolution {
        eccentric_anomaly: e_anomaly,
        converged: false,
        iterations: MAX_KEPLER_ITERATIONS,
    }
}

/// Convert orbital elements into a Cartesian snapshot position.
///
/// Angular elements are taken in degrees; the result is a heliocentric-frame
/// position in AU. Pure and deterministic: identical inputs always produce
/// identical output.
///
/// `_mu` is accepted for interface compatibility with time-based propagation
/// but does not enter the snapshot formula.
///
/// # Errors
/// [`ElementsError`] for degenerate inputs (`a ≤ 0`, `e ∉ [0,1)`, non-finite
/// fields). A non-converged Kepler solve is not an error; the returned
/// [`Propagation`] carries a `converged = false` flag instead.
pub fn propagate(elements: &OrbitalElements, _mu: f64) -> Result<Propagation, ElementsError> {
    elements.check()?;

    let a = elements.semi_major_axis;
    let e = elements.eccentricity;
    let inclination = elements.inclination * DEG_TO_RAD;
    let node = elements.ascending_node_longitude * DEG_TO_RAD;
    let periapsis = elements.perihelion_argument * DEG_TO_RAD;
    let mean_anomaly = elements.mean_anomaly * DEG_TO_RAD;

    let solution = solve_eccentric_anomaly(mean_anomaly, e);
    let ecc_anomaly = solution.eccentric_anomaly;

    // Position in the orbital plane, periapsis along +x.
    let x_orb = a * (ecc_anomaly.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    // 3-1-3 Euler rotation: argument of periapsis, inclination, ascending node.
    let (sin_node, cos_node) = node.sin_cos();
    let (sin_peri, cos_peri) = periapsis.sin_cos();
    let (sin_incl, cos_incl) = inclination.sin_cos();

    let x = (cos_node * cos_peri - sin_node * sin_peri * cos_incl) * x_orb
        + (-cos_node * sin_peri - sin_node * cos_peri * cos_incl) * y_orb;
    let y = (sin_node * cos_peri + cos_node * sin_peri * cos_incl) * x_orb
        + (-sin_node * sin_peri + cos_node * cos_peri * cos_incl) * y_orb;
    let z = (sin_peri * sin_incl) * x_orb + (cos_peri * sin_incl) * y_orb;

    Ok(Propagation {
        position: DVec3::new(x, y, z),
        converged: solution.converged,
    })
}

/// Sample a closed polyline approximating the orbit.
///
/// Holds all elements fixed except the mean anomaly, which sweeps
/// `360·k/segments` degrees for `k` in `[0, segments)`; the first point is
/// appended again so the returned sequence has `segments + 1` points and
/// closes the loop. Deterministic: the same elements always produce the
/// same path.
pub fn sample_orbit_path(
    elements: &OrbitalElements,
    mu: f64,
    segments: usize,
) -> Result<Vec<DVec3>, ElementsError> {
    elements.check()?;

    let mut points = Vec::with_capacity(segments + 1);
    for k in 0..segments {
        let sampled = OrbitalElements {
            mean_anomaly: 360.0 * k as f64 / segments as f64,
            ..*elements
        };
        points.push(propagate(&sampled, mu)?.position);
    }
    if let Some(&first) = points.first() {
        points.push(first);
    }
    Ok(points)
}
