//! Core types and constants shared across the visualizer.

use bevy::prelude::*;

use crate::elements::OrbitalElements;

/// Gaussian gravitational constant k, in AU^(3/2)/day (heliocentric).
pub const GAUSS_GRAV_CONSTANT: f64 = 0.01720209895;

/// Standard gravitational parameter mu = k², in AU³/day².
///
/// Process-wide constant threaded through the propagation signatures. The
/// snapshot position formula does not consume it; it is reserved for
/// time-based propagation.
pub const MU_AU_DAY: f64 = GAUSS_GRAV_CONSTANT * GAUSS_GRAV_CONSTANT;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Component marking a fetched, validated near-Earth object.
///
/// Lives on the marker entity from successful fetch+validation until the
/// session ends; there is no deletion path.
#[derive(Component, Clone, Debug)]
pub struct TrackedObject {
    /// Stable catalog identifier.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Validated orbital elements, immutable once fetched.
    pub elements: OrbitalElements,
    /// False when the Kepler solve hit its iteration cap for this record;
    /// the rendered position is then a best-effort estimate.
    pub converged: bool,
}

/// Ordered registry of tracked-object entities.
///
/// Insertion order is the picking tie-break order, so it must stay stable
/// within a session. Append-only: fetch completion pushes entities between
/// frames, and per-frame readers tolerate growth mid-session.
#[derive(Resource, Default, Debug)]
pub struct ObjectRegistry {
    entities: Vec<Entity>,
}

impl ObjectRegistry {
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
