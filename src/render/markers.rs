//! Tracked-object marker spawning.
//!
//! Each validated record becomes one sphere marker at its propagated
//! snapshot position, carrying the pre-sampled orbit polyline for the
//! gizmo pass to draw.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::camera::RENDER_SCALE;
use crate::types::TrackedObject;

/// Marker sphere radius in render units (~0.05 AU, exaggerated for
/// visibility and clickability).
pub const MARKER_RADIUS: f32 = 5.0;

/// Visual properties for a tracked-object marker.
#[derive(Component, Clone, Debug)]
pub struct MarkerVisual {
    /// Render radius in render units.
    pub render_radius: f32,
}

impl Default for MarkerVisual {
    fn default() -> Self {
        Self {
            render_radius: MARKER_RADIUS,
        }
    }
}

impl MarkerVisual {
    /// Picking radius: a generous hit area makes small markers selectable.
    pub fn hit_radius(&self) -> f32 {
        (self.render_radius * 2.0).max(2.0)
    }
}

/// Pre-sampled closed orbit polyline in render units.
#[derive(Component, Clone, Debug)]
pub struct OrbitPath {
    /// `segments + 1` points; the last repeats the first.
    pub points: Vec<Vec3>,
    /// Per-object line color.
    pub color: Color,
}

/// Convert an AU-frame position to render units.
pub fn to_render_pos(pos: DVec3) -> Vec3 {
    Vec3::new(
        (pos.x * RENDER_SCALE) as f32,
        (pos.y * RENDER_SCALE) as f32,
        (pos.z * RENDER_SCALE) as f32,
    )
}

/// Deterministic per-object line color from the object id.
///
/// The reference picked a random color per orbit; hashing the id instead
/// keeps colors stable across sessions and tests.
pub fn orbit_color(id: &str) -> Color {
    let hash = fnv1a(id.as_bytes());
    // Spread hue over the wheel, keep saturation/lightness readable.
    let hue = (hash % 360) as f32;
    Color::hsl(hue, 0.7, 0.6)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Spawn a marker entity for a validated tracked object.
///
/// # Arguments
/// * `commands` - Bevy commands for entity spawning
/// * `meshes` / `materials` - asset storage
/// * `object` - the validated object record
/// * `position` - propagated snapshot position in AU
/// * `path` - sampled closed orbit polyline in AU
///
/// # Returns
/// The spawned marker's Entity ID, for registry insertion.
pub fn spawn_tracked_object(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    object: TrackedObject,
    position: DVec3,
    path: Vec<DVec3>,
) -> Entity {
    let visual = MarkerVisual::default();
    let color = orbit_color(&object.id);

    let mesh = meshes.add(Sphere::new(visual.render_radius));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.5, 0.45),
        perceptual_roughness: 0.85,
        metallic: 0.05,
        ..default()
    });

    let points = path.into_iter().map(to_render_pos).collect();

    commands
        .spawn((
            object,
            visual,
            OrbitPath { points, color },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(to_render_pos(position)),
        ))
        .id()
}
