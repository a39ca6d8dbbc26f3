//! Pointer picking: maps pointer coordinates to the nearest tracked object.
//!
//! The pure core intersects a camera ray against candidate bounding spheres
//! and picks the hit with the smallest positive ray parameter; ties break to
//! the first-encountered candidate, so walking the registry in insertion
//! order makes resolution deterministic.
//!
//! Pointer events only mark [`PointerState`] dirty; the actual resolution
//! runs at most once per rendered frame, however many move events arrived
//! in between.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::render::markers::MarkerVisual;
use crate::types::{ObjectRegistry, TrackedObject};

/// Last-known pointer state in normalized device coordinates.
///
/// Written by `track_pointer`, consumed and cleared by `resolve_pointer_pass`.
#[derive(Resource, Default, Debug)]
pub struct PointerState {
    /// Normalized device coordinates, x and y in [-1, 1], y up.
    pub ndc: Option<Vec2>,
    /// Dirty flag: a new resolution pass is needed this frame.
    pub moved: bool,
    /// One-shot flag: the primary button was pressed since the last pass.
    pub clicked: bool,
}

/// Resource tracking the object currently under the pointer.
#[derive(Resource, Default)]
pub struct HoveredObject {
    pub entity: Option<Entity>,
}

/// Resource tracking the object selected by the last click.
///
/// A click on empty space keeps the previous selection, matching the info
/// panel staying open until another object is chosen.
#[derive(Resource, Default)]
pub struct SelectedObject {
    pub entity: Option<Entity>,
}

/// Plugin providing pointer tracking and per-frame pick resolution.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<HoveredObject>()
            .init_resource::<SelectedObject>()
            .add_systems(Update, (track_pointer, resolve_pointer_pass).chain());
    }
}

/// Smallest positive ray parameter at which `ray` enters the sphere, if any.
///
/// A ray starting inside the sphere reports the exit distance, so a camera
/// surrounded by a marker still registers the hit.
pub fn ray_sphere_entry(ray: Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = ray.origin - center;
    let direction = *ray.direction;

    // Unit direction, so the quadratic's leading coefficient is 1.
    let half_b = to_origin.dot(direction);
    let c = to_origin.length_squared() - radius * radius;
    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t_near = -half_b - sqrt_disc;
    if t_near > 0.0 {
        return Some(t_near);
    }
    let t_far = -half_b + sqrt_disc;
    (t_far > 0.0).then_some(t_far)
}

/// Resolve the candidate whose intersection lies closest along the ray.
///
/// Candidates are `(value, sphere center, sphere radius)` triples. Selection
/// uses strict `<`, so equal distances keep the first-encountered candidate
/// and resolution is deterministic for a given iteration order. Returns
/// `None` when nothing intersects.
pub fn resolve_pointer<T>(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (T, Vec3, f32)>,
) -> Option<T> {
    let mut winner: Option<(T, f32)> = None;

    for (value, center, radius) in candidates {
        if let Some(t) = ray_sphere_entry(ray, center, radius) {
            if winner.as_ref().is_none_or(|(_, best)| t < *best) {
                winner = Some((value, t));
            }
        }
    }

    winner.map(|(value, _)| value)
}

/// Record the latest cursor position as NDC and mark the state dirty.
///
/// This is the only writer of [`PointerState`]; bursts of pointer-move
/// events between frames collapse into a single dirty flag.
fn track_pointer(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        pointer.clicked = true;
    }

    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let width = window.width();
    let height = window.height();
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    // Cursor pixels (y down) to normalized device coordinates (y up).
    let ndc = Vec2::new(
        (cursor.x / width) * 2.0 - 1.0,
        1.0 - (cursor.y / height) * 2.0,
    );

    if pointer.ndc != Some(ndc) {
        pointer.ndc = Some(ndc);
        pointer.moved = true;
    }
}

/// Per-frame picking pass.
///
/// Builds a camera ray through the stored NDC coordinate and walks the
/// registry in insertion order. Hover updates every pass; selection updates
/// once per click.
fn resolve_pointer_pass(
    mut pointer: ResMut<PointerState>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    registry: Res<ObjectRegistry>,
    markers: Query<(&Transform, &MarkerVisual), With<TrackedObject>>,
    mut hovered: ResMut<HoveredObject>,
    mut selected: ResMut<SelectedObject>,
    mut contexts: EguiContexts,
) {
    if !pointer.moved && !pointer.clicked {
        return;
    }
    let clicked = pointer.clicked;
    pointer.moved = false;
    pointer.clicked = false;

    // A pointer over an egui panel belongs to the UI, not the scene.
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let Some(ndc) = pointer.ndc else {
        return;
    };
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    // The engine builds rays from viewport pixels; map the canonical NDC
    // coordinate back onto the viewport rectangle.
    let viewport_pos = Vec2::new(
        (ndc.x + 1.0) * 0.5 * window.width(),
        (1.0 - ndc.y) * 0.5 * window.height(),
    );
    let Ok(ray) = camera.viewport_to_world(camera_transform, viewport_pos) else {
        return;
    };

    let hit = resolve_pointer(
        ray,
        registry.iter().filter_map(|entity| {
            let (transform, visual) = markers.get(entity).ok()?;
            Some((entity, transform.translation, visual.hit_radius()))
        }),
    );

    hovered.entity = hit;
    if clicked {
        if let Some(entity) = hit {
            selected.entity = Some(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_along_neg_z() -> Ray3d {
        Ray3d {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Dir3::NEG_Z,
        }
    }

    #[test]
    fn test_ray_hits_sphere_at_entry_distance() {
        let t = ray_sphere_entry(ray_along_neg_z(), Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5, "expected entry at t=9, got {t}");
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        assert!(ray_sphere_entry(ray_along_neg_z(), Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_is_not_hit() {
        assert!(ray_sphere_entry(ray_along_neg_z(), Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
    }

    #[test]
    fn test_ray_starting_inside_sphere_hits() {
        let ray = Ray3d {
            origin: Vec3::ZERO,
            direction: Dir3::X,
        };
        let t = ray_sphere_entry(ray, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5, "expected exit at t=2, got {t}");
    }

    #[test]
    fn test_nearest_along_ray_wins() {
        // Two candidates along the same ray at distances 2 and 5 from the
        // camera: the distance-2 candidate must win regardless of order.
        let ray = Ray3d {
            origin: Vec3::ZERO,
            direction: Dir3::X,
        };
        let near = ("near", Vec3::new(2.5, 0.0, 0.0), 0.5);
        let far = ("far", Vec3::new(5.5, 0.0, 0.0), 0.5);

        assert_eq!(resolve_pointer(ray, vec![far, near]), Some("near"));
        assert_eq!(resolve_pointer(ray, vec![near, far]), Some("near"));
    }

    #[test]
    fn test_ties_break_to_first_candidate() {
        let ray = Ray3d {
            origin: Vec3::ZERO,
            direction: Dir3::X,
        };
        // Identical spheres: same entry distance, first in order wins.
        let first = ("first", Vec3::new(3.0, 0.0, 0.0), 1.0);
        let second = ("second", Vec3::new(3.0, 0.0, 0.0), 1.0);

        assert_eq!(resolve_pointer(ray, vec![first, second]), Some("first"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let ray = Ray3d {
            origin: Vec3::new(0.0, 0.1, 10.0),
            direction: Dir3::NEG_Z,
        };
        let candidates = vec![
            (1usize, Vec3::new(0.0, 0.0, 3.0), 0.6),
            (2usize, Vec3::new(0.0, 0.0, -2.0), 0.6),
            (3usize, Vec3::new(4.0, 0.0, 0.0), 0.6),
        ];

        let first = resolve_pointer(ray, candidates.clone());
        for _ in 0..10 {
            assert_eq!(resolve_pointer(ray, candidates.clone()), first);
        }
    }

    #[test]
    fn test_no_intersection_returns_none() {
        let ray = ray_along_neg_z();
        let candidates = vec![(1usize, Vec3::new(100.0, 100.0, 0.0), 1.0)];
        assert_eq!(resolve_pointer(ray, candidates), None);
    }
}
