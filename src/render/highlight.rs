//! Hover highlighting for tracked-object markers.
//!
//! Draws a ring around the marker the pointer currently rests on, so the
//! pick result is visible before the user clicks.

use bevy::prelude::*;

use super::markers::MarkerVisual;
use crate::camera::MainCamera;
use crate::picking::{HoveredObject, SelectedObject};

/// Plugin providing hover and selection feedback.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_highlights);
    }
}

/// Draw rings around the hovered and selected markers.
fn draw_highlights(
    mut gizmos: Gizmos,
    hovered: Res<HoveredObject>,
    selected: Res<SelectedObject>,
    camera_query: Query<&Transform, With<MainCamera>>,
    markers: Query<(&Transform, &MarkerVisual)>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    if let Some(entity) = hovered.entity {
        draw_ring(
            &mut gizmos,
            camera_transform,
            &markers,
            entity,
            Color::srgba(0.0, 1.0, 1.0, 0.8),
            1.6,
        );
    }

    if let Some(entity) = selected.entity {
        if hovered.entity != Some(entity) {
            draw_ring(
                &mut gizmos,
                camera_transform,
                &markers,
                entity,
                Color::srgba(1.0, 0.9, 0.2, 0.8),
                2.0,
            );
        }
    }
}

fn draw_ring(
    gizmos: &mut Gizmos,
    camera_transform: &Transform,
    markers: &Query<(&Transform, &MarkerVisual)>,
    entity: Entity,
    color: Color,
    scale: f32,
) {
    let Ok((transform, visual)) = markers.get(entity) else {
        return;
    };

    let center = transform.translation;
    let radius = visual.render_radius * scale;

    // Ring in the camera-facing plane so it reads as a circle from any angle.
    let to_camera = (camera_transform.translation - center).normalize_or_zero();
    if to_camera == Vec3::ZERO {
        return;
    }
    let side = to_camera.cross(Vec3::Y).normalize_or_zero();
    let side = if side == Vec3::ZERO { Vec3::X } else { side };
    let up = to_camera.cross(side);

    let segments = 32;
    for i in 0..segments {
        let t0 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let t1 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        let p0 = center + (side * t0.cos() + up * t0.sin()) * radius;
        let p1 = center + (side * t1.cos() + up * t1.sin()) * radius;

        gizmos.line(p0, p1, color);
    }
}
