//! Orbit path rendering using Bevy Gizmos.
//!
//! Each tracked object carries its pre-sampled closed polyline (computed
//! once at fetch time, since elements never change); this pass just draws
//! the stored segments every frame.

use bevy::prelude::*;

use super::markers::OrbitPath;

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Alpha applied to each orbit's line color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 0.6,
        }
    }
}

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Draw every tracked object's orbit as a closed polyline.
fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    orbits: Query<&OrbitPath>,
) {
    if !settings.visible {
        return;
    }

    for orbit in orbits.iter() {
        let color = orbit.color.with_alpha(settings.alpha);
        for pair in orbit.points.windows(2) {
            gizmos.line(pair[0], pair[1], color);
        }
    }
}
