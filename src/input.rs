//! Keyboard shortcuts for camera rotation and orbit path visibility.

use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::render::OrbitPathSettings;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle keyboard shortcuts.
///
/// Space toggles the camera auto-orbit; O toggles orbit path rendering.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut rig: ResMut<CameraRig>,
    mut orbit_settings: ResMut<OrbitPathSettings>,
) {
    if keys.just_pressed(KeyCode::Space) {
        rig.auto_rotate = !rig.auto_rotate;
        info!(
            "Camera auto-orbit {}",
            if rig.auto_rotate { "resumed" } else { "paused" }
        );
    }

    if keys.just_pressed(KeyCode::KeyO) {
        orbit_settings.visible = !orbit_settings.visible;
        info!(
            "Orbit paths {}",
            if orbit_settings.visible { "shown" } else { "hidden" }
        );
    }
}
