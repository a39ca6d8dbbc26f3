//! Camera system for the orbit visualizer.
//!
//! A perspective camera circles the central body on a slow auto-orbit,
//! always looking at the origin. Scroll zooms by moving the camera along
//! its orbit radius; Space pauses the rotation.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*};

/// Render scale: render units per astronomical unit.
/// At 100 units/AU the inner solar system fits comfortably in f32 range
/// while small markers stay above float noise.
pub const RENDER_SCALE: f64 = 100.0;

/// Default camera orbit radius in render units (~5 AU).
pub const DEFAULT_ORBIT_RADIUS: f32 = 500.0;

/// Closest the camera may approach the origin.
pub const MIN_ORBIT_RADIUS: f32 = 50.0;

/// Furthest the camera may pull back.
pub const MAX_ORBIT_RADIUS: f32 = 3000.0;

/// Camera height above the reference plane, as a fraction of orbit radius.
pub const HEIGHT_RATIO: f32 = 0.4;

/// Auto-orbit angular speed in radians per second.
pub const AUTO_ROTATE_SPEED: f32 = 0.08;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking the camera's orbit around the origin.
#[derive(Resource)]
pub struct CameraRig {
    /// Current orbit angle in radians.
    pub angle: f32,
    /// Distance from the origin in render units.
    pub radius: f32,
    /// Whether the camera advances on its own each frame.
    pub auto_rotate: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            angle: 0.0,
            radius: DEFAULT_ORBIT_RADIUS,
            auto_rotate: true,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_orbit).chain());
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        rig_transform(&rig),
        MainCamera,
    ));
}

/// Handle mouse scroll wheel for zoom (orbit radius).
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut rig: ResMut<CameraRig>) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    rig.radius = (rig.radius * zoom_factor).clamp(MIN_ORBIT_RADIUS, MAX_ORBIT_RADIUS);
}

/// Advance the auto-orbit and keep the camera looking at the origin.
fn camera_orbit(
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if rig.auto_rotate {
        rig.angle += AUTO_ROTATE_SPEED * time.delta_secs();
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    *transform = rig_transform(&rig);
}

fn rig_transform(rig: &CameraRig) -> Transform {
    let position = Vec3::new(
        rig.radius * rig.angle.cos(),
        rig.radius * HEIGHT_RATIO,
        rig.radius * rig.angle.sin(),
    );
    Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y)
}
