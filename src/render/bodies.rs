//! Central body rendering and scene lighting.

use bevy::prelude::*;

/// Visual radius of the central body in render units.
///
/// Like the markers, this is wildly exaggerated against the real scale so
/// the body reads as an anchor point rather than a subpixel dot.
pub const CENTRAL_BODY_RADIUS: f32 = 20.0;

/// Axial rotation speed of the central body in radians per second.
const SPIN_SPEED: f32 = 0.06;

/// Marker component for the central body mesh.
#[derive(Component)]
pub struct CentralBody;

/// Plugin spawning the central body and scene lights.
pub struct CentralBodyPlugin;

impl Plugin for CentralBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene)
            .add_systems(Update, spin_central_body);
    }
}

/// Spawn the central body at the origin plus the lights around it.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(CENTRAL_BODY_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.5, 0.8),
        emissive: LinearRgba::rgb(0.02, 0.08, 0.2),
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::ZERO),
        CentralBody,
    ));

    // Key light off to one side, plus a point light at the origin so
    // markers facing away from the key light stay readable.
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(1000.0, 1000.0, 1000.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 10_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(1.0, 1.0, 1.0),
        brightness: 120.0,
        ..default()
    });
}

/// Slow axial rotation of the central body.
fn spin_central_body(time: Res<Time>, mut query: Query<&mut Transform, With<CentralBody>>) {
    for mut transform in query.iter_mut() {
        transform.rotate_y(SPIN_SPEED * time.delta_secs());
    }
}
