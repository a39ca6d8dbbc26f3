//! Headless Bevy integration tests.
//!
//! These tests verify resources and systems work correctly without GPU.

use bevy::prelude::*;
use neoview::catalog::FetchStatus;
use neoview::picking::{HoveredObject, PointerState, SelectedObject};
use neoview::types::{ObjectRegistry, TrackedObject};

mod common;

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

#[test]
fn test_registry_resource_initializes_empty() {
    let mut app = create_minimal_app();
    app.insert_resource(ObjectRegistry::default());

    app.update();

    let registry = app.world().resource::<ObjectRegistry>();
    assert!(registry.is_empty(), "Registry should start empty");
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_registry_grows_mid_session() {
    let mut app = create_minimal_app();
    app.insert_resource(ObjectRegistry::default());

    // Simulate one object arriving per frame, as the fetch pipeline does.
    app.add_systems(
        Update,
        |mut commands: Commands, mut registry: ResMut<ObjectRegistry>| {
            let n = registry.len();
            let entity = commands
                .spawn(TrackedObject {
                    id: format!("{n}"),
                    name: format!("Object {n}"),
                    elements: common::eros_elements(),
                    converged: true,
                })
                .id();
            registry.push(entity);
        },
    );

    for _ in 0..5 {
        app.update();
    }

    let registry = app.world().resource::<ObjectRegistry>();
    assert_eq!(registry.len(), 5, "Registry should grow one entry per frame");
}

#[test]
fn test_registry_preserves_insertion_order() {
    let mut app = create_minimal_app();
    app.insert_resource(ObjectRegistry::default());
    app.update();

    let first = app.world_mut().spawn_empty().id();
    let second = app.world_mut().spawn_empty().id();
    let third = app.world_mut().spawn_empty().id();

    {
        let mut registry = app.world_mut().resource_mut::<ObjectRegistry>();
        registry.push(first);
        registry.push(second);
        registry.push(third);
    }

    let registry = app.world().resource::<ObjectRegistry>();
    let order: Vec<Entity> = registry.iter().collect();
    assert_eq!(order, vec![first, second, third]);
}

#[test]
fn test_fetch_status_tracks_progress() {
    let mut app = create_minimal_app();
    app.insert_resource(FetchStatus::default());

    app.add_systems(Update, |mut status: ResMut<FetchStatus>| {
        if !status.catalog_done {
            status.catalog_done = true;
            status.discovered = 3;
        } else if status.pending() > 0 {
            status.loaded += 1;
        }
    });

    // Frame 1 resolves the catalog, frames 2-4 load the three objects.
    for _ in 0..4 {
        app.update();
    }

    let status = app.world().resource::<FetchStatus>();
    assert!(status.catalog_done);
    assert_eq!(status.loaded, 3);
    assert_eq!(status.pending(), 0);
}

#[test]
fn test_pointer_bursts_coalesce_into_one_pass() {
    let mut app = create_minimal_app();
    app.insert_resource(PointerState::default());

    #[derive(Resource, Default)]
    struct PassCount(usize);
    app.insert_resource(PassCount::default());

    // A resolution pass in miniature: consume the dirty flags, count the pass.
    app.add_systems(
        Update,
        |mut pointer: ResMut<PointerState>, mut passes: ResMut<PassCount>| {
            if !pointer.moved && !pointer.clicked {
                return;
            }
            pointer.moved = false;
            pointer.clicked = false;
            passes.0 += 1;
        },
    );

    // A burst of moves between frames marks the state dirty once.
    {
        let mut pointer = app.world_mut().resource_mut::<PointerState>();
        for i in 0..20 {
            pointer.ndc = Some(Vec2::new(i as f32 / 20.0, 0.0));
            pointer.moved = true;
        }
    }
    app.update();

    // A quiet frame runs no pass at all.
    app.update();

    let passes = app.world().resource::<PassCount>();
    assert_eq!(passes.0, 1, "20 moves across one frame must resolve once");
}

#[test]
fn test_hover_and_selection_start_empty() {
    let mut app = create_minimal_app();
    app.insert_resource(HoveredObject::default());
    app.insert_resource(SelectedObject::default());

    app.update();

    assert!(app.world().resource::<HoveredObject>().entity.is_none());
    assert!(app.world().resource::<SelectedObject>().entity.is_none());
}
