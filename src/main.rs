//! Neoview - Near-Earth Object Orbit Visualizer
//!
//! A desktop application that fetches orbital-element records from a remote
//! catalog and renders their orbits and snapshot positions around a central
//! body, with pointer picking and an info panel.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use neoview::camera::CameraPlugin;
use neoview::catalog::{CatalogConfig, CatalogPlugin};
use neoview::input::InputPlugin;
use neoview::picking::PickingPlugin;
use neoview::render::RenderPlugin;
use neoview::types::ObjectRegistry;
use neoview::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert resources before the plugins that depend on them
        .insert_resource(CatalogConfig::from_env())
        .insert_resource(ObjectRegistry::default())
        .add_plugins((
            CameraPlugin,
            CatalogPlugin,
            RenderPlugin,
            PickingPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
