//! Rendering systems for the orbit visualizer.
//!
//! Visual representation of the central body, fetched object markers,
//! orbit polylines, and hover feedback. All scene positions are the
//! propagator's AU-frame output scaled by [`crate::camera::RENDER_SCALE`].

mod bodies;
mod highlight;
pub mod markers;
mod orbits;

use bevy::prelude::*;

use self::bodies::CentralBodyPlugin;
use self::highlight::HighlightPlugin;
use self::orbits::OrbitPathPlugin;

pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CentralBodyPlugin, OrbitPathPlugin, HighlightPlugin));
    }
}
