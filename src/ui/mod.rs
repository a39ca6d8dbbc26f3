//! UI module providing the egui-based info panel.

mod info_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .add_systems(EguiPrimaryContextPass, info_panel::info_panel);
    }
}

/// Global UI state.
#[derive(Resource)]
pub struct UiState {
    /// Whether the info side panel is expanded.
    pub info_panel_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            info_panel_open: true,
        }
    }
}
