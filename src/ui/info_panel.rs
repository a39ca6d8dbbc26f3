//! Info panel showing fetch status, the object list, and the selected
//! object's orbital elements.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::FetchStatus;
use crate::elements::OrbitalElements;
use crate::picking::{HoveredObject, SelectedObject};
use crate::types::{ObjectRegistry, TrackedObject};

use super::UiState;

/// System that renders the info panel.
pub fn info_panel(
    mut contexts: EguiContexts,
    mut selected: ResMut<SelectedObject>,
    mut hovered: ResMut<HoveredObject>,
    mut ui_state: ResMut<UiState>,
    registry: Res<ObjectRegistry>,
    objects: Query<&TrackedObject>,
    status: Res<FetchStatus>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .inner_margin(egui::Margin::same(12));

    if ui_state.info_panel_open {
        egui::SidePanel::right("info_panel")
            .resizable(false)
            .default_width(220.0)
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button("\u{25C0}")
                        .on_hover_text("Collapse panel")
                        .clicked()
                    {
                        ui_state.info_panel_open = false;
                    }
                    ui.heading("Near-Earth Objects");
                });

                ui.separator();
                render_fetch_status(ui, &status);
                ui.separator();

                render_object_list(ui, &registry, &objects, &mut selected, &mut hovered);

                ui.separator();

                if let Some(entity) = selected.entity {
                    if let Ok(object) = objects.get(entity) {
                        ui.heading(&object.name);
                        ui.add_space(4.0);
                        render_object_info(ui, object);
                    }
                } else {
                    ui.label("Hover a marker or pick an object from the list.");
                }
            });
    } else {
        egui::SidePanel::right("info_expand")
            .resizable(false)
            .exact_width(28.0)
            .frame(panel_frame)
            .show(ctx, |ui| {
                if ui
                    .button("\u{25B6}")
                    .on_hover_text("Expand panel")
                    .clicked()
                {
                    ui_state.info_panel_open = true;
                }
            });
    }
}

/// Non-fatal status surface for the fetch pipeline.
fn render_fetch_status(ui: &mut egui::Ui, status: &FetchStatus) {
    if !status.catalog_done {
        ui.label("Loading catalog\u{2026}");
        return;
    }

    let mut line = format!("{} of {} objects loaded", status.loaded, status.discovered);
    if status.pending() > 0 {
        line.push_str(&format!(" ({} pending)", status.pending()));
    }
    ui.label(line);

    if status.skipped > 0 {
        ui.colored_label(
            egui::Color32::from_rgb(230, 180, 80),
            format!("{} skipped", status.skipped),
        );
    }
    if let Some(err) = &status.last_error {
        ui.colored_label(egui::Color32::from_rgb(230, 120, 100), err)
            .on_hover_text("Most recent fetch or validation failure");
    }
}

/// Scrollable list of loaded objects, in registry order.
fn render_object_list(
    ui: &mut egui::Ui,
    registry: &ObjectRegistry,
    objects: &Query<&TrackedObject>,
    selected: &mut ResMut<SelectedObject>,
    hovered: &mut ResMut<HoveredObject>,
) {
    ui.label("Objects:");

    egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
        for entity in registry.iter() {
            let Ok(object) = objects.get(entity) else {
                continue;
            };

            let is_selected = selected.entity == Some(entity);
            let button = egui::Button::new(&object.name).selected(is_selected);
            let response = ui.add(button);

            if response.hovered() {
                hovered.entity = Some(entity);
            }
            if response.clicked() {
                selected.entity = Some(entity);
            }
        }
    });
}

fn render_object_info(ui: &mut egui::Ui, object: &TrackedObject) {
    ui.label(format!("ID: {}", object.id));

    if !object.converged {
        ui.colored_label(
            egui::Color32::from_rgb(230, 180, 80),
            "Position is a best-effort estimate (solver did not converge)",
        );
    }

    ui.add_space(8.0);
    ui.label("Orbital elements:");
    render_elements(ui, &object.elements);
}

fn render_elements(ui: &mut egui::Ui, elements: &OrbitalElements) {
    ui.label(format!(
        "  Semi-major axis: {:.4} AU",
        elements.semi_major_axis
    ));
    ui.label(format!("  Eccentricity: {:.4}", elements.eccentricity));
    ui.label(format!("  Inclination: {:.2}\u{00B0}", elements.inclination));
    ui.label(format!(
        "  Ascending node: {:.2}\u{00B0}",
        elements.ascending_node_longitude
    ));
    ui.label(format!(
        "  Perihelion argument: {:.2}\u{00B0}",
        elements.perihelion_argument
    ));
    ui.label(format!(
        "  Mean anomaly: {:.2}\u{00B0}",
        elements.mean_anomaly
    ));
}
