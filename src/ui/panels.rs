use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::PayloadRange;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – site dropdown and payload slider
// ---------------------------------------------------------------------------

/// Render the control panel. Widget changes are routed through the
/// `AppState` setters so the charts are recomputed immediately.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Launch site dropdown ----
            ui.strong("Launch Site");
            let current = state.site.clone();
            let mut picked = None;
            egui::ComboBox::from_id_salt("site_dropdown")
                .selected_text(current.label())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in state.site_options() {
                        if ui
                            .selectable_label(option == current, option.label())
                            .clicked()
                        {
                            picked = Some(option);
                        }
                    }
                });
            if let Some(site) = picked {
                state.set_site(site);
            }
            ui.separator();

            // ---- Payload range slider ----
            ui.strong("Payload range (kg)");
            let slider = state.slider;
            let mut low = state.payload_range.low;
            let mut high = state.payload_range.high;
            let low_changed = ui
                .add(
                    egui::Slider::new(&mut low, slider.min..=slider.max)
                        .step_by(slider.step)
                        .text("min"),
                )
                .changed();
            let high_changed = ui
                .add(
                    egui::Slider::new(&mut high, slider.min..=slider.max)
                        .step_by(slider.step)
                        .text("max"),
                )
                .changed();
            if low_changed || high_changed {
                state.set_payload_range(PayloadRange::new(low, high));
            }
            if ui.small_button("Reset").clicked() {
                let full = state.dataset.payload_bounds.unwrap_or_else(|| slider.domain());
                state.set_payload_range(full);
            }
            if state.payload_range.is_empty() {
                ui.label(RichText::new("min is above max: nothing selected").weak());
            }
            ui.separator();

            // ---- Booster colour legend ----
            ui.strong("Booster Version Category");
            for (category, color) in state.color_map.legend_entries() {
                ui.label(RichText::new(format!("● {category}")).color(color));
            }
            ui.separator();

            ui.checkbox(&mut state.show_table, "Show records table");
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.heading("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} at {} within {}",
            state.dataset.len(),
            state.visible_indices.len(),
            state.site.label(),
            state.payload_range
        ));
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – records currently in the scatter plot
// ---------------------------------------------------------------------------

pub fn records_table(ui: &mut Ui, state: &AppState) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size + 4.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(text_height + 4.0, |mut header| {
            for title in ["Flight", "Launch Site", "Payload (kg)", "Outcome", "Booster Version", "Category"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(text_height, state.visible_indices.len(), |mut row| {
                let rec = &state.dataset.records[state.visible_indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.0}", rec.payload_mass_kg));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.outcome.label());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.booster_version.as_deref().unwrap_or(""));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.booster_category);
                });
            });
        });
}
