use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{PieChartSpec, ScatterChartSpec};
use crate::color::{ColorMap, outcome_label_color};

// ---------------------------------------------------------------------------
// Outcome pie (left half of the central panel)
// ---------------------------------------------------------------------------

/// Arc segments used for a full circle; wedges get a proportional share.
const SEGMENTS_PER_TURN: f64 = 96.0;

/// Outline of a pie wedge on the unit circle, starting at the centre.
///
/// `start` and `end` are fractions of a full turn measured clockwise from
/// twelve o'clock, the way pie charts are usually read.
pub fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let segments = ((end - start) * SEGMENTS_PER_TURN).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let frac = start + (end - start) * i as f64 / segments as f64;
        let angle = FRAC_PI_2 - TAU * frac;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

/// Point at `radius` on the bisector of a wedge, used for its label.
fn wedge_label_position(start: f64, end: f64, radius: f64) -> PlotPoint {
    let angle = FRAC_PI_2 - TAU * (start + end) / 2.0;
    PlotPoint::new(radius * angle.cos(), radius * angle.sin())
}

pub fn outcome_pie(ui: &mut Ui, pie: &PieChartSpec) {
    ui.label(RichText::new(&pie.title).strong());

    if pie.slices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches for this selection.");
        });
        return;
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for slice in &pie.slices {
                let frac = pie.fraction(slice);
                let end = start + frac;

                let polygon = Polygon::new(PlotPoints::from(wedge_points(start, end)))
                    .name(format!("{} ({})", slice.label, slice.count))
                    .fill_color(outcome_label_color(slice.label))
                    .stroke(Stroke::new(1.0, Color32::WHITE));
                plot_ui.polygon(polygon);

                let label = Text::new(
                    wedge_label_position(start, end, 0.6),
                    RichText::new(format!("{:.1}%", frac * 100.0)).color(Color32::WHITE).strong(),
                )
                .anchor(Align2::CENTER_CENTER);
                plot_ui.text(label);

                start = end;
            }
        });
}

// ---------------------------------------------------------------------------
// Payload scatter (right half of the central panel)
// ---------------------------------------------------------------------------

pub fn payload_scatter(ui: &mut Ui, scatter: &ScatterChartSpec, color_map: &ColorMap) {
    ui.label(RichText::new(&scatter.title).strong());

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points = Points::new(PlotPoints::from(series.points.clone()))
                    .name(&series.booster_category)
                    .color(color_map.color_for(&series.booster_category))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0);
                plot_ui.points(points);
            }
        });
}
