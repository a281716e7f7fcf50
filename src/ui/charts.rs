use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{category_color, generate_palette, severity_color};
use crate::data::model::{ColdStartScenario, Interaction, Metric, ModelPerformance};
use crate::data::stats::severity_counts;

// ---------------------------------------------------------------------------
// Model comparison bar chart
// ---------------------------------------------------------------------------

/// Bar chart of one metric per model, one legend entry per model family.
pub fn comparison_chart(ui: &mut Ui, records: &[ModelPerformance], metric: Metric) {
    if records.is_empty() {
        ui.label("No models match the current filter.");
        return;
    }

    let names: Vec<String> = records.iter().map(|r| r.model.clone()).collect();

    // One BarChart per category so the legend shows categories, not bars.
    let categories = crate::data::filter::list_categories(records);
    let mut charts = Vec::new();
    for category in categories {
        let bars: Vec<Bar> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.category == category)
            .map(|(i, r)| {
                Bar::new(i as f64, metric.value_of(r))
                    .name(&r.model)
                    .width(0.6)
                    .fill(category_color(category))
            })
            .collect();
        charts.push(
            BarChart::new(bars)
                .name(category.to_string())
                .color(category_color(category)),
        );
    }

    Plot::new("comparison_chart")
        .height(280.0)
        .legend(Legend::default())
        .y_axis_label(metric.to_string())
        .include_y(0.0)
        .include_y(1.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Radar chart
// ---------------------------------------------------------------------------

/// Radial range of the radar chart. Metric values below the floor clamp to
/// the centre; the sample data sits comfortably inside.
const RADAR_MIN: f64 = 0.7;
const RADAR_MAX: f64 = 1.0;

fn radar_point(metric_idx: usize, value: f64) -> [f64; 2] {
    let angle = TAU / 4.0 - metric_idx as f64 * TAU / Metric::ALL.len() as f64;
    let r = ((value - RADAR_MIN) / (RADAR_MAX - RADAR_MIN)).clamp(0.0, 1.0);
    [r * angle.cos(), r * angle.sin()]
}

/// Radar chart of all four metrics, one translucent polygon per model.
pub fn radar_chart(ui: &mut Ui, records: &[ModelPerformance]) {
    if records.is_empty() {
        ui.label("No models match the current filter.");
        return;
    }

    let palette = generate_palette(records.len());

    Plot::new("radar_chart")
        .height(340.0)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            // Axis spokes and metric labels.
            for (i, metric) in Metric::ALL.iter().enumerate() {
                let tip = radar_point(i, RADAR_MAX);
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], tip]))
                        .color(Color32::from_gray(100))
                        .width(0.5),
                );
                let label_pos = PlotPoint::new(tip[0] * 1.15, tip[1] * 1.15);
                plot_ui.text(Text::new(label_pos, RichText::new(metric.to_string()).strong()));
            }

            // Outer ring.
            let ring: PlotPoints = (0..=64)
                .map(|i| {
                    let a = i as f64 / 64.0 * TAU;
                    [a.cos(), a.sin()]
                })
                .collect();
            plot_ui.line(Line::new(ring).color(Color32::from_gray(80)).width(0.5));

            for (idx, record) in records.iter().enumerate() {
                let color = palette[idx];
                let points: PlotPoints = Metric::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, m)| radar_point(i, m.value_of(record)))
                    .collect();
                plot_ui.polygon(
                    Polygon::new(points)
                        .name(&record.model)
                        .stroke(Stroke::new(1.5, color))
                        .fill_color(color.gamma_multiply(0.15)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Cold-start comparison
// ---------------------------------------------------------------------------

/// Bars for AUC-ROC plus a marked line for the success rate, both on a
/// shared 0–1 axis (success rate shown as a fraction).
pub fn cold_start_chart(ui: &mut Ui, scenarios: &[ColdStartScenario]) {
    let labels: Vec<String> = scenarios
        .iter()
        .map(|s| s.category.scenario_label().to_string())
        .collect();

    let bars: Vec<Bar> = scenarios
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Bar::new(i as f64, s.auc_roc)
                .name(s.category.scenario_label())
                .width(0.5)
                .fill(Color32::from_rgb(0x42, 0x85, 0xf4))
        })
        .collect();

    let rate_points: Vec<[f64; 2]> = scenarios
        .iter()
        .enumerate()
        .map(|(i, s)| [i as f64, f64::from(s.success_rate) / 100.0])
        .collect();

    Plot::new("cold_start_chart")
        .height(280.0)
        .legend(Legend::default())
        .x_axis_label("Model type")
        .y_axis_label("AUC-ROC / success rate")
        .include_y(0.0)
        .include_y(1.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("AUC-ROC")
                    .color(Color32::from_rgb(0x42, 0x85, 0xf4)),
            );
            plot_ui.line(
                Line::new(PlotPoints::from(rate_points.clone()))
                    .name("Success Rate (%)")
                    .color(Color32::from_rgb(0xe5, 0x39, 0x35))
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(rate_points))
                    .color(Color32::from_rgb(0xe5, 0x39, 0x35))
                    .radius(4.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Severity donut chart
// ---------------------------------------------------------------------------

const DONUT_INNER: f64 = 0.4;
const ARC_STEPS: usize = 48;

/// Donut chart of the interaction severity distribution.
pub fn severity_chart(ui: &mut Ui, interactions: &[Interaction]) {
    let counts = severity_counts(interactions);
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        ui.label("No interactions to summarize.");
        return;
    }

    Plot::new("severity_chart")
        .height(300.0)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.3)
        .include_y(1.3)
        .show(ui, |plot_ui| {
            let mut start = TAU / 4.0; // 12 o'clock, clockwise
            for &(severity, count) in &counts {
                let sweep = count as f64 / total as f64 * TAU;
                let end = start - sweep;

                // Slice outline: outer arc forward, inner arc back.
                let mut points: Vec<[f64; 2]> = Vec::with_capacity(2 * (ARC_STEPS + 1));
                for i in 0..=ARC_STEPS {
                    let a = start + (end - start) * i as f64 / ARC_STEPS as f64;
                    points.push([a.cos(), a.sin()]);
                }
                for i in (0..=ARC_STEPS).rev() {
                    let a = start + (end - start) * i as f64 / ARC_STEPS as f64;
                    points.push([DONUT_INNER * a.cos(), DONUT_INNER * a.sin()]);
                }

                let color = severity_color(severity);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .name(format!("{severity} ({count})"))
                        .stroke(Stroke::new(1.0, color))
                        .fill_color(color.gamma_multiply(0.8)),
                );

                // Percentage label at the slice's mid-angle.
                let mid = (start + end) / 2.0;
                let label_r = (1.0 + DONUT_INNER) / 2.0;
                let pct = count as f64 / total as f64 * 100.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(label_r * mid.cos(), label_r * mid.sin()),
                    RichText::new(format!("{pct:.0}%")).strong(),
                ));

                start = end;
            }
        });
}
