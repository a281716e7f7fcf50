use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Ui};
use serde::Serialize;

use crate::data::filter::{list_categories, CategoryFilter};
use crate::data::model::Metric;
use crate::data::stats::best_by;
use crate::export;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the control panel: model-type filter, metric selector, summary.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔧 Controls");
    ui.separator();

    // ---- Model-type filter ----
    ui.strong("Filter by Model Type");
    let mut options = vec![CategoryFilter::All];
    options.extend(
        list_categories(&state.models)
            .into_iter()
            .map(CategoryFilter::Only),
    );
    let mut selected_filter = state.filter;
    egui::ComboBox::from_id_salt("model_type_filter")
        .selected_text(selected_filter.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &options {
                ui.selectable_value(&mut selected_filter, *option, option.to_string());
            }
        });
    if selected_filter != state.filter {
        state.set_filter(selected_filter);
    }

    ui.add_space(8.0);

    // ---- Metric selector ----
    ui.strong("Performance Metric");
    egui::ComboBox::from_id_salt("performance_metric")
        .selected_text(state.metric.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for metric in Metric::ALL {
                ui.selectable_value(&mut state.metric, metric, metric.to_string());
            }
        });

    ui.separator();

    // ---- Summary over the filtered view ----
    summary_metric(ui, "Total Models", state.filtered.len().to_string());
    if let Some(best) = best_by(&state.filtered, Metric::AucRoc) {
        summary_metric(ui, "Best AUC-ROC", format!("{:.3}", best.auc_roc));
    }
    if let Some(best) = best_by(&state.filtered, Metric::F1Score) {
        summary_metric(ui, "Best F1-Score", format!("{:.3}", best.f1_score));
    }
}

fn summary_metric(ui: &mut Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(RichText::new(value).size(22.0).strong());
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar, including tab selection.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export performance table…").clicked() {
                let records = state.filtered.clone();
                export_table(state, "model_performance", &records);
                ui.close_menu();
            }
            if ui.button("Export interactions…").clicked() {
                let records = state.interactions.clone();
                export_table(state, "drug_interactions", &records);
                ui.close_menu();
            }
            if ui.button("Export cold-start table…").clicked() {
                let records = state.cold_start.clone();
                export_table(state, "cold_start", &records);
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui: &mut Ui| {
            if ui.button("Show Walkthrough Guide").clicked() {
                state.show_walkthrough = true;
                ui.close_menu();
            }
        });

        ui.separator();

        for tab in Tab::ALL {
            if ui.selectable_label(state.tab == tab, tab.title()).clicked() {
                state.tab = tab;
            }
        }

        ui.separator();

        ui.label(format!(
            "{} of {} models shown",
            state.filtered.len(),
            state.models.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

fn export_table<T: Serialize>(state: &mut AppState, default_name: &str, records: &[T]) {
    let file = rfd::FileDialog::new()
        .set_title("Export table")
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .set_file_name(format!("{default_name}.json"))
        .save_file();

    let Some(path) = file else {
        return;
    };

    match export::write_table(&path, records)
        .with_context(|| format!("exporting {}", path.display()))
    {
        Ok(()) => {
            log::info!("Exported {} rows to {}", records.len(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
