use eframe::egui::{self, ScrollArea, Ui};

use crate::state::{AppState, Tab};
use crate::ui::{charts, insights, panels, tables, walkthrough};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct DdiScopeApp {
    pub state: AppState,
}

impl eframe::App for DdiScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.show_walkthrough {
            egui::CentralPanel::default().show(ctx, |ui| {
                walkthrough::walkthrough(ui, &mut self.state);
            });
            return;
        }

        // ---- Top panel: menu bar and tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::ModelComparison => model_comparison_tab(ui, &self.state),
            Tab::Interactions => interactions_tab(ui, &self.state),
            Tab::ColdStart => cold_start_tab(ui, &self.state),
            Tab::Insights => insights::insights_tab(ui, &self.state),
        });
    }
}

// ---------------------------------------------------------------------------
// Tab bodies
// ---------------------------------------------------------------------------

fn model_comparison_tab(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("AI Model Performance Comparison");
        ui.add_space(4.0);

        charts::comparison_chart(ui, &state.filtered, state.metric);

        ui.separator();
        ui.heading("Comprehensive Performance Overview");
        charts::radar_chart(ui, &state.filtered);

        ui.separator();
        ui.heading("Performance Metrics Table");
        tables::performance_table(ui, &state.filtered);
    });
}

fn interactions_tab(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("Sample Drug Interaction Data");
        ui.add_space(4.0);

        ui.heading("Interaction Examples");
        tables::interactions_table(ui, &state.interactions);

        ui.separator();
        ui.heading("Severity Distribution");
        charts::severity_chart(ui, &state.interactions);

        ui.separator();
        ui.label(
            "💡 Note: this is sample data demonstrating the types of interactions that \
             AI models are trained to predict. Real-world applications would use \
             comprehensive databases like DrugBank and TWOSIDES.",
        );
    });
}

fn cold_start_tab(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("Cold-Start Scenario Analysis");
        ui.label(
            "The cold-start scenario tests model performance on completely new drugs \
             not seen during training.",
        );
        ui.add_space(4.0);

        charts::cold_start_chart(ui, &state.cold_start);

        ui.separator();
        tables::cold_start_table(ui, &state.cold_start);

        ui.separator();
        ui.label(
            "⚠ Challenge: traditional models struggle with cold-start scenarios due to \
             reliance on hand-engineered features. Modern architectures (GNNs, \
             Transformers) show better generalization capabilities.",
        );
    });
}
