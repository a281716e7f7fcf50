use eframe::egui::{RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Walkthrough guide (shown on first launch)
// ---------------------------------------------------------------------------

const SECTIONS: [(&str, &str); 5] = [
    (
        "🎮 Control Panel (Sidebar)",
        "• Filter by Model Type: focus on Traditional ML, GNNs, or Transformers\n\
         • Performance Metric: choose which metric to visualize (AUC-ROC, F1-Score, Precision, Recall)\n\n\
         Example: select \"GNN\" to focus only on Graph Neural Network models.",
    ),
    (
        "📊 Model Comparison Tab",
        "• Compare different AI models on key performance metrics\n\
         • View the radar chart for multi-metric comparison\n\
         • Check the detailed metrics table\n\n\
         Example: the radar chart shows that Transformer models generally outperform traditional models on all metrics.",
    ),
    (
        "💊 Sample Interactions Tab",
        "• View examples of known drug-drug interactions\n\
         • Explore the distribution of interaction severity levels\n\n\
         Example: Warfarin and Aspirin have a high-severity interaction with increased bleeding risk.",
    ),
    (
        "❄ Cold-Start Analysis Tab",
        "• Understand how models perform on completely new drugs\n\
         • Compare success rates across model categories\n\n\
         Example: Traditional ML models drop to a 60% success rate in cold-start scenarios, \
         while Transformers maintain 85%.",
    ),
    (
        "📋 Insights & Recommendations Tab",
        "• Review key insights about model performance\n\
         • See model recommendations for different use cases\n\
         • Understand limitations of the current approaches\n\n\
         Example: Transformer models are recommended for general DDI prediction with expected AUC of 0.95-0.98.",
    ),
];

/// Render the walkthrough screen. Returns to the dashboard when the user
/// clicks through.
pub fn walkthrough(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(RichText::new("🚶 DDI Detection Tool – Walkthrough Guide").size(26.0));
        });
        ui.add_space(8.0);
        ui.label(
            "Welcome to the Drug-Drug Interaction (DDI) Detection Tool! This dashboard \
             demonstrates the comparative analysis of different AI models for drug-drug \
             interaction prediction.",
        );
        ui.add_space(8.0);

        for (title, body) in SECTIONS {
            ui.group(|ui: &mut Ui| {
                ui.strong(title);
                ui.label(body);
            });
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        ui.strong("🎯 Quick Tips");
        ui.label(
            "1. Start with the Model Comparison tab to get an overview\n\
             2. Use the sidebar to filter models based on your interest\n\
             3. Check the Cold-Start Analysis tab to understand generalization capabilities\n\
             4. Review the Insights tab for practical recommendations",
        );

        ui.add_space(12.0);
        if ui.button(RichText::new("Continue to Dashboard →").strong()).clicked() {
            state.show_walkthrough = false;
        }
    });
}
