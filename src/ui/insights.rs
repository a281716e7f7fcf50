use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Metric;
use crate::data::stats::{best_by, category_means};
use crate::state::AppState;
use crate::ui::tables;

// ---------------------------------------------------------------------------
// Insights & Recommendations tab
// ---------------------------------------------------------------------------

struct Recommendation {
    use_case: &'static str,
    recommended: &'static str,
    reason: &'static str,
    expected_auc: &'static str,
}

const RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        use_case: "General DDI Prediction",
        recommended: "Transformer Models",
        reason: "Superior multimodal data integration and interpretability",
        expected_auc: "0.95-0.98",
    },
    Recommendation {
        use_case: "Network-based Prediction",
        recommended: "GNN (GAT)",
        reason: "Excellent for leveraging drug interaction graphs",
        expected_auc: "0.92-0.96",
    },
    Recommendation {
        use_case: "Resource-constrained",
        recommended: "XGBoost",
        reason: "Good performance with lower computational cost",
        expected_auc: "0.85-0.90",
    },
    Recommendation {
        use_case: "Cold-start Scenarios",
        recommended: "Transformer + Pre-training",
        reason: "Best generalization to novel drugs",
        expected_auc: "0.85-0.90",
    },
];

const LIMITATIONS: [&str; 5] = [
    "Data Quality: Models depend on incomplete DDI databases",
    "Cold-start Problem: Predicting interactions for completely new drugs remains challenging",
    "Validation: In silico predictions require clinical validation",
    "Computational Cost: Transformers are resource-intensive to train",
    "Interpretability: Despite attention mechanisms, some black-box nature remains",
];

/// Render the whole insights tab: best-model callouts, per-category means,
/// static recommendations, and limitations.
pub fn insights_tab(ui: &mut Ui, state: &AppState) {
    ui.heading("🔍 Key Insights");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        if let Some(best) = best_by(&state.filtered, Metric::AucRoc) {
            callout(
                ui,
                "Best Overall Model (AUC-ROC)",
                &best.model,
                &format!("AUC: {:.3}", best.auc_roc),
                &format!("Type: {}", best.category),
            );
        }
        ui.add_space(24.0);
        if let Some(best) = best_by(&state.filtered, Metric::F1Score) {
            callout(
                ui,
                "Best Balanced Model (F1-Score)",
                &best.model,
                &format!("F1: {:.3}", best.f1_score),
                &format!("Type: {}", best.category),
            );
        }
    });

    ui.separator();

    ui.heading("📊 Performance by Model Type");
    let means = category_means(&state.filtered);
    if means.is_empty() {
        ui.label("No models match the current filter.");
    } else {
        tables::category_means_table(ui, &means);
    }

    ui.separator();

    ui.heading("🎯 Model Recommendations");
    recommendations_table(ui);

    ui.separator();

    ui.heading("⚠ Limitations & Challenges");
    for limitation in LIMITATIONS {
        ui.label(format!("• {limitation}"));
    }
}

fn callout(ui: &mut Ui, label: &str, value: &str, delta: &str, caption: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).size(20.0).strong());
        ui.label(RichText::new(delta).size(13.0));
        ui.label(RichText::new(caption).weak());
    });
}

fn recommendations_table(ui: &mut Ui) {
    ui.push_id("recommendations_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(150.0))
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder().at_least(220.0))
            .column(Column::auto().at_least(90.0))
            .header(20.0, |mut header| {
                for title in ["Use Case", "Recommended", "Reason", "Expected AUC"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for rec in &RECOMMENDATIONS {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(rec.use_case);
                        });
                        row.col(|ui| {
                            ui.label(rec.recommended);
                        });
                        row.col(|ui| {
                            ui.label(rec.reason);
                        });
                        row.col(|ui| {
                            ui.label(rec.expected_auc);
                        });
                    });
                }
            });
    });
}
