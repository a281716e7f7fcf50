use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::severity_color;
use crate::data::model::{ColdStartScenario, Interaction, ModelPerformance};
use crate::data::stats::CategoryMeans;

// ---------------------------------------------------------------------------
// Data tables (egui_extras)
// ---------------------------------------------------------------------------

const HEADER_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 18.0;

/// Full performance metrics table for the current filtered view.
pub fn performance_table(ui: &mut Ui, records: &[ModelPerformance]) {
    ui.push_id("performance_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(140.0))
            .columns(Column::auto().at_least(70.0), 4)
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                for title in ["Model", "AUC-ROC", "F1-Score", "Precision", "Recall", "Type"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for r in records {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&r.model);
                        });
                        for v in [r.auc_roc, r.f1_score, r.precision, r.recall] {
                            row.col(|ui| {
                                ui.label(format!("{v:.2}"));
                            });
                        }
                        row.col(|ui| {
                            ui.label(r.category.to_string());
                        });
                    });
                }
            });
    });
}

/// Sample interaction pairs with colour-coded severity.
pub fn interactions_table(ui: &mut Ui, interactions: &[Interaction]) {
    ui.push_id("interactions_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::remainder().at_least(180.0))
            .column(Column::auto().at_least(70.0))
            .header(HEADER_HEIGHT, |mut header| {
                for title in ["Drug A", "Drug B", "Interaction", "Severity"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for i in interactions {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&i.drug_a);
                        });
                        row.col(|ui| {
                            ui.label(&i.drug_b);
                        });
                        row.col(|ui| {
                            ui.label(&i.description);
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(i.severity.to_string())
                                    .color(severity_color(i.severity)),
                            );
                        });
                    });
                }
            });
    });
}

/// Cold-start scenario rows.
pub fn cold_start_table(ui: &mut Ui, scenarios: &[ColdStartScenario]) {
    ui.push_id("cold_start_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                for title in ["Scenario", "AUC-ROC", "Success Rate"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for s in scenarios {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(s.category.scenario_label());
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", s.auc_roc));
                        });
                        row.col(|ui| {
                            ui.label(format!("{}%", s.success_rate));
                        });
                    });
                }
            });
    });
}

/// Per-category mean of every metric (3-decimal rounding happens upstream).
pub fn category_means_table(ui: &mut Ui, means: &[CategoryMeans]) {
    ui.push_id("category_means_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(110.0))
            .columns(Column::auto().at_least(80.0), 3)
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                for title in ["Model Type", "AUC-ROC", "F1-Score", "Precision", "Recall"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for m in means {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(m.category.to_string());
                        });
                        for v in [m.auc_roc, m.f1_score, m.precision, m.recall] {
                            row.col(|ui| {
                                ui.label(format!("{v:.3}"));
                            });
                        }
                    });
                }
            });
    });
}
