use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// ModelCategory – closed vocabulary of model families
// ---------------------------------------------------------------------------

/// The architectural family a DDI prediction model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelCategory {
    Traditional,
    #[serde(rename = "GNN")]
    Gnn,
    Transformer,
}

impl ModelCategory {
    /// All categories in dataset order.
    pub const ALL: [ModelCategory; 3] = [
        ModelCategory::Traditional,
        ModelCategory::Gnn,
        ModelCategory::Transformer,
    ];

    /// Label used in the cold-start scenario table ("Traditional ML" rather
    /// than "Traditional").
    pub fn scenario_label(&self) -> &'static str {
        match self {
            ModelCategory::Traditional => "Traditional ML",
            ModelCategory::Gnn => "GNN",
            ModelCategory::Transformer => "Transformer",
        }
    }

    /// Parse a display label back into a category. Unknown labels are `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Traditional" => Some(ModelCategory::Traditional),
            "GNN" => Some(ModelCategory::Gnn),
            "Transformer" => Some(ModelCategory::Transformer),
            _ => None,
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelCategory::Traditional => "Traditional",
            ModelCategory::Gnn => "GNN",
            ModelCategory::Transformer => "Transformer",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Severity – clinical risk label of a sample interaction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// Severities in descending clinical risk, the order the pie legend uses.
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Moderate, Severity::Low];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Metric – which performance column to plot
// ---------------------------------------------------------------------------

/// One of the four performance metrics every model record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    AucRoc,
    F1Score,
    Precision,
    Recall,
}

impl Metric {
    /// All metrics, in the order the metric selector offers them.
    pub const ALL: [Metric; 4] = [
        Metric::AucRoc,
        Metric::F1Score,
        Metric::Precision,
        Metric::Recall,
    ];

    /// Project this metric out of a performance record.
    pub fn value_of(&self, record: &ModelPerformance) -> f64 {
        match self {
            Metric::AucRoc => record.auc_roc,
            Metric::F1Score => record.f1_score,
            Metric::Precision => record.precision,
            Metric::Recall => record.recall,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Metric::AucRoc => "AUC-ROC",
            Metric::F1Score => "F1-Score",
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Record types – one struct per sample table
// ---------------------------------------------------------------------------

/// One row of the model performance table. All metric fields lie in [0, 1];
/// model names are unique across the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPerformance {
    pub model: String,
    pub auc_roc: f64,
    pub f1_score: f64,
    pub precision: f64,
    pub recall: f64,
    pub category: ModelCategory,
}

/// A known drug-drug interaction pair with its clinical severity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub drug_a: String,
    pub drug_b: String,
    pub description: String,
    pub severity: Severity,
}

/// Cold-start evaluation result for one model family: performance on drugs
/// absent from training data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColdStartScenario {
    pub category: ModelCategory,
    pub auc_roc: f64,
    /// Integer percentage in [0, 100].
    pub success_rate: u8,
}
