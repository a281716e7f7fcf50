use std::fmt;

use super::model::{ModelCategory, ModelPerformance};

// ---------------------------------------------------------------------------
// Category filter: which model family the dashboard is focused on
// ---------------------------------------------------------------------------

/// Filter selection for the performance table: either everything or a single
/// model family. The UI only ever constructs valid values; the string parser
/// exists for the label-based boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ModelCategory),
}

impl CategoryFilter {
    /// Parse a filter label: `"All"` or one of the category display labels.
    /// Anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "All" {
            return Some(CategoryFilter::All);
        }
        ModelCategory::from_label(label).map(CategoryFilter::Only)
    }

    pub fn matches(&self, record: &ModelPerformance) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => record.category == *cat,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(cat) => write!(f, "{cat}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Queries over the performance table
// ---------------------------------------------------------------------------

/// Distinct categories present in the records, first-occurrence order.
pub fn list_categories(records: &[ModelPerformance]) -> Vec<ModelCategory> {
    let mut seen = Vec::new();
    for r in records {
        if !seen.contains(&r.category) {
            seen.push(r.category);
        }
    }
    seen
}

/// The subsequence of records passing the filter, original order preserved.
/// An empty result is a valid answer, not an error.
pub fn filter_by_category(
    records: &[ModelPerformance],
    filter: CategoryFilter,
) -> Vec<ModelPerformance> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Label-based entry point: `"All"` returns everything, a known category
/// label returns its subsequence, and an unrecognized label returns nothing.
pub fn filter_by_label(records: &[ModelPerformance], label: &str) -> Vec<ModelPerformance> {
    match CategoryFilter::from_label(label) {
        Some(filter) => filter_by_category(records, filter),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::model_performance;

    #[test]
    fn categories_in_first_seen_order() {
        let cats = list_categories(&model_performance());
        assert_eq!(
            cats,
            vec![
                ModelCategory::Traditional,
                ModelCategory::Gnn,
                ModelCategory::Transformer
            ]
        );
        let labels: Vec<String> = cats.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["Traditional", "GNN", "Transformer"]);
    }

    #[test]
    fn all_filter_is_identity() {
        let records = model_performance();
        let filtered = filter_by_label(&records, "All");
        assert_eq!(filtered, records);
    }

    #[test]
    fn gnn_filter_preserves_order() {
        let filtered = filter_by_label(&model_performance(), "GNN");
        let names: Vec<&str> = filtered.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, vec!["GCN", "GAT", "GraphSAGE"]);
    }

    #[test]
    fn unknown_label_yields_empty() {
        assert!(filter_by_label(&model_performance(), "Nonexistent").is_empty());
        assert_eq!(CategoryFilter::from_label("Nonexistent"), None);
    }

    #[test]
    fn filter_labels_round_trip() {
        for label in ["All", "Traditional", "GNN", "Transformer"] {
            let filter = CategoryFilter::from_label(label).expect("known label");
            assert_eq!(filter.to_string(), label);
        }
    }
}
