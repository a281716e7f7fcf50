use super::filter::list_categories;
use super::model::{Interaction, Metric, ModelCategory, ModelPerformance, Severity};

// ---------------------------------------------------------------------------
// Derived aggregates for the insights and severity views
// ---------------------------------------------------------------------------

/// Per-category mean of the four metrics, rounded to three decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMeans {
    pub category: ModelCategory,
    pub auc_roc: f64,
    pub f1_score: f64,
    pub precision: f64,
    pub recall: f64,
}

/// The record with the maximum value of `metric`, or `None` on an empty
/// slice (the filtered view can be empty).
pub fn best_by<'a>(records: &'a [ModelPerformance], metric: Metric) -> Option<&'a ModelPerformance> {
    records
        .iter()
        .max_by(|a, b| metric.value_of(a).total_cmp(&metric.value_of(b)))
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Group records by category (first-seen order) and average each metric.
pub fn category_means(records: &[ModelPerformance]) -> Vec<CategoryMeans> {
    list_categories(records)
        .into_iter()
        .map(|category| {
            let group: Vec<&ModelPerformance> =
                records.iter().filter(|r| r.category == category).collect();
            let n = group.len() as f64;
            let mean = |metric: Metric| {
                round3(group.iter().map(|r| metric.value_of(r)).sum::<f64>() / n)
            };
            CategoryMeans {
                category,
                auc_roc: mean(Metric::AucRoc),
                f1_score: mean(Metric::F1Score),
                precision: mean(Metric::Precision),
                recall: mean(Metric::Recall),
            }
        })
        .collect()
}

/// Number of interactions per severity, in descending severity order.
/// Severities with no occurrences are omitted.
pub fn severity_counts(interactions: &[Interaction]) -> Vec<(Severity, usize)> {
    Severity::ALL
        .iter()
        .filter_map(|&sev| {
            let n = interactions.iter().filter(|i| i.severity == sev).count();
            (n > 0).then_some((sev, n))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::{interactions, model_performance};

    #[test]
    fn best_models() {
        let records = model_performance();

        let best_auc = best_by(&records, Metric::AucRoc).unwrap();
        assert_eq!(best_auc.model, "Custom Transformer");
        assert_eq!(best_auc.auc_roc, 0.97);

        let best_f1 = best_by(&records, Metric::F1Score).unwrap();
        assert_eq!(best_f1.model, "Custom Transformer");
        assert_eq!(best_f1.f1_score, 0.92);
    }

    #[test]
    fn best_of_empty_is_none() {
        assert!(best_by(&[], Metric::Recall).is_none());
    }

    #[test]
    fn means_are_grouped_and_rounded() {
        let means = category_means(&model_performance());
        assert_eq!(means.len(), 3);

        assert_eq!(means[0].category, ModelCategory::Traditional);
        assert_eq!(means[0].auc_roc, 0.870);
        assert_eq!(means[0].f1_score, 0.820);

        assert_eq!(means[1].category, ModelCategory::Gnn);
        assert_eq!(means[1].auc_roc, 0.940);
        assert_eq!(means[1].precision, 0.910);

        assert_eq!(means[2].category, ModelCategory::Transformer);
        assert_eq!(means[2].auc_roc, 0.965);
        assert_eq!(means[2].recall, 0.895);
    }

    #[test]
    fn severity_distribution() {
        let counts = severity_counts(&interactions());
        assert_eq!(
            counts,
            vec![(Severity::High, 2), (Severity::Moderate, 2), (Severity::Low, 1)]
        );
    }

    #[test]
    fn rounding_is_three_decimals() {
        assert_eq!(round3(0.86666666), 0.867);
        assert_eq!(round3(0.8944999), 0.894);
    }
}
