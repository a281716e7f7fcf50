use crate::data::filter::{filter_by_category, CategoryFilter};
use crate::data::model::{ColdStartScenario, Interaction, Metric, ModelPerformance};
use crate::data::samples;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard's content tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    ModelComparison,
    Interactions,
    ColdStart,
    Insights,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::ModelComparison,
        Tab::Interactions,
        Tab::ColdStart,
        Tab::Insights,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::ModelComparison => "📊 Model Comparison",
            Tab::Interactions => "💊 Sample Interactions",
            Tab::ColdStart => "❄ Cold-Start Analysis",
            Tab::Insights => "📋 Insights & Recommendations",
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Performance records (fixed sample data, loaded once).
    pub models: Vec<ModelPerformance>,

    /// Sample interaction pairs.
    pub interactions: Vec<Interaction>,

    /// Cold-start scenario rows.
    pub cold_start: Vec<ColdStartScenario>,

    /// Current model-type filter.
    pub filter: CategoryFilter,

    /// Performance records passing the current filter (cached).
    pub filtered: Vec<ModelPerformance>,

    /// Metric shown in the comparison bar chart.
    pub metric: Metric,

    /// Active content tab.
    pub tab: Tab,

    /// Whether the walkthrough guide is shown instead of the dashboard.
    /// True on first launch, as in the original tool.
    pub show_walkthrough: bool,

    /// Status / error message shown in the top bar (export feedback).
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let models = samples::model_performance();
        let filtered = models.clone();
        Self {
            models,
            interactions: samples::interactions(),
            cold_start: samples::cold_start_scenarios(),
            filter: CategoryFilter::All,
            filtered,
            metric: Metric::AucRoc,
            tab: Tab::ModelComparison,
            show_walkthrough: true,
            status_message: None,
        }
    }
}

impl AppState {
    /// Change the category filter and recompute the cached view.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.refilter();
    }

    /// Recompute `filtered` from the current filter.
    pub fn refilter(&mut self) {
        self.filtered = filter_by_category(&self.models, self.filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ModelCategory;

    #[test]
    fn default_state_shows_everything() {
        let state = AppState::default();
        assert_eq!(state.filter, CategoryFilter::All);
        assert_eq!(state.filtered, state.models);
        assert!(state.show_walkthrough);
    }

    #[test]
    fn set_filter_refreshes_cached_view() {
        let mut state = AppState::default();
        state.set_filter(CategoryFilter::Only(ModelCategory::Transformer));
        let names: Vec<&str> = state.filtered.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, vec!["ChemBERTa", "Custom Transformer"]);

        state.set_filter(CategoryFilter::All);
        assert_eq!(state.filtered.len(), 8);
    }
}
