use std::path::PathBuf;

use crate::chart::{ChartSpec, EmissionsChartOptions, MonthlyCharts};
use crate::config::DashboardConfig;
use crate::data::error::MergeError;
use crate::data::filter::{available_years, filter_view, FilterSelection};
use crate::data::loader::{load_json, load_sources, SourceIssue};
use crate::data::merge::MergedView;
use crate::data::model::NamedDataset;

// ---------------------------------------------------------------------------
// Emissions chart session
// ---------------------------------------------------------------------------

/// The merged emissions chart: the source data it was built from, the
/// current selection and the chart config currently on screen.
#[derive(Debug, Clone)]
pub struct EmissionsChart {
    merged: MergedView,
    options: EmissionsChartOptions,
    selection: FilterSelection,
    spec: ChartSpec,
}

impl EmissionsChart {
    /// Merge the sources and build the initial, unfiltered chart.
    pub fn new(
        sources: Vec<NamedDataset>,
        options: EmissionsChartOptions,
    ) -> Result<Self, MergeError> {
        let merged = MergedView::merge(sources)?;
        let spec = ChartSpec::emissions(&merged, &options);
        Ok(Self {
            merged,
            options,
            selection: FilterSelection::All,
            spec,
        })
    }

    /// Re-filter from the merged sources and replace the chart's labels,
    /// values and title.
    pub fn select(&mut self, selection: FilterSelection) {
        let view = filter_view(&self.merged, &selection);
        log::debug!("Selected {selection}: {} of {} rows", view.len(), self.merged.len());
        let title = self.options.filtered_title(&view);
        self.spec.apply_filtered(&view, title);
        self.selection = selection;
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn merged(&self) -> &MergedView {
        &self.merged
    }

    /// Years offered by the selector, ascending.
    pub fn available_years(&self) -> Vec<String> {
        available_years(self.merged.labels())
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Merged CSV chart (None when any source failed).
    pub emissions: Option<EmissionsChart>,

    /// Charts from the JSON document (None when it failed to load).
    pub monthly: Option<MonthlyCharts>,

    /// Rows that were dropped or kept as NaN, per source.
    pub issues: Vec<SourceIssue>,

    /// Status / error messages shown in the UI.
    pub status_messages: Vec<String>,
}

impl AppState {
    /// Build the state and run the initial load.
    pub fn load(config: DashboardConfig) -> Self {
        let mut state = Self {
            config,
            emissions: None,
            monthly: None,
            issues: Vec::new(),
            status_messages: Vec::new(),
        };
        state.reload();
        state
    }

    /// Re-read every data file. The year selection is kept when possible.
    pub fn reload(&mut self) {
        let previous = self
            .emissions
            .as_ref()
            .map(|chart| chart.selection().clone());

        self.emissions = None;
        self.monthly = None;
        self.issues.clear();
        self.status_messages.clear();

        self.load_monthly();
        self.load_emissions();

        if let (Some(chart), Some(selection)) = (self.emissions.as_mut(), previous) {
            if selection != FilterSelection::All {
                chart.select(selection);
            }
        }
    }

    /// Point at another data directory and reload.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        log::info!("Switching data directory to {}", dir.display());
        self.config.data_dir = dir;
        self.reload();
    }

    /// Forward a selector change to the emissions chart.
    pub fn select_year(&mut self, selection: FilterSelection) {
        if let Some(chart) = &mut self.emissions {
            chart.select(selection);
        }
    }

    fn load_monthly(&mut self) {
        let path = self.config.data_path(&self.config.json_file);
        match load_json(&path) {
            Ok(doc) => {
                log::info!("Loaded {} monthly records from {}", doc.data.len(), path.display());
                self.monthly = Some(MonthlyCharts::from_document(&doc));
            }
            Err(e) => {
                log::error!("Error fetching data: {e:#}");
                self.status_messages.push(format!("Monthly data: {e:#}"));
            }
        }
    }

    fn load_emissions(&mut self) {
        let loaded = match load_sources(&self.config) {
            Ok(loaded) => loaded,
            Err(e) => {
                self.status_messages.push(format!("Emissions data: {e}"));
                return;
            }
        };

        for issue in &loaded.issues {
            log::warn!("{issue}");
        }
        self.issues = loaded.issues;

        match EmissionsChart::new(loaded.datasets, self.config.chart_options()) {
            Ok(chart) => self.emissions = Some(chart),
            Err(e) => {
                log::error!("Failed to merge sources: {e}");
                self.status_messages.push(format!("Emissions data: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SeriesStyle;
    use crate::data::model::Series;

    fn chart() -> EmissionsChart {
        let make = |name: &str, values: [f64; 4]| {
            let series: Series = ["2023-11", "2023-12", "2024-1", "2024-2"]
                .into_iter()
                .zip(values)
                .collect();
            NamedDataset::new(name, series, SeriesStyle::from_rgb([0, 0, 0]))
        };
        EmissionsChart::new(
            vec![
                make("Discovery", [1.0, 2.0, 3.0, 4.0]),
                make("Colgan", [1.0, 1.0, 1.0, 1.0]),
                make("KJH", [0.0, 0.0, 0.0, 0.0]),
            ],
            DashboardConfig::default().chart_options(),
        )
        .expect("aligned sources merge")
    }

    #[test]
    fn starts_unfiltered_with_base_title() {
        let chart = chart();
        assert_eq!(chart.selection(), &FilterSelection::All);
        assert_eq!(chart.spec().title, "Gov School CO2 Emissions");
        assert_eq!(chart.spec().labels.len(), 4);
        assert_eq!(chart.available_years(), ["2023", "2024"]);
    }

    #[test]
    fn select_then_all_restores_every_row() {
        let mut chart = chart();
        chart.select(FilterSelection::Year("2023".into()));
        assert_eq!(chart.spec().labels, ["2023-11", "2023-12"]);
        assert_eq!(chart.spec().datasets[3].values, [2.0, 3.0]);

        chart.select(FilterSelection::All);
        assert_eq!(chart.spec().labels.len(), 4);
        assert_eq!(chart.spec().title, "Gov School CO2 Emissions - all");
        assert_eq!(chart.spec().datasets[3].values, [2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn mismatched_sources_do_not_build_a_chart() {
        let a: Series = [("2024-1", 1.0)].into_iter().collect();
        let b: Series = [("2024-2", 1.0)].into_iter().collect();
        let style = SeriesStyle::from_rgb([0, 0, 0]);
        let result = EmissionsChart::new(
            vec![NamedDataset::new("A", a, style), NamedDataset::new("B", b, style)],
            DashboardConfig::default().chart_options(),
        );
        assert!(matches!(result, Err(MergeError::LabelMismatch { .. })));
    }

    #[test]
    fn missing_data_dir_reports_both_paths() {
        let config = DashboardConfig {
            data_dir: PathBuf::from("no/such/data/dir"),
            ..DashboardConfig::default()
        };
        let state = AppState::load(config);
        assert!(state.emissions.is_none());
        assert!(state.monthly.is_none());
        assert_eq!(state.status_messages.len(), 2);
        assert!(state.status_messages[1].contains("3 source(s) failed to load"));
    }
}
