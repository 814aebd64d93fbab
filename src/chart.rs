//! Chart configuration handed to the plot widget.
//!
//! A [`ChartSpec`] is everything the renderer needs: labels, named series with
//! colours, titles and axis options. The UI draws whatever spec it holds, so
//! replacing a spec's data is how a chart is redrawn.

use crate::color::SeriesStyle;
use crate::data::filter::FilteredView;
use crate::data::merge::MergedView;
use crate::data::model::{GhgDocument, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    /// Force the value axis to include zero.
    pub begin_at_zero: bool,
}

/// Presentation settings for the merged emissions chart.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionsChartOptions {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub total_label: String,
    pub total_style: SeriesStyle,
    pub begin_at_zero: bool,
}

impl EmissionsChartOptions {
    /// Title shown after a year has been picked, e.g. `"... - 2024"`.
    pub fn filtered_title(&self, view: &FilteredView) -> String {
        format!("{} - {}", self.title, view.selection)
    }
}

impl ChartSpec {
    /// Initial chart for a merge: every source plus the derived total.
    pub fn emissions(view: &MergedView, options: &EmissionsChartOptions) -> Self {
        let mut datasets: Vec<ChartDataset> = view
            .sources()
            .iter()
            .map(|source| ChartDataset {
                label: source.name.clone(),
                values: source.series.values().to_vec(),
                style: source.style,
            })
            .collect();
        datasets.push(ChartDataset {
            label: options.total_label.clone(),
            values: view.totals(),
            style: options.total_style,
        });

        Self {
            kind: ChartKind::Line,
            title: options.title.clone(),
            labels: view.labels().to_vec(),
            datasets,
            x_axis_title: Some(options.x_axis_title.clone()),
            y_axis_title: Some(options.y_axis_title.clone()),
            begin_at_zero: options.begin_at_zero,
        }
    }

    /// Single-series chart, as used for the monthly JSON data.
    pub fn single(title: &str, label: &str, series: &Series, style: SeriesStyle) -> Self {
        Self {
            kind: ChartKind::Line,
            title: title.to_string(),
            labels: series.labels().to_vec(),
            datasets: vec![ChartDataset {
                label: label.to_string(),
                values: series.values().to_vec(),
                style,
            }],
            x_axis_title: None,
            y_axis_title: None,
            begin_at_zero: true,
        }
    }

    /// Replace labels, every dataset's values and the title from a filtered
    /// view. Datasets are matched by position: the sources first, then the
    /// total in the last slot.
    pub fn apply_filtered(&mut self, view: &FilteredView, title: String) {
        self.labels = view.labels.clone();
        let values = view
            .columns
            .iter()
            .map(|c| &c.values)
            .chain(std::iter::once(&view.totals));
        for (dataset, values) in self.datasets.iter_mut().zip(values) {
            dataset.values = values.clone();
        }
        self.title = title;
    }
}

// ---------------------------------------------------------------------------
// Monthly JSON charts
// ---------------------------------------------------------------------------

/// The two charts driven by `ghg-data.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCharts {
    pub co2: ChartSpec,
    pub electricity: ChartSpec,
}

impl MonthlyCharts {
    pub fn from_document(doc: &GhgDocument) -> Self {
        Self {
            co2: ChartSpec::single(
                "Monthly CO2 Emissions",
                "CO2 Emissions (mt)",
                &doc.co2_series(),
                SeriesStyle::from_rgb([255, 99, 132]),
            ),
            electricity: ChartSpec::single(
                "Monthly Electricity Consumption",
                "Electricity Consumption (kWh)",
                &doc.electricity_series(),
                SeriesStyle::from_rgb([54, 162, 235]),
            ),
        }
    }
}

/// Split a value sequence into runs of finite points, `[x, y]` with `x` the
/// label index. Non-finite values end a run, so they render as gaps.
pub fn finite_segments(values: &[f64]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (i, &v) in values.iter().enumerate() {
        if v.is_finite() {
            current.push([i as f64, v]);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_view, FilterSelection};
    use crate::data::model::NamedDataset;

    fn options() -> EmissionsChartOptions {
        EmissionsChartOptions {
            title: "Gov School CO2 Emissions".into(),
            x_axis_title: "Year-Month".into(),
            y_axis_title: "CO2 Emissions (Metric Tons)".into(),
            total_label: "Net Emissions".into(),
            total_style: SeriesStyle::from_rgb([255, 99, 132]),
            begin_at_zero: false,
        }
    }

    fn merged() -> MergedView {
        let make = |name: &str, values: [f64; 3]| {
            let series: Series = ["2023-12", "2024-1", "2024-2"]
                .into_iter()
                .zip(values)
                .collect();
            NamedDataset::new(name, series, SeriesStyle::from_rgb([0, 0, 0]))
        };
        MergedView::merge(vec![
            make("Discovery", [1.0, 2.0, 3.0]),
            make("Colgan", [1.0, 1.0, 1.0]),
            make("KJH", [0.5, 0.5, 0.5]),
        ])
        .expect("aligned sources merge")
    }

    #[test]
    fn initial_chart_has_sources_then_total() {
        let spec = ChartSpec::emissions(&merged(), &options());
        let names: Vec<&str> = spec.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(names, ["Discovery", "Colgan", "KJH", "Net Emissions"]);
        assert_eq!(spec.datasets[3].values, [2.5, 3.5, 4.5]);
        assert_eq!(spec.title, "Gov School CO2 Emissions");
        assert_eq!(spec.labels, ["2023-12", "2024-1", "2024-2"]);
    }

    #[test]
    fn applying_a_filter_replaces_labels_values_and_title() {
        let view = merged();
        let opts = options();
        let mut spec = ChartSpec::emissions(&view, &opts);
        let filtered = filter_view(&view, &FilterSelection::Year("2024".into()));
        spec.apply_filtered(&filtered, opts.filtered_title(&filtered));

        assert_eq!(spec.title, "Gov School CO2 Emissions - 2024");
        assert_eq!(spec.labels, ["2024-1", "2024-2"]);
        assert_eq!(spec.datasets[0].values, [2.0, 3.0]);
        assert_eq!(spec.datasets[3].values, [3.5, 4.5]);
    }

    #[test]
    fn empty_filter_leaves_empty_datasets() {
        let view = merged();
        let opts = options();
        let mut spec = ChartSpec::emissions(&view, &opts);
        let filtered = filter_view(&view, &FilterSelection::Year("1990".into()));
        spec.apply_filtered(&filtered, opts.filtered_title(&filtered));

        assert!(spec.labels.is_empty());
        assert_eq!(spec.datasets.len(), 4);
        assert!(spec.datasets.iter().all(|d| d.values.is_empty()));
    }

    #[test]
    fn nan_values_split_segments() {
        let segments = finite_segments(&[1.0, f64::NAN, 2.0, 3.0, f64::NAN]);
        assert_eq!(segments, vec![vec![[0.0, 1.0]], vec![[2.0, 2.0], [3.0, 3.0]]]);
        assert!(finite_segments(&[]).is_empty());
    }

    #[test]
    fn monthly_charts_start_at_zero() {
        let doc: GhgDocument = serde_json::from_str(
            r#"{"data":[{"month":"Jan","CO2_emissions_mt":2.0,"electricity_consumption_kWh":10.0}]}"#,
        )
        .expect("valid document");
        let charts = MonthlyCharts::from_document(&doc);
        assert!(charts.co2.begin_at_zero && charts.electricity.begin_at_zero);
        assert_eq!(charts.co2.datasets[0].label, "CO2 Emissions (mt)");
        assert_eq!(charts.electricity.datasets[0].values, [10.0]);
    }
}
