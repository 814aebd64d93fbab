//! CSV export of a filtered emissions view.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::config::DashboardConfig;
use crate::data::filter::{filter_view, FilterSelection, FilteredView};
use crate::data::loader::load_sources;
use crate::data::merge::MergedView;

/// Load the configured sources, filter them and write the view as CSV.
/// Returns the number of rows written.
pub fn export_selection(
    config: &DashboardConfig,
    selection: &FilterSelection,
    writer: impl Write,
) -> Result<usize> {
    let loaded = load_sources(config)?;
    for issue in &loaded.issues {
        log::warn!("{issue}");
    }
    let merged = MergedView::merge(loaded.datasets)?;
    let view = filter_view(&merged, selection);
    write_csv(&view, &config.chart.total_label, writer).context("writing CSV")?;
    Ok(view.len())
}

/// Writes `view` as CSV to any writer.
///
/// Columns are `label`, one per source in source order, then the total.
/// Values use the shortest round-trip float form; NaN is written as `NaN`.
pub fn write_csv(view: &FilteredView, total_label: &str, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec!["label".to_string()];
    header.extend(view.columns.iter().map(|c| c.name.clone()));
    header.push(total_label.to_string());
    wtr.write_record(&header)?;

    for (i, label) in view.labels.iter().enumerate() {
        let mut record = Vec::with_capacity(view.columns.len() + 2);
        record.push(label.clone());
        record.extend(view.columns.iter().map(|c| c.values[i].to_string()));
        record.push(view.totals[i].to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
