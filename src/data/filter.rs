use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::SelectionError;
use super::merge::MergedView;
use crate::color::SeriesStyle;

// ---------------------------------------------------------------------------
// FilterSelection – what the year selector asks for
// ---------------------------------------------------------------------------

/// Sentinel value of the selector that shows every row.
pub const ALL_TOKEN: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    /// A four-digit year, compared to label prefixes as text.
    Year(String),
}

impl FilterSelection {
    /// Whether a `"YYYY-M"` label passes this selection.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Year(year) => year_of(label) == year.as_str(),
        }
    }
}

impl FromStr for FilterSelection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_TOKEN {
            return Ok(FilterSelection::All);
        }
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(FilterSelection::Year(s.to_string()));
        }
        Err(SelectionError(s.to_string()))
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSelection::All => write!(f, "{ALL_TOKEN}"),
            FilterSelection::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Year component of a label: everything before the first `-`.
pub fn year_of(label: &str) -> &str {
    label.split_once('-').map_or(label, |(year, _)| year)
}

/// Distinct years on the label axis, ascending.
pub fn available_years(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|l| year_of(l).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// FilteredView – the rows that passed, with a fresh total
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredColumn {
    pub name: String,
    pub style: SeriesStyle,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub selection: FilterSelection,
    pub labels: Vec<String>,
    /// One column per source, in source order.
    pub columns: Vec<FilteredColumn>,
    /// Sum of the source columns, recomputed for the included rows.
    pub totals: Vec<f64>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Keep the rows of `view` whose label year matches `selection`.
///
/// Reads only the merged sources, never a previous result, so calling it
/// again with the same selection gives the same view.
pub fn filter_view(view: &MergedView, selection: &FilterSelection) -> FilteredView {
    let included: Vec<usize> = view
        .labels()
        .iter()
        .enumerate()
        .filter(|(_, label)| selection.matches(label))
        .map(|(i, _)| i)
        .collect();

    let columns = view
        .sources()
        .iter()
        .map(|source| FilteredColumn {
            name: source.name.clone(),
            style: source.style,
            values: included.iter().map(|&i| source.series.values()[i]).collect(),
        })
        .collect();

    FilteredView {
        selection: selection.clone(),
        labels: included.iter().map(|&i| view.labels()[i].clone()).collect(),
        columns,
        totals: included.iter().map(|&i| view.total_at(i)).collect(),
    }
}
