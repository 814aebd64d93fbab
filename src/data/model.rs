use std::fmt;

use serde::Deserialize;

use crate::color::SeriesStyle;

// ---------------------------------------------------------------------------
// Row – one line of a source CSV
// ---------------------------------------------------------------------------

/// One data row of a source CSV: `Year,Month,Days,Usage,CO2`.
/// Fields are kept as raw text; nothing is coerced at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub year: String,
    pub month: String,
    pub days: String,
    pub usage: String,
    pub co2: String,
    /// 1-based line number in the source text.
    pub line: u64,
}

impl Row {
    /// Axis label `"{year}-{month}"`, without zero padding.
    pub fn label(&self) -> String {
        format!("{}-{}", self.year, self.month)
    }

    /// Raw text of the requested numeric column.
    pub fn field(&self, column: ValueColumn) -> &str {
        match column {
            ValueColumn::Days => &self.days,
            ValueColumn::Usage => &self.usage,
            ValueColumn::Co2 => &self.co2,
        }
    }
}

/// The numeric column of a [`Row`] that feeds a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueColumn {
    Days,
    Usage,
    #[default]
    Co2,
}

impl fmt::Display for ValueColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueColumn::Days => write!(f, "Days"),
            ValueColumn::Usage => write!(f, "Usage"),
            ValueColumn::Co2 => write!(f, "CO2"),
        }
    }
}

// ---------------------------------------------------------------------------
// RowIssue – a structured per-row problem report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum RowIssueKind {
    /// Fewer than five comma-separated fields.
    MissingFields { found: usize },
    /// Five fields, but the year is empty.
    EmptyYear,
    /// The numeric column did not parse as a float.
    InvalidNumber { column: ValueColumn, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowIssue {
    pub line: u64,
    pub kind: RowIssueKind,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RowIssueKind::MissingFields { found } => {
                write!(f, "line {}: expected 5 fields, found {found}", self.line)
            }
            RowIssueKind::EmptyYear => write!(f, "line {}: empty year", self.line),
            RowIssueKind::InvalidNumber { column, value } => {
                write!(f, "line {}: {column} value '{value}' is not a number", self.line)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Series – positionally aligned labels and values
// ---------------------------------------------------------------------------

/// Paired label/value sequences. `labels[i]` belongs to `values[i]`; the
/// fields are private so the two can only grow together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

// ---------------------------------------------------------------------------
// NamedDataset – a series with its display name and colours
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NamedDataset {
    pub name: String,
    pub series: Series,
    pub style: SeriesStyle,
}

impl NamedDataset {
    pub fn new(name: impl Into<String>, series: Series, style: SeriesStyle) -> Self {
        Self {
            name: name.into(),
            series,
            style,
        }
    }
}

// ---------------------------------------------------------------------------
// GhgDocument – the monthly JSON source
// ---------------------------------------------------------------------------

/// Top-level shape of `ghg-data.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GhgDocument {
    pub data: Vec<MonthlyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyRecord {
    pub month: String,
    #[serde(rename = "CO2_emissions_mt")]
    pub co2_emissions_mt: f64,
    #[serde(rename = "electricity_consumption_kWh")]
    pub electricity_consumption_kwh: f64,
}

impl GhgDocument {
    /// CO2 emissions per month.
    pub fn co2_series(&self) -> Series {
        self.data
            .iter()
            .map(|r| (r.month.as_str(), r.co2_emissions_mt))
            .collect()
    }

    /// Electricity consumption per month.
    pub fn electricity_series(&self) -> Series {
        self.data
            .iter()
            .map(|r| (r.month.as_str(), r.electricity_consumption_kwh))
            .collect()
    }
}
