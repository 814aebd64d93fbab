use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use super::error::{LoadError, SourceFailure};
use super::extract::{extract_series, MalformedPolicy};
use super::model::{GhgDocument, NamedDataset, RowIssue, Series, ValueColumn};
use super::parser::parse_table;
use crate::config::DashboardConfig;

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "data": [
///     { "month": "Jan", "CO2_emissions_mt": 1.2, "electricity_consumption_kWh": 3400 },
///     ...
///   ]
/// }
/// ```
pub fn load_json(path: &Path) -> Result<GhgDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// A row problem tagged with the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceIssue {
    pub source: String,
    pub issue: RowIssue,
}

impl fmt::Display for SourceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.issue)
    }
}

/// Parse CSV text and extract one numeric column. Issues from both stages
/// come back ordered by line.
pub fn series_from_text(
    text: &str,
    column: ValueColumn,
    policy: MalformedPolicy,
) -> (Series, Vec<RowIssue>) {
    let table = parse_table(text);
    let (series, extract_issues) = extract_series(&table.rows, column, policy);
    let mut issues = table.issues;
    issues.extend(extract_issues);
    issues.sort_by_key(|i| i.line);
    (series, issues)
}

/// Read one CSV source from disk.
pub fn load_csv(
    path: &Path,
    column: ValueColumn,
    policy: MalformedPolicy,
) -> Result<(Series, Vec<RowIssue>)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(series_from_text(&text, column, policy))
}

/// Every configured CSV source, in configuration order.
#[derive(Debug, Clone)]
pub struct LoadedSources {
    pub datasets: Vec<NamedDataset>,
    pub issues: Vec<SourceIssue>,
}

/// Load all configured CSV sources.
///
/// Every source is attempted; if any fails, the error lists all failures
/// and no partial result is returned.
pub fn load_sources(config: &DashboardConfig) -> Result<LoadedSources, LoadError> {
    let styles = config.source_styles();
    let mut datasets = Vec::with_capacity(config.sources.len());
    let mut issues = Vec::new();
    let mut failures = Vec::new();

    for (source, style) in config.sources.iter().zip(styles) {
        let path = config.data_path(&source.file);
        match load_csv(&path, config.parse.value_column, config.parse.malformed) {
            Ok((series, row_issues)) => {
                log::info!(
                    "Loaded {} rows from {} ({} issue(s))",
                    series.len(),
                    path.display(),
                    row_issues.len()
                );
                issues.extend(row_issues.into_iter().map(|issue| SourceIssue {
                    source: source.name.clone(),
                    issue,
                }));
                datasets.push(NamedDataset::new(&source.name, series, style));
            }
            Err(error) => {
                log::error!("Failed to load source {}: {error:#}", source.name);
                failures.push(SourceFailure {
                    name: source.name.clone(),
                    error,
                });
            }
        }
    }

    if !failures.is_empty() {
        return Err(LoadError { failures });
    }
    Ok(LoadedSources { datasets, issues })
}
