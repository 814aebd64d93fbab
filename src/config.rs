//! TOML dashboard configuration.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::chart::EmissionsChartOptions;
use crate::color::{series_styles, SeriesStyle};
use crate::data::extract::MalformedPolicy;
use crate::data::model::ValueColumn;

/// Top-level configuration. Every field has a default, so an empty file
/// reproduces the stock dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Directory the data files are read from.
    pub data_dir: PathBuf,
    /// Monthly emissions/electricity document inside `data_dir`.
    pub json_file: String,
    pub chart: ChartConfig,
    pub parse: ParseConfig,
    /// CSV sources, merged in this order.
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Legend entry of the derived total series.
    pub total_label: String,
    pub total_color: [u8; 3],
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    pub value_column: ValueColumn,
    pub malformed: MalformedPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub name: String,
    pub file: String,
    /// Line colour; a generated one is used when absent.
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

impl SourceConfig {
    fn new(name: &str, file: &str, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            color: Some(color),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            json_file: "ghg-data.json".to_string(),
            chart: ChartConfig::default(),
            parse: ParseConfig::default(),
            sources: vec![
                SourceConfig::new("Discovery", "Discovery.csv", [75, 192, 192]),
                SourceConfig::new("Colgan", "Colgan.csv", [255, 159, 64]),
                SourceConfig::new("KJH", "KJH.csv", [153, 102, 255]),
            ],
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Gov School CO2 Emissions".to_string(),
            x_axis_title: "Year-Month".to_string(),
            y_axis_title: "CO2 Emissions (Metric Tons)".to_string(),
            total_label: "Net Emissions".to_string(),
            total_color: [255, 99, 132],
            begin_at_zero: false,
        }
    }
}

/// Configuration error with the offending field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path, e.g. `"sources[1].name"`.
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl DashboardConfig {
    /// Read and validate a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text. Unknown keys are rejected.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// First constraint violation, if any.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::new("sources", "at least one source is required"));
        }
        if self.json_file.trim().is_empty() {
            return Err(ConfigError::new("json_file", "must not be empty"));
        }
        let mut seen = BTreeSet::new();
        for (i, source) in self.sources.iter().enumerate() {
            if source.name.trim().is_empty() {
                return Err(ConfigError::new(format!("sources[{i}].name"), "must not be empty"));
            }
            if source.file.trim().is_empty() {
                return Err(ConfigError::new(format!("sources[{i}].file"), "must not be empty"));
            }
            if !seen.insert(source.name.as_str()) {
                return Err(ConfigError::new(
                    format!("sources[{i}].name"),
                    format!("duplicate source name \"{}\"", source.name),
                ));
            }
        }
        Ok(())
    }

    /// Path of a file inside the data directory.
    pub fn data_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// One style per source, in source order.
    pub fn source_styles(&self) -> Vec<SeriesStyle> {
        let configured: Vec<Option<[u8; 3]>> = self.sources.iter().map(|s| s.color).collect();
        series_styles(&configured)
    }

    pub fn chart_options(&self) -> EmissionsChartOptions {
        let c = &self.chart;
        EmissionsChartOptions {
            title: c.title.clone(),
            x_axis_title: c.x_axis_title.clone(),
            y_axis_title: c.y_axis_title.clone(),
            total_label: c.total_label.clone(),
            total_style: SeriesStyle::from_rgb(c.total_color),
            begin_at_zero: c.begin_at_zero,
        }
    }
}
