use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::data::filter::FilterSelection;

#[derive(Parser, Debug)]
#[command(author, version, about = "School CO2 emissions dashboard", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory holding the CSV and JSON data files (overrides the config)
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Initial year selection: `all` or a four-digit year
    #[arg(short, long, default_value = "all")]
    pub year: FilterSelection,

    /// Write the selected view as CSV (`-` for stdout) instead of opening a window
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_years_and_window() {
        let cli = Cli::try_parse_from(["emissions-dashboard"]).expect("no args is valid");
        assert_eq!(cli.year, FilterSelection::All);
        assert!(cli.export.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_export_invocation() {
        let cli = Cli::try_parse_from([
            "emissions-dashboard",
            "--data-dir",
            "data",
            "--year",
            "2024",
            "--export",
            "-",
        ])
        .expect("valid args");
        assert_eq!(cli.year, FilterSelection::Year("2024".into()));
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("data")));
        assert_eq!(cli.export.as_deref(), Some(std::path::Path::new("-")));
    }

    #[test]
    fn rejects_malformed_year() {
        assert!(Cli::try_parse_from(["emissions-dashboard", "--year", "24"]).is_err());
    }
}
