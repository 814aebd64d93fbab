//! Shared fixtures for integration tests.

use std::fs;
use std::path::Path;

use emissions_dashboard::config::DashboardConfig;
use tempfile::TempDir;

pub const DISCOVERY: &str = "Year,Month,Days,Usage,CO2
2023,11,30,1000,0.4
2023,12,31,1200,0.5
2024,1,31,1300,0.55
2024,2,29,1100,0.45
";

pub const COLGAN: &str = "Year,Month,Days,Usage,CO2
2023,11,30,800,0.3
2023,12,31,900,0.35
2024,1,31,950,0.4
2024,2,29,850,0.33
";

pub const KJH: &str = "Year,Month,Days,Usage,CO2
2023,11,30,400,0.15
2023,12,31,450,0.2
2024,1,31,500,0.22
2024,2,29,420,0.18
";

pub const GHG_JSON: &str = r#"{
  "data": [
    { "month": "Jan", "CO2_emissions_mt": 52.1, "electricity_consumption_kWh": 130000 },
    { "month": "Feb", "CO2_emissions_mt": 47.8, "electricity_consumption_kWh": 119500 },
    { "month": "Mar", "CO2_emissions_mt": 44.0, "electricity_consumption_kWh": 110000 }
  ]
}"#;

/// Write the three CSV sources and the JSON document into a fresh directory.
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "Discovery.csv", DISCOVERY);
    write(dir.path(), "Colgan.csv", COLGAN);
    write(dir.path(), "KJH.csv", KJH);
    write(dir.path(), "ghg-data.json", GHG_JSON);
    dir
}

pub fn write(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(file), content).expect("write fixture");
}

/// Stock configuration pointed at `dir`.
pub fn config_for(dir: &Path) -> DashboardConfig {
    DashboardConfig {
        data_dir: dir.to_path_buf(),
        ..DashboardConfig::default()
    }
}
