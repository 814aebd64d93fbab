//! Integration tests for the dashboard session.

mod common;

use emissions_dashboard::data::filter::FilterSelection;
use emissions_dashboard::state::AppState;

#[test]
fn loads_both_chart_paths() {
    let dir = common::data_dir();
    let state = AppState::load(common::config_for(dir.path()));

    assert!(state.status_messages.is_empty(), "{:?}", state.status_messages);
    let chart = state.emissions.as_ref().expect("emissions chart");
    assert_eq!(chart.spec().datasets.len(), 4);
    assert_eq!(chart.spec().datasets[3].label, "Net Emissions");
    assert_eq!(chart.available_years(), ["2023", "2024"]);

    let monthly = state.monthly.as_ref().expect("monthly charts");
    assert_eq!(monthly.co2.labels, ["Jan", "Feb", "Mar"]);
    assert_eq!(monthly.electricity.datasets[0].values[0], 130000.0);
}

#[test]
fn broken_json_does_not_block_emissions_chart() {
    let dir = common::data_dir();
    common::write(dir.path(), "ghg-data.json", "{ not json");
    let state = AppState::load(common::config_for(dir.path()));

    assert!(state.monthly.is_none());
    assert!(state.emissions.is_some());
    assert_eq!(state.status_messages.len(), 1);
    assert!(state.status_messages[0].starts_with("Monthly data:"));
}

#[test]
fn select_year_updates_title_and_data() {
    let dir = common::data_dir();
    let mut state = AppState::load(common::config_for(dir.path()));
    state.select_year(FilterSelection::Year("2024".into()));

    let spec = state.emissions.as_ref().expect("emissions chart").spec();
    assert_eq!(spec.title, "Gov School CO2 Emissions - 2024");
    assert_eq!(spec.labels, ["2024-1", "2024-2"]);
    assert_eq!(spec.datasets[0].values, [0.55, 0.45]);
}

#[test]
fn reload_keeps_selection_and_picks_up_new_rows() {
    let dir = common::data_dir();
    let mut state = AppState::load(common::config_for(dir.path()));
    state.select_year(FilterSelection::Year("2023".into()));

    for (file, extra) in [
        ("Discovery.csv", "2023,10,31,900,0.35\n"),
        ("Colgan.csv", "2023,10,31,700,0.25\n"),
        ("KJH.csv", "2023,10,31,350,0.1\n"),
    ] {
        let path = dir.path().join(file);
        let mut text = std::fs::read_to_string(&path).expect("read fixture");
        text.push_str(extra);
        std::fs::write(&path, text).expect("write fixture");
    }
    state.reload();

    let chart = state.emissions.as_ref().expect("emissions chart");
    assert_eq!(chart.selection(), &FilterSelection::Year("2023".into()));
    assert_eq!(chart.spec().labels, ["2023-11", "2023-12", "2023-10"]);
}

#[test]
fn switching_data_dir_reloads_everything() {
    let first = common::data_dir();
    let second = common::data_dir();
    common::write(
        second.path(),
        "ghg-data.json",
        r#"{"data":[{"month":"Dec","CO2_emissions_mt":1.0,"electricity_consumption_kWh":2.0}]}"#,
    );

    let mut state = AppState::load(common::config_for(first.path()));
    state.set_data_dir(second.path().to_path_buf());

    assert_eq!(state.config.data_dir, second.path());
    let monthly = state.monthly.as_ref().expect("monthly charts");
    assert_eq!(monthly.co2.labels, ["Dec"]);
}
