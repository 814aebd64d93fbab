mod app;
mod ui;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use app::EmissionsApp;
use clap::Parser;
use eframe::egui;
use emissions_dashboard::cli::Cli;
use emissions_dashboard::config::DashboardConfig;
use emissions_dashboard::data::filter::FilterSelection;
use emissions_dashboard::export::export_selection;
use emissions_dashboard::state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_toml_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    if let Some(path) = &cli.export {
        return run_export(&config, &cli.year, path);
    }

    let mut state = AppState::load(config);
    if cli.year != FilterSelection::All {
        state.select_year(cli.year);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Emissions Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(EmissionsApp::new(state)))),
    )
    .map_err(|e| anyhow!("running the window: {e}"))
}

fn run_export(config: &DashboardConfig, selection: &FilterSelection, path: &Path) -> Result<()> {
    let rows = if path == Path::new("-") {
        export_selection(config, selection, io::stdout().lock())?
    } else {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        export_selection(config, selection, BufWriter::new(file))?
    };
    log::info!("Exported {rows} rows for selection {selection}");
    Ok(())
}
