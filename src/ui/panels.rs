use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use emissions_dashboard::data::filter::FilterSelection;
use emissions_dashboard::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year selector and row issues
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Year");
    ui.separator();

    let Some(chart) = &state.emissions else {
        ui.label("No emissions data loaded.");
        return;
    };

    let current = chart.selection().clone();
    let mut choice: Option<FilterSelection> = None;

    egui::ComboBox::from_id_salt("year_selector")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            let options = std::iter::once(FilterSelection::All).chain(
                chart
                    .available_years()
                    .into_iter()
                    .map(FilterSelection::Year),
            );
            for option in options {
                if ui
                    .selectable_label(current == option, option.to_string())
                    .clicked()
                    && current != option
                {
                    choice = Some(option);
                }
            }
        });

    if let Some(selection) = choice {
        state.select_year(selection);
    }

    ui.separator();
    issues_list(ui, state);
}

fn issues_list(ui: &mut Ui, state: &AppState) {
    if state.issues.is_empty() {
        ui.label("All rows parsed.");
        return;
    }

    let header = format!("Row issues  ({})", state.issues.len());
    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("row_issues")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, true])
                .max_height(300.0)
                .show(ui, |ui: &mut Ui| {
                    for issue in &state.issues {
                        ui.label(RichText::new(issue.to_string()).color(Color32::YELLOW));
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("Data: {}", state.config.data_dir.display()));

        if let Some(chart) = &state.emissions {
            ui.separator();
            ui.label(format!(
                "{} sources, {} months, {} visible",
                chart.merged().sources().len(),
                chart.merged().len(),
                chart.spec().labels.len()
            ));
        }

        for msg in &state.status_messages {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open emissions data folder")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.set_data_dir(dir);
    }
}
