use eframe::egui::{RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use emissions_dashboard::chart::{finite_segments, ChartKind, ChartSpec};
use emissions_dashboard::state::AppState;

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Merged emissions chart on top, the two monthly charts side by side below.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.emissions.is_none() && state.monthly.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data loaded  (File → Open data folder…)");
        });
        return;
    }

    let total_height = ui.available_height();
    let top_height = if state.monthly.is_some() {
        total_height * 0.55
    } else {
        total_height
    };

    if let Some(chart) = &state.emissions {
        chart_plot(ui, "emissions_plot", chart.spec(), top_height - 40.0);
    }

    if let Some(monthly) = &state.monthly {
        ui.separator();
        let height = (ui.available_height() - 40.0).clamp(120.0, 400.0);
        ui.columns(2, |cols| {
            chart_plot(&mut cols[0], "co2_plot", &monthly.co2, height);
            chart_plot(&mut cols[1], "electricity_plot", &monthly.electricity, height);
        });
    }
}

/// Draw one chart: title, then the plot with category labels on x.
fn chart_plot(ui: &mut Ui, id: &str, spec: &ChartSpec, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&spec.title).size(20.0).strong());
    });

    let labels = spec.labels.clone();
    let mut plot = Plot::new(id)
        .legend(Legend::default())
        .height(height.max(80.0))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        });

    if let Some(title) = &spec.x_axis_title {
        plot = plot.x_axis_label(title.as_str());
    }
    if let Some(title) = &spec.y_axis_title {
        plot = plot.y_axis_label(title.as_str());
    }
    if spec.begin_at_zero {
        plot = plot.include_y(0.0);
    }

    plot.show(ui, |plot_ui| match spec.kind {
        ChartKind::Line => {
            for dataset in &spec.datasets {
                let line_color = dataset.style.line.to_color32();
                let fill_color = dataset.style.fill.to_color32();

                for segment in finite_segments(&dataset.values) {
                    let line = Line::new(PlotPoints::from(segment.clone()))
                        .name(&dataset.label)
                        .color(line_color)
                        .width(1.0);
                    plot_ui.line(line);

                    let points = Points::new(PlotPoints::from(segment))
                        .name(&dataset.label)
                        .color(fill_color)
                        .filled(true)
                        .radius(3.0);
                    plot_ui.points(points);
                }
            }
        }
    });
}
