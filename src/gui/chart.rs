// src/gui/chart.rs
//
// Bar chart of mean flight time per aircraft code. `ChartModel` is plain data
// so it can be checked without a display; `render_chart` opens a native
// window and blocks until it is closed.

use eframe::egui::{self, Color32, Stroke, ViewportBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::config::consts::{BAR_ALPHA, BAR_COLORS, BAR_WIDTH, CHART_TITLE, X_LABEL, Y_LABEL};
use crate::data::MeanDuration;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub minutes: f64,
    pub rgb: [u8; 3],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartModel {
    pub bars: Vec<ChartBar>,
}

impl ChartModel {
    /// One bar per code that has a mean. Colours follow the code's position in
    /// `means`, so a code keeps its colour when a neighbour has no data.
    pub fn from_means(means: &[MeanDuration]) -> Self {
        let bars = means
            .iter()
            .enumerate()
            .filter_map(|(i, m)| {
                m.minutes.map(|minutes| ChartBar {
                    label: m.code.clone(),
                    minutes,
                    rgb: BAR_COLORS[i % BAR_COLORS.len()],
                })
            })
            .collect();
        Self { bars }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    /// Label for an x-axis tick; only whole positions that hold a bar get one.
    pub fn tick_label(&self, x: f64) -> String {
        let i = x.round();
        if (x - i).abs() > 1e-6 || i < 0.0 {
            return s!();
        }
        self.bars.get(i as usize).map(|b| b.label.clone()).unwrap_or_default()
    }
}

struct ChartApp {
    model: ChartModel,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let ticks = self.model.clone();
            Plot::new("mean_flight_time")
                .legend(Legend::default())
                .x_axis_label(X_LABEL)
                .y_axis_label(Y_LABEL)
                .x_axis_formatter(move |mark, _range| ticks.tick_label(mark.value))
                .include_y(0.0)
                .allow_drag(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    for (i, bar) in self.model.bars.iter().enumerate() {
                        let [r, g, b] = bar.rgb;
                        let fill = Color32::from_rgb(r, g, b).gamma_multiply(BAR_ALPHA);
                        let chart = BarChart::new(
                            bar.label.clone(),
                            vec![
                                Bar::new(i as f64, bar.minutes)
                                    .width(BAR_WIDTH)
                                    .fill(fill)
                                    .stroke(Stroke::new(1.0, Color32::BLACK)),
                            ],
                        )
                        .color(fill);
                        plot_ui.bar_chart(chart);
                    }
                });
        });
    }
}

/// Show the chart window. Returns once the user closes it.
pub fn render_chart(means: &[MeanDuration]) -> Result<()> {
    let model = ChartModel::from_means(means);
    if model.is_empty() {
        logw!("No aircraft type has a mean flight time; nothing to chart");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(CHART_TITLE)
            .with_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        CHART_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp { model }))),
    )
    .map_err(|e| ScrapeError::Chart(e.to_string()))
}
