//! Chart Viewer Widget
//! Central panel showing the vital-sign charts stacked vertically.

use crate::charts::{ChartPlotter, ChartSeries};
use crate::stats::SignalStats;
use egui::{Color32, RichText, ScrollArea};

/// Chart card configuration
const CHART_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 260.0;

/// One displayed chart: a styled series plus its summary statistics.
pub struct VitalChart {
    pub series: ChartSeries,
    pub stats: SignalStats,
}

/// Scrollable chart display area with one card per displayed signal.
#[derive(Default)]
pub struct ChartViewer {
    pub charts: Vec<VitalChart>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed charts.
    pub fn set_charts(&mut self, charts: Vec<VitalChart>) {
        self.charts = charts;
    }

    /// Draw the chart cards stacked vertically.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.charts.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for chart in &self.charts {
                    if chart.series.is_empty() {
                        continue;
                    }
                    Self::draw_chart_card(ui, chart);
                    ui.add_space(CHART_SPACING);
                }
            });
    }

    /// Draw a single chart card: title row, interactive plot, stats row.
    fn draw_chart_card(ui: &mut egui::Ui, chart: &VitalChart) {
        let border_color = chart.series.color;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, border_color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    // Title row: color swatch, label, sample count
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 3.0, border_color);
                        ui.label(
                            RichText::new(&chart.series.label)
                                .size(18.0)
                                .strong()
                                .color(border_color),
                        );
                        ui.label(
                            RichText::new(format!("{} samples", chart.series.len()))
                                .size(12.0)
                                .color(Color32::GRAY),
                        );
                    });

                    ui.add_space(8.0);

                    ChartPlotter::draw_line_chart(ui, &chart.series, CHART_HEIGHT);

                    ui.add_space(10.0);

                    Self::draw_stats_row(ui, &chart.stats);
                });
            });
    }

    /// Draw the one-line statistics table under a chart.
    fn draw_stats_row(ui: &mut egui::Ui, stats: &SignalStats) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("stats_row_{}", stats.signal)))
                    .striped(true)
                    .min_col_width(55.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("N").strong().size(11.0));
                        ui.label(RichText::new("Mean").strong().size(11.0));
                        ui.label(RichText::new("Median").strong().size(11.0));
                        ui.label(RichText::new("Std").strong().size(11.0));
                        ui.label(RichText::new("Min").strong().size(11.0));
                        ui.label(RichText::new("Max").strong().size(11.0));
                        ui.label(RichText::new("P95").strong().size(11.0));
                        ui.label(RichText::new("P05").strong().size(11.0));
                        ui.end_row();

                        ui.label(RichText::new(stats.count.to_string()).size(11.0));
                        ui.label(RichText::new(format!("{:.3}", stats.mean)).size(11.0));
                        ui.label(RichText::new(format!("{:.3}", stats.median)).size(11.0));
                        ui.label(RichText::new(format!("{:.3}", stats.std)).size(11.0));
                        ui.label(RichText::new(format!("{:.3}", stats.min)).size(11.0));
                        ui.label(RichText::new(format!("{:.3}", stats.max)).size(11.0));
                        ui.label(RichText::new(format!("{:.3}", stats.p95)).size(11.0));
                        ui.label(RichText::new(format!("{:.3}", stats.p05)).size(11.0));
                        ui.end_row();
                    });
            });
    }
}
