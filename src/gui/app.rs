//! VitalScope Main Application
//! Main window with control panel and stacked vital-sign charts.

use crate::charts::{ChartPlotter, ChartSeries, SeriesStyle, StaticChartRenderer};
use crate::data::{
    DatasetExporter, SignalProjector, VitalSample, VitalSign, VitalsGenerator, SAMPLE_COUNT,
    SAMPLE_INTERVAL_SECS, START_TIMESTAMP,
};
use crate::gui::chart_viewer::VitalChart;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::{SignalStats, StatsCalculator};
use anyhow::Context;
use egui::SidePanel;
use std::path::{Path, PathBuf};

/// Signals shown as charts, top to bottom.
const DISPLAYED_SIGNS: [VitalSign; 2] = [VitalSign::Oxygen, VitalSign::Glucose];

/// PNG export dimensions
const EXPORT_WIDTH: u32 = 1200;
const EXPORT_HEIGHT: u32 = 700;

/// Main application window.
pub struct VitalscopeApp {
    samples: Vec<VitalSample>,
    stats: Vec<SignalStats>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl VitalscopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // The dataset is fixed: generated once here, never mutated
        let samples = VitalsGenerator::demo_dataset();
        let stats = StatsCalculator::compute_all_signal_stats(&samples);
        log::info!(
            "generated {} samples starting at epoch {}",
            samples.len(),
            START_TIMESTAMP
        );

        let mut control_panel = ControlPanel::new();
        control_panel.set_dataset_info(SAMPLE_COUNT, START_TIMESTAMP, SAMPLE_INTERVAL_SECS);

        let mut app = Self {
            samples,
            stats,
            control_panel,
            chart_viewer: ChartViewer::new(),
        };
        app.rebuild_charts();
        app
    }

    /// Current series style from the panel settings.
    fn current_style(&self) -> SeriesStyle {
        SeriesStyle {
            fill: self.control_panel.settings.fill_area,
            show_markers: self.control_panel.settings.show_markers,
            ..SeriesStyle::default()
        }
    }

    /// Project the displayed signals and rebuild their chart cards.
    fn rebuild_charts(&mut self) {
        let style = self.current_style();
        let charts = DISPLAYED_SIGNS
            .iter()
            .map(|&sign| {
                let values = SignalProjector::project(&self.samples, sign);
                let series = ChartSeries::from_values(
                    &values,
                    ChartPlotter::signal_color(sign),
                    sign.label(),
                )
                .with_style(style);
                let stats = self
                    .stats
                    .iter()
                    .find(|s| s.signal == sign.label())
                    .cloned()
                    .unwrap_or_default();
                VitalChart { series, stats }
            })
            .collect();
        self.chart_viewer.set_charts(charts);
    }

    /// Open an exported file with the system default app when enabled.
    fn maybe_open(&self, path: &Path) {
        if self.control_panel.settings.open_after_export {
            if let Err(e) = open::that(path) {
                log::warn!("failed to open {}: {}", path.display(), e);
            }
        }
    }

    fn handle_export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("vitals.csv")
            .save_file()
        else {
            return; // User cancelled
        };

        match self.export_csv(&path) {
            Ok(()) => {
                log::info!("dataset exported to {}", path.display());
                self.control_panel.set_status(&format!(
                    "Saved {} rows to {}",
                    self.samples.len(),
                    file_label(&path)
                ));
                self.maybe_open(&path);
            }
            Err(e) => {
                log::error!("CSV export failed: {:#}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn export_csv(&self, path: &Path) -> anyhow::Result<()> {
        DatasetExporter::write_csv(&self.samples, path)
            .with_context(|| format!("writing {}", path.display()))
    }

    fn handle_export_summary(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON Files", &["json"])
            .set_file_name("vitals_summary.json")
            .save_file()
        else {
            return;
        };

        match self.export_summary(&path) {
            Ok(()) => {
                log::info!("summary exported to {}", path.display());
                self.control_panel
                    .set_status(&format!("Saved summary to {}", file_label(&path)));
                self.maybe_open(&path);
            }
            Err(e) => {
                log::error!("summary export failed: {:#}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn export_summary(&self, path: &Path) -> anyhow::Result<()> {
        DatasetExporter::write_summary_json(&self.stats, path)
            .with_context(|| format!("writing {}", path.display()))
    }

    fn handle_export_charts(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };

        match self.export_charts(&dir) {
            Ok(paths) => {
                log::info!("exported {} chart images to {}", paths.len(), dir.display());
                self.control_panel
                    .set_status(&format!("Exported {} chart PNGs", paths.len()));
                if let Some(first) = paths.first() {
                    self.maybe_open(first);
                }
            }
            Err(e) => {
                log::error!("chart export failed: {:#}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Render every displayed chart into `dir`, one PNG per signal.
    fn export_charts(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for chart in &self.chart_viewer.charts {
            let file_name = format!(
                "{}.png",
                chart.series.label.to_lowercase().replace(' ', "_")
            );
            let path = dir.join(file_name);
            StaticChartRenderer::export_png(&chart.series, &path, EXPORT_WIDTH, EXPORT_HEIGHT)
                .with_context(|| format!("rendering {}", path.display()))?;
            paths.push(path);
        }
        Ok(paths)
    }
}

/// Short display name for a path.
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for VitalscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::StyleChanged => self.rebuild_charts(),
                        ControlPanelAction::ExportCsv => self.handle_export_csv(),
                        ControlPanelAction::ExportSummary => self.handle_export_summary(),
                        ControlPanelAction::ExportCharts => self.handle_export_charts(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
