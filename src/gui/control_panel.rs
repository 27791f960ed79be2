//! Control Panel Widget
//! Left side panel with dataset info, style toggles, and export controls.

use egui::{Color32, RichText};

/// User settings for chart display and export
#[derive(Default, Clone)]
pub struct UserSettings {
    pub show_markers: bool,
    pub fill_area: bool,
    pub open_after_export: bool,
}

/// Left side control panel with dataset summary and export actions.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub sample_count: usize,
    pub start_timestamp: i64,
    pub sample_interval_secs: i64,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            sample_count: 0,
            start_timestamp: 0,
            sample_interval_secs: 0,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the dataset shape shown in the info box.
    pub fn set_dataset_info(&mut self, count: usize, start: i64, interval_secs: i64) {
        self.sample_count = count;
        self.start_timestamp = start;
        self.sample_interval_secs = interval_secs;
    }

    /// Set the status line.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 VitalScope")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Synthetic Vitals Demo")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Dataset Section =====
        ui.label(RichText::new("📁 Dataset").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("dataset_info")
                    .min_col_width(90.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Samples:").size(12.0));
                        ui.label(
                            RichText::new(self.sample_count.to_string())
                                .size(12.0)
                                .strong(),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Start (epoch):").size(12.0));
                        ui.label(
                            RichText::new(self.start_timestamp.to_string())
                                .size(12.0)
                                .strong(),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Interval:").size(12.0));
                        ui.label(
                            RichText::new(format!("{} s", self.sample_interval_secs))
                                .size(12.0)
                                .strong(),
                        );
                        ui.end_row();
                    });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Series Style Section =====
        ui.label(RichText::new("⚙️ Series Style").size(14.0).strong());
        ui.add_space(5.0);

        if ui
            .checkbox(&mut self.settings.show_markers, "Show point markers")
            .changed()
        {
            action = ControlPanelAction::StyleChanged;
        }
        if ui
            .checkbox(&mut self.settings.fill_area, "Fill under line")
            .changed()
        {
            action = ControlPanelAction::StyleChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.label(RichText::new("💾 Export").size(14.0).strong());
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            let csv_button = egui::Button::new(RichText::new("📄 Dataset CSV").size(14.0))
                .min_size(egui::vec2(180.0, 30.0));
            if ui.add(csv_button).clicked() {
                action = ControlPanelAction::ExportCsv;
            }

            ui.add_space(8.0);

            let json_button = egui::Button::new(RichText::new("📋 Summary JSON").size(14.0))
                .min_size(egui::vec2(180.0, 30.0));
            if ui.add(json_button).clicked() {
                action = ControlPanelAction::ExportSummary;
            }

            ui.add_space(8.0);

            let png_button = egui::Button::new(RichText::new("📊 Chart PNGs").size(14.0))
                .min_size(egui::vec2(180.0, 30.0));
            if ui.add(png_button).clicked() {
                action = ControlPanelAction::ExportCharts;
            }
        });

        ui.add_space(8.0);
        ui.checkbox(&mut self.settings.open_after_export, "Open after export");

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Saved") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    StyleChanged,
    ExportCsv,
    ExportSummary,
    ExportCharts,
}
