//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::charts::ChartSeries;
use crate::data::VitalSign;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Color palette for signals
pub const OXYGEN_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const GLUCOSE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
pub const HEART_RATE_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const TEMPERATURE_COLOR: Color32 = Color32::from_rgb(243, 156, 18); // Orange

/// Creates line chart visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Display color for a signal.
    pub fn signal_color(sign: VitalSign) -> Color32 {
        match sign {
            VitalSign::Oxygen => OXYGEN_COLOR,
            VitalSign::Glucose => GLUCOSE_COLOR,
            VitalSign::HeartRate => HEART_RATE_COLOR,
            VitalSign::Temperature => TEMPERATURE_COLOR,
        }
    }

    /// Draw an interactive line chart for one series.
    /// X-axis: sample index, Y-axis: signal value. Drag and zoom are on,
    /// horizontal grid lines are off.
    pub fn draw_line_chart(ui: &mut egui::Ui, series: &ChartSeries, height: f32) {
        Plot::new(format!("line_{}", series.label))
            .height(height)
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(false)
            .show_grid([true, false])
            .x_axis_label("Sample")
            .y_axis_label("Value")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                let mut line = Line::new(PlotPoints::from_iter(series.points.iter().copied()))
                    .color(series.color)
                    .width(series.style.width)
                    .name(&series.label);
                if series.style.fill {
                    line = line.fill(0.0);
                }
                plot_ui.line(line);

                if series.style.show_markers {
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(series.points.iter().copied()))
                            .radius(2.5)
                            .color(series.color),
                    );
                }
            });
    }
}
