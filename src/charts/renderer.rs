//! Static Chart Renderer
//! Renders a series to an off-screen PNG, mirroring the interactive view:
//! line over sample index, horizontal grid lines off.

use crate::charts::ChartSeries;
use image::RgbImage;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

const MARGIN: u32 = 20;
const LABEL_AREA: u32 = 45;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart drawing failed: {0}")]
    Draw(String),
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Series has no points")]
    EmptySeries,
}

/// Renders chart images without a GUI context.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one series into an RGB image buffer.
    pub fn render_series(
        series: &ChartSeries,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, RenderError> {
        if series.points.is_empty() {
            return Err(RenderError::EmptySeries);
        }

        let (y_min, y_max) = Self::padded_y_range(&series.points);
        let x_max = (series.points.len() - 1).max(1) as f64;
        let color = RGBColor(series.color.r(), series.color.g(), series.color.b());
        let stroke = series.style.width.round().max(1.0) as u32;

        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            let mut chart = ChartBuilder::on(&root)
                .margin(MARGIN)
                .caption(&series.label, ("sans-serif", 24).into_font())
                .set_label_area_size(LabelAreaPosition::Left, LABEL_AREA)
                .set_label_area_size(LabelAreaPosition::Bottom, LABEL_AREA)
                .build_cartesian_2d(0.0..x_max, y_min..y_max)
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            chart
                .configure_mesh()
                .disable_y_mesh()
                .x_desc("Sample")
                .y_desc("Value")
                .draw()
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            let data = series.points.iter().map(|p| (p[0], p[1]));

            if series.style.fill {
                chart
                    .draw_series(AreaSeries::new(data.clone(), 0.0, color.mix(0.2)))
                    .map_err(|e| RenderError::Draw(e.to_string()))?;
            }

            chart
                .draw_series(LineSeries::new(data, color.stroke_width(stroke)))
                .map_err(|e| RenderError::Draw(e.to_string()))?;

            if series.style.show_markers {
                chart
                    .draw_series(
                        series
                            .points
                            .iter()
                            .map(|p| Circle::new((p[0], p[1]), 3, color.filled())),
                    )
                    .map_err(|e| RenderError::Draw(e.to_string()))?;
            }

            root.present()
                .map_err(|e| RenderError::Draw(e.to_string()))?;
        }

        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| RenderError::Draw("buffer size mismatch".to_string()))
    }

    /// Render and save as PNG.
    pub fn export_png(
        series: &ChartSeries,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let img = Self::render_series(series, width, height)?;
        img.save(path)?;
        Ok(())
    }

    /// Y range covering all points with 5% headroom on each side.
    fn padded_y_range(points: &[[f64; 2]]) -> (f64, f64) {
        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[1]), hi.max(p[1]))
            });

        if !min.is_finite() || !max.is_finite() {
            return (-1.0, 1.0);
        }
        if (max - min).abs() < f64::EPSILON {
            return (min - 1.0, max + 1.0);
        }

        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn y_range_pads_five_percent() {
        let points = vec![[0.0, -10.0], [1.0, 10.0]];
        let (lo, hi) = StaticChartRenderer::padded_y_range(&points);
        assert!((lo + 11.0).abs() < 1e-9);
        assert!((hi - 11.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_gets_unit_headroom() {
        let points = vec![[0.0, 3.0], [1.0, 3.0]];
        let (lo, hi) = StaticChartRenderer::padded_y_range(&points);
        assert_eq!(lo, 2.0);
        assert_eq!(hi, 4.0);
    }

    #[test]
    fn empty_series_is_rejected() {
        let series = ChartSeries::from_values(&[], Color32::BLUE, "Oxygen");
        assert!(matches!(
            StaticChartRenderer::render_series(&series, 400, 300),
            Err(RenderError::EmptySeries)
        ));
    }
}
