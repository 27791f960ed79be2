//! Chart Series Module
//! Wraps projected signal values into styled point series for display.

use egui::Color32;

/// Visual styling for a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub width: f32,
    pub fill: bool,
    pub show_markers: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            fill: false,
            show_markers: false,
        }
    }
}

/// A labeled, colored series of (index, value) points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
    pub style: SeriesStyle,
}

impl ChartSeries {
    /// Build a series from projected values: one point per value, x = position index.
    pub fn from_values(values: &[f64], color: Color32, label: &str) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();

        Self {
            label: label.to_string(),
            color,
            points,
            style: SeriesStyle::default(),
        }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_per_value_with_index_x() {
        let values = [0.5, -0.25, 1.5];
        let series = ChartSeries::from_values(&values, Color32::BLUE, "Oxygen");
        assert_eq!(series.len(), values.len());
        for (i, point) in series.points.iter().enumerate() {
            assert_eq!(point[0], i as f64);
            assert_eq!(point[1], values[i]);
        }
    }

    #[test]
    fn default_style_is_a_plain_line() {
        let series = ChartSeries::from_values(&[1.0], Color32::RED, "Glucose");
        assert_eq!(series.style.width, 2.0);
        assert!(!series.style.fill);
        assert!(!series.style.show_markers);
    }

    #[test]
    fn with_style_replaces_the_default() {
        let style = SeriesStyle {
            width: 1.0,
            fill: true,
            show_markers: true,
        };
        let series = ChartSeries::from_values(&[1.0], Color32::RED, "Glucose").with_style(style);
        assert_eq!(series.style, style);
    }

    #[test]
    fn label_and_color_are_kept() {
        let series = ChartSeries::from_values(&[], Color32::RED, "Glucose");
        assert_eq!(series.label, "Glucose");
        assert_eq!(series.color, Color32::RED);
        assert!(series.is_empty());
    }
}
