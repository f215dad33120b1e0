// File: crates/series-chart/src/series.rs
// Summary: Named line series with theme-resolved or explicit stroke colour.

use skia_safe as skia;

use series_core::DataSource;

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineColor {
    /// Theme's default line stroke.
    Default,
    /// Theme's distinguishing stroke (red in the built-in themes).
    Accent,
    Custom(skia::Color),
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub color: LineColor,
    pub width: f32,
}

impl Series {
    pub fn line(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, color: LineColor::Default, width: 2.0 }
    }

    /// Snapshot a display buffer as a line series of the same name.
    pub fn from_source(source: &DataSource) -> Self {
        Self::line(source.name(), source.points())
    }

    pub fn with_color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }

    pub fn stroke_color(&self, theme: &Theme) -> skia::Color {
        match self.color {
            LineColor::Default => theme.line_stroke,
            LineColor::Accent => theme.accent_stroke,
            LineColor::Custom(c) => c,
        }
    }
}
