// File: crates/series-chart/src/view.rs
// Visible ranges and the pan/zoom tools, expressed against the plot rectangle in pixels.

use crate::chart::Chart;
use crate::geometry::RectI32;

/// Narrowest and widest visible span the zoom tool will produce.
pub const MIN_SPAN: f64 = 1e-9;
pub const MAX_SPAN: f64 = 1e12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self { x_min: x_range.0, x_max: x_range.1, y_min: y_range.0, y_max: y_range.1 }
    }

    pub fn from_chart(chart: &Chart) -> Self {
        Self::new((chart.x_axis.min, chart.x_axis.max), (chart.y_axis.min, chart.y_axis.max))
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    /// Drag by a pixel delta; content follows the pointer.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, plot: &RectI32) {
        let plot_w = (plot.width() as f64).max(1.0);
        let plot_h = (plot.height() as f64).max(1.0);
        let wx = -dx / plot_w * (self.x_max - self.x_min);
        let wy = dy / plot_h * (self.y_max - self.y_min);
        self.x_min += wx;
        self.x_max += wx;
        self.y_min += wy;
        self.y_max += wy;
    }

    /// Wheel zoom keeping the world point under the cursor fixed.
    /// Positive `scroll` zooms in; the factor is clamped to [0.1, 10] and the
    /// resulting spans to [`MIN_SPAN`, `MAX_SPAN`].
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, plot: &RectI32) {
        let (l, r) = (plot.left as f64, plot.right as f64);
        let (t, b) = (plot.top as f64, plot.bottom as f64);
        let plot_w = (r - l).max(1.0);
        let plot_h = (b - t).max(1.0);
        let cx = cursor_x.clamp(l, r);
        let cy = cursor_y.clamp(t, b);
        let x_span = (self.x_max - self.x_min).clamp(MIN_SPAN, MAX_SPAN);
        let y_span = (self.y_max - self.y_min).clamp(MIN_SPAN, MAX_SPAN);
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = (x_span * factor).clamp(MIN_SPAN, MAX_SPAN);
        let ny = (y_span * factor).clamp(MIN_SPAN, MAX_SPAN);
        let rx = (wx - self.x_min) / x_span;
        let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx;
        self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny;
        self.y_min = self.y_max - ny;
    }

    /// World coordinates under a pixel, or `None` outside the plot.
    pub fn world_at(&self, px: f64, py: f64, plot: &RectI32) -> Option<(f64, f64)> {
        if !plot.contains(px, py) {
            return None;
        }
        let fx = (px - plot.left as f64) / (plot.width() as f64).max(1.0);
        let fy = (py - plot.top as f64) / (plot.height() as f64).max(1.0);
        Some((
            self.x_min + fx * (self.x_max - self.x_min),
            self.y_max - fy * (self.y_max - self.y_min),
        ))
    }
}
