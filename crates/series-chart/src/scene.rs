// File: crates/series-chart/src/scene.rs
// Summary: Full-frame composition (slider panel + chart) into an RGBA buffer for window blitting.

use anyhow::Result;

use series_core::Slider;

use crate::chart::{encode_png, raster_rgba8, Chart, RenderOptions};
use crate::controls::SliderPanel;
use crate::layout::Layout;
use crate::text::TextShaper;

/// Holds the font collection so per-frame rendering does not rebuild it.
pub struct FrameRenderer {
    shaper: TextShaper,
}

impl Default for FrameRenderer {
    fn default() -> Self { Self::new() }
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render panel and chart side by side. `opts.width`/`height`/`insets` are
    /// taken from `layout`; the remaining options (theme, labels, crosshair) apply.
    pub fn render_rgba8(
        &self,
        chart: &Chart,
        sliders: &[&Slider],
        layout: &Layout,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize)> {
        let opts = RenderOptions { width: layout.width, height: layout.height, insets: layout.insets, ..*opts };
        let shaper = opts.draw_labels.then_some(&self.shaper);
        let panel = SliderPanel::new(layout.panel());
        let (pixels, stride) = raster_rgba8(layout.width, layout.height, |canvas| {
            canvas.clear(opts.theme.background);
            panel.draw(canvas, sliders, &opts.theme, shaper);
            chart.draw(canvas, layout.chart(), &opts, shaper);
        })?;
        Ok((pixels, layout.width, layout.height, stride))
    }

    pub fn render_png_bytes(&self, chart: &Chart, sliders: &[&Slider], layout: &Layout, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_rgba8(chart, sliders, layout, opts)?;
        encode_png(pixels, w, h)
    }
}
