// File: crates/series-chart/src/chart.rs
// Summary: Chart struct and raster rendering pipeline (RGBA buffer, PNG bytes, PNG file) on Skia CPU surfaces.

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::layout::{plot_rect, Insets};
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::view::ViewState;

/// Pixels beyond the plot edge at which off-scale points are pinned before clipping.
const OFFSCALE_PX: f32 = 10_000.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Pointer position in frame pixels; draws the crosshair when inside the plot.
    pub crosshair: Option<(f32, f32)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            crosshair: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Swap the points of the series called `name`. Returns false when no such series exists.
    pub fn replace_series_data(&mut self, name: &str, data: Vec<(f64, f64)>) -> bool {
        match self.series.iter_mut().find(|s| s.name == name) {
            Some(s) => {
                s.data_xy = data;
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> ViewState { ViewState::from_chart(self) }

    /// Draw the whole chart (background, grid, axes, series, crosshair) into `area`.
    pub fn draw(&self, canvas: &skia::Canvas, area: RectI32, opts: &RenderOptions, shaper: Option<&TextShaper>) {
        let theme = &opts.theme;
        let plot = plot_rect(area, &opts.insets);

        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(area.to_skia(), &bg);
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        let x_ticks = self.x_axis.ticks(6);
        let y_ticks = self.y_axis.ticks(5);
        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme);
        }
        canvas.restore();

        draw_axes(canvas, &plot, theme);

        if let Some(shaper) = shaper.filter(|_| opts.draw_labels) {
            draw_labels(canvas, shaper, area, &plot, self, &x_ticks, &y_ticks, theme);
        }

        if let Some((cx, cy)) = opts.crosshair {
            draw_crosshair(canvas, &plot, self, cx, cy, theme, shaper.filter(|_| opts.draw_labels));
        }
    }

    /// Render to a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let shaper = opts.draw_labels.then(TextShaper::new);
        let area = RectI32::from_ltwh(0, 0, opts.width, opts.height);
        let (pixels, stride) = raster_rgba8(opts.width, opts.height, |canvas| {
            self.draw(canvas, area, opts, shaper.as_ref());
        })?;
        Ok((pixels, opts.width, opts.height, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        encode_png(pixels, w, h)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}

/// Run `draw` on a fresh CPU raster surface and read back RGBA8 pixels.
pub(crate) fn raster_rgba8<F>(width: i32, height: i32, draw: F) -> Result<(Vec<u8>, usize)>
where
    F: FnOnce(&skia::Canvas),
{
    if width <= 0 || height <= 0 {
        return Err(anyhow!("invalid surface size {width}x{height}"));
    }
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    draw(surface.canvas());

    let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow!("failed to read back surface pixels"));
    }
    Ok((pixels, stride))
}

pub(crate) fn encode_png(pixels: Vec<u8>, width: i32, height: i32) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| anyhow!("pixel buffer does not match {width}x{height}"))?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
    Ok(out.into_inner())
}

// ---- helpers ----------------------------------------------------------------

fn to_px_x(plot: &RectI32, axis: &Axis, x: f64) -> f32 {
    plot.left as f32 + ((x - axis.min) / axis.span()) as f32 * plot.width() as f32
}

fn to_px_y(plot: &RectI32, axis: &Axis, y: f64) -> f32 {
    let py = plot.bottom as f32 - ((y - axis.min) / axis.span()) as f32 * plot.height() as f32;
    py.clamp(plot.top as f32 - OFFSCALE_PX, plot.bottom as f32 + OFFSCALE_PX)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for &x in x_ticks {
        let px = to_px_x(plot, x_axis, x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    for &y in y_ticks {
        let py = to_px_y(plot, y_axis, y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_style(skia::paint::Style::Stroke);
    canvas.draw_rect(plot.to_skia(), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    area: RectI32,
    plot: &RectI32,
    chart: &Chart,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_stroke_width(1.0);

    let x_step = chart.x_axis.tick_step(6);
    for &x in x_ticks {
        let px = to_px_x(plot, &chart.x_axis, x);
        canvas.draw_line((px, plot.bottom as f32), (px, plot.bottom as f32 + 5.0), &tick_paint);
        let label = Axis::format_tick(x, x_step);
        shaper.draw_centered(canvas, &label, px, plot.bottom as f32 + 20.0, 12.0, theme.tick, true);
    }
    let y_step = chart.y_axis.tick_step(5);
    for &y in y_ticks {
        let py = to_px_y(plot, &chart.y_axis, y);
        canvas.draw_line((plot.left as f32 - 5.0, py), (plot.left as f32, py), &tick_paint);
        let label = Axis::format_tick(y, y_step);
        shaper.draw_right(canvas, &label, plot.left as f32 - 8.0, py + 4.0, 12.0, theme.tick, true);
    }

    shaper.draw_centered(
        canvas,
        &chart.x_axis.label,
        (plot.left + plot.right) as f32 * 0.5,
        area.bottom as f32 - 6.0,
        13.0,
        theme.axis_label,
        false,
    );
    shaper.draw_left(canvas, &chart.y_axis.label, area.left as f32 + 6.0, plot.top as f32 - 8.0, 13.0, theme.axis_label, false);
    if !chart.title.is_empty() {
        shaper.draw_left(canvas, &chart.title, plot.left as f32, area.top as f32 + 22.0, 15.0, theme.title, false);
    }
}

fn draw_line_series(canvas: &skia::Canvas, plot: &RectI32, x_axis: &Axis, y_axis: &Axis, series: &Series, theme: &Theme) {
    if series.data_xy.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() {
            // gap: restart the polyline after the bad sample
            pen_down = false;
            continue;
        }
        let p = (to_px_x(plot, x_axis, x), to_px_y(plot, y_axis, y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.width);
    stroke.set_color(series.stroke_color(theme));
    canvas.draw_path(&path, &stroke);
}

fn draw_crosshair(
    canvas: &skia::Canvas,
    plot: &RectI32,
    chart: &Chart,
    cx: f32,
    cy: f32,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let Some((wx, wy)) = chart.view().world_at(cx as f64, cy as f64, plot) else {
        return;
    };
    let mut paint = skia::Paint::default();
    paint.set_color(theme.crosshair);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    if let Some(dash) = skia::PathEffect::dash(&[4.0, 4.0], 0.0) {
        paint.set_path_effect(dash);
    }
    canvas.draw_line((cx, plot.top as f32), (cx, plot.bottom as f32), &paint);
    canvas.draw_line((plot.left as f32, cy), (plot.right as f32, cy), &paint);

    if let Some(shaper) = shaper {
        let readout = format!("x = {wx:.3}  y = {wy:.3}");
        shaper.draw_right(canvas, &readout, plot.right as f32 - 6.0, plot.top as f32 + 16.0, 12.0, theme.tick, true);
    }
}
