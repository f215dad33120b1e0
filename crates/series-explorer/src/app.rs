// File: crates/series-explorer/src/app.rs
// Summary: Window-independent application state: routes pointer/keyboard input to sliders and
//          view tools, forwards slider changes to the controller, mirrors published buffers into the chart.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use series_chart::theme::presets;
use series_chart::{Chart, FrameRenderer, Layout, LineColor, RenderOptions, Series, SliderPanel, ViewState};
use series_core::{Controller, ExplorerConfig, Slider, SliderChange, SliderId, TickOutcome};

use crate::config::WindowConfig;

/// Index of each slider in the panel, top to bottom.
pub const ORDER_SLIDER: usize = 0;
pub const EXPANSION_SLIDER: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Drag {
    Idle,
    Slider(usize),
    Pan { last: (f64, f64) },
}

pub struct App {
    controller: Controller,
    sliders: [Slider; 2],
    chart: Chart,
    home: ViewState,
    view: ViewState,
    layout: Layout,
    options: RenderOptions,
    cursor: Option<(f64, f64)>,
    drag: Drag,
    published: u64,
    tick_period: Duration,
    save_path: PathBuf,
    export_size: (i32, i32),
}

impl App {
    pub fn new(config: &ExplorerConfig, window: &WindowConfig) -> Result<Self> {
        let controller = Controller::new(config, f64::sin).context("invalid explorer configuration")?;

        let mut chart = Chart::new().with_title(config.title);
        chart.add_series(Series::from_source(controller.target_source()));
        chart.add_series(Series::from_source(controller.approximation_source()).with_color(LineColor::Accent));

        let home = ViewState::new(config.x_range, config.y_range);
        home.apply_to_chart(&mut chart);

        let layout = Layout {
            width: window.width,
            height: window.height,
            panel_width: window.panel_width,
            ..Layout::default()
        };
        let options = RenderOptions { theme: window.theme, ..RenderOptions::default() };
        let published = controller.approximation_source().revision();

        Ok(Self {
            controller,
            sliders: [
                Slider::new(SliderId::Order, config.order),
                Slider::new(SliderId::ExpansionPoint, config.expansion_point),
            ],
            chart,
            home,
            view: home,
            layout,
            options,
            cursor: None,
            drag: Drag::Idle,
            published,
            tick_period: config.tick_period,
            save_path: window.save_path.clone(),
            export_size: window.export_size,
        })
    }

    pub fn tick_period(&self) -> Duration { self.tick_period }
    pub fn controller(&self) -> &Controller { &self.controller }
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn view(&self) -> ViewState { self.view }
    pub fn layout(&self) -> Layout { self.layout }
    pub fn slider(&self, index: usize) -> &Slider { &self.sliders[index] }
    pub fn theme_name(&self) -> &'static str { self.options.theme.name }

    /// Periodic tick. Returns true when new curves were published and a redraw is due.
    pub fn tick(&mut self) -> bool {
        if self.controller.on_tick() == TickOutcome::Skipped {
            return false;
        }
        self.sync_chart()
    }

    fn sync_chart(&mut self) -> bool {
        let approx = self.controller.approximation_source();
        if approx.revision() == self.published {
            return false;
        }
        self.published = approx.revision();
        let approx_points = approx.points();
        let target_points = self.controller.target_source().points();
        let approx_name = approx.name().to_owned();
        let target_name = self.controller.target_source().name().to_owned();
        self.chart.replace_series_data(&target_name, target_points);
        self.chart.replace_series_data(&approx_name, approx_points);
        true
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.layout = self.layout.resized(width, height);
    }

    fn panel(&self) -> SliderPanel { SliderPanel::new(self.layout.panel()) }

    /// Pointer moved to `(x, y)` in window pixels. Returns true when a redraw is due.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.cursor = Some((x, y));
        match self.drag {
            Drag::Slider(i) => self.drag_slider(i, x),
            Drag::Pan { last } => {
                self.view.pan_by_pixels(x - last.0, y - last.1, &self.layout.plot());
                self.drag = Drag::Pan { last: (x, y) };
            }
            Drag::Idle => {}
        }
        true
    }

    pub fn pointer_left(&mut self) -> bool {
        self.cursor = None;
        true
    }

    pub fn pointer_down(&mut self) -> bool {
        let Some((x, y)) = self.cursor else { return false };
        if let Some(i) = self.panel().hit_test(x, y, self.sliders.len()) {
            self.drag = Drag::Slider(i);
            self.drag_slider(i, x);
            true
        } else if self.layout.plot().contains(x, y) {
            self.drag = Drag::Pan { last: (x, y) };
            true
        } else {
            false
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = Drag::Idle;
    }

    /// Wheel zoom around the cursor; positive amounts zoom in.
    pub fn scroll(&mut self, amount: f64) -> bool {
        match self.cursor {
            Some((x, y)) if self.layout.plot().contains(x, y) => {
                self.view.zoom_at_pixel(amount, x, y, &self.layout.plot());
                true
            }
            _ => false,
        }
    }

    pub fn reset_view(&mut self) {
        self.view = self.home;
        debug!("view reset");
    }

    /// Keyboard nudge of one slider by whole steps.
    pub fn nudge(&mut self, index: usize, steps: i32) -> bool {
        match self.sliders[index].step_by(steps) {
            Some(change) => {
                self.forward(change);
                true
            }
            None => false,
        }
    }

    pub fn cycle_theme(&mut self) {
        let themes = presets();
        let current = themes.iter().position(|t| t.name == self.options.theme.name).unwrap_or(0);
        self.options.theme = themes[(current + 1) % themes.len()];
        debug!(theme = self.options.theme.name, "theme changed");
    }

    fn drag_slider(&mut self, index: usize, x: f64) {
        let fraction = self.panel().fraction_at(index, x);
        if let Some(change) = self.sliders[index].drag_to_fraction(fraction) {
            self.forward(change);
        }
    }

    /// Hand a slider change to the controller. A rejected value (logged by the
    /// controller) snaps the slider back to the parameter actually in effect.
    fn forward(&mut self, change: SliderChange) {
        if self.controller.on_slider_change(change).is_ok() {
            return;
        }
        let params = self.controller.params();
        let current = match change.id {
            SliderId::Order => params.order as f64,
            SliderId::ExpansionPoint => params.expansion_point,
        };
        if let Some(slider) = self.sliders.iter_mut().find(|s| s.id() == change.id) {
            if let Err(e) = slider.set_value(current) {
                warn!(widget = change.id.name(), error = %e, "slider cannot show the current parameter");
            }
        }
    }

    fn crosshair(&self) -> Option<(f32, f32)> {
        self.cursor
            .filter(|&(x, y)| self.layout.plot().contains(x, y) && !matches!(self.drag, Drag::Slider(_)))
            .map(|(x, y)| (x as f32, y as f32))
    }

    /// Compose the current frame as RGBA8.
    pub fn render(&mut self, renderer: &FrameRenderer) -> Result<(Vec<u8>, i32, i32, usize)> {
        self.view.apply_to_chart(&mut self.chart);
        let opts = RenderOptions { crosshair: self.crosshair(), ..self.options };
        let [order, x0] = &self.sliders;
        renderer.render_rgba8(&self.chart, &[order, x0], &self.layout, &opts)
    }

    /// Save tool: write the plot (current view, no crosshair) as PNG.
    pub fn save_png(&mut self) -> Result<PathBuf> {
        self.view.apply_to_chart(&mut self.chart);
        let opts = RenderOptions {
            width: self.export_size.0,
            height: self.export_size.1,
            crosshair: None,
            ..self.options
        };
        self.chart.render_to_png(&opts, &self.save_path)?;
        info!(path = %self.save_path.display(), "saved plot");
        Ok(self.save_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use series_chart::Theme;
    use series_core::SliderSpec;

    fn app() -> App {
        App::new(&ExplorerConfig::default(), &WindowConfig::default()).expect("app")
    }

    fn track_point(app: &App, index: usize, fraction: f64) -> (f64, f64) {
        let t = SliderPanel::new(app.layout().panel()).track(index);
        (t.left as f64 + fraction * t.width() as f64, t.top as f64)
    }

    #[test]
    fn slider_drag_updates_parameters_but_not_curves_until_tick() {
        let mut app = app();
        let before = app.chart().series[1].data_xy.clone();

        let (x, y) = track_point(&app, ORDER_SLIDER, 1.0);
        app.pointer_moved(x, y);
        assert!(app.pointer_down());
        app.pointer_up();

        assert_eq!(app.slider(ORDER_SLIDER).value(), 10.0);
        assert_eq!(app.controller().params().order, 10);
        assert_eq!(app.chart().series[1].data_xy, before);

        assert!(app.tick());
        assert_ne!(app.chart().series[1].data_xy, before);
    }

    #[test]
    fn drag_past_track_end_clamps_to_bounds() {
        let mut app = app();
        let (x, y) = track_point(&app, EXPANSION_SLIDER, 0.5);
        app.pointer_moved(x, y);
        app.pointer_down();
        app.pointer_moved(-500.0, y);
        app.pointer_up();
        assert_eq!(app.slider(EXPANSION_SLIDER).value(), -1.0);
        assert_eq!(app.controller().params().expansion_point, -1.0);
    }

    #[test]
    fn plot_drag_pans_and_reset_restores_home() {
        let mut app = app();
        let plot = app.layout().plot();
        let (cx, cy) = ((plot.left + plot.right) as f64 * 0.5, (plot.top + plot.bottom) as f64 * 0.5);
        app.pointer_moved(cx, cy);
        assert!(app.pointer_down());
        app.pointer_moved(cx + 40.0, cy);
        app.pointer_up();
        assert!(app.view().x_min < -6.0);

        assert!(app.scroll(0.2));
        app.reset_view();
        assert_eq!(app.view(), ViewState::new((-6.0, 6.0), (-2.0, 2.0)));
    }

    #[test]
    fn nudges_saturate_and_theme_cycles() {
        let mut app = app();
        assert!(app.nudge(ORDER_SLIDER, -1));
        assert!(!app.nudge(ORDER_SLIDER, -1));
        assert_eq!(app.controller().params().order, 1);

        assert_eq!(app.theme_name(), "light");
        app.cycle_theme();
        assert_eq!(app.theme_name(), "dark");
        app.cycle_theme();
        assert_eq!(app.theme_name(), "light");
    }

    #[test]
    fn rejected_slider_value_snaps_back_to_the_parameter() {
        let mut app = app();
        // A slider wider than the controller's bounds; the controller refuses 12.
        let wide = SliderSpec { end: 12.0, ..SliderSpec::order() };
        app.sliders[ORDER_SLIDER] = Slider::new(SliderId::Order, wide);

        let (x, y) = track_point(&app, ORDER_SLIDER, 1.0);
        app.pointer_moved(x, y);
        assert!(app.pointer_down());
        app.pointer_up();

        assert_eq!(app.controller().params().order, 2);
        assert_eq!(app.slider(ORDER_SLIDER).value(), 2.0);
        assert_eq!(app.controller().stats().rejected, 1);
    }

    #[test]
    fn save_tool_writes_a_png_at_export_size() {
        let path = std::env::temp_dir().join(format!("series_explorer_save_{}.png", std::process::id()));
        let window = WindowConfig { save_path: path.clone(), export_size: (320, 200), ..WindowConfig::default() };
        let mut app = App::new(&ExplorerConfig::default(), &window).expect("app");

        let written = app.save_png().expect("save");
        assert_eq!(written, path);
        let bytes = std::fs::read(&path).expect("read saved png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        // IHDR width and height, big-endian
        assert_eq!(u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]), 320);
        assert_eq!(u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]), 200);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rendered_frame_follows_the_active_theme() {
        let mut app = app();
        let renderer = FrameRenderer::new();
        let panel_pixel = |app: &mut App| {
            let (rgba, w, h, stride) = app.render(&renderer).expect("render");
            assert_eq!((w, h), (app.layout().width, app.layout().height));
            let i = (h as usize - 5) * stride + 5 * 4;
            (rgba[i], rgba[i + 1], rgba[i + 2])
        };

        let light = Theme::light().panel_background;
        assert_eq!(panel_pixel(&mut app), (light.r(), light.g(), light.b()));

        app.cycle_theme();
        let dark = Theme::dark().panel_background;
        assert_eq!(panel_pixel(&mut app), (dark.r(), dark.g(), dark.b()));
    }

    #[test]
    fn pointer_outside_tools_does_nothing() {
        let mut app = app();
        assert!(!app.pointer_down());
        app.pointer_moved(1.0, 1.0);
        assert!(!app.pointer_down());
        assert!(!app.scroll(0.5));
    }
}
