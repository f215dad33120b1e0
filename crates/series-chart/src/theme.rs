// File: crates/series-chart/src/theme.rs
// Summary: Light/Dark theming for plot, curves and the slider panel.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub tick: skia::Color,
    pub crosshair: skia::Color,
    pub line_stroke: skia::Color,
    pub accent_stroke: skia::Color,
    pub panel_background: skia::Color,
    pub slider_track: skia::Color,
    pub slider_fill: skia::Color,
    pub slider_knob: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 229, 229, 229),
            axis_line: skia::Color::from_argb(255, 68, 68, 68),
            axis_label: skia::Color::from_argb(255, 68, 68, 68),
            title: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            crosshair: skia::Color::from_argb(255, 120, 120, 120),
            line_stroke: skia::Color::from_argb(255, 31, 119, 180),
            accent_stroke: skia::Color::from_argb(255, 255, 0, 0),
            panel_background: skia::Color::from_argb(255, 245, 245, 247),
            slider_track: skia::Color::from_argb(255, 210, 210, 215),
            slider_fill: skia::Color::from_argb(255, 51, 122, 183),
            slider_knob: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    /// Low-glare palette for darkened lab rooms.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0, 0, 0),
            plot_background: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            accent_stroke: skia::Color::from_argb(255, 220, 60, 60),
            panel_background: skia::Color::from_argb(255, 18, 18, 20),
            slider_track: skia::Color::from_argb(255, 60, 60, 66),
            slider_fill: skia::Color::from_argb(255, 64, 160, 255),
            slider_knob: skia::Color::from_argb(255, 220, 220, 230),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}
