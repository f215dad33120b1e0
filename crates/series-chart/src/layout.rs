// File: crates/series-chart/src/layout.rs
// Summary: Window layout: slider panel on the left, plot area with axis insets on the right.

use crate::geometry::RectI32;

/// Default frame width in pixels (panel + plot).
pub const WIDTH: i32 = 900;
/// Default frame height in pixels.
pub const HEIGHT: i32 = 440;
/// Default slider panel width in pixels.
pub const PANEL_WIDTH: i32 = 260;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for the title above and tick labels below/left
        Self::new(56, 24, 40, 44)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    /// Configured panel width; the drawn panel never takes more than half the frame.
    pub panel_width: i32,
    pub insets: Insets,
}

impl Default for Layout {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, panel_width: PANEL_WIDTH, insets: Insets::default() }
    }
}

impl Layout {
    /// Same layout resized to a new frame. The configured panel width is kept,
    /// so shrinking (or minimising to 0x0) and restoring gives the panel back.
    pub fn resized(&self, width: i32, height: i32) -> Self {
        Self { width: width.max(1), height: height.max(1), ..*self }
    }

    /// Width the panel actually occupies in the current frame.
    pub fn effective_panel_width(&self) -> i32 {
        self.panel_width.clamp(0, self.width / 2)
    }

    pub fn panel(&self) -> RectI32 {
        RectI32::from_ltrb(0, 0, self.effective_panel_width(), self.height)
    }

    /// Area owned by the chart, including its axis margins.
    pub fn chart(&self) -> RectI32 {
        RectI32::from_ltrb(self.effective_panel_width(), 0, self.width, self.height)
    }

    /// Data area of the chart; never narrower or shorter than one pixel.
    pub fn plot(&self) -> RectI32 {
        plot_rect(self.chart(), &self.insets)
    }
}

/// Shrink `area` by `insets`, keeping at least a 1px plot.
pub fn plot_rect(area: RectI32, insets: &Insets) -> RectI32 {
    let left = area.left + insets.left as i32;
    let top = area.top + insets.top as i32;
    let right = (area.right - insets.right as i32).max(left + 1);
    let bottom = (area.bottom - insets.bottom as i32).max(top + 1);
    RectI32::from_ltrb(left, top, right, bottom)
}
