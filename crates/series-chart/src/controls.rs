// File: crates/series-chart/src/controls.rs
// Summary: Slider panel layout, pointer hit-testing and drawing.

use skia_safe as skia;

use series_core::Slider;

use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::theme::Theme;

const PADDING: i32 = 20;
const ROW_HEIGHT: i32 = 64;
/// Distance from the row top to the track centre line (caption sits above).
const TRACK_OFFSET: i32 = 34;
const KNOB_RADIUS: f32 = 7.0;
/// Vertical slack around the track that still grabs the knob.
const GRAB_SLACK: i32 = 10;

/// Vertical stack of sliders inside a panel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderPanel {
    rect: RectI32,
}

impl SliderPanel {
    pub fn new(rect: RectI32) -> Self {
        Self { rect }
    }

    /// Zero-height rectangle along the track of slider `index`.
    pub fn track(&self, index: usize) -> RectI32 {
        let y = self.rect.top + PADDING + index as i32 * ROW_HEIGHT + TRACK_OFFSET;
        let left = self.rect.left + PADDING;
        let right = (self.rect.right - PADDING).max(left + 1);
        RectI32::from_ltrb(left, y, right, y)
    }

    /// Index of the slider whose track is under the pointer, if any.
    pub fn hit_test(&self, px: f64, py: f64, count: usize) -> Option<usize> {
        (0..count).find(|&i| {
            self.track(i)
                .inflate(KNOB_RADIUS as i32, GRAB_SLACK)
                .contains(px, py)
        })
    }

    /// Position along the track of slider `index` as a fraction; unclamped.
    pub fn fraction_at(&self, index: usize, px: f64) -> f64 {
        let t = self.track(index);
        (px - t.left as f64) / (t.width() as f64).max(1.0)
    }

    pub fn draw(&self, canvas: &skia::Canvas, sliders: &[&Slider], theme: &Theme, shaper: Option<&TextShaper>) {
        let mut bg = skia::Paint::default();
        bg.set_color(theme.panel_background);
        canvas.draw_rect(self.rect.to_skia(), &bg);

        for (i, slider) in sliders.iter().enumerate() {
            let track = self.track(i);
            let (l, r, y) = (track.left as f32, track.right as f32, track.top as f32);
            let knob_x = l + slider.fraction() as f32 * (r - l);

            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_stroke_cap(skia::paint::Cap::Round);
            paint.set_stroke_width(4.0);
            paint.set_color(theme.slider_track);
            canvas.draw_line((l, y), (r, y), &paint);
            paint.set_color(theme.slider_fill);
            canvas.draw_line((l, y), (knob_x, y), &paint);

            let mut knob = skia::Paint::default();
            knob.set_anti_alias(true);
            knob.set_color(theme.slider_knob);
            canvas.draw_circle((knob_x, y), KNOB_RADIUS, &knob);
            knob.set_style(skia::paint::Style::Stroke);
            knob.set_stroke_width(1.5);
            knob.set_color(theme.slider_fill);
            canvas.draw_circle((knob_x, y), KNOB_RADIUS, &knob);

            if let Some(shaper) = shaper {
                let caption = format!("{}: {}", slider.title(), format_value(slider.value(), slider.spec().step));
                shaper.draw_left(canvas, &caption, l, y - 16.0, 13.0, theme.axis_label, false);
            }
        }
    }
}

/// Value text with as many decimals as the step needs ("2", "0.3").
pub fn format_value(value: f64, step: f64) -> String {
    let decimals = if step.fract() == 0.0 { 0 } else { (-step.log10().floor()).max(0.0) as usize };
    format!("{value:.decimals$}")
}
