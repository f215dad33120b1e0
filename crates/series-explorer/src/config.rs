// File: crates/series-explorer/src/config.rs
// Summary: Window-level configuration (title, size, theme, export target).

use std::path::PathBuf;

use series_chart::layout::{HEIGHT, PANEL_WIDTH, WIDTH};
use series_chart::Theme;

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: i32,
    pub height: i32,
    pub panel_width: i32,
    pub theme: Theme,
    /// Where the save tool writes the plot.
    pub save_path: PathBuf,
    /// Pixel size of saved plots.
    pub export_size: (i32, i32),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Taylor Series",
            width: WIDTH,
            height: HEIGHT,
            panel_width: PANEL_WIDTH,
            theme: Theme::light(),
            save_path: PathBuf::from("series_approximation.png"),
            export_size: (600, 400),
        }
    }
}
