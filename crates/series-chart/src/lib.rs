// File: crates/series-chart/src/lib.rs
// Summary: Chart library entry point; line-series rendering, view state, slider panel and frame composition.

pub mod axis;
pub mod chart;
pub mod controls;
pub mod geometry;
pub mod layout;
pub mod scene;
pub mod series;
pub mod text;
pub mod theme;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use controls::SliderPanel;
pub use geometry::RectI32;
pub use layout::{Insets, Layout};
pub use scene::FrameRenderer;
pub use series::{LineColor, Series};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
