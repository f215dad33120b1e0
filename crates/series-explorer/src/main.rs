// File: crates/series-explorer/src/main.rs
// Summary: Interactive Taylor-series explorer: sine target, red approximation, order and x0 sliders.

mod app;
mod config;
mod window;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use series_core::ExplorerConfig;

use crate::app::App;
use crate::config::WindowConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let window_config = WindowConfig::default();

    let config = ExplorerConfig::default();
    config.validate().context("default configuration")?;
    info!(
        title = config.title,
        grid = config.grid.count,
        order = config.order.value,
        x0 = config.expansion_point.value,
        theme = window_config.theme.name,
        "starting explorer"
    );

    let app = App::new(&config, &window_config)?;
    window::run(app, &window_config)
}
