#![allow(non_snake_case)]

mod app;
mod config;
mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::config::{default_catalog_path, resolve_catalog, Args, CatalogSource};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let (catalog, source) = resolve_catalog(args.catalog.as_deref(), default_catalog_path())?;
    match &source {
        CatalogSource::File(path) => {
            tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog")
        }
        CatalogSource::Sample => {
            tracing::info!(products = catalog.len(), "No catalog file, using bundled sample")
        }
    }

    let window_width = 1200.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(catalog)
        .launch(app::App);

    Ok(())
}
