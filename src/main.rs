#![allow(non_snake_case)]

mod app;
mod components;
mod data;
mod motion;
mod pages;
mod site;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Driftline - personal site, desktop rendition
#[derive(Parser, Debug)]
#[command(name = "driftline-desktop")]
#[command(about = "Driftline - Morgan Hale's notes on systems and software")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let site = site::SiteConfig::default();

    tracing::info!("Starting {} ({}x{})", site.title, args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(site.title)
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
