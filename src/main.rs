#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// PA$TY Official Website & Store - desktop shell
#[derive(Parser, Debug)]
#[command(name = "pasty-desktop")]
#[command(about = "PA$TY official website & store")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Launch fullscreen (kiosk-style display)
    #[arg(long)]
    fullscreen: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        "Starting PA$TY site shell ({}x{}, fullscreen: {})",
        args.width,
        args.height,
        args.fullscreen
    );

    let mut window = WindowBuilder::new()
        .with_title("PA$TY — Official Site")
        .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
        .with_resizable(true);
    if args.fullscreen {
        window = window.with_fullscreen(Some(dioxus::desktop::tao::window::Fullscreen::Borderless(
            None,
        )));
    }

    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
