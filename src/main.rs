#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global sheet endpoint, set from command line
static SHEET_URL: OnceLock<String> = OnceLock::new();

/// Get the sheet endpoint (set from command line or default)
pub fn get_sheet_url() -> String {
    SHEET_URL
        .get()
        .cloned()
        .unwrap_or_else(|| anchetas_core::DEFAULT_SHEET_URL.to_string())
}

/// Anchetas Bendición - gift bundle catalog
#[derive(Parser, Debug)]
#[command(name = "anchetas-desktop")]
#[command(about = "Anchetas Bendición - spreadsheet-backed gift bundle catalog")]
struct Args {
    /// Override the published-sheet endpoint (useful for testing
    /// against a local fixture server)
    #[arg(short, long)]
    sheet_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(url) = args.sheet_url {
        let _ = SHEET_URL.set(url);
    }

    tracing::info!("Starting catalog with sheet endpoint: {}", get_sheet_url());

    // Portrait-ish window: the grid reflows from one to three columns
    let window_width = 1100.0;
    let window_height = 880.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Anchetas Bendición")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
