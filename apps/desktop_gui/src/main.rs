mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::ShortenerApp;

#[derive(Parser, Debug)]
#[command(name = "url-shortener", about = "Desktop client for a URL shortening service")]
struct Args {
    /// Base URL of the shortening service; overrides API_BASE and shortener.toml.
    #[arg(long)]
    api_base: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let settings = client_core::load_settings(args.api_base);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.clone())
        .context("failed to spawn backend worker thread")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("URL Shortener")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "URL Shortener",
        options,
        Box::new(move |_cc| Ok(Box::new(ShortenerApp::bootstrap(cmd_tx, ui_rx, settings)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
