mod app;
mod convert;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tiffview_core::config::{MetadataView, ViewerConfig};

#[derive(Parser)]
#[command(name = "tiffview-gui", about = "TIFF viewer with per-channel statistics")]
#[command(version)]
struct Args {
    /// Image to open at startup
    file: Option<PathBuf>,

    /// Viewer config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to show the metadata report (overrides the config file)
    #[arg(long, value_enum)]
    metadata_view: Option<ViewArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Overlay,
    Panel,
}

impl From<ViewArg> for MetadataView {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Overlay => MetadataView::Overlay,
            ViewArg::Panel => MetadataView::Panel,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(view) = args.metadata_view {
        config.metadata_view = view.into();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([320.0, 240.0])
            .with_drag_and_drop(true)
            .with_title("TIFF Viewer"),
        ..Default::default()
    };

    let initial_file = args.file;
    eframe::run_native(
        "TiffView",
        options,
        Box::new(move |_cc| {
            let mut app = app::TiffViewApp::new(&config);
            app.pending_open = initial_file;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
