mod app;
mod convert;
mod fonts;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "transpane-gui", about = "Side-by-side translated image viewer")]
#[command(version)]
pub struct Args {
    /// Image to open on startup
    pub image: Option<PathBuf>,

    /// Region JSON for the image
    pub regions: Option<PathBuf>,

    /// Viewer config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Transpane"),
        ..Default::default()
    };

    eframe::run_native(
        "Transpane",
        options,
        Box::new(move |cc| Ok(Box::new(app::TranspaneApp::new(&cc.egui_ctx, args)))),
    )
}
