use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use transpane_core::geometry::PxRect;
use transpane_core::region::load_regions;
use transpane_core::scene::{compose, split_panes, Opacity};
use transpane_core::session::probe_dims;
use transpane_core::viewport::ViewTransform;

use crate::summary::print_layout;

#[derive(Args)]
pub struct LayoutArgs {
    /// Input image
    pub image: PathBuf,

    /// Region JSON produced for the image
    pub regions: PathBuf,

    /// Viewer width in pixels (both panes together)
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Viewer height in pixels
    #[arg(long, default_value_t = 720.0)]
    pub height: f32,

    /// Zoom scale to lay out at
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Viewer config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &LayoutArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let dims = probe_dims(&args.image)
        .with_context(|| format!("Failed to read {}", args.image.display()))?;
    let regions = load_regions(&args.regions)
        .with_context(|| format!("Failed to load regions from {}", args.regions.display()))?;

    let area = PxRect::new(0.0, 0.0, args.width.max(1.0), args.height.max(1.0));
    let (split, left, right) = split_panes(area, 8.0);
    let transform = ViewTransform {
        scale: config.zoom.clamp(args.scale),
        ..ViewTransform::IDENTITY
    };
    info!(?split, %dims, regions = regions.len(), "computing layout");

    let frame = compose(
        dims,
        &regions,
        transform,
        Opacity::new(config.overlay.default_opacity),
        (left, right),
        &config,
    );

    print_layout(&args.image, dims, &regions, &frame);
    Ok(())
}
