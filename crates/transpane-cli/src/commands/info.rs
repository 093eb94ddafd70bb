use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use transpane_core::geometry::orientation_of;
use transpane_core::region::load_regions;
use transpane_core::session::probe_dims;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub image: PathBuf,

    /// Region JSON produced for the image
    #[arg(short, long)]
    pub regions: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let dims = probe_dims(&args.image)
        .with_context(|| format!("Failed to read {}", args.image.display()))?;

    println!("File:        {}", args.image.display());
    println!("Dimensions:  {dims}");
    println!("Aspect:      {:.3}", dims.aspect_ratio());

    if let Some(ref path) = args.regions {
        let regions = load_regions(path)
            .with_context(|| format!("Failed to load regions from {}", path.display()))?;
        let vertical = regions
            .iter()
            .filter(|r| orientation_of(&r.bbox).is_vertical())
            .count();
        let malformed = regions.iter().filter(|r| !r.bbox.is_well_formed()).count();

        println!("Regions:     {}", regions.len());
        println!("  vertical:  {vertical}");
        println!("  horizontal:{:>2}", regions.len() - vertical);
        if malformed > 0 {
            println!("  clamped:   {malformed}");
        }
    }

    Ok(())
}
