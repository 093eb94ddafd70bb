use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

const OVERLAY_FONT: &str = "overlay-fallback";

/// Register `path` as a fallback for both font families so translated text in
/// scripts the built-in fonts lack still renders.
pub fn install_fallback_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        OVERLAY_FONT.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(OVERLAY_FONT.to_owned());
    }
    ctx.set_fonts(fonts);

    info!(path = %path.display(), "installed fallback font");
    Ok(())
}
