use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use transpane_core::region::load_regions;
use transpane_core::session::{ImageDims, SourceId};

use crate::convert::dynamic_to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_error, send_log};

pub(super) fn handle_load_image(
    source: SourceId,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();

    let result = image::open(path)
        .map_err(|e| e.to_string())
        .and_then(|img| {
            let dims = ImageDims::new(img.width(), img.height()).map_err(|e| e.to_string())?;
            Ok((img, dims))
        });

    match result {
        Ok((img, dims)) => {
            let image = dynamic_to_color_image(&img);
            send_log(
                tx,
                ctx,
                format!(
                    "Decoded {} ({dims}) in {:.0}ms",
                    path.display(),
                    start.elapsed().as_secs_f32() * 1000.0
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    source,
                    path: path.to_path_buf(),
                    dims,
                    image,
                },
            );
        }
        Err(message) => send(
            tx,
            ctx,
            WorkerResult::ImageFailed {
                source,
                message: format!("Failed to open {}: {message}", path.display()),
            },
        ),
    }
}

pub(super) fn handle_load_regions(
    source: SourceId,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_regions(path) {
        Ok(regions) => send(
            tx,
            ctx,
            WorkerResult::RegionsLoaded {
                source,
                path: path.to_path_buf(),
                regions,
            },
        ),
        Err(e) => send_error(
            tx,
            ctx,
            format!("Failed to load regions from {}: {e}", path.display()),
        ),
    }
}
