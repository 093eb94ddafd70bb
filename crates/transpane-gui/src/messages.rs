use std::path::PathBuf;

use transpane_core::config::ViewerConfig;
use transpane_core::region::Region;
use transpane_core::session::{ImageDims, SourceId};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image for the given load request.
    LoadImage { source: SourceId, path: PathBuf },

    /// Parse a region JSON file for the image identified by `source`.
    LoadRegions { source: SourceId, path: PathBuf },
}

/// Results sent from worker thread (or dialog threads) back to UI thread.
pub enum WorkerResult {
    /// The user picked an image; the UI thread issues the load request.
    ImagePicked {
        path: PathBuf,
    },
    ImageLoaded {
        source: SourceId,
        path: PathBuf,
        dims: ImageDims,
        image: egui::ColorImage,
    },
    ImageFailed {
        source: SourceId,
        message: String,
    },
    RegionsLoaded {
        source: SourceId,
        path: PathBuf,
        regions: Vec<Region>,
    },
    ConfigImported {
        config: ViewerConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
