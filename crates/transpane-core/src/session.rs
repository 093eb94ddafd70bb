use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, TranspaneError};

/// Identity of one image-load request. Later requests compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(u64);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Intrinsic image size in pixels. Both sides are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDims {
    width: u32,
    height: u32,
}

impl ImageDims {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TranspaneError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl fmt::Display for ImageDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Read image dimensions from the file header without decoding pixels.
pub fn probe_dims(path: &Path) -> Result<ImageDims> {
    let (width, height) = image::image_dimensions(path)?;
    ImageDims::new(width, height)
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ImageState {
    #[default]
    Empty,
    Pending {
        source: SourceId,
    },
    Ready {
        source: SourceId,
        dims: ImageDims,
    },
    Failed {
        source: SourceId,
        message: String,
    },
}

/// Tracks which image the viewer is showing while loads complete
/// asynchronously. Only the most recently requested source may resolve.
#[derive(Debug, Default)]
pub struct ImageSession {
    last_issued: u64,
    state: ImageState,
}

impl ImageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load. Any earlier request becomes stale immediately.
    pub fn begin_load(&mut self) -> SourceId {
        self.last_issued += 1;
        let source = SourceId(self.last_issued);
        self.state = ImageState::Pending { source };
        debug!(%source, "image load requested");
        source
    }

    /// Record a finished load. Returns `false` for stale completions, which
    /// leave the session untouched.
    pub fn complete(&mut self, source: SourceId, dims: ImageDims) -> bool {
        if !self.is_current(source) {
            debug!(%source, current = ?self.current_source(), "ignoring stale image completion");
            return false;
        }
        info!(%source, %dims, "image ready");
        self.state = ImageState::Ready { source, dims };
        true
    }

    /// Record a failed load. The renderer stays on its placeholder.
    pub fn fail(&mut self, source: SourceId, message: impl Into<String>) -> bool {
        if !self.is_current(source) {
            debug!(%source, "ignoring stale image failure");
            return false;
        }
        let message = message.into();
        warn!(%source, %message, "image failed to load");
        self.state = ImageState::Failed { source, message };
        true
    }

    pub fn clear(&mut self) {
        self.state = ImageState::Empty;
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn dims(&self) -> Option<ImageDims> {
        match self.state {
            ImageState::Ready { dims, .. } => Some(dims),
            _ => None,
        }
    }

    pub fn aspect_ratio(&self) -> Option<f32> {
        self.dims().map(|d| d.aspect_ratio())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ImageState::Pending { .. })
    }

    pub fn current_source(&self) -> Option<SourceId> {
        match self.state {
            ImageState::Empty => None,
            ImageState::Pending { source }
            | ImageState::Ready { source, .. }
            | ImageState::Failed { source, .. } => Some(source),
        }
    }

    fn is_current(&self, source: SourceId) -> bool {
        self.current_source() == Some(source) && source.0 == self.last_issued
    }
}
