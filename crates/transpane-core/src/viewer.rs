use tracing::{debug, info, warn};

use crate::config::ViewerConfig;
use crate::geometry::PxRect;
use crate::region::Region;
use crate::scene::{compose, DualPaneFrame, Opacity};
use crate::session::{ImageDims, ImageSession, SourceId};
use crate::viewport::{PointerEvent, TransformEasing, ViewTransform, ViewportController};

/// Everything one viewing session renders from.
///
/// Mutations go through methods so each one advances [`revision`](Self::revision);
/// a frame drawn at an older revision is out of date.
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    session: ImageSession,
    regions: Vec<Region>,
    controller: ViewportController,
    easing: TransformEasing,
    opacity: Opacity,
    revision: u64,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    /// An invalid `config` is replaced by the defaults.
    pub fn new(config: ViewerConfig) -> Self {
        let config = checked(config);
        Self {
            session: ImageSession::new(),
            regions: Vec::new(),
            controller: ViewportController::new(config.zoom.clone()),
            easing: TransformEasing::new(config.easing.clone()),
            opacity: Opacity::new(config.overlay.default_opacity),
            config,
            revision: 0,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ViewerConfig) {
        let config = checked(config);
        self.controller.set_zoom_config(config.zoom.clone());
        self.easing.set_config(config.easing.clone());
        self.easing.snap_to(self.controller.transform());
        self.config = config;
        self.touch();
    }

    pub fn session(&self) -> &ImageSession {
        &self.session
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    pub fn transform(&self) -> ViewTransform {
        self.controller.transform()
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    pub fn revision(&self) -> u64 {
        self.revision.wrapping_add(self.controller.revision())
    }

    /// Begin showing a new image. Regions belong to one image, so they are
    /// dropped until the caller supplies the new set.
    pub fn open_image(&mut self) -> SourceId {
        let source = self.session.begin_load();
        self.regions.clear();
        self.touch();
        source
    }

    /// Returns `false` when `source` was superseded.
    pub fn image_loaded(&mut self, source: SourceId, dims: ImageDims) -> bool {
        if !self.session.complete(source, dims) {
            return false;
        }
        self.controller.reset();
        self.easing.snap_to(self.controller.transform());
        self.touch();
        true
    }

    pub fn image_failed(&mut self, source: SourceId, message: impl Into<String>) -> bool {
        let accepted = self.session.fail(source, message);
        if accepted {
            self.touch();
        }
        accepted
    }

    /// Install regions loaded for `source`. Returns `false`, leaving the
    /// current regions alone, when another image has been opened since.
    pub fn set_regions_for(&mut self, source: SourceId, regions: Vec<Region>) -> bool {
        if self.session.current_source() != Some(source) {
            debug!(%source, current = ?self.session.current_source(), "ignoring stale regions");
            return false;
        }
        self.set_regions(regions);
        true
    }

    pub fn set_regions(&mut self, regions: Vec<Region>) {
        info!(count = regions.len(), "regions updated");
        self.regions = regions;
        self.touch();
    }

    pub fn set_opacity(&mut self, opacity: Opacity) {
        if opacity != self.opacity {
            debug!(%opacity, "overlay opacity changed");
            self.opacity = opacity;
            self.touch();
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.controller.handle_pointer(event);
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.controller.wheel(delta_y);
    }

    pub fn pinch(&mut self, factor: f32) {
        self.controller.pinch(factor);
    }

    pub fn zoom_in(&mut self) {
        self.controller.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.controller.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.controller.reset();
    }

    /// Advance presentational easing by `dt` seconds; returns the transform
    /// both panes draw with this frame.
    pub fn tick(&mut self, dt: f32) -> ViewTransform {
        self.easing
            .step(self.controller.transform(), self.controller.is_dragging(), dt)
    }

    /// Whether the eased transform still has to move toward the target.
    pub fn is_animating(&self) -> bool {
        !self.easing.is_settled(self.controller.transform())
    }

    /// Layout for the current state, or `None` while no image size is known.
    pub fn frame(&self, panes: (PxRect, PxRect)) -> Option<DualPaneFrame> {
        let dims = self.session.dims()?;
        Some(compose(
            dims,
            &self.regions,
            self.easing.displayed(),
            self.opacity,
            panes,
            &self.config,
        ))
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn checked(config: ViewerConfig) -> ViewerConfig {
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("{e}; using default viewer config");
            ViewerConfig::default()
        }
    }
}
