use tracing::trace;

use crate::config::ZoomConfig;
use crate::geometry::Point;

use super::pointer::{PointerEvent, PointerPhase};
use super::transform::ViewTransform;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `last` is the most recent pointer position seen during the drag.
    Dragging { last: Point },
}

/// Sole owner of the shared [`ViewTransform`].
///
/// Every committed change bumps [`revision`](Self::revision), which the
/// render loop compares against the last drawn value to decide whether a
/// new frame is needed.
#[derive(Clone, Debug)]
pub struct ViewportController {
    transform: ViewTransform,
    drag: DragState,
    zoom: ZoomConfig,
    revision: u64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ViewportController {
    pub fn new(zoom: ZoomConfig) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            drag: DragState::Idle,
            zoom,
            revision: 0,
        }
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn zoom_config(&self) -> &ZoomConfig {
        &self.zoom
    }

    /// Swap zoom limits, re-clamping the current scale into the new range.
    pub fn set_zoom_config(&mut self, zoom: ZoomConfig) {
        self.zoom = zoom;
        let scale = self.zoom.clamp(self.transform.scale);
        self.commit(ViewTransform {
            scale,
            ..self.transform
        });
    }

    /// Feed one pointer event through the Idle/Dragging machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match (self.drag, event.phase) {
            (DragState::Idle, PointerPhase::Down) => {
                self.drag = DragState::Dragging { last: event.pos };
                trace!(x = event.pos.x, y = event.pos.y, "drag start");
            }
            (DragState::Dragging { last }, PointerPhase::Move) => {
                let dx = event.pos.x - last.x;
                let dy = event.pos.y - last.y;
                self.drag = DragState::Dragging { last: event.pos };
                self.pan_by(dx, dy);
            }
            // A second press during a drag (another touch point) re-anchors.
            (DragState::Dragging { .. }, PointerPhase::Down) => {
                self.drag = DragState::Dragging { last: event.pos };
            }
            (
                DragState::Dragging { .. },
                PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave,
            ) => {
                self.drag = DragState::Idle;
                trace!("drag end");
            }
            (DragState::Idle, _) => {}
        }
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) || (dx == 0.0 && dy == 0.0) {
            return;
        }
        self.commit(ViewTransform {
            pan_x: self.transform.pan_x + dx,
            pan_y: self.transform.pan_y + dy,
            ..self.transform
        });
    }

    /// Wheel zoom. `delta_y` follows the DOM convention: positive scrolls
    /// down and zooms out.
    pub fn wheel(&mut self, delta_y: f32) {
        self.add_scale(-delta_y * self.zoom.wheel_sensitivity);
    }

    /// Pinch zoom with a multiplicative gesture factor (1.0 = no change),
    /// applied additively like the wheel.
    pub fn pinch(&mut self, factor: f32) {
        self.add_scale(factor - 1.0);
    }

    pub fn zoom_in(&mut self) {
        self.add_scale(self.zoom.step);
    }

    pub fn zoom_out(&mut self) {
        self.add_scale(-self.zoom.step);
    }

    pub fn reset(&mut self) {
        self.drag = DragState::Idle;
        self.commit(ViewTransform::IDENTITY);
    }

    fn add_scale(&mut self, delta: f32) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        let scale = self.zoom.clamp(self.transform.scale + delta);
        self.commit(ViewTransform {
            scale,
            ..self.transform
        });
    }

    fn commit(&mut self, next: ViewTransform) {
        if next != self.transform {
            self.transform = next;
            self.revision = self.revision.wrapping_add(1);
        }
    }
}
