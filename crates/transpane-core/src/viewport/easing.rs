use crate::config::EasingConfig;
use crate::consts::EASING_SNAP_EPSILON;

use super::transform::ViewTransform;

/// Smooths the displayed transform toward the committed one.
///
/// While a drag is in progress the displayed value tracks the target
/// exactly, so content never lags behind the pointer. The single eased value
/// is what both panes draw with.
#[derive(Clone, Debug)]
pub struct TransformEasing {
    displayed: ViewTransform,
    config: EasingConfig,
}

impl TransformEasing {
    pub fn new(config: EasingConfig) -> Self {
        Self {
            displayed: ViewTransform::IDENTITY,
            config,
        }
    }

    pub fn displayed(&self) -> ViewTransform {
        self.displayed
    }

    pub fn set_config(&mut self, config: EasingConfig) {
        self.config = config;
    }

    /// Jump straight to `target` (new image, config change).
    pub fn snap_to(&mut self, target: ViewTransform) {
        self.displayed = target;
    }

    /// Advance by `dt` seconds and return the transform to draw.
    pub fn step(&mut self, target: ViewTransform, dragging: bool, dt: f32) -> ViewTransform {
        if dragging || !self.config.enabled || !(dt.is_finite() && dt > 0.0) {
            self.displayed = target;
            return self.displayed;
        }

        let t = 1.0 - (-self.config.rate * dt).exp();
        let d = &mut self.displayed;
        d.pan_x += (target.pan_x - d.pan_x) * t;
        d.pan_y += (target.pan_y - d.pan_y) * t;
        d.scale += (target.scale - d.scale) * t;

        if is_close(*d, target) {
            *d = target;
        }
        self.displayed
    }

    pub fn is_settled(&self, target: ViewTransform) -> bool {
        self.displayed == target
    }
}

impl Default for TransformEasing {
    fn default() -> Self {
        Self::new(EasingConfig::default())
    }
}

fn is_close(a: ViewTransform, b: ViewTransform) -> bool {
    // Pan snaps within 0.1 px.
    (a.pan_x - b.pan_x).abs() < 0.1
        && (a.pan_y - b.pan_y).abs() < 0.1
        && (a.scale - b.scale).abs() < EASING_SNAP_EPSILON
}
