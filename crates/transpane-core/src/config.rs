use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CROSS_AXIS_FILL, DEFAULT_EASING_RATE, DEFAULT_OPACITY, HORIZONTAL_LINE_HEIGHT,
    MAIN_AXIS_FILL, MAX_OPACITY, MAX_SCALE, MIN_OPACITY, MIN_SCALE, VERTICAL_ASPECT_THRESHOLD,
    VERTICAL_LINE_HEIGHT, WHEEL_SENSITIVITY, ZOOM_STEP,
};
use crate::error::{Result, TranspaneError};

/// All tunable viewer parameters. Every section falls back to its defaults
/// when missing from a config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub layout: LayoutConfig,
    pub typography: TypographyConfig,
    pub zoom: ZoomConfig,
    pub overlay: OverlayConfig,
    pub easing: EasingConfig,
}

impl ViewerConfig {
    /// Reject parameter combinations the viewer cannot honor.
    pub fn validate(&self) -> Result<()> {
        let z = &self.zoom;
        if !(z.min_scale > 0.0 && z.min_scale < z.max_scale) {
            return Err(TranspaneError::InvalidConfig(format!(
                "zoom range must satisfy 0 < min_scale < max_scale (got {}..{})",
                z.min_scale, z.max_scale
            )));
        }
        if !(z.step > 0.0 && z.wheel_sensitivity >= 0.0) {
            return Err(TranspaneError::InvalidConfig(
                "zoom step must be > 0 and wheel sensitivity >= 0".into(),
            ));
        }
        if !(self.layout.vertical_threshold > 0.0) {
            return Err(TranspaneError::InvalidConfig(format!(
                "vertical_threshold must be > 0 (got {})",
                self.layout.vertical_threshold
            )));
        }
        let t = &self.typography;
        if !(t.cross_axis_fill > 0.0 && t.main_axis_fill > 0.0) {
            return Err(TranspaneError::InvalidConfig(
                "typography fill fractions must be > 0".into(),
            ));
        }
        let o = self.overlay.default_opacity;
        if !(MIN_OPACITY..=MAX_OPACITY).contains(&o) {
            return Err(TranspaneError::InvalidConfig(format!(
                "default_opacity must lie in [{MIN_OPACITY}, {MAX_OPACITY}] (got {o})"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height/width ratio above which a box is laid out vertically.
    pub vertical_threshold: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_threshold: VERTICAL_ASPECT_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    pub cross_axis_fill: f32,
    pub main_axis_fill: f32,
    pub horizontal_line_height: f32,
    pub vertical_line_height: f32,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            cross_axis_fill: CROSS_AXIS_FILL,
            main_axis_fill: MAIN_AXIS_FILL,
            horizontal_line_height: HORIZONTAL_LINE_HEIGHT,
            vertical_line_height: VERTICAL_LINE_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub wheel_sensitivity: f32,
    pub step: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            step: ZOOM_STEP,
        }
    }
}

impl ZoomConfig {
    /// Never panics: an inverted range resolves to `max_scale` and NaN
    /// bounds are ignored.
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// RGB color stored as three bytes in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub default_opacity: f32,
    pub fill_color: Rgb,
    pub text_color: Rgb,
    /// Font file added as a fallback after the built-in fonts, for scripts
    /// they lack (CJK, Thai, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<std::path::PathBuf>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            default_opacity: DEFAULT_OPACITY,
            fill_color: Rgb([255, 255, 255]),
            text_color: Rgb([17, 17, 17]),
            font_path: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasingConfig {
    pub enabled: bool,
    /// Exponential approach rate, in 1/s.
    pub rate: f32,
}

impl Default for EasingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: DEFAULT_EASING_RATE,
        }
    }
}
