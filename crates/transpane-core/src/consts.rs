/// Side length of the normalized grid detectors report boxes on.
pub const GRID_EXTENT: i32 = 1000;

/// Divisor turning a grid coordinate into a percentage of the image box.
pub const GRID_TO_PERCENT: f32 = 10.0;

/// A box is vertical when its height exceeds this multiple of its width.
/// Tuned so near-square boxes stay horizontal.
pub const VERTICAL_ASPECT_THRESHOLD: f32 = 1.3;

/// Fraction of the cross-axis a single glyph may occupy (85%).
pub const CROSS_AXIS_FILL: f32 = 0.85;

/// Fraction of the main axis shared by the whole string (95%).
pub const MAIN_AXIS_FILL: f32 = 0.95;

/// Line height multiplier for horizontal text.
pub const HORIZONTAL_LINE_HEIGHT: f32 = 1.0;

/// Line height multiplier for vertical text, looser for stacked glyphs.
pub const VERTICAL_LINE_HEIGHT: f32 = 1.1;

/// Lower bound of the shared zoom scale.
pub const MIN_SCALE: f32 = 0.5;

/// Upper bound of the shared zoom scale.
pub const MAX_SCALE: f32 = 8.0;

/// Scale change per unit of wheel delta.
pub const WHEEL_SENSITIVITY: f32 = 0.002;

/// Scale change of one zoom button press.
pub const ZOOM_STEP: f32 = 0.25;

/// Overlay opacity bounds and the value a new viewer starts with.
pub const MIN_OPACITY: f32 = 0.2;
pub const MAX_OPACITY: f32 = 1.0;
pub const DEFAULT_OPACITY: f32 = 0.9;

/// Slider range for the opacity control, in percent.
pub const MIN_OPACITY_PERCENT: u8 = 20;
pub const MAX_OPACITY_PERCENT: u8 = 100;

/// Exponential approach rate (per second) of the eased display transform.
pub const DEFAULT_EASING_RATE: f32 = 18.0;

/// Distance below which the eased transform snaps onto its target.
pub const EASING_SNAP_EPSILON: f32 = 1e-3;
