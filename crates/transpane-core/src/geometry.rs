//! Mapping from the normalized detector grid onto rendered image pixels.
//!
//! Placements are percentages of the *image's* own rectangle. The image is
//! letterboxed inside its pane, so callers must resolve them against the
//! aspect-locked wrapper returned by [`fit_wrapper`], never the pane itself.

use std::fmt;

use crate::consts::{GRID_TO_PERCENT, VERTICAL_ASPECT_THRESHOLD};
use crate::region::NormalizedBox;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PxRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center_size(center: Point, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Writing direction chosen for a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Overlay placement as percentages of the aspect-locked image wrapper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    /// Resolve against the on-screen image rectangle.
    pub fn to_px(&self, wrapper: PxRect) -> PxRect {
        PxRect::new(
            wrapper.x + wrapper.width * self.left / 100.0,
            wrapper.y + wrapper.height * self.top / 100.0,
            wrapper.width * self.width / 100.0,
            wrapper.height * self.height / 100.0,
        )
    }
}

/// Percent placement of a (clamped) grid box.
pub fn placement_of(bbox: &NormalizedBox) -> Placement {
    let b = bbox.clamped();
    Placement {
        top: b.ymin as f32 / GRID_TO_PERCENT,
        left: b.xmin as f32 / GRID_TO_PERCENT,
        width: b.width() as f32 / GRID_TO_PERCENT,
        height: b.height() as f32 / GRID_TO_PERCENT,
    }
}

/// Vertical iff height exceeds `threshold` times width; the exact boundary
/// stays horizontal.
pub fn classify(bbox: &NormalizedBox, threshold: f32) -> Orientation {
    let b = bbox.clamped();
    // An exact ratio rounds to the same f32 as the threshold literal, so the
    // boundary compares equal. The product `threshold * width` does not.
    if b.height() as f32 / b.width() as f32 > threshold {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

pub fn orientation_of(bbox: &NormalizedBox) -> Orientation {
    classify(bbox, VERTICAL_ASPECT_THRESHOLD)
}

/// Largest rectangle of `aspect_ratio` (width / height) centered inside
/// `container`. Falls back to the container for a non-positive ratio.
pub fn fit_wrapper(container: PxRect, aspect_ratio: f32) -> PxRect {
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) || container.is_empty() {
        return container;
    }

    let (width, height) = if aspect_ratio > container.aspect_ratio() {
        // Wider than the container: full width, bars above and below.
        (container.width, container.width / aspect_ratio)
    } else {
        (container.height * aspect_ratio, container.height)
    };
    PxRect::from_center_size(container.center(), width, height)
}
