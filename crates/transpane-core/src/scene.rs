//! Composition of the two synchronized panes into drawable geometry.
//!
//! [`compose`] is a pure function of image size, regions, transform and
//! opacity; the GUI paints whatever it returns every frame.

use std::fmt;

use crate::config::ViewerConfig;
use crate::consts::{MAX_OPACITY, MAX_OPACITY_PERCENT, MIN_OPACITY, MIN_OPACITY_PERCENT};
use crate::geometry::{classify, fit_wrapper, placement_of, Orientation, Placement, PxRect};
use crate::region::Region;
use crate::session::ImageDims;
use crate::text_fit::{fit_with, FontSize};
use crate::viewport::ViewTransform;

/// Overlay background opacity, always within `[0.2, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(MAX_OPACITY);
        }
        Self(value.clamp(MIN_OPACITY, MAX_OPACITY))
    }

    /// Map a slider percentage in `[20, 100]` onto `[0.2, 1.0]`.
    pub fn from_percent(percent: u8) -> Self {
        let p = percent.clamp(MIN_OPACITY_PERCENT, MAX_OPACITY_PERCENT);
        Self::new(f32::from(p) / 100.0)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneKind {
    Original,
    Translated,
}

impl fmt::Display for PaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "Original"),
            Self::Translated => write!(f, "Translated"),
        }
    }
}

/// Per-region style derived on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub placement: Placement,
    pub orientation: Orientation,
    pub font_size: FontSize,
    pub line_height: f32,
}

impl OverlayStyle {
    pub fn for_region(region: &Region, config: &ViewerConfig) -> Self {
        let orientation = classify(&region.bbox, config.layout.vertical_threshold);
        let fit = fit_with(&region.translated_text, orientation, &config.typography);
        Self {
            placement: placement_of(&region.bbox),
            orientation,
            font_size: fit.font_size,
            line_height: fit.line_height,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }
}

/// A translated text box resolved to screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayBox {
    pub rect: PxRect,
    pub style: OverlayStyle,
    pub text: String,
    pub font_px: f32,
    pub fill_alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaneFrame {
    pub kind: PaneKind,
    /// Pane bounds; drawing is clipped to this.
    pub viewport: PxRect,
    /// Transformed aspect-locked image rectangle.
    pub image_rect: PxRect,
    pub transform: ViewTransform,
    pub overlays: Vec<OverlayBox>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DualPaneFrame {
    pub original: PaneFrame,
    pub translated: PaneFrame,
}

impl DualPaneFrame {
    pub fn panes(&self) -> [&PaneFrame; 2] {
        [&self.original, &self.translated]
    }
}

/// How two panes share an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneSplit {
    SideBySide,
    Stacked,
}

/// Split `area` in two with `gap` pixels between. Portrait areas stack the
/// panes vertically.
pub fn split_panes(area: PxRect, gap: f32) -> (PaneSplit, PxRect, PxRect) {
    let gap = gap.max(0.0);
    if area.width >= area.height {
        let w = ((area.width - gap) / 2.0).max(0.0);
        (
            PaneSplit::SideBySide,
            PxRect::new(area.x, area.y, w, area.height),
            PxRect::new(area.right() - w, area.y, w, area.height),
        )
    } else {
        let h = ((area.height - gap) / 2.0).max(0.0);
        (
            PaneSplit::Stacked,
            PxRect::new(area.x, area.y, area.width, h),
            PxRect::new(area.x, area.bottom() - h, area.width, h),
        )
    }
}

/// On-screen image rectangle for a pane: the letterboxed wrapper, scaled and
/// panned by the shared transform.
pub fn image_rect(pane: PxRect, dims: ImageDims, transform: ViewTransform) -> PxRect {
    transform.apply_to(fit_wrapper(pane, dims.aspect_ratio()))
}

/// Lay out both panes with one transform. Regions keep input order, so
/// later overlays paint over earlier ones.
pub fn compose(
    dims: ImageDims,
    regions: &[Region],
    transform: ViewTransform,
    opacity: Opacity,
    panes: (PxRect, PxRect),
    config: &ViewerConfig,
) -> DualPaneFrame {
    let (original_pane, translated_pane) = panes;

    let original = PaneFrame {
        kind: PaneKind::Original,
        viewport: original_pane,
        image_rect: image_rect(original_pane, dims, transform),
        transform,
        overlays: Vec::new(),
    };

    let translated_image = image_rect(translated_pane, dims, transform);
    let overlays = regions
        .iter()
        .map(|region| {
            let style = OverlayStyle::for_region(region, config);
            let rect = style.placement.to_px(translated_image);
            OverlayBox {
                rect,
                style,
                text: region.translated_text.clone(),
                font_px: style.font_size.resolve_px(rect.width, rect.height),
                fill_alpha: opacity.value(),
            }
        })
        .collect();

    let translated = PaneFrame {
        kind: PaneKind::Translated,
        viewport: translated_pane,
        image_rect: translated_image,
        transform,
        overlays,
    };

    DualPaneFrame {
        original,
        translated,
    }
}
