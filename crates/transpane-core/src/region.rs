use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::GRID_EXTENT;
use crate::error::Result;

/// Bounding box on the normalized 0..=1000 grid, stored in the
/// `[ymin, xmin, ymax, xmax]` order detectors emit.
///
/// Values are kept as received; call [`NormalizedBox::clamped`] before
/// doing geometry with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[i32; 4]")]
pub struct NormalizedBox {
    pub ymin: i32,
    pub xmin: i32,
    pub ymax: i32,
    pub xmax: i32,
}

impl NormalizedBox {
    pub fn new(ymin: i32, xmin: i32, ymax: i32, xmax: i32) -> Self {
        Self {
            ymin,
            xmin,
            ymax,
            xmax,
        }
    }

    /// Force the box onto the grid with a non-empty extent on both axes.
    ///
    /// Coordinates are clamped to `[0, 1000]`, inverted pairs are swapped,
    /// and degenerate spans are widened to one grid unit.
    pub fn clamped(&self) -> Self {
        let (ymin, ymax) = clamp_span(self.ymin, self.ymax);
        let (xmin, xmax) = clamp_span(self.xmin, self.xmax);
        Self {
            ymin,
            xmin,
            ymax,
            xmax,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        (0..GRID_EXTENT).contains(&self.ymin)
            && (0..GRID_EXTENT).contains(&self.xmin)
            && self.ymin < self.ymax
            && self.xmin < self.xmax
            && self.ymax <= GRID_EXTENT
            && self.xmax <= GRID_EXTENT
    }

    pub fn width(&self) -> i32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> i32 {
        self.ymax - self.ymin
    }
}

fn clamp_span(a: i32, b: i32) -> (i32, i32) {
    let a = a.clamp(0, GRID_EXTENT);
    let b = b.clamp(0, GRID_EXTENT);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi > lo {
        (lo, hi)
    } else if lo >= GRID_EXTENT {
        (GRID_EXTENT - 1, GRID_EXTENT)
    } else {
        (lo, lo + 1)
    }
}

impl From<[f64; 4]> for NormalizedBox {
    fn from(v: [f64; 4]) -> Self {
        // `as` saturates out-of-range floats and maps NaN to 0.
        let [ymin, xmin, ymax, xmax] = v.map(|c| c.round() as i32);
        Self::new(ymin, xmin, ymax, xmax)
    }
}

impl From<NormalizedBox> for [i32; 4] {
    fn from(b: NormalizedBox) -> Self {
        [b.ymin, b.xmin, b.ymax, b.xmax]
    }
}

/// A detected text block with its translation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default, alias = "original_text")]
    pub original_text: String,
    #[serde(default, alias = "translated_text")]
    pub translated_text: String,
    #[serde(rename = "box", alias = "box_2d")]
    pub bbox: NormalizedBox,
}

impl Region {
    pub fn new(
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
        bbox: NormalizedBox,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            translated_text: translated_text.into(),
            bbox,
        }
    }
}

/// Region files are either a bare array or an object with a `regions` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum RegionDocument {
    List(Vec<Region>),
    Wrapped { regions: Vec<Region> },
}

/// Parse region records from JSON, preserving their order.
pub fn parse_regions(json: &str) -> Result<Vec<Region>> {
    let regions = match serde_json::from_str::<RegionDocument>(json)? {
        RegionDocument::List(r) | RegionDocument::Wrapped { regions: r } => r,
    };
    let malformed = regions.iter().filter(|r| !r.bbox.is_well_formed()).count();
    if malformed > 0 {
        debug!(malformed, total = regions.len(), "regions with out-of-grid boxes will be clamped");
    }
    Ok(regions)
}

/// Read and parse a region JSON file.
pub fn load_regions(path: &Path) -> Result<Vec<Region>> {
    let content = std::fs::read_to_string(path)?;
    parse_regions(&content)
}
