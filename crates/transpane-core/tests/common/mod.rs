#![allow(dead_code)]

use transpane_core::geometry::PxRect;
use transpane_core::region::{NormalizedBox, Region};
use transpane_core::session::ImageDims;

/// Region with the given grid box and translated text.
pub fn region(ymin: i32, xmin: i32, ymax: i32, xmax: i32, translated: &str) -> Region {
    Region::new("", translated, NormalizedBox::new(ymin, xmin, ymax, xmax))
}

pub fn dims(width: u32, height: u32) -> ImageDims {
    ImageDims::new(width, height).unwrap()
}

/// Two equal panes side by side, `w`x`h` each, with a 10 px gap.
pub fn side_by_side(w: f32, h: f32) -> (PxRect, PxRect) {
    (PxRect::new(0.0, 0.0, w, h), PxRect::new(w + 10.0, 0.0, w, h))
}

/// Sample detector output: one horizontal line, one vertical column.
pub const SAMPLE_REGIONS_JSON: &str = r#"[
  { "originalText": "出口", "translatedText": "Exit", "box": [100, 200, 300, 600] },
  { "originalText": "東京駅", "translatedText": "Tokyo Station", "box": [50, 850, 700, 950] }
]"#;
