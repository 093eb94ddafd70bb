//! Font sizing for translated text, expressed relative to the overlay box.
//!
//! The estimate is `min(cross-axis cap, main-axis share / length)`: the cap
//! keeps short strings from overflowing the box's thickness, the share
//! shrinks long strings along the reading direction. No glyph measurement.

use std::fmt;

use crate::config::TypographyConfig;
use crate::geometry::Orientation;

/// Font size as `min(height% of the box height, width% of the box width)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSize {
    pub height_percent: f32,
    pub width_percent: f32,
}

impl FontSize {
    /// Evaluate against the box's on-screen size, after zoom.
    pub fn resolve_px(&self, box_width_px: f32, box_height_px: f32) -> f32 {
        let by_height = self.height_percent / 100.0 * box_height_px;
        let by_width = self.width_percent / 100.0 * box_width_px;
        by_height.min(by_width).max(0.0)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min({:.1}% h, {:.1}% w)",
            self.height_percent, self.width_percent
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFit {
    pub font_size: FontSize,
    pub line_height: f32,
    pub orientation: Orientation,
}

/// Characters counted for sizing. Empty strings count as one.
pub fn text_length(text: &str) -> usize {
    text.chars().count().max(1)
}

pub fn fit(text: &str, orientation: Orientation) -> TextFit {
    fit_with(text, orientation, &TypographyConfig::default())
}

pub fn fit_with(text: &str, orientation: Orientation, params: &TypographyConfig) -> TextFit {
    let cross = params.cross_axis_fill * 100.0;
    let main = params.main_axis_fill * 100.0 / text_length(text) as f32;

    match orientation {
        Orientation::Horizontal => TextFit {
            font_size: FontSize {
                height_percent: cross,
                width_percent: main,
            },
            line_height: params.horizontal_line_height,
            orientation,
        },
        Orientation::Vertical => TextFit {
            font_size: FontSize {
                height_percent: main,
                width_percent: cross,
            },
            line_height: params.vertical_line_height,
            orientation,
        },
    }
}

/// Split `text` into top-to-bottom columns of at most `rows_per_column`
/// characters. Columns come back in reading order; the first one is drawn
/// rightmost.
pub fn vertical_columns(text: &str, rows_per_column: usize) -> Vec<String> {
    let rows = rows_per_column.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(rows).map(|c| c.iter().collect()).collect()
}
